//! Extraction state tracking.
//!
//! This module provides `ExtractionState` to track which elements have
//! already been turned into fragments, so overlapping regions found by
//! different strategies never count the same list item twice.

use std::collections::HashSet;

use dom_query::{NodeId, NodeRef};

/// Tracks processed nodes for one document.
#[derive(Debug, Default)]
pub struct ExtractionState {
    /// Set of node IDs whose text has been consumed
    processed_nodes: HashSet<NodeId>,
}

impl ExtractionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a node as processed
    pub fn mark_done(&mut self, node_id: NodeId) {
        self.processed_nodes.insert(node_id);
    }

    /// Mark an element and every element below it as processed
    pub fn mark_subtree_done(&mut self, node: &NodeRef) {
        self.mark_done(node.id);
        for descendant in node.descendants() {
            if descendant.is_element() {
                self.mark_done(descendant.id);
            }
        }
    }

    /// Check if a node has been processed
    #[must_use]
    pub fn is_done(&self, node_id: NodeId) -> bool {
        self.processed_nodes.contains(&node_id)
    }

    /// Number of processed nodes
    #[must_use]
    pub fn processed_count(&self) -> usize {
        self.processed_nodes.len()
    }
}
