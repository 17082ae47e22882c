//! Region tokenization.
//!
//! Turns a located region into short text fragments: one per list item, one
//! per table row and one per visual line of other blocks. Every element that
//! is read gets marked in [`ExtractionState`], so a later region covering the
//! same elements yields nothing new.

use dom_query::{NodeRef, Selection};

use crate::dom::{self, BLOCK_TAGS, SKIPPED_TAGS};

use super::state::ExtractionState;

/// A piece of region text to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A list item or a line of text.
    Line(String),
    /// The cells of a table row with two or more cells.
    Row(Vec<String>),
}

/// Tokenize a region, skipping elements already consumed.
#[must_use]
pub fn tokenize(region: &Selection, state: &mut ExtractionState) -> Vec<Fragment> {
    let mut out = Vec::new();
    for node in region.nodes() {
        if node.is_element() && !state.is_done(node.id) {
            visit_element(node, state, &mut out);
        }
    }
    out
}

fn visit_element(node: &NodeRef, state: &mut ExtractionState, out: &mut Vec<Fragment>) {
    let tag = dom::node_tag(node).unwrap_or_default();
    match tag.as_str() {
        "li" => visit_list_item(node, state, out),
        "tr" => visit_row(node, state, out),
        t if SKIPPED_TAGS.contains(&t) => state.mark_subtree_done(node),
        _ => {
            let mut pending = String::new();
            walk(node, state, &mut pending, out);
            push_lines(&mut pending, out);
        }
    }
}

/// Walk a container, collecting inline text into `pending` and descending
/// into child blocks.
fn walk(node: &NodeRef, state: &mut ExtractionState, pending: &mut String, out: &mut Vec<Fragment>) {
    state.mark_done(node.id);
    for child in node.children() {
        if child.is_text() {
            pending.push_str(&child.text());
            continue;
        }
        let Some(tag) = dom::node_tag(&child) else {
            continue;
        };
        if state.is_done(child.id) {
            continue;
        }
        if tag == "br" {
            push_lines(pending, out);
        } else if SKIPPED_TAGS.contains(&tag.as_str()) {
            state.mark_subtree_done(&child);
        } else if tag == "li" || tag == "tr" || BLOCK_TAGS.contains(&tag.as_str()) {
            push_lines(pending, out);
            visit_element(&child, state, out);
        } else {
            walk(&child, state, pending, out);
        }
    }
}

/// A list item is one fragment, unless it wraps a nested list: then only
/// the nested list is read.
fn visit_list_item(node: &NodeRef, state: &mut ExtractionState, out: &mut Vec<Fragment>) {
    let sel = Selection::from(*node);
    if sel.select("ul, ol").exists() {
        state.mark_done(node.id);
        for child in node.children() {
            if !child.is_element() || state.is_done(child.id) {
                continue;
            }
            let is_list = matches!(dom::node_tag(&child).as_deref(), Some("ul" | "ol"));
            if is_list || Selection::from(child).select("ul, ol").exists() {
                visit_element(&child, state, out);
            }
        }
        return;
    }

    state.mark_subtree_done(node);
    let text = collapse(&dom::text_content(&sel));
    if !text.is_empty() {
        out.push(Fragment::Line(text));
    }
}

fn visit_row(node: &NodeRef, state: &mut ExtractionState, out: &mut Vec<Fragment>) {
    state.mark_subtree_done(node);
    let cells: Vec<String> = node
        .children()
        .iter()
        .filter(|c| matches!(dom::node_tag(c).as_deref(), Some("td" | "th")))
        .map(|c| collapse(&dom::text_content(&Selection::from(*c))))
        .filter(|t| !t.is_empty())
        .collect();

    match cells.len() {
        0 => {}
        1 => out.extend(cells.into_iter().map(Fragment::Line)),
        _ => out.push(Fragment::Row(cells)),
    }
}

fn push_lines(pending: &mut String, out: &mut Vec<Fragment>) {
    for line in pending.split('\n') {
        let line = collapse(line);
        if !line.is_empty() {
            out.push(Fragment::Line(line));
        }
    }
    pending.clear();
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
