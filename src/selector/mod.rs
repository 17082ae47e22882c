//! Selector Infrastructure
//!
//! Rules are simple functions that test if a Selection matches certain
//! criteria. The section locator builds its strategies out of them.

use dom_query::Selection;

pub mod section;
pub mod utils;

pub use section::{locate, Region, Strategy};

/// A selector rule that tests if a selection matches certain criteria
pub type Rule = fn(&Selection) -> bool;

/// Query for all elements matching the rule
///
/// Iterates through all descendants in document order and collects all
/// elements for which the rule returns true.
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, rule: Rule) -> Vec<Selection<'a>> {
    let mut matches = Vec::new();

    for node in root.select("*").nodes() {
        let sel = Selection::from(*node);
        if rule(&sel) {
            matches.push(sel);
        }
    }

    matches
}
