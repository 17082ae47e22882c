//! Utility functions for selector rules
//!
//! Attribute access with empty-string defaults and tag checks, so rules can
//! be written as plain boolean expressions.

use crate::dom;
use dom_query::Selection;

// === Element Attribute Helpers ===

/// Get element ID attribute (empty string if missing)
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> String {
    dom::id(sel).unwrap_or_default()
}

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    dom::class_name(sel).unwrap_or_default()
}

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

// === Element Type Checks ===

/// Check if the element has one of the given tags
#[inline]
#[must_use]
pub fn is_one_of_tags(sel: &Selection, tags: &[&str]) -> bool {
    let t = tag(sel);
    tags.contains(&t.as_str())
}

/// Check if the element is list-like or wraps a list-like element
#[must_use]
pub fn is_or_contains_list(sel: &Selection, list_tags: &[&str], list_selector: &str) -> bool {
    is_one_of_tags(sel, list_tags) || sel.select(list_selector).exists()
}
