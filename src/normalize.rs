//! Item-name normalization.
//!
//! Guide pages decorate item names with notes, vendor hints, multipliers and
//! trailing prose. [`clean_item_name`] strips all of that down to the bare
//! name. It is idempotent: a cleaned name cleans to itself.

use crate::patterns::{
    BRACKETED, LEADING_CONNECTIVE, PARENTHETICAL, TRAILING_CLAUSE, TRAILING_MULTIPLIER,
    WHITESPACE_NORMALIZE,
};

/// Characters trimmed from both ends of a name.
fn is_edge_noise(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '-' | '–' | '—' | ':' | ';' | ',' | '.' | '•' | '·' | '*' | '+' | '|' | '/' | '×'
                | '"' | '=' | '>' | '~' | '\u{a0}'
        )
}

/// One cleaning pass. Every step only removes or collapses characters.
fn clean_once(raw: &str) -> String {
    let s = PARENTHETICAL.replace_all(raw, " ");
    let s = BRACKETED.replace_all(&s, " ");
    let s = s.trim_matches(is_edge_noise);
    let s = LEADING_CONNECTIVE.replace(s, "");
    let s = TRAILING_CLAUSE.replace(&s, "");
    let s = TRAILING_MULTIPLIER.replace(&s, "");
    let s = WHITESPACE_NORMALIZE.replace_all(&s, " ");
    s.trim_matches(is_edge_noise).to_string()
}

/// Clean a raw item name.
///
/// Strips parenthetical and bracketed notes, leading connectives ("and",
/// "or", "plus"), trailing clauses after a spaced dash, trailing `x4`
/// multipliers and stray punctuation, then collapses whitespace.
///
/// The pass is repeated until nothing changes, so the result is a fixed
/// point and re-cleaning is a no-op.
///
/// # Example
///
/// ```rust
/// use wow_shopping_lists::normalize::clean_item_name;
///
/// assert_eq!(clean_item_name("  Peacebloom (AH)  - for 1-15 "), "Peacebloom");
/// assert_eq!(clean_item_name("and Silverleaf x2"), "Silverleaf");
/// ```
#[must_use]
pub fn clean_item_name(raw: &str) -> String {
    let mut current = clean_once(raw);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Key used to compare names for deduplication.
#[must_use]
pub fn name_key(name: &str) -> String {
    clean_item_name(name).to_lowercase()
}
