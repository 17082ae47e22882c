//! Quantity/name pattern matching for a single text fragment.
//!
//! A fragment is one list item, table cell or line. The templates are tried
//! in a fixed order and the first one that matches wins.

use regex::Regex;

use crate::normalize::clean_item_name;
use crate::patterns::{NAME_COLON_QUANTITY, NAME_DASH_QUANTITY, NAME_X_QUANTITY, QUANTITY_FIRST};

/// Minimum fragment length (characters, after trimming) considered for matching.
pub const MIN_FRAGMENT_LEN: usize = 5;

/// Which template produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// `60x Peacebloom`
    QuantityFirst,
    /// `Peacebloom x 60`
    NameTimesQuantity,
    /// `Peacebloom - 60`
    NameDashQuantity,
    /// `Peacebloom: 60`
    NameColonQuantity,
}

impl Template {
    /// All templates in matching order.
    pub const ORDER: [Template; 4] = [
        Template::QuantityFirst,
        Template::NameTimesQuantity,
        Template::NameDashQuantity,
        Template::NameColonQuantity,
    ];

    fn regex(self) -> &'static Regex {
        match self {
            Template::QuantityFirst => &QUANTITY_FIRST,
            Template::NameTimesQuantity => &NAME_X_QUANTITY,
            Template::NameDashQuantity => &NAME_DASH_QUANTITY,
            Template::NameColonQuantity => &NAME_COLON_QUANTITY,
        }
    }

    /// Capture group indexes of (quantity, name).
    fn groups(self) -> (usize, usize) {
        match self {
            Template::QuantityFirst => (1, 2),
            _ => (2, 1),
        }
    }
}

/// A recovered `(quantity, name)` pair. The name is already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentMatch {
    pub quantity: u32,
    pub name: String,
    pub template: Template,
}

/// Parse a quantity; thousands separators are accepted, zero is not.
fn parse_quantity(raw: &str) -> Option<u32> {
    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    digits.parse::<u32>().ok().filter(|q| *q > 0)
}

/// Drop a lowercase `x` glued to a capitalized name: `xPeacebloom`.
fn strip_glued_times(name: &str) -> &str {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some('x'), Some(next)) if next.is_uppercase() => &name[1..],
        _ => name,
    }
}

/// Match a fragment with the default minimum length.
///
/// # Example
///
/// ```rust
/// use wow_shopping_lists::matcher::match_fragment;
///
/// let m = match_fragment("60x Peacebloom").unwrap();
/// assert_eq!((m.quantity, m.name.as_str()), (60, "Peacebloom"));
/// ```
#[must_use]
pub fn match_fragment(text: &str) -> Option<FragmentMatch> {
    match_fragment_with_min(text, MIN_FRAGMENT_LEN)
}

/// Match a fragment, rejecting fragments shorter than `min_len` characters.
///
/// The first template whose regex matches decides the outcome: if its
/// quantity is zero or unparsable, or the cleaned name is empty, the
/// fragment is rejected without trying later templates.
#[must_use]
pub fn match_fragment_with_min(text: &str, min_len: usize) -> Option<FragmentMatch> {
    let text = text.trim();
    if text.chars().count() < min_len {
        return None;
    }

    let (template, caps) = Template::ORDER
        .iter()
        .find_map(|t| t.regex().captures(text).map(|c| (*t, c)))?;

    let (q_idx, n_idx) = template.groups();
    let quantity = parse_quantity(caps.get(q_idx)?.as_str())?;
    let raw_name = caps.get(n_idx)?.as_str();
    let raw_name = match template {
        Template::QuantityFirst => strip_glued_times(raw_name),
        _ => raw_name,
    };
    let name = clean_item_name(raw_name);
    if name.is_empty() {
        return None;
    }

    Some(FragmentMatch { quantity, name, template })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(text: &str) -> Option<(u32, String)> {
        match_fragment(text).map(|m| (m.quantity, m.name))
    }

    #[test]
    fn quantity_first_with_and_without_separator() {
        assert_eq!(pair("60x Peacebloom"), Some((60, "Peacebloom".into())));
        assert_eq!(pair("60 x Peacebloom"), Some((60, "Peacebloom".into())));
        assert_eq!(pair("60 Peacebloom"), Some((60, "Peacebloom".into())));
        assert_eq!(pair("20× Silverleaf"), Some((20, "Silverleaf".into())));
    }

    #[test]
    fn glued_times_sign_is_not_part_of_the_name() {
        assert_eq!(pair("60xPeacebloom"), Some((60, "Peacebloom".into())));
        assert_eq!(pair("12xEarthroot (AH)"), Some((12, "Earthroot".into())));
        assert_eq!(pair("60 Xylo Root"), Some((60, "Xylo Root".into())));
        assert_eq!(pair("60 XPeacebloom"), Some((60, "XPeacebloom".into())));
    }

    #[test]
    fn name_first_templates() {
        assert_eq!(pair("Peacebloom x 60"), Some((60, "Peacebloom".into())));
        assert_eq!(pair("Peacebloom - 60"), Some((60, "Peacebloom".into())));
        assert_eq!(pair("Peacebloom – 60"), Some((60, "Peacebloom".into())));
        assert_eq!(pair("Peacebloom: 60"), Some((60, "Peacebloom".into())));
    }

    #[test]
    fn reports_template_used() {
        assert_eq!(match_fragment("60x Peacebloom").map(|m| m.template), Some(Template::QuantityFirst));
        assert_eq!(match_fragment("Peacebloom x 60").map(|m| m.template), Some(Template::NameTimesQuantity));
        assert_eq!(match_fragment("Peacebloom - 60").map(|m| m.template), Some(Template::NameDashQuantity));
        assert_eq!(match_fragment("Peacebloom: 60").map(|m| m.template), Some(Template::NameColonQuantity));
    }

    #[test]
    fn thousands_separator_is_accepted() {
        assert_eq!(pair("1,200x Copper Ore"), Some((1200, "Copper Ore".into())));
    }

    #[test]
    fn rejects_short_fragments() {
        assert_eq!(pair("4 ab"), None);
        assert_eq!(pair("  2x  "), None);
    }

    #[test]
    fn rejects_zero_and_overflowing_quantities() {
        assert_eq!(pair("0x Peacebloom"), None);
        assert_eq!(pair("99999999999x Peacebloom"), None);
        assert_eq!(pair("Peacebloom: 0"), None);
    }

    #[test]
    fn rejects_fragments_without_quantity() {
        assert_eq!(pair("Peacebloom"), None);
        assert_eq!(pair("Buy these on the auction house"), None);
    }

    #[test]
    fn name_is_normalized() {
        assert_eq!(pair("14x Golden Sansam (AH)"), Some((14, "Golden Sansam".into())));
        assert_eq!(pair("5x Empty Vial [vendor] - sold by trainers"), Some((5, "Empty Vial".into())));
    }

    #[test]
    fn custom_minimum_length() {
        assert!(match_fragment_with_min("5 Ore", 10).is_none());
        assert!(match_fragment_with_min("5 Ore", 3).is_some());
    }
}
