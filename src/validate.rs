//! Plausibility checks for extracted item names.

use crate::patterns::{
    BARE_NUMBER, CURRENCY_WORD, EMBEDDED_ALTERNATIVE, LONE_PUNCTUATION, MONEY_AMOUNT, SKILL_RANGE,
    TRAILING_OR, UNRESOLVED_MARKUP,
};

/// Minimum name length (characters).
pub const MIN_NAME_LEN: usize = 3;

/// Substrings that never appear in a material name, shared by all professions.
pub const BASE_DENYLIST: &[&str] = &[
    "recipe",
    "skill",
    "level",
    "point",
    "guide",
    "section",
    "total",
    "cost",
    "requires",
    "choose",
    "option",
    "alternative",
    "either",
    "cheapest",
    "plans",
    "blueprint",
    "schematic",
];

/// Currency words. Matched as whole words only: "Golden Sansam" and
/// "Mountain Silversage" are herbs.
pub const CURRENCY_WORDS: &[&str] = &["gold", "silver", "copper"];

/// Why a name was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    TooShort,
    Denylisted(&'static str),
    CurrencyWord,
    BareNumber,
    LonePunctuation,
    UnresolvedMarkup,
    TrailingOr,
    EmbeddedAlternative,
    SkillRange,
    MoneyAmount,
}

/// Name validator with a profession-specific denylist.
#[derive(Debug, Clone)]
pub struct MaterialValidator {
    denylist: Vec<&'static str>,
    reject_currency_words: bool,
}

impl Default for MaterialValidator {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl MaterialValidator {
    /// Base denylist plus `extra` tokens; currency words are rejected.
    #[must_use]
    pub fn new(extra: &[&'static str]) -> Self {
        let mut denylist = BASE_DENYLIST.to_vec();
        denylist.extend_from_slice(extra);
        Self { denylist, reject_currency_words: true }
    }

    /// Validator for professions whose materials are named after metals.
    ///
    /// Currency words are accepted ("Copper Bar" is a material here). Money
    /// amounts such as `12g 50s` are still rejected by shape.
    #[must_use]
    pub fn for_metalwork(extra: &[&'static str]) -> Self {
        Self { reject_currency_words: false, ..Self::new(extra) }
    }

    /// Substrings rejected by this validator.
    #[must_use]
    pub fn denylist(&self) -> &[&'static str] {
        &self.denylist
    }

    /// Why `name` is not a plausible material, if it is not.
    #[must_use]
    pub fn rejection(&self, name: &str) -> Option<Rejection> {
        let name = name.trim();
        if name.chars().count() < MIN_NAME_LEN {
            return Some(Rejection::TooShort);
        }

        let lower = name.to_lowercase();
        if let Some(token) = self.denylist.iter().copied().find(|t| lower.contains(*t)) {
            return Some(Rejection::Denylisted(token));
        }

        if BARE_NUMBER.is_match(name) {
            Some(Rejection::BareNumber)
        } else if LONE_PUNCTUATION.is_match(name) {
            Some(Rejection::LonePunctuation)
        } else if UNRESOLVED_MARKUP.is_match(name) {
            Some(Rejection::UnresolvedMarkup)
        } else if TRAILING_OR.is_match(name) {
            Some(Rejection::TrailingOr)
        } else if EMBEDDED_ALTERNATIVE.is_match(name) {
            Some(Rejection::EmbeddedAlternative)
        } else if SKILL_RANGE.is_match(name) {
            Some(Rejection::SkillRange)
        } else if MONEY_AMOUNT.is_match(name) {
            Some(Rejection::MoneyAmount)
        } else if self.reject_currency_words && CURRENCY_WORD.is_match(name) {
            Some(Rejection::CurrencyWord)
        } else {
            None
        }
    }

    /// `true` when `name` is a plausible material name.
    #[must_use]
    pub fn is_valid(&self, name: &str) -> bool {
        self.rejection(name).is_none()
    }
}
