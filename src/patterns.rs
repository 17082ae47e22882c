//! Compiled regex patterns for material extraction.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! Patterns are organized by the pipeline stage that uses them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Pattern Matcher Templates
// =============================================================================

/// `60x Peacebloom`, `60 x Peacebloom`, `60 Peacebloom`, `1,200× Copper Ore`.
///
/// The `x` separator only counts when a word boundary follows it, so names
/// starting with an X ("60 Xylo Root") keep their first letter. The glued
/// form `60xPeacebloom` is handled by the matcher.
pub static QUANTITY_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d[\d,]*)\s*(?:x\b|×)?\s*(.+)$").expect("QUANTITY_FIRST regex")
});

/// `Peacebloom x 60`, `Peacebloom x60`, `Peacebloom×60`.
///
/// A plain `x` must be preceded by whitespace so "Box 5" is not read as
/// "Bo" times 5.
pub static NAME_X_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)(?:\s+x|\s*×)\s*(\d[\d,]*)$").expect("NAME_X_QUANTITY regex")
});

/// `Peacebloom - 60`, `Peacebloom – 60`.
pub static NAME_DASH_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s*[-–—]\s*(\d[\d,]*)$").expect("NAME_DASH_QUANTITY regex")
});

/// `Peacebloom: 60`.
pub static NAME_COLON_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s*:\s*(\d[\d,]*)$").expect("NAME_COLON_QUANTITY regex")
});

// =============================================================================
// Text Normalizer Patterns
// =============================================================================

/// Parenthetical notes: `Peacebloom (from the AH)`.
pub static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("PARENTHETICAL regex"));

/// Bracketed annotations: `Peacebloom [vendor]`.
pub static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("BRACKETED regex"));

/// Connective words left over from list prose: `and Silverleaf`.
pub static LEADING_CONNECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:and|or|plus|\+)\s+").expect("LEADING_CONNECTIVE regex")
});

/// Explanatory clause after a spaced dash: `Peacebloom - for the first 15 points`.
pub static TRAILING_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[-–—]\s+.*$").expect("TRAILING_CLAUSE regex"));

/// Trailing multipliers: `Peacebloom x2`, `Peacebloom × 4`.
pub static TRAILING_MULTIPLIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\s+x\s*\d+|\s*×\s*\d+)+$").expect("TRAILING_MULTIPLIER regex")
});

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

// =============================================================================
// Validator Shapes
// =============================================================================

/// A bare (possibly negative) number.
pub static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?\d+$").expect("BARE_NUMBER regex"));

/// Nothing but punctuation and symbols.
pub static LONE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{P}\p{S}\s]+$").expect("LONE_PUNCTUATION regex"));

/// Wiki/template markup that was never resolved: `[[Item]]`, `{{item}}`, `<b`.
pub static UNRESOLVED_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[\]{}<>]").expect("UNRESOLVED_MARKUP regex"));

/// A second quantified alternative left inside a name: `Golden Sansam / 14x Dreamfoil`.
pub static EMBEDDED_ALTERNATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\s*\d").expect("EMBEDDED_ALTERNATIVE regex"));

/// A dangling alternative: `Dreamfoil OR`.
pub static TRAILING_OR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+or$").expect("TRAILING_OR regex"));

/// A skill range swallowed into the name: `60: Minor Healing Potion` from `1-60: ...`.
pub static SKILL_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s*[-–—:]").expect("SKILL_RANGE regex"));

/// Currency as a standalone word.
pub static CURRENCY_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:gold|silver|copper)\b").expect("CURRENCY_WORD regex")
});

/// Money amounts: `12g 50s`, `3 gold`.
pub static MONEY_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d+\s*[gsc]\b|\b\d+\s+(?:gold|silver|copper)\b").expect("MONEY_AMOUNT regex")
});

// =============================================================================
// Choice Resolver Patterns
// =============================================================================

/// Words that mark a region as offering alternatives.
pub static CHOICE_LANGUAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:choose|alternatives?|options?|either|or|cheapest)\b")
        .expect("CHOICE_LANGUAGE regex")
});

/// Separators between alternatives inside one fragment.
pub static CHOICE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*/\s*|\s+or\s+").expect("CHOICE_SEPARATOR regex"));

/// Parenthesized explanation: `(you only need 14 from one)`.
pub static EXPLANATORY_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\([^()]*\b(?:only|need|needed|one|choose|pick|either|cheapest|whichever)\b[^()]*\)")
        .expect("EXPLANATORY_CLAUSE regex")
});

/// Unparenthesized trailing explanation: `, you only need one of them`.
pub static EXPLANATORY_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[,;]?\s*[-–—]?\s*\b(?:you only need|only need|you need|whichever is cheapest|choose one|pick one)\b.*$")
        .expect("EXPLANATORY_TAIL regex")
});

/// Lead-in words before the first alternative: `Either 14x ...`.
pub static LEADING_CHOICE_CUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:either|choose|pick|buy)\b\s*:?\s*").expect("LEADING_CHOICE_CUE regex")
});

// =============================================================================
// Section Locator Patterns
// =============================================================================

/// Heading text announcing a materials list.
pub static HEADING_VOCABULARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)material|shopping|ingredient|required|approximate|needed|reagent|components")
        .expect("HEADING_VOCABULARY regex")
});

/// Class names of containers likely to hold a materials list.
pub static SECTION_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)material|shopping|ingredient|guide|content|post|article")
        .expect("SECTION_CLASS regex")
});

/// Class names of recipe containers.
pub static RECIPE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)recipe|guide").expect("RECIPE_CLASS regex"));

/// Class names of recipe or ingredient blocks inside a recipe container.
pub static RECIPE_BLOCK_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)recipe|ingredient").expect("RECIPE_BLOCK_CLASS regex"));

/// `Requires:` / `Materials:` / `Ingredients:` cue inside a recipe block.
pub static RECIPE_CUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:requires?|materials?|ingredients?)\s*:").expect("RECIPE_CUE regex")
});

// =============================================================================
// Section Locator Constants
// =============================================================================

/// Element ids used by guide pages for their dedicated materials section.
pub const ANCHOR_IDS: &[&str] = &["materials", "shopping-list", "materials-list", "required-materials"];

/// Tags treated as section headings (bold text acts as a heading proxy).
pub const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "strong", "b"];

/// Tags that hold list-like content.
pub const LIST_TAGS: &[&str] = &["ul", "ol", "table", "dl"];

/// Container tags considered by the class-name scan.
pub const SECTION_TAGS: &[&str] = &["div", "section", "article", "table", "ul", "ol"];

/// CSS selector form of [`LIST_TAGS`].
pub const LIST_SELECTOR: &str = "ul, ol, table, dl";
