//! # wow-shopping-lists
//!
//! Turns World of Warcraft profession leveling guides into Auctionator
//! shopping-list imports.
//!
//! Guide pages are loosely structured HTML. The extraction engine locates the
//! regions likely to hold a materials list, recovers `(quantity, name)` pairs
//! from their text, picks one item out of "buy A or B" alternatives,
//! categorizes every item and aggregates duplicates.
//!
//! ## Quick Start
//!
//! ```rust
//! use wow_shopping_lists::{extract_materials, format, Profession};
//!
//! let html = r#"<h2>Materials</h2><ul><li>60x Peacebloom</li></ul>"#;
//! let materials = extract_materials(html, Profession::Herbalism);
//!
//! let line = format::format_line("Vanilla Herbalism", &materials);
//! assert_eq!(line, r#"Vanilla Herbalism^"Peacebloom";Reagents/Herb;0;0;0;0;0;0;0;0;;#;;60"#);
//! ```
//!
//! ## Scraping
//!
//! [`scraper::Scraper`] drives a whole profession: one result per expansion
//! of the [`guides::GuideCatalog`], fetched through a
//! [`fetch::DocumentSource`] with a delay before every request.

mod error;
mod options;
mod patterns;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Section locator strategies and selector rules.
pub mod selector;

/// Material extraction pipeline (strategy chains, tokenization, state).
pub mod extractor;

/// Item-name cleanup.
pub mod normalize;

/// Quantity/name templates.
pub mod matcher;

/// Name plausibility checks.
pub mod validate;

/// Reagent categories and keyword families.
pub mod category;

/// Alternatives, priority tiers and session memory.
pub mod choice;

/// Deduplication of extracted materials.
pub mod aggregate;

/// Auctionator import syntax.
pub mod format;

/// Supported professions.
pub mod profession;

/// Guide URLs and expansion labels.
pub mod guides;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Page sources (HTTP and in-memory).
pub mod fetch;

/// Per-profession scraping runs.
pub mod scraper;

// Public API - re-exports
pub use category::Category;
pub use choice::{ChoiceResolver, PriorityTable, SessionChoiceMemory};
pub use error::{Error, Result};
pub use guides::GuideCatalog;
pub use options::Options;
pub use profession::Profession;
pub use result::{ExpansionResult, Material};

/// Extracts the shopping list of one guide page with default settings.
///
/// Uses a fresh choice memory and the built-in priority table. Never fails:
/// a page without a recognizable list yields an empty vector.
#[must_use]
pub fn extract_materials(html: &str, profession: Profession) -> Vec<Material> {
    extract_materials_with_options(html, profession, &Options::default())
}

/// Extracts the shopping list of one guide page with custom options.
///
/// # Example
///
/// ```rust
/// use wow_shopping_lists::{extract_materials_with_options, Options, Profession};
///
/// let options = Options { min_fragment_len: 3, ..Options::default() };
/// let materials = extract_materials_with_options("<p>3 Tin</p>", Profession::Blacksmithing, &options);
/// assert_eq!(materials[0].quantity, 3);
/// ```
#[must_use]
pub fn extract_materials_with_options(html: &str, profession: Profession, options: &Options) -> Vec<Material> {
    let doc = dom::parse(html);
    let extractor = extractor::MaterialExtractor::new(profession, ChoiceResolver::default(), options.clone());
    extractor.extract(&doc, &mut SessionChoiceMemory::new())
}

/// Like [`extract_materials`], for raw bytes in any declared charset.
#[must_use]
pub fn extract_materials_bytes(html: &[u8], profession: Profession) -> Vec<Material> {
    extract_materials(&encoding::transcode_to_utf8(html, None), profession)
}
