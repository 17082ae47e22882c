//! Material extraction module.
//!
//! # Module Structure
//!
//! - `strategy`: Strategy chains and how their results combine
//! - `state`: Extraction state tracking (processed nodes)
//! - `fragments`: Region tokenization into lines and table rows
//! - `pipeline`: Main extraction pipeline orchestration
//!
//! # Usage
//!
//! ```rust
//! use wow_shopping_lists::choice::{ChoiceResolver, SessionChoiceMemory};
//! use wow_shopping_lists::extractor::MaterialExtractor;
//! use wow_shopping_lists::{dom, Options, Profession};
//!
//! let doc = dom::parse("<h2>Materials</h2><ul><li>60x Peacebloom</li></ul>");
//! let extractor = MaterialExtractor::new(Profession::Herbalism, ChoiceResolver::default(), Options::default());
//! let mut memory = SessionChoiceMemory::new();
//!
//! let materials = extractor.extract(&doc, &mut memory);
//! assert_eq!(materials[0].quantity, 60);
//! ```

pub mod fragments;
pub mod pipeline;
pub mod state;
pub mod strategy;

pub use fragments::{tokenize, Fragment};
pub use pipeline::MaterialExtractor;
pub use state::ExtractionState;
pub use strategy::{Mode, Step, RECIPE_CHAIN, STANDARD_CHAIN};
