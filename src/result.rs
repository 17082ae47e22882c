//! Result types for extraction output.
//!
//! A [`Material`] is one shopping-list entry; an [`ExpansionResult`] is
//! everything produced for one expansion of one profession.

use serde::Serialize;

use crate::Category;

/// One crafting material with the quantity to buy.
///
/// `name` is normalized and at least three characters long; `quantity` is
/// never zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Material {
    pub name: String,
    #[serde(serialize_with = "serialize_category")]
    pub category: Category,
    pub quantity: u32,
}

impl Material {
    #[must_use]
    pub fn new(name: impl Into<String>, category: Category, quantity: u32) -> Self {
        Self { name: name.into(), category, quantity }
    }
}

fn serialize_category<S: serde::Serializer>(category: &Category, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(category.as_str())
}

/// Shopping list of one expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpansionResult {
    /// Catalog key, e.g. `vanilla`.
    pub expansion_key: String,

    /// Display label written before the items, e.g. `Vanilla Alchemy`.
    pub label: String,

    /// Deduplicated materials in first-seen order.
    pub materials: Vec<Material>,

    /// Non-fatal issues encountered while producing this result.
    ///
    /// - The guide page could not be fetched (materials are empty)
    /// - No URL was configured and a constructed one was used
    pub warnings: Vec<String>,
}

impl ExpansionResult {
    #[must_use]
    pub fn new(expansion_key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            expansion_key: expansion_key.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Total number of items across all materials.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.materials.iter().map(|m| u64::from(m.quantity)).sum()
    }
}
