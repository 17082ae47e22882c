//! Deduplication of extracted materials.

use std::collections::HashMap;

use crate::normalize::name_key;
use crate::Material;

/// Merge materials with the same normalized name (case-insensitive).
///
/// The first occurrence keeps its position, spelling and category; later
/// duplicates only add their quantity (saturating at `u32::MAX`).
///
/// # Example
///
/// ```rust
/// use wow_shopping_lists::{aggregate::aggregate, Category, Material};
///
/// let merged = aggregate(vec![
///     Material::new("Peacebloom", Category::Herb, 20),
///     Material::new("Silverleaf", Category::Herb, 10),
///     Material::new("peacebloom", Category::Other, 5),
/// ]);
/// assert_eq!(merged[0], Material::new("Peacebloom", Category::Herb, 25));
/// assert_eq!(merged.len(), 2);
/// ```
#[must_use]
pub fn aggregate(materials: impl IntoIterator<Item = Material>) -> Vec<Material> {
    let mut out: Vec<Material> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for material in materials {
        let key = name_key(&material.name);
        if let Some(&i) = index.get(&key) {
            out[i].quantity = out[i].quantity.saturating_add(material.quantity);
        } else {
            index.insert(key, out.len());
            out.push(material);
        }
    }

    out
}
