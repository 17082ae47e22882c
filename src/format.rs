//! Auctionator shopping-list import syntax.
//!
//! One list per line:
//!
//! ```text
//! <Label>^"<name>";<category>;0;0;0;0;0;0;0;0;;#;;<quantity>^"<name>";...
//! ```
//!
//! The eight zeros are unused search columns (tiers, levels, prices). A list
//! without materials is the bare label.

use std::fmt::Write as _;

use crate::{Category, ExpansionResult, Material};

/// Separator between the label and each item.
pub const ITEM_SEPARATOR: char = '^';

/// Separator between the fields of an item.
pub const FIELD_SEPARATOR: char = ';';

const UNUSED_COLUMNS: &str = "0;0;0;0;0;0;0;0;;#;";

/// Make a name safe to embed: quotes and carets are dropped, semicolons
/// become commas.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '"' | '^'))
        .map(|c| if c == ';' { ',' } else { c })
        .collect()
}

fn sanitize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, '^' | '\n' | '\r'))
        .collect()
}

/// Format one shopping list line (without trailing newline).
///
/// # Example
///
/// ```rust
/// use wow_shopping_lists::{format::format_line, Category, Material};
///
/// let line = format_line("Vanilla Herbalism", &[Material::new("Peacebloom", Category::Herb, 60)]);
/// assert_eq!(line, r#"Vanilla Herbalism^"Peacebloom";Reagents/Herb;0;0;0;0;0;0;0;0;;#;;60"#);
/// ```
#[must_use]
pub fn format_line(label: &str, materials: &[Material]) -> String {
    let mut line = sanitize_label(label);
    for m in materials {
        let _ = write!(
            line,
            "{ITEM_SEPARATOR}\"{}\"{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{UNUSED_COLUMNS}{FIELD_SEPARATOR}{}",
            sanitize_name(&m.name),
            m.category,
            m.quantity
        );
    }
    line
}

/// Render a whole file: one line per result, each terminated by `\n`.
#[must_use]
pub fn render(results: &[ExpansionResult]) -> String {
    let mut out = String::new();
    for result in results {
        out.push_str(&format_line(&result.label, &result.materials));
        out.push('\n');
    }
    out
}

/// A line read back from the import syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedList {
    pub label: String,
    pub materials: Vec<Material>,
}

/// Parse one line of the import syntax.
///
/// Returns `None` when an item segment is malformed.
#[must_use]
pub fn parse_line(line: &str) -> Option<ParsedList> {
    let line = line.trim_end_matches(['\n', '\r']);
    let mut parts = line.split(ITEM_SEPARATOR);
    let label = parts.next()?.to_string();

    let materials = parts.map(parse_item).collect::<Option<Vec<_>>>()?;
    Some(ParsedList { label, materials })
}

fn parse_item(segment: &str) -> Option<Material> {
    let fields: Vec<&str> = segment.split(FIELD_SEPARATOR).collect();
    let name = fields.first()?.strip_prefix('"')?.strip_suffix('"')?;
    let category = fields.get(1)?.parse::<Category>().ok()?;
    let quantity = fields.last()?.parse::<u32>().ok()?;
    Some(Material::new(name, category, quantity))
}
