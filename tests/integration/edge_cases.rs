//! Edge case integration tests
//!
//! Unusual inputs and boundary conditions. Extraction never fails, so every
//! case checks what comes out rather than whether something does.

use wow_shopping_lists::{extract_materials, extract_materials_with_options, Options, Profession};

fn names(html: &str, profession: Profession) -> Vec<(String, u32)> {
    extract_materials(html, profession)
        .into_iter()
        .map(|m| (m.name, m.quantity))
        .collect()
}

#[test]
fn test_whitespace_only_document() {
    assert!(names("   \n\t  ", Profession::Alchemy).is_empty());
}

#[test]
fn test_no_body() {
    assert!(names("<html><head><title>Alchemy</title></head></html>", Profession::Alchemy).is_empty());
}

#[test]
fn test_malformed_html() {
    let html = "<h2>Materials<ul><li>60x Peacebloom<li>20x Silverleaf</ul>";
    let got = names(html, Profession::Herbalism);
    assert!(got.contains(&("Peacebloom".to_string(), 60)), "{got:?}");
    assert!(got.contains(&("Silverleaf".to_string(), 20)), "{got:?}");
}

#[test]
fn test_scripts_and_styles_are_ignored() {
    let html = r#"
        <body>
          <script>var list = "99x Fake Bloom";</script>
          <style>.x::after { content: "12x Css Root"; }</style>
          <p>12x Earthroot</p>
        </body>
    "#;
    assert_eq!(names(html, Profession::Herbalism), vec![("Earthroot".to_string(), 12)]);
}

#[test]
fn test_overflowing_quantity_is_dropped() {
    let html = "<h2>Materials</h2><ul><li>99999999999x Peacebloom</li><li>5x Empty Vial</li></ul>";
    assert_eq!(names(html, Profession::Alchemy), vec![("Empty Vial".to_string(), 5)]);
}

#[test]
fn test_aggregation_saturates() {
    let html = "<h2>Materials</h2><ul><li>4,000,000,000x Peacebloom</li><li>4,000,000,000x peacebloom</li></ul>";
    assert_eq!(names(html, Profession::Herbalism), vec![("Peacebloom".to_string(), u32::MAX)]);
}

#[test]
fn test_zero_quantity_is_dropped() {
    let html = "<h2>Materials</h2><ul><li>0x Peacebloom</li><li>Silverleaf: 0</li></ul>";
    assert!(names(html, Profession::Herbalism).is_empty());
}

#[test]
fn test_short_fragments_follow_options() {
    let html = "<h2>Materials</h2><ul><li>3Tin</li></ul>";
    assert!(names(html, Profession::Blacksmithing).is_empty());

    let options = Options { min_fragment_len: 3, ..Options::default() };
    let materials = extract_materials_with_options(html, Profession::Blacksmithing, &options);
    assert_eq!(materials.len(), 1);
    assert_eq!(materials[0].name, "Tin");
}

#[test]
fn test_heading_without_list_yields_nothing_from_that_heading() {
    let html = r#"
        <body>
          <h2>Materials</h2>
          <p>Coming soon.</p>
        </body>
    "#;
    assert!(names(html, Profession::Alchemy).is_empty());
}

#[test]
fn test_unicode_names_survive() {
    let html = "<h2>Materials</h2><ul><li>10× Mana-Thistle</li><li>5x Ēternal Ēarth</li></ul>";
    let got = names(html, Profession::Alchemy);
    assert_eq!(got[0], ("Mana-Thistle".to_string(), 10));
    assert_eq!(got[1], ("Ēternal Ēarth".to_string(), 5));
}
