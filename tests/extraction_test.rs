use wow_shopping_lists::format::{format_line, render};
use wow_shopping_lists::{
    extract_materials, extract_materials_bytes, Category, ExpansionResult, Material, Profession,
};

fn pairs(materials: &[Material]) -> Vec<(&str, u32)> {
    materials.iter().map(|m| (m.name.as_str(), m.quantity)).collect()
}

#[test]
fn peacebloom_becomes_an_import_line() {
    let html = "<html><body><h2>Materials</h2><ul><li>60x Peacebloom</li></ul></body></html>";
    let materials = extract_materials(html, Profession::Herbalism);

    assert_eq!(materials, vec![Material::new("Peacebloom", Category::Herb, 60)]);
    assert_eq!(
        format_line("Vanilla Herbalism", &materials),
        r#"Vanilla Herbalism^"Peacebloom";Reagents/Herb;0;0;0;0;0;0;0;0;;#;;60"#
    );
}

#[test]
fn empty_document_renders_label_only() {
    let materials = extract_materials("", Profession::Alchemy);
    assert!(materials.is_empty());

    let mut result = ExpansionResult::new("vanilla", "Vanilla Alchemy");
    result.materials = materials;
    assert_eq!(render(&[result]), "Vanilla Alchemy\n");
}

#[test]
fn anchored_list_mixes_templates_and_aggregates() {
    let html = r#"
        <html>
          <body>
            <div class="entry-content">
              <p>Welcome to the guide.</p>
              <h2 id="materials">Approximate Materials Required</h2>
              <ul>
                <li>60x Peacebloom</li>
                <li>Silverleaf x 40</li>
                <li>Empty Vial - 20</li>
                <li>Briarthorn: 25</li>
                <li>20x Peacebloom (for Healing Potions)</li>
              </ul>
              <table><tr><td>99x Ignored Leaf</td></tr></table>
            </div>
          </body>
        </html>
    "#;

    let materials = extract_materials(html, Profession::Alchemy);
    assert_eq!(
        pairs(&materials),
        vec![("Peacebloom", 80), ("Silverleaf", 40), ("Empty Vial", 20), ("Briarthorn", 25)]
    );
    assert_eq!(materials[2].category, Category::Consumable);
}

#[test]
fn noise_lines_are_rejected() {
    let html = r#"
        <h3>Shopping List</h3>
        <ul>
          <li>1-60: Minor Healing Potion</li>
          <li>Recipe: Elixir of Minor Fortitude - 15</li>
          <li>Total cost: 45 gold</li>
          <li>12g 50s</li>
          <li>5x Copper Bar</li>
          <li>3x Ask your trainer</li>
          <li>10x Mageroyal</li>
        </ul>
    "#;

    let materials = extract_materials(html, Profession::Alchemy);
    assert_eq!(pairs(&materials), vec![("Mageroyal", 10)]);
}

#[test]
fn metalworkers_keep_copper_and_read_tables() {
    let html = r#"
        <body>
          <article class="post">
            <table>
              <tr><th>Material</th><th>Amount</th></tr>
              <tr><td>Copper Bar</td><td>150</td></tr>
              <tr><td>Rough Stone</td><td>40</td></tr>
              <tr><td>Linen Cloth</td><td>10</td></tr>
            </table>
          </article>
        </body>
    "#;

    let materials = extract_materials(html, Profession::Blacksmithing);
    assert_eq!(
        materials,
        vec![
            Material::new("Copper Bar", Category::Metal, 150),
            Material::new("Rough Stone", Category::Gem, 40),
            Material::new("Linen Cloth", Category::Cloth, 10),
        ]
    );
}

#[test]
fn choices_stay_consistent_within_a_page() {
    let html = r#"
        <h2>Materials</h2>
        <ul>
          <li>14x Golden Sansam / 14x Dreamfoil / 14x Mountain Silversage (you only need 14 from one)</li>
          <li>10x Dreamfoil or 10x Golden Sansam</li>
          <li>5x Crystal Vial</li>
        </ul>
    "#;

    let materials = extract_materials(html, Profession::Alchemy);
    assert_eq!(pairs(&materials), vec![("Golden Sansam", 24), ("Crystal Vial", 5)]);
}

#[test]
fn slash_alternatives_under_a_plain_heading_pick_one() {
    let html = "<h2>Materials</h2><ul><li>14x Golden Sansam / 14x Dreamfoil</li></ul>";
    assert_eq!(pairs(&extract_materials(html, Profession::Alchemy)), vec![("Golden Sansam", 14)]);

    let html = "<h2>Materials</h2><ul><li>14x Mithril Bar / 14x Thorium Bar</li><li>20x Coal</li></ul>";
    let materials = extract_materials(html, Profession::Blacksmithing);
    assert_eq!(pairs(&materials), vec![("Mithril Bar", 14), ("Coal", 20)]);
    assert!(materials.iter().all(|m| !m.name.contains('/')));
}

#[test]
fn glued_quantity_and_link_text_are_split() {
    let html = "<h2>Materials</h2><ul><li>60x<a href=\"/item/2447\">Peacebloom</a></li><li>60xSilverleaf</li></ul>";
    assert_eq!(
        pairs(&extract_materials(html, Profession::Herbalism)),
        vec![("Peacebloom", 60), ("Silverleaf", 60)]
    );
}

#[test]
fn nested_lists_are_read_once() {
    let html = r#"
        <h2>Materials</h2>
        <ul>
          <li>Herbs
            <ul><li>20x Silverleaf</li><li>10x Earthroot</li></ul>
          </li>
          <li>5x Empty Vial</li>
        </ul>
    "#;

    let materials = extract_materials(html, Profession::Alchemy);
    assert_eq!(pairs(&materials), vec![("Silverleaf", 20), ("Earthroot", 10), ("Empty Vial", 5)]);
}

#[test]
fn bytes_are_transcoded_before_extraction() {
    let html = b"<html><head><meta charset=\"windows-1252\"></head><body>\
        <h2>Materials</h2><ul><li>40x Gromsblood \x96 Felwood</li></ul></body></html>";

    let materials = extract_materials_bytes(html, Profession::Alchemy);
    assert_eq!(pairs(&materials), vec![("Gromsblood", 40)]);
}

#[test]
fn page_without_list_falls_back_to_body_text() {
    let html = r#"
        <html><body>
          <p>Farm these before you start:</p>
          <p>20x Light Leather<br>10x Coarse Thread</p>
        </body></html>
    "#;

    let materials = extract_materials(html, Profession::Leatherworking);
    assert_eq!(
        materials,
        vec![
            Material::new("Light Leather", Category::Leather, 20),
            Material::new("Coarse Thread", Category::Thread, 10),
        ]
    );
}
