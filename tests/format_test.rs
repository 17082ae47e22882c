use wow_shopping_lists::format::{format_line, parse_line, render, FIELD_SEPARATOR, ITEM_SEPARATOR};
use wow_shopping_lists::{extract_materials, Category, ExpansionResult, Material, Profession};

#[test]
fn extracted_list_round_trips() {
    let html = r#"
        <h2>Materials</h2>
        <ul>
          <li>60x Peacebloom</li>
          <li>40x Silverleaf</li>
          <li>25x Briarthorn</li>
          <li>20x Empty Vial</li>
        </ul>
    "#;
    let materials = extract_materials(html, Profession::Alchemy);
    assert_eq!(materials.len(), 4);

    let line = format_line("Vanilla Alchemy", &materials);
    let parsed = parse_line(&line).unwrap_or_else(|| panic!("unparseable line: {line}"));
    assert_eq!(parsed.label, "Vanilla Alchemy");
    assert_eq!(parsed.materials, materials);
}

#[test]
fn every_item_has_fourteen_fields() {
    let line = format_line(
        "Outland Alchemy",
        &[
            Material::new("Felweed", Category::Herb, 40),
            Material::new("Imbued Vial", Category::Consumable, 20),
        ],
    );
    let items: Vec<&str> = line.split(ITEM_SEPARATOR).skip(1).collect();
    assert_eq!(items.len(), 2);
    for item in items {
        assert_eq!(item.split(FIELD_SEPARATOR).count(), 14, "{item}");
    }
}

#[test]
fn hostile_names_cannot_break_the_line() {
    let materials = [Material::new(r#"Eye of "the" Storm^2; rare"#, Category::Other, 3)];
    let line = format_line("Legion Alchemy", &materials);
    assert_eq!(line.matches(ITEM_SEPARATOR).count(), 1);

    let parsed = parse_line(&line).unwrap_or_else(|| panic!("unparseable line: {line}"));
    assert_eq!(parsed.materials[0].name, "Eye of the Storm2, rare");
    assert_eq!(parsed.materials[0].quantity, 3);
}

#[test]
fn file_has_one_line_per_expansion() {
    let mut vanilla = ExpansionResult::new("vanilla", "Vanilla Herbalism");
    vanilla.materials.push(Material::new("Peacebloom", Category::Herb, 60));
    let outland = ExpansionResult::new("outland", "Outland Herbalism");

    let text = render(&[vanilla, outland]);
    assert_eq!(
        text,
        "Vanilla Herbalism^\"Peacebloom\";Reagents/Herb;0;0;0;0;0;0;0;0;;#;;60\nOutland Herbalism\n"
    );

    let labels: Vec<String> = text.lines().filter_map(parse_line).map(|p| p.label).collect();
    assert_eq!(labels, vec!["Vanilla Herbalism", "Outland Herbalism"]);
}

#[test]
fn malformed_lines_are_refused() {
    assert!(parse_line("Label^Peacebloom;Reagents/Herb").is_none());
    assert!(parse_line("Label^\"Peacebloom\";Reagents/Nope;0;0;0;0;0;0;0;0;;#;;5").is_none());
    assert!(parse_line("Label^\"Peacebloom\";Reagents/Herb;0;0;0;0;0;0;0;0;;#;;many").is_none());
    assert_eq!(parse_line("Just a label").map(|p| p.materials.len()), Some(0));
}
