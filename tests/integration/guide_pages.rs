//! Whole guide pages, one per layout the site uses.

#![allow(clippy::expect_used)]

use wow_shopping_lists::format::{format_line, parse_line};
use wow_shopping_lists::{extract_materials, Category, Material, Profession};

const ALCHEMY_RECIPES: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Vanilla Alchemy Leveling Guide</title></head>
<body>
  <nav><a href="/">Home</a> | <a href="/guides">Guides</a></nav>
  <main>
    <h1>Alchemy 1-300</h1>
    <p>Level alchemy by crafting the recipes below in order.</p>
    <div class="recipe-list">
      <div class="recipe"><b>Minor Healing Potion</b> (1-60)<br>Requires:<br>2x Peacebloom<br>1x Empty Vial</div>
      <div class="recipe"><b>Elixir of Lion's Strength</b><br>Requires:<br>1x Earthroot<br>1x Peacebloom<br>1x Empty Vial</div>
      <div class="recipe"><b>Notes</b><br>Learned from any trainer.</div>
    </div>
  </main>
  <footer><p>1 comment</p></footer>
</body>
</html>
"#;

const LEATHERWORKING_ANCHOR: &str = r#"
<html>
<body>
  <article class="post">
    <h2>Leatherworking 1-300</h2>
    <div id="shopping-list">
      <p>Light Leather - 120<br>Medium Leather - 80<br>Coarse Thread: 30</p>
    </div>
    <h3>1-45 Light Armor Kit</h3>
    <ul><li>45x Light Armor Kit</li></ul>
  </article>
</body>
</html>
"#;

const ENGINEERING_SECTIONS: &str = r#"
<html>
<body>
  <div class="entry-content">
    <h3>Materials Needed</h3>
    <ol>
      <li>30x Copper Bar</li>
      <li>Rough Blasting Powder x 40</li>
    </ol>
    <h3>Tinker section</h3>
    <p>Train at 50 skill.</p>
  </div>
  <table class="sidebar"><tr><td>10x Linen Cloth</td></tr></table>
</body>
</html>
"#;

fn pairs(materials: &[Material]) -> Vec<(&str, u32)> {
    materials.iter().map(|m| (m.name.as_str(), m.quantity)).collect()
}

#[test]
fn alchemy_recipe_blocks() {
    let materials = extract_materials(ALCHEMY_RECIPES, Profession::Alchemy);
    assert_eq!(pairs(&materials), vec![("Peacebloom", 3), ("Empty Vial", 2), ("Earthroot", 1)]);
    assert!(materials.iter().all(|m| m.category != Category::Other));
}

#[test]
fn leatherworking_anchor_is_authoritative() {
    let materials = extract_materials(LEATHERWORKING_ANCHOR, Profession::Leatherworking);
    assert_eq!(
        materials,
        vec![
            Material::new("Light Leather", Category::Leather, 120),
            Material::new("Medium Leather", Category::Leather, 80),
            Material::new("Coarse Thread", Category::Thread, 30),
        ]
    );
}

#[test]
fn engineering_sections_are_unioned() {
    let materials = extract_materials(ENGINEERING_SECTIONS, Profession::Engineering);
    assert_eq!(
        pairs(&materials),
        vec![("Copper Bar", 30), ("Rough Blasting Powder", 40), ("Linen Cloth", 10)]
    );
    assert_eq!(materials[0].category, Category::Metal);
}

#[test]
fn every_page_round_trips_through_the_import_syntax() {
    let pages = [
        (ALCHEMY_RECIPES, Profession::Alchemy),
        (LEATHERWORKING_ANCHOR, Profession::Leatherworking),
        (ENGINEERING_SECTIONS, Profession::Engineering),
    ];
    for (html, profession) in pages {
        let materials = extract_materials(html, profession);
        let line = format_line(profession.title(), &materials);
        let parsed = parse_line(&line).expect("parseable");
        assert_eq!(parsed.materials, materials, "{profession}");
    }
}
