//! Section locator.
//!
//! Each [`Strategy`] finds the regions of a guide page that are likely to
//! hold a materials list. Strategies are independent: the extraction pipeline
//! decides how their results combine.

use dom_query::{Document, Selection};
use tracing::debug;

use crate::dom;
use crate::patterns::{
    ANCHOR_IDS, CHOICE_LANGUAGE, HEADING_TAGS, HEADING_VOCABULARY, LIST_SELECTOR, LIST_TAGS,
    RECIPE_BLOCK_CLASS, RECIPE_CLASS, RECIPE_CUE, SECTION_CLASS, SECTION_TAGS,
};
use crate::Options;

use super::utils::{class, id, is_one_of_tags, is_or_contains_list};
use super::query_all;

/// A way of finding material regions in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Element with a dedicated id such as `materials`.
    MaterialsAnchor,
    /// List following a heading that talks about materials.
    HeadingScan,
    /// Container whose class names a materials or content block.
    ClassScan,
    /// Recipe blocks with a `Requires:` style cue.
    RecipeScan,
    /// Every table in the document.
    TableScan,
    /// The whole body.
    BodyFallback,
}

impl Strategy {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::MaterialsAnchor => "materials-anchor",
            Strategy::HeadingScan => "heading-scan",
            Strategy::ClassScan => "class-scan",
            Strategy::RecipeScan => "recipe-scan",
            Strategy::TableScan => "table-scan",
            Strategy::BodyFallback => "body-fallback",
        }
    }
}

/// A located region of the document.
#[derive(Debug, Clone)]
pub struct Region<'a> {
    pub selection: Selection<'a>,
    pub strategy: Strategy,
    /// The region's text offers alternatives ("choose", "or", ...).
    pub has_choice_language: bool,
}

impl<'a> Region<'a> {
    fn new(selection: Selection<'a>, strategy: Strategy) -> Self {
        let has_choice_language = CHOICE_LANGUAGE.is_match(&dom::text_content(&selection));
        Self { selection, strategy, has_choice_language }
    }
}

/// Run one strategy over a document.
#[must_use]
pub fn locate<'a>(doc: &'a Document, strategy: Strategy, opts: &Options) -> Vec<Region<'a>> {
    let selections = match strategy {
        Strategy::MaterialsAnchor => anchor_regions(doc, opts.sibling_lookahead),
        Strategy::HeadingScan => heading_regions(doc, opts.sibling_lookahead),
        Strategy::ClassScan => query_all(&doc.select("html"), is_section_container),
        Strategy::RecipeScan => recipe_regions(doc),
        Strategy::TableScan => doc.select("table").nodes().iter().map(|n| Selection::from(*n)).collect(),
        Strategy::BodyFallback => vec![body_or_root(doc)],
    };

    let regions: Vec<Region<'a>> = selections
        .into_iter()
        .filter(|sel| sel.exists())
        .map(|sel| Region::new(sel, strategy))
        .collect();
    debug!(strategy = strategy.name(), regions = regions.len(), "located regions");
    regions
}

// === Rules ===

fn is_materials_anchor(sel: &Selection) -> bool {
    let id = id(sel);
    !id.is_empty() && ANCHOR_IDS.iter().any(|a| a.eq_ignore_ascii_case(&id))
}

fn is_materials_heading(sel: &Selection) -> bool {
    is_one_of_tags(sel, HEADING_TAGS) && HEADING_VOCABULARY.is_match(&dom::text_content(sel))
}

fn is_section_container(sel: &Selection) -> bool {
    is_one_of_tags(sel, SECTION_TAGS) && SECTION_CLASS.is_match(&class(sel))
}

fn is_recipe_container(sel: &Selection) -> bool {
    is_one_of_tags(sel, &["div", "section"]) && RECIPE_CLASS.is_match(&class(sel))
}

fn is_recipe_block(sel: &Selection) -> bool {
    is_one_of_tags(sel, &["div", "p"])
        && RECIPE_BLOCK_CLASS.is_match(&class(sel))
        && RECIPE_CUE.is_match(&dom::text_content(sel))
}

// === Strategies ===

fn anchor_regions(doc: &Document, lookahead: usize) -> Vec<Selection<'_>> {
    query_all(&doc.select("html"), is_materials_anchor)
        .into_iter()
        .filter_map(|anchor| {
            if is_one_of_tags(&anchor, HEADING_TAGS) {
                list_after_heading(&anchor, lookahead)
            } else {
                Some(anchor)
            }
        })
        .collect()
}

fn heading_regions(doc: &Document, lookahead: usize) -> Vec<Selection<'_>> {
    query_all(&doc.select("html"), is_materials_heading)
        .iter()
        .filter_map(|heading| list_after_heading(heading, lookahead))
        .collect()
}

fn recipe_regions(doc: &Document) -> Vec<Selection<'_>> {
    let mut seen = Vec::new();
    let mut blocks = Vec::new();
    for container in query_all(&doc.select("html"), is_recipe_container) {
        for block in query_all(&container, is_recipe_block) {
            let Some(node) = block.nodes().first() else {
                continue;
            };
            if !seen.contains(&node.id) {
                seen.push(node.id);
                blocks.push(block);
            }
        }
    }
    blocks
}

fn body_or_root(doc: &Document) -> Selection<'_> {
    let body = doc.select("body");
    if body.exists() {
        return body;
    }
    let html = doc.select("html");
    if html.exists() {
        return html;
    }
    Selection::from(doc.root())
}

/// The list a heading introduces.
///
/// Looks at up to `lookahead` element siblings for one that is, or wraps, a
/// list or table. If none is found, the heading's parent's next element
/// sibling gets the same test. Bold text inside a paragraph reaches its list
/// through that second step.
fn list_after_heading<'a>(heading: &Selection<'a>, lookahead: usize) -> Option<Selection<'a>> {
    let mut sibling = dom::next_element_sibling(heading);
    for _ in 0..lookahead {
        let Some(current) = sibling else {
            break;
        };
        if let Some(list) = as_list(&current) {
            return Some(list);
        }
        sibling = dom::next_element_sibling(&current);
    }

    let parent = dom::parent(heading);
    if !parent.exists() {
        return None;
    }
    dom::next_element_sibling(&parent).and_then(|s| as_list(&s))
}

fn as_list<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    if is_one_of_tags(sel, LIST_TAGS) {
        Some(sel.clone())
    } else if is_or_contains_list(sel, LIST_TAGS, LIST_SELECTOR) {
        Some(sel.select(LIST_SELECTOR).first())
    } else {
        None
    }
}
