//! Material extraction pipeline.
//!
//! Runs a profession's strategy chain over one document: locate regions,
//! tokenize them, match or resolve each fragment, validate, categorize and
//! finally aggregate. Nothing in here fails; a page without recognizable
//! materials produces an empty list.

use dom_query::Document;
use tracing::debug;

use crate::aggregate::aggregate;
use crate::category::Categorizer;
use crate::choice::{
    has_own_choice_language, has_quantified_alternatives, split_alternatives, ChoiceGroup, ChoiceResolver,
    SessionChoiceMemory,
};
use crate::matcher::match_fragment_with_min;
use crate::selector::{locate, Region};
use crate::validate::MaterialValidator;
use crate::{Material, Options, Profession};

use super::fragments::{tokenize, Fragment};
use super::state::ExtractionState;
use super::strategy::{Mode, Step};

/// Per-profession extraction setup.
#[derive(Debug, Clone)]
pub struct MaterialExtractor {
    chain: &'static [Step],
    categorizer: Categorizer,
    validator: MaterialValidator,
    resolver: ChoiceResolver,
    options: Options,
}

impl MaterialExtractor {
    /// Extractor with the profession's chain, categorizer and validator.
    #[must_use]
    pub fn new(profession: Profession, resolver: ChoiceResolver, options: Options) -> Self {
        Self {
            chain: profession.strategy_chain(),
            categorizer: profession.categorizer(),
            validator: profession.validator(),
            resolver,
            options,
        }
    }

    /// Replace the strategy chain.
    #[must_use]
    pub fn with_chain(mut self, chain: &'static [Step]) -> Self {
        self.chain = chain;
        self
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Extract deduplicated materials from a document.
    pub fn extract(&self, doc: &Document, memory: &mut SessionChoiceMemory) -> Vec<Material> {
        aggregate(self.extract_raw(doc, memory))
    }

    /// Extract materials in discovery order, before deduplication.
    pub fn extract_raw(&self, doc: &Document, memory: &mut SessionChoiceMemory) -> Vec<Material> {
        let mut state = ExtractionState::new();
        let mut collected: Vec<Material> = Vec::new();

        for step in self.chain {
            if step.mode == Mode::FallbackOnly && !collected.is_empty() {
                continue;
            }

            let regions = locate(doc, step.strategy, &self.options);
            let mut found = Vec::new();
            for region in &regions {
                found.extend(self.extract_region(region, &mut state, memory));
            }
            debug!(
                strategy = step.strategy.name(),
                regions = regions.len(),
                materials = found.len(),
                "strategy finished"
            );

            let succeeded = !found.is_empty();
            collected.extend(found);
            if succeeded && step.mode == Mode::Authoritative {
                break;
            }
        }

        debug!(materials = collected.len(), nodes = state.processed_count(), "document extracted");
        collected
    }

    fn extract_region(
        &self,
        region: &Region,
        state: &mut ExtractionState,
        memory: &mut SessionChoiceMemory,
    ) -> Vec<Material> {
        let mut materials = Vec::new();
        for fragment in tokenize(&region.selection, state) {
            match fragment {
                Fragment::Line(text) => {
                    materials.extend(self.extract_text(&text, region.has_choice_language, memory));
                }
                Fragment::Row(cells) => {
                    let before = materials.len();
                    for cell in &cells {
                        materials.extend(self.extract_text(cell, region.has_choice_language, memory));
                    }
                    if materials.len() == before {
                        let joined = cells.join(" : ");
                        materials.extend(self.extract_text(&joined, region.has_choice_language, memory));
                    }
                }
            }
        }
        materials
    }

    /// Turn one fragment into at most one material.
    ///
    /// A fragment with alternatives goes to the choice resolver when its
    /// region or the fragment itself uses choice language, or when two or
    /// more alternatives carry their own quantity.
    fn extract_text(&self, text: &str, choice_region: bool, memory: &mut SessionChoiceMemory) -> Option<Material> {
        let min_len = self.options.min_fragment_len;

        let is_choice = split_alternatives(text).is_some()
            && (choice_region || has_own_choice_language(text) || has_quantified_alternatives(text, min_len));
        if is_choice {
            let group = ChoiceGroup::parse(text, &self.validator, min_len)?;
            let chosen = self.resolver.resolve(&group, memory)?;
            debug!(fragment = text, chosen = %chosen.name, "resolved choice");
            return Some(self.material(chosen.name, chosen.quantity));
        }

        let m = match_fragment_with_min(text, min_len)?;
        self.validator
            .is_valid(&m.name)
            .then(|| self.material(m.name, m.quantity))
    }

    fn material(&self, name: String, quantity: u32) -> Material {
        let category = self.categorizer.categorize(&name);
        Material { name, category, quantity }
    }
}
