//! Per-profession scraping runs.
//!
//! A [`Scraper`] walks the selected expansions of one profession in catalog
//! order: resolve the guide URL, wait the request delay, fetch, extract and
//! collect one [`ExpansionResult`] each. The choice memory starts empty for
//! every expansion.

use std::path::Path;

use tracing::{info, warn};

use crate::choice::{ChoiceResolver, SessionChoiceMemory};
use crate::dom;
use crate::extractor::MaterialExtractor;
use crate::fetch::DocumentSource;
use crate::format::render;
use crate::guides::{Expansion, GuideCatalog};
use crate::{Error, ExpansionResult, Options, Profession, Result};

/// Scraper for one profession.
#[derive(Debug)]
pub struct Scraper<S> {
    profession: Profession,
    catalog: GuideCatalog,
    extractor: MaterialExtractor,
    memory: SessionChoiceMemory,
    source: S,
}

impl<S: DocumentSource> Scraper<S> {
    #[must_use]
    pub fn new(
        profession: Profession,
        catalog: GuideCatalog,
        resolver: ChoiceResolver,
        options: Options,
        source: S,
    ) -> Self {
        Self {
            profession,
            catalog,
            extractor: MaterialExtractor::new(profession, resolver, options),
            memory: SessionChoiceMemory::new(),
            source,
        }
    }

    #[must_use]
    pub fn profession(&self) -> Profession {
        self.profession
    }

    #[must_use]
    pub fn catalog(&self) -> &GuideCatalog {
        &self.catalog
    }

    /// Scrape one expansion by key, or every compatible one.
    ///
    /// Errors only for a bad selection or an unusable catalog. Pages that
    /// cannot be fetched produce a label-only result with a warning.
    pub fn scrape(&mut self, selector: Option<&str>) -> Result<Vec<ExpansionResult>> {
        let expansions: Vec<Expansion> = self.catalog.select(selector)?.into_iter().cloned().collect();
        expansions.iter().map(|e| self.scrape_expansion(e)).collect()
    }

    /// Scrape a single expansion.
    pub fn scrape_expansion(&mut self, expansion: &Expansion) -> Result<ExpansionResult> {
        self.memory.reset();
        let mut result = ExpansionResult::new(&expansion.key, expansion.label(self.profession));

        let guide = self.catalog.guide_url(self.profession, expansion)?;
        if guide.constructed {
            result.warnings.push(format!("no guide URL configured, used {}", guide.url));
        }

        let delay = self.extractor.options().request_delay;
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }

        let html = match self.source.fetch(&guide.url) {
            Ok(html) => html,
            Err(e) => {
                warn!(expansion = %expansion.key, url = %guide.url, error = %e, "guide fetch failed");
                result.warnings.push(e.to_string());
                return Ok(result);
            }
        };

        let doc = dom::parse(&html);
        result.materials = self.extractor.extract(&doc, &mut self.memory);
        info!(
            profession = self.profession.key(),
            expansion = %expansion.key,
            materials = result.materials.len(),
            items = result.total_quantity(),
            choices = self.memory.len(),
            "expansion scraped"
        );
        Ok(result)
    }
}

/// Write results to `path`, one import line per expansion.
///
/// Missing parent directories are created.
pub fn write_output(path: &Path, results: &[ExpansionResult]) -> Result<()> {
    let io_err = |source| Error::Io { path: path.display().to_string(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, render(results)).map_err(io_err)
}
