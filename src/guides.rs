//! Guide catalog: which page to fetch for a profession and expansion.
//!
//! The built-in catalog targets wow-professions.com. A catalog can also be
//! loaded from JSON:
//!
//! ```json
//! {
//!   "base_url": "https://www.wow-professions.com",
//!   "expansions": [
//!     { "key": "vanilla", "slug": "vanilla", "display_name": "Vanilla" },
//!     { "key": "war_within", "slug": "the-war-within", "display_name": "War Within", "incompatible": true }
//!   ],
//!   "overrides": { "alchemy": { "shadowlands": "/guides/shadowlands-alchemy-leveling-guide" } }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::{Error, Profession, Result};

/// Site the built-in catalog points at.
pub const DEFAULT_BASE_URL: &str = "https://www.wow-professions.com";

/// Expansion whose guides use the `-leveling-guide-dragonflight` suffix.
const DRAGONFLIGHT_KEY: &str = "dragonflight";

/// One expansion of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Expansion {
    /// Selector key, e.g. `bfa`.
    pub key: String,
    /// URL slug, e.g. `battle-for-azeroth`.
    pub slug: String,
    /// Label prefix, e.g. `Bfa`.
    pub display_name: String,
    /// Guides of this expansion defeat the extraction heuristics; it is
    /// skipped in full runs and refused when selected explicitly.
    #[serde(default)]
    pub incompatible: bool,
}

impl Expansion {
    /// Shopping-list label, e.g. `Vanilla Alchemy`.
    #[must_use]
    pub fn label(&self, profession: Profession) -> String {
        format!("{} {}", self.display_name, profession.title())
    }
}

/// A resolved guide address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideUrl {
    pub url: Url,
    /// No override was configured; the URL was constructed by rule.
    pub constructed: bool,
}

/// Expansion list, base URL and per-profession path overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct GuideCatalog {
    pub base_url: String,
    pub expansions: Vec<Expansion>,
    /// Profession key -> expansion key -> path.
    #[serde(default)]
    pub overrides: HashMap<String, HashMap<String, String>>,
}

const DEFAULT_EXPANSIONS: &[(&str, &str, &str, bool)] = &[
    ("vanilla", "vanilla", "Vanilla", false),
    ("outland", "outland", "Outland", false),
    ("northrend", "northrend", "Northrend", false),
    ("cataclysm", "cataclysm", "Cataclysm", false),
    ("pandaria", "pandaria", "Pandaria", false),
    ("draenor", "draenor", "Draenor", false),
    ("legion", "legion", "Legion", false),
    ("bfa", "battle-for-azeroth", "Bfa", false),
    ("shadowlands", "shadowlands", "Shadowlands", false),
    ("dragonflight", "dragon-isles", "Dragonflight", false),
    ("war_within", "the-war-within", "War Within", true),
];

const DEFAULT_OVERRIDES: &[(&str, &str, &str)] =
    &[("alchemy", "shadowlands", "/guides/shadowlands-alchemy-leveling-guide")];

impl Default for GuideCatalog {
    fn default() -> Self {
        let expansions = DEFAULT_EXPANSIONS
            .iter()
            .map(|(key, slug, display_name, incompatible)| Expansion {
                key: (*key).to_string(),
                slug: (*slug).to_string(),
                display_name: (*display_name).to_string(),
                incompatible: *incompatible,
            })
            .collect();

        let mut overrides: HashMap<String, HashMap<String, String>> = HashMap::new();
        for (profession, expansion, path) in DEFAULT_OVERRIDES {
            overrides
                .entry((*profession).to_string())
                .or_default()
                .insert((*expansion).to_string(), (*path).to_string());
        }

        Self { base_url: DEFAULT_BASE_URL.to_string(), expansions, overrides }
    }
}

impl GuideCatalog {
    /// Parse a catalog from JSON and check that its base URL is usable.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(format!("guide catalog: {e}")))?;
        catalog.base()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.display().to_string(), source })?;
        Self::from_json(&json)
    }

    fn base(&self) -> Result<Url> {
        Url::parse(&self.base_url).map_err(|e| Error::Config(format!("base URL {}: {e}", self.base_url)))
    }

    /// Look up an expansion by key.
    pub fn expansion(&self, key: &str) -> Result<&Expansion> {
        self.expansions
            .iter()
            .find(|e| e.key == key)
            .ok_or_else(|| Error::UnknownExpansion(key.to_string()))
    }

    /// Expansions to process.
    ///
    /// With no selector every compatible expansion is returned in catalog
    /// order. An explicit selector must name a known, compatible expansion.
    pub fn select(&self, selector: Option<&str>) -> Result<Vec<&Expansion>> {
        match selector {
            None => Ok(self.expansions.iter().filter(|e| !e.incompatible).collect()),
            Some(key) => {
                let expansion = self.expansion(key)?;
                if expansion.incompatible {
                    return Err(Error::IncompatibleExpansion(key.to_string()));
                }
                Ok(vec![expansion])
            }
        }
    }

    /// Keys of all expansions, for help and error messages.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.expansions.iter().map(|e| e.key.as_str()).collect()
    }

    /// Guide URL for a profession and expansion.
    ///
    /// A configured override wins. Otherwise the URL is built as
    /// `/guides/{slug}-{profession}-leveling` (dragonflight guides end in
    /// `-leveling-guide-dragonflight`) and a warning is logged.
    pub fn guide_url(&self, profession: Profession, expansion: &Expansion) -> Result<GuideUrl> {
        let base = self.base()?;
        let configured = self
            .overrides
            .get(profession.key())
            .and_then(|by_expansion| by_expansion.get(&expansion.key));

        let (path, constructed) = match configured {
            Some(path) => (path.clone(), false),
            None => (fallback_path(profession, expansion), true),
        };

        let url = base
            .join(&path)
            .map_err(|e| Error::Config(format!("guide path {path}: {e}")))?;
        if constructed {
            warn!(
                profession = profession.key(),
                expansion = %expansion.key,
                %url,
                "no guide URL configured, using constructed URL"
            );
        }
        Ok(GuideUrl { url, constructed })
    }
}

fn fallback_path(profession: Profession, expansion: &Expansion) -> String {
    if expansion.key == DRAGONFLIGHT_KEY {
        format!("/guides/{}-{}-leveling-guide-dragonflight", expansion.slug, profession.key())
    } else {
        format!("/guides/{}-{}-leveling", expansion.slug, profession.key())
    }
}
