//! Supported professions and their extraction profiles.

use std::fmt;
use std::str::FromStr;

use crate::category::{
    Categorizer, BLACKSMITHING_FAMILIES, ENGINEERING_FAMILIES, GATHERING_FAMILIES,
    LEATHERWORKING_FAMILIES,
};
use crate::extractor::strategy::{Step, RECIPE_CHAIN, STANDARD_CHAIN};
use crate::validate::MaterialValidator;
use crate::Error;

/// Denylist token shared by every profession.
const COMMON_EXTRA: &str = "trainer";

/// A profession with a leveling guide on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profession {
    Alchemy,
    Herbalism,
    Blacksmithing,
    Engineering,
    Leatherworking,
}

impl Profession {
    pub const ALL: [Profession; 5] = [
        Profession::Alchemy,
        Profession::Herbalism,
        Profession::Blacksmithing,
        Profession::Engineering,
        Profession::Leatherworking,
    ];

    /// Lowercase key used in URLs and file names.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Profession::Alchemy => "alchemy",
            Profession::Herbalism => "herbalism",
            Profession::Blacksmithing => "blacksmithing",
            Profession::Engineering => "engineering",
            Profession::Leatherworking => "leatherworking",
        }
    }

    /// Title used in labels.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Profession::Alchemy => "Alchemy",
            Profession::Herbalism => "Herbalism",
            Profession::Blacksmithing => "Blacksmithing",
            Profession::Engineering => "Engineering",
            Profession::Leatherworking => "Leatherworking",
        }
    }

    /// Default output file, e.g. `alchemy.txt`.
    #[must_use]
    pub fn default_output_file(self) -> String {
        format!("{}.txt", self.key())
    }

    #[must_use]
    pub const fn categorizer(self) -> Categorizer {
        match self {
            Profession::Alchemy | Profession::Herbalism => Categorizer::new(GATHERING_FAMILIES),
            Profession::Blacksmithing => Categorizer::new(BLACKSMITHING_FAMILIES),
            Profession::Engineering => Categorizer::new(ENGINEERING_FAMILIES),
            Profession::Leatherworking => Categorizer::new(LEATHERWORKING_FAMILIES),
        }
    }

    /// Denylist tokens added to the shared base list.
    #[must_use]
    pub const fn denylist_extras(self) -> &'static [&'static str] {
        match self {
            Profession::Alchemy => &[COMMON_EXTRA, "transmute"],
            Profession::Herbalism => &[COMMON_EXTRA, "node"],
            Profession::Blacksmithing => &[COMMON_EXTRA, "smelting"],
            Profession::Engineering => &[COMMON_EXTRA, "tinker"],
            Profession::Leatherworking => &[COMMON_EXTRA, "pattern"],
        }
    }

    /// Blacksmiths and engineers buy copper, silver and gold bars.
    #[must_use]
    pub const fn works_metal(self) -> bool {
        matches!(self, Profession::Blacksmithing | Profession::Engineering)
    }

    #[must_use]
    pub fn validator(self) -> MaterialValidator {
        if self.works_metal() {
            MaterialValidator::for_metalwork(self.denylist_extras())
        } else {
            MaterialValidator::new(self.denylist_extras())
        }
    }

    /// Locator strategies and how they combine.
    #[must_use]
    pub const fn strategy_chain(self) -> &'static [Step] {
        match self {
            Profession::Alchemy => RECIPE_CHAIN,
            _ => STANDARD_CHAIN,
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Profession {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Profession::ALL
            .into_iter()
            .find(|p| p.key() == lower)
            .ok_or_else(|| Error::UnknownProfession(s.to_string()))
    }
}
