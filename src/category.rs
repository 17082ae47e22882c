//! Reagent categorization by keyword families.
//!
//! A [`Categorizer`] is an ordered list of [`KeywordFamily`] values. The first
//! family with a keyword contained in the (lowercased) name wins; a name no
//! family claims is [`Category::Other`]. Each profession picks its own family
//! list, see [`crate::Profession::categorizer`].

use std::fmt;
use std::str::FromStr;

/// Reagent category tag used by the import format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Herb,
    Gem,
    Elemental,
    Potion,
    Consumable,
    Metal,
    Enhancement,
    Component,
    Chemical,
    Leather,
    Scale,
    Thread,
    Cloth,
    Dye,
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 15] = [
        Category::Herb,
        Category::Gem,
        Category::Elemental,
        Category::Potion,
        Category::Consumable,
        Category::Metal,
        Category::Enhancement,
        Category::Component,
        Category::Chemical,
        Category::Leather,
        Category::Scale,
        Category::Thread,
        Category::Cloth,
        Category::Dye,
        Category::Other,
    ];

    /// Tag written to the import string, e.g. `Reagents/Herb`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Herb => "Reagents/Herb",
            Category::Gem => "Reagents/Gem",
            Category::Elemental => "Reagents/Elemental",
            Category::Potion => "Reagents/Potion",
            Category::Consumable => "Reagents/Consumable",
            Category::Metal => "Reagents/Metal",
            Category::Enhancement => "Reagents/Enhancement",
            Category::Component => "Reagents/Component",
            Category::Chemical => "Reagents/Chemical",
            Category::Leather => "Reagents/Leather",
            Category::Scale => "Reagents/Scale",
            Category::Thread => "Reagents/Thread",
            Category::Cloth => "Reagents/Cloth",
            Category::Dye => "Reagents/Dye",
            Category::Other => "Reagents/Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category tag: {s}"))
    }
}

/// One category and the lowercase substrings that claim a name for it.
#[derive(Debug, Clone, Copy)]
pub struct KeywordFamily {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

impl KeywordFamily {
    fn claims(&self, lower_name: &str) -> bool {
        self.keywords.iter().any(|k| lower_name.contains(k))
    }
}

// === Keyword lists ===

const HERB: &[&str] = &[
    "leaf", "bloom", "blossom", "weed", "root", "kelp", "grass", "rose", "lily", "cap", "moss",
    "thorn", "glory", "vine",
];

const GEM_BASIC: &[&str] = &[
    "jade", "citrine", "stone", "gem", "crystal", "sapphire", "ruby", "emerald", "diamond", "topaz",
];

const GEM: &[&str] = &[
    "jade", "citrine", "stone", "gem", "crystal", "sapphire", "ruby", "emerald", "diamond", "topaz",
    "agate", "bloodstone", "chalcedony", "shadow", "sun", "huge", "perfect",
];

const ELEMENTAL_BASIC: &[&str] = &[
    "eternal", "crystallized", "volatile", "rousing", "awakened", "fire", "air", "water", "earth",
    "life", "frost", "order",
];

const ELEMENTAL: &[&str] = &[
    "eternal", "crystallized", "volatile", "rousing", "awakened", "fire", "air", "water", "earth",
    "life", "frost", "order", "essence", "spirit", "primal",
];

const POTION: &[&str] = &["potion", "elixir", "flask", "draught"];

const CONSUMABLE: &[&str] = &["vial"];

const METAL: &[&str] = &[
    "ore", "metal", "bar", "ingot", "copper", "tin", "iron", "silver", "gold", "mithril",
    "thorium", "adamantite", "cobalt", "saronite", "titanium", "obsidium", "elementium", "pyrite",
    "ghost", "kyparite", "trillium", "draenor", "leystone", "felslate", "storm", "monelite",
    "platinum", "laestrite", "solenium", "oxxein", "phaedrum", "sinvyr", "serevite", "draconium",
    "khaz", "bismuth",
];

const ENHANCEMENT: &[&str] = &[
    "flux", "coal", "grindstone", "weightstone", "sharpening", "whetstone", "grinding", "rough",
    "coarse", "heavy",
];

const COMPONENT: &[&str] = &[
    "bolt", "screw", "gear", "spring", "cog", "pipe", "tube", "wire", "circuit", "battery", "core",
    "lens", "scope", "trigger", "stock", "barrel", "mechanism", "widget", "gyro", "rotor",
    "piston", "valve", "chamber",
];

const CLOTH: &[&str] = &[
    "cloth", "linen", "wool", "silk", "mageweave", "runecloth", "netherweave", "frostweave",
    "embersilk", "windwool", "sumptuous", "hexweave", "shal", "lightless", "shrouded",
];

const LEATHER_BASIC: &[&str] = &["leather", "hide", "skin", "scale"];

const LEATHER: &[&str] = &[
    "leather", "hide", "skin", "pelt", "fur", "rawhide", "light", "medium", "heavy", "thick",
    "rugged", "knothide", "heavy clefthoof", "cobra", "wind scales", "arctic", "nerubian",
    "icy dragonscale", "jormungar", "savage", "blackened dragonscale", "pristine", "exotic",
    "magnificent", "sha-touched", "yak", "kyparite", "sha", "ghost", "sumptuous", "burnished",
    "stonehide", "gorebound", "felscale", "stormscale", "silkweave", "dreadleather", "fiendish",
    "lightless", "shadow", "deep sea", "bone", "desolate", "pallid", "heavy callous",
    "lightless silk", "heavy desolate", "shrouded",
];

const SCALE: &[&str] = &[
    "scale", "dragonscale", "prismatic", "iridescent", "brilliant", "gleaming", "pristine",
    "resplendent", "storm", "wind",
];

const THREAD: &[&str] = &[
    "thread", "sinew", "gut", "string", "cord", "binding", "rune", "enchanted", "heavy silken",
    "silken", "enchanting",
];

const ENGINEERING_CHEMICAL: &[&str] = &[
    "powder", "dust", "flux", "oil", "grease", "paste", "solution", "acid", "saltpeter", "blasting",
    "rough", "coarse", "heavy", "solid",
];

const CURING_CHEMICAL: &[&str] = &["salt", "curing", "tanning", "alum", "lime", "potash"];

const DYE: &[&str] = &["dye", "pigment", "ink", "paint", "stain", "tint"];

// === Family tables ===

const fn family(category: Category, keywords: &'static [&'static str]) -> KeywordFamily {
    KeywordFamily { category, keywords }
}

/// Alchemy and herbalism: Herb, Gem, Elemental, Potion, Consumable.
pub const GATHERING_FAMILIES: &[KeywordFamily] = &[
    family(Category::Herb, HERB),
    family(Category::Gem, GEM_BASIC),
    family(Category::Elemental, ELEMENTAL_BASIC),
    family(Category::Potion, POTION),
    family(Category::Consumable, CONSUMABLE),
];

/// Blacksmithing: Metal, Gem, Leather, Cloth, Enhancement, Elemental.
pub const BLACKSMITHING_FAMILIES: &[KeywordFamily] = &[
    family(Category::Metal, METAL),
    family(Category::Gem, GEM),
    family(Category::Leather, LEATHER_BASIC),
    family(Category::Cloth, CLOTH),
    family(Category::Enhancement, ENHANCEMENT),
    family(Category::Elemental, ELEMENTAL),
];

/// Engineering: Metal, Gem, Component, Cloth, Leather, Chemical, Elemental.
pub const ENGINEERING_FAMILIES: &[KeywordFamily] = &[
    family(Category::Metal, METAL),
    family(Category::Gem, GEM),
    family(Category::Component, COMPONENT),
    family(Category::Cloth, CLOTH),
    family(Category::Leather, LEATHER_BASIC),
    family(Category::Chemical, ENGINEERING_CHEMICAL),
    family(Category::Elemental, ELEMENTAL),
];

/// Leatherworking: Leather, Scale, Thread, Cloth, Chemical, Dye, Elemental, Gem.
pub const LEATHERWORKING_FAMILIES: &[KeywordFamily] = &[
    family(Category::Leather, LEATHER),
    family(Category::Scale, SCALE),
    family(Category::Thread, THREAD),
    family(Category::Cloth, CLOTH),
    family(Category::Chemical, CURING_CHEMICAL),
    family(Category::Dye, DYE),
    family(Category::Elemental, ELEMENTAL),
    family(Category::Gem, GEM),
];

/// Maps item names to categories with a fixed, ordered family list.
#[derive(Debug, Clone, Copy)]
pub struct Categorizer {
    families: &'static [KeywordFamily],
}

impl Categorizer {
    #[must_use]
    pub const fn new(families: &'static [KeywordFamily]) -> Self {
        Self { families }
    }

    /// Category of `name`; the first claiming family wins.
    #[must_use]
    pub fn categorize(&self, name: &str) -> Category {
        let lower = name.to_lowercase();
        self.families
            .iter()
            .find(|f| f.claims(&lower))
            .map_or(Category::Other, |f| f.category)
    }
}
