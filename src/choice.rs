//! Choice resolution for "pick one of these" fragments.
//!
//! Guides often list alternatives on one line:
//! `14x Golden Sansam / 14x Dreamfoil (you only need 14 from one)`.
//! Only one of them should land on the shopping list. The resolver prefers a
//! name already bought earlier in the same expansion run, then the cheapest
//! tier from a [`PriorityTable`].

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::matcher::match_fragment_with_min;
use crate::normalize::{clean_item_name, name_key};
use crate::patterns::{
    CHOICE_LANGUAGE, CHOICE_SEPARATOR, EXPLANATORY_CLAUSE, EXPLANATORY_TAIL, LEADING_CHOICE_CUE,
};
use crate::validate::MaterialValidator;
use crate::{Error, Result};

/// One parsed alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub quantity: u32,
}

/// Remove explanatory clauses and lead-in cue words.
#[must_use]
pub fn strip_explanation(fragment: &str) -> String {
    let s = EXPLANATORY_CLAUSE.replace_all(fragment, " ");
    let s = EXPLANATORY_TAIL.replace(&s, "");
    let s = LEADING_CHOICE_CUE.replace(&s, "");
    s.trim().to_string()
}

/// Split a fragment into its alternative segments.
///
/// Returns `None` unless there are at least two non-empty segments.
#[must_use]
pub fn split_alternatives(fragment: &str) -> Option<Vec<String>> {
    let stripped = strip_explanation(fragment);
    let segments: Vec<String> = CHOICE_SEPARATOR
        .split(&stripped)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    (segments.len() >= 2).then_some(segments)
}

/// `true` when at least two alternatives carry their own quantity, as in
/// `14x Golden Sansam / 14x Dreamfoil`. No choice words are needed then.
#[must_use]
pub fn has_quantified_alternatives(fragment: &str, min_len: usize) -> bool {
    split_alternatives(fragment).is_some_and(|segments| {
        segments
            .iter()
            .filter(|s| match_fragment_with_min(s, min_len).is_some())
            .count()
            >= 2
    })
}

/// `true` when the fragment itself reads like a choice, independent of its
/// surroundings.
#[must_use]
pub fn has_own_choice_language(fragment: &str) -> bool {
    CHOICE_LANGUAGE.is_match(fragment) || EXPLANATORY_CLAUSE.is_match(fragment)
}

/// The ordered alternatives of one choice fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceGroup {
    candidates: Vec<Candidate>,
}

impl ChoiceGroup {
    /// Parse a choice fragment.
    ///
    /// Each segment goes through the pattern matcher and the validator;
    /// failures are dropped. A segment without any digit inherits the
    /// quantity of the candidate before it, so `14x Briarthorn or
    /// Bruiseweed` yields two candidates of 14.
    ///
    /// Returns `None` when the fragment has fewer than two segments or no
    /// segment survives.
    #[must_use]
    pub fn parse(fragment: &str, validator: &MaterialValidator, min_len: usize) -> Option<Self> {
        let segments = split_alternatives(fragment)?;
        let mut candidates: Vec<Candidate> = Vec::with_capacity(segments.len());
        let mut last_quantity: Option<u32> = None;

        for segment in &segments {
            let parsed = if let Some(m) = match_fragment_with_min(segment, min_len) {
                Some(Candidate { name: m.name, quantity: m.quantity })
            } else if !segment.chars().any(|c| c.is_ascii_digit()) {
                last_quantity.map(|quantity| Candidate { name: clean_item_name(segment), quantity })
            } else {
                None
            };

            let Some(candidate) = parsed else {
                continue;
            };
            last_quantity = Some(candidate.quantity);
            if validator.is_valid(&candidate.name) {
                candidates.push(candidate);
            }
        }

        (!candidates.is_empty()).then_some(Self { candidates })
    }

    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }
}

/// Names chosen so far in one expansion run, with cumulative quantities.
///
/// Owned by the caller and reset at every expansion boundary.
#[derive(Debug, Clone, Default)]
pub struct SessionChoiceMemory {
    // name_key -> (first spelling, cumulative quantity)
    chosen: HashMap<String, (String, u32)>,
    order: Vec<String>,
}

impl SessionChoiceMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cumulative quantity chosen for `name`, if it was chosen before.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u32> {
        self.chosen.get(&name_key(name)).map(|(_, q)| *q)
    }

    /// Add `quantity` to the running total of `name`.
    pub fn record(&mut self, name: &str, quantity: u32) {
        let key = name_key(name);
        if let Some((_, total)) = self.chosen.get_mut(&key) {
            *total = total.saturating_add(quantity);
        } else {
            self.order.push(key.clone());
            self.chosen.insert(key, (name.to_string(), quantity));
        }
    }

    /// Forget everything.
    pub fn reset(&mut self) {
        self.chosen.clear();
        self.order.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Chosen names and totals, in first-chosen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.order
            .iter()
            .filter_map(|key| self.chosen.get(key))
            .map(|(name, q)| (name.as_str(), *q))
    }
}

/// Price tier of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Common = 1,
    Moderate = 2,
    Rare = 3,
}

/// Keyword lists that place names into tiers.
///
/// A name containing a `common` keyword (case-insensitive) is tier 1, one
/// containing a `rare` keyword is tier 3, anything else is tier 2. Common
/// wins when both match.
///
/// # JSON
///
/// ```json
/// { "common": ["peacebloom", "linen"], "rare": ["black lotus"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PriorityTable {
    #[serde(default)]
    pub common: Vec<String>,
    #[serde(default)]
    pub rare: Vec<String>,
}

const DEFAULT_COMMON: &[&str] = &[
    "golden sansam",
    "peacebloom",
    "silverleaf",
    "earthroot",
    "mageroyal",
    "briarthorn",
    "bruiseweed",
    "stranglekelp",
    "felweed",
    "goldclover",
    "linen",
    "wool cloth",
    "light leather",
    "copper",
    "tin ore",
    "tin bar",
    "rough stone",
];

const DEFAULT_RARE: &[&str] = &[
    "black lotus",
    "frost lotus",
    "fel lotus",
    "snow lotus",
    "arcanite",
    "titansteel",
    "primal might",
    "flawless",
    "heavenly shard",
];

impl Default for PriorityTable {
    fn default() -> Self {
        Self {
            common: DEFAULT_COMMON.iter().map(|s| (*s).to_string()).collect(),
            rare: DEFAULT_RARE.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl PriorityTable {
    /// Parse a table from JSON. Missing lists are empty.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut table: Self = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("priority table: {e}")))?;
        for keyword in table.common.iter_mut().chain(table.rare.iter_mut()) {
            *keyword = keyword.to_lowercase();
        }
        Ok(table)
    }

    /// Load a table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.display().to_string(), source })?;
        Self::from_json(&json)
    }

    /// Tier of a material name.
    #[must_use]
    pub fn tier(&self, name: &str) -> Tier {
        let lower = name.to_lowercase();
        if self.common.iter().any(|k| lower.contains(k.as_str())) {
            Tier::Common
        } else if self.rare.iter().any(|k| lower.contains(k.as_str())) {
            Tier::Rare
        } else {
            Tier::Moderate
        }
    }
}

/// Picks one candidate per choice group.
#[derive(Debug, Clone, Default)]
pub struct ChoiceResolver {
    priorities: PriorityTable,
}

impl ChoiceResolver {
    #[must_use]
    pub fn new(priorities: PriorityTable) -> Self {
        Self { priorities }
    }

    #[must_use]
    pub fn priorities(&self) -> &PriorityTable {
        &self.priorities
    }

    /// Choose a candidate without touching memory.
    ///
    /// Remembered candidates win, largest running total first. Otherwise
    /// the lowest tier wins. Ties go to the earliest candidate.
    #[must_use]
    pub fn select<'g>(&self, group: &'g ChoiceGroup, memory: &SessionChoiceMemory) -> Option<&'g Candidate> {
        let mut remembered: Option<(&Candidate, u32)> = None;
        for candidate in group.candidates() {
            if let Some(total) = memory.get(&candidate.name) {
                if remembered.is_none_or(|(_, best)| total > best) {
                    remembered = Some((candidate, total));
                }
            }
        }
        if let Some((candidate, _)) = remembered {
            return Some(candidate);
        }

        group.candidates().iter().min_by_key(|c| self.priorities.tier(&c.name))
    }

    /// Choose a candidate and record it in memory.
    pub fn resolve(&self, group: &ChoiceGroup, memory: &mut SessionChoiceMemory) -> Option<Candidate> {
        let chosen = self.select(group, memory)?.clone();
        memory.record(&chosen.name, chosen.quantity);
        Some(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MIN_FRAGMENT_LEN;

    const SANSAM: &str =
        "14x Golden Sansam / 14x Dreamfoil / 14x Mountain Silversage (you only need 14 from one)";

    fn group(fragment: &str) -> ChoiceGroup {
        ChoiceGroup::parse(fragment, &MaterialValidator::default(), MIN_FRAGMENT_LEN).unwrap()
    }

    fn names(g: &ChoiceGroup) -> Vec<&str> {
        g.candidates().iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn strips_explanation_before_splitting() {
        assert_eq!(
            split_alternatives(SANSAM).unwrap(),
            vec!["14x Golden Sansam", "14x Dreamfoil", "14x Mountain Silversage"]
        );
        assert_eq!(
            split_alternatives("Either 5x Liferoot or 5x Kingsblood, whichever is cheapest").unwrap(),
            vec!["5x Liferoot", "5x Kingsblood"]
        );
        assert!(split_alternatives("60x Peacebloom").is_none());
    }

    #[test]
    fn segments_without_digits_inherit_quantity() {
        let g = group("14x Briarthorn or Bruiseweed");
        assert_eq!(
            g.candidates(),
            &[
                Candidate { name: "Briarthorn".into(), quantity: 14 },
                Candidate { name: "Bruiseweed".into(), quantity: 14 },
            ]
        );
    }

    #[test]
    fn invalid_segments_are_dropped() {
        let g = group("20x Wild Steelbloom / 20 skill points");
        assert_eq!(names(&g), vec!["Wild Steelbloom"]);
        assert!(ChoiceGroup::parse("see guide / skill", &MaterialValidator::default(), 5).is_none());
    }

    #[test]
    fn golden_sansam_example() {
        let resolver = ChoiceResolver::default();
        let mut memory = SessionChoiceMemory::new();
        let chosen = resolver.resolve(&group(SANSAM), &mut memory).unwrap();
        assert_eq!(chosen, Candidate { name: "Golden Sansam".into(), quantity: 14 });
        assert_eq!(memory.iter().collect::<Vec<_>>(), vec![("Golden Sansam", 14)]);
    }

    #[test]
    fn selection_is_deterministic_with_first_occurrence_ties() {
        let resolver = ChoiceResolver::default();
        let memory = SessionChoiceMemory::new();
        let g = group("10x Dreamfoil / 10x Sungrass");
        for _ in 0..5 {
            assert_eq!(resolver.select(&g, &memory).map(|c| c.name.as_str()), Some("Dreamfoil"));
        }
    }

    #[test]
    fn lower_tier_beats_earlier_candidate() {
        let resolver = ChoiceResolver::default();
        let memory = SessionChoiceMemory::new();
        let g = group("2x Black Lotus / 2x Dreamfoil / 2x Peacebloom");
        assert_eq!(resolver.select(&g, &memory).map(|c| c.name.as_str()), Some("Peacebloom"));
    }

    #[test]
    fn memory_overrides_priority() {
        let resolver = ChoiceResolver::default();
        let mut memory = SessionChoiceMemory::new();
        memory.record("Dreamfoil", 8);
        let chosen = resolver.resolve(&group(SANSAM), &mut memory).unwrap();
        assert_eq!(chosen.name, "Dreamfoil");
        assert_eq!(memory.get("dreamfoil"), Some(22));
        assert_eq!(memory.get("Golden Sansam"), None);
    }

    #[test]
    fn memory_prefers_largest_total() {
        let resolver = ChoiceResolver::default();
        let mut memory = SessionChoiceMemory::new();
        memory.record("Dreamfoil", 8);
        memory.record("Mountain Silversage", 20);
        let g = group(SANSAM);
        assert_eq!(resolver.select(&g, &memory).map(|c| c.name.as_str()), Some("Mountain Silversage"));
    }

    #[test]
    fn memory_reset_forgets() {
        let mut memory = SessionChoiceMemory::new();
        memory.record("Dreamfoil", 8);
        memory.record("Dreamfoil", 2);
        assert_eq!(memory.len(), 1);
        memory.reset();
        assert!(memory.is_empty());
        assert_eq!(memory.get("Dreamfoil"), None);
    }

    #[test]
    fn priority_table_from_json() {
        let table = PriorityTable::from_json(r#"{"common": ["Dreamfoil"]}"#).unwrap();
        assert_eq!(table.tier("Dreamfoil"), Tier::Common);
        assert_eq!(table.tier("Golden Sansam"), Tier::Moderate);
        assert!(table.rare.is_empty());
        assert!(matches!(PriorityTable::from_json("[1, 2]"), Err(Error::Config(_))));
    }

    #[test]
    fn default_tiers() {
        let table = PriorityTable::default();
        assert_eq!(table.tier("Golden Sansam"), Tier::Common);
        assert_eq!(table.tier("Black Lotus"), Tier::Rare);
        assert_eq!(table.tier("Dreamfoil"), Tier::Moderate);
    }

    #[test]
    fn fragment_level_choice_language() {
        assert!(has_own_choice_language(SANSAM));
        assert!(has_own_choice_language("5x Liferoot or 5x Kingsblood"));
        assert!(!has_own_choice_language("5x Mithril Bar / 5x Thorium Bar"));
    }

    #[test]
    fn quantified_alternatives_need_two_quantities() {
        assert!(has_quantified_alternatives("14x Golden Sansam / 14x Dreamfoil", 5));
        assert!(has_quantified_alternatives("Mithril Bar x 5 / Thorium Bar x 5", 5));
        assert!(!has_quantified_alternatives("14x Golden Sansam / Dreamfoil", 5));
        assert!(!has_quantified_alternatives("60x Peacebloom", 5));
    }
}
