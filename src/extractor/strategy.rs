//! Strategy chains.
//!
//! A chain is an ordered list of locator strategies, each with a [`Mode`]
//! that says how its results combine with the others.

use crate::selector::Strategy;

/// How a strategy's results combine with the rest of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// If it yields any material, later strategies are skipped.
    Authoritative,
    /// Results are added to whatever the chain collects.
    Union,
    /// Runs only while nothing has been collected.
    FallbackOnly,
}

/// One link of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub strategy: Strategy,
    pub mode: Mode,
}

impl Step {
    #[must_use]
    pub const fn new(strategy: Strategy, mode: Mode) -> Self {
        Self { strategy, mode }
    }
}

/// Chain used by most professions.
pub const STANDARD_CHAIN: &[Step] = &[
    Step::new(Strategy::MaterialsAnchor, Mode::Authoritative),
    Step::new(Strategy::HeadingScan, Mode::Union),
    Step::new(Strategy::ClassScan, Mode::Union),
    Step::new(Strategy::TableScan, Mode::Union),
    Step::new(Strategy::BodyFallback, Mode::FallbackOnly),
];

/// Chain for guides that spell out recipe reagents inline.
pub const RECIPE_CHAIN: &[Step] = &[
    Step::new(Strategy::MaterialsAnchor, Mode::Authoritative),
    Step::new(Strategy::HeadingScan, Mode::Union),
    Step::new(Strategy::ClassScan, Mode::Union),
    Step::new(Strategy::RecipeScan, Mode::FallbackOnly),
    Step::new(Strategy::TableScan, Mode::Union),
    Step::new(Strategy::BodyFallback, Mode::FallbackOnly),
];
