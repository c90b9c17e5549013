//! Catalog filtering for the comparison table.
//!
//! A [`PlanFilters`] value is the ephemeral, per-widget selection state: it
//! arrives from form controls, narrows the catalog for one render, and is
//! never persisted. Filtering is pure and order-preserving; an empty result
//! is a normal outcome, distinguished in presentation from invalid input.

use serde::{Deserialize, Serialize};

use crate::catalog::Plan;

/// Speed band selection.
///
/// Boundary semantics are deliberate: `300to500` is inclusive on both ends
/// while the neighboring bands are strict, so a 300 Mbps plan matches only
/// `300to500` and a 500 Mbps plan never matches `over500`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SpeedRange {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "under300")]
    Under300,
    #[serde(rename = "300to500")]
    From300To500,
    #[serde(rename = "over500")]
    Over500,
}

impl SpeedRange {
    /// Form-value representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Under300 => "under300",
            Self::From300To500 => "300to500",
            Self::Over500 => "over500",
        }
    }

    /// Parse a form value. Unknown values fall back to `All`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "under300" => Self::Under300,
            "300to500" => Self::From300To500,
            "over500" => Self::Over500,
            _ => Self::All,
        }
    }

    /// Whether `speed` (Mbps) falls inside this band.
    #[must_use]
    pub const fn contains(self, speed: u32) -> bool {
        match self {
            Self::All => true,
            Self::Under300 => speed < 300,
            Self::From300To500 => speed >= 300 && speed <= 500,
            Self::Over500 => speed > 500,
        }
    }
}

/// Provider narrowing: everything, or a single provider slug.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProviderFilter {
    #[default]
    All,
    Only(String),
}

impl ProviderFilter {
    /// Parse a form value. `"all"` (or empty) selects every provider.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "" | "all" => Self::All,
            slug => Self::Only(slug.to_string()),
        }
    }

    /// Form-value representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(slug) => slug,
        }
    }

    fn matches(&self, plan: &Plan) -> bool {
        match self {
            Self::All => true,
            Self::Only(slug) => *slug == plan.provider_slug,
        }
    }
}

/// The ephemeral filter state for one comparison widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlanFilters {
    pub speed_range: SpeedRange,
    pub provider: ProviderFilter,
    /// When set, only promotionally priced plans pass.
    pub promo: bool,
}

impl PlanFilters {
    /// Whether a plan passes every active predicate.
    #[must_use]
    pub fn matches(&self, plan: &Plan) -> bool {
        self.speed_range.contains(plan.speed)
            && (!self.promo || plan.promo)
            && self.provider.matches(plan)
    }

    /// Whether any filter deviates from the default "show everything" state.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Number of non-default filters, for the UI badge.
    #[must_use]
    pub fn active_count(&self) -> usize {
        usize::from(self.speed_range != SpeedRange::All)
            + usize::from(self.provider != ProviderFilter::All)
            + usize::from(self.promo)
    }
}

/// Return the ordered subset of `plans` matching `filters`.
///
/// Pure: the input slice is untouched and catalog order is preserved.
#[must_use]
pub fn filter_plans(plans: &[Plan], filters: &PlanFilters) -> Vec<Plan> {
    plans
        .iter()
        .filter(|plan| filters.matches(plan))
        .cloned()
        .collect()
}
