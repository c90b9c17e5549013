//! Stable plan sorting and the sort-control toggle.

use serde::{Deserialize, Serialize};

use crate::catalog::Plan;

/// Column the comparison table is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Price,
    Speed,
    Provider,
}

impl SortKey {
    /// Form-value representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Speed => "speed",
            Self::Provider => "provider",
        }
    }

    /// Parse a form value. Unknown values fall back to `Price`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "speed" => Self::Speed,
            "provider" => Self::Provider,
            _ => Self::Price,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Form-value representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Parse a form value. Unknown values fall back to `Asc`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Return a new list sorted by `key` in `direction`.
///
/// The sort is stable: plans comparing equal keep their input order, in both
/// directions (the comparator is reversed rather than the output, so ties
/// stay `Equal`). The input slice is untouched.
#[must_use]
pub fn sort_plans(plans: &[Plan], key: SortKey, direction: SortDirection) -> Vec<Plan> {
    let mut sorted = plans.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::Speed => a.speed.cmp(&b.speed),
            SortKey::Provider => a.provider.cmp(&b.provider),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Advance the sort-control state for a column click.
///
/// Clicking the active column flips the direction; clicking a new column
/// adopts it ascending.
#[must_use]
pub const fn toggle_sort(
    current_key: SortKey,
    current_direction: SortDirection,
    requested_key: SortKey,
) -> (SortKey, SortDirection) {
    if matches!(
        (current_key, requested_key),
        (SortKey::Price, SortKey::Price)
            | (SortKey::Speed, SortKey::Speed)
            | (SortKey::Provider, SortKey::Provider)
    ) {
        (current_key, current_direction.flipped())
    } else {
        (requested_key, SortDirection::Asc)
    }
}
