//! Plan and provider records plus the compiled-in catalog.
//!
//! The catalog is static configuration: it is constructed once at startup,
//! never mutated, and shared read-only by every page that renders plans.
//! Prices are example promotional rates, not live offers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::zip::{ZipCode, ZipError};

/// Number of plans returned by the availability stub.
pub const AVAILABILITY_RESULT_LIMIT: usize = 4;

/// One example service offering shown to the end user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Unique catalog identifier.
    pub id: u32,
    /// Display name of the offering company.
    pub provider: String,
    /// Lowercase key correlating to a [`Provider`] record.
    pub provider_slug: String,
    /// Plan/tier name.
    pub name: String,
    /// Download speed in Mbps. Always positive.
    pub speed: u32,
    /// Monthly price in US dollars for the example promotional period.
    pub price: Decimal,
    /// Free-text price qualifier, e.g. "for 12 months".
    pub price_note: String,
    /// Short feature strings, in rendering order.
    pub features: Vec<String>,
    /// Contract terms description.
    pub contract: String,
    /// Whether the plan carries promotional (time-limited) pricing.
    pub promo: bool,
}

/// Static brand metadata for an offering company.
///
/// Display-only: the colors feed inline styling on provider landing pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Lowercase key matching [`Plan::provider_slug`].
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Brand color (hex).
    pub color: String,
    /// Brand color variant for dark surfaces (hex).
    pub color_dark: String,
}

/// The read-only catalog of example plans and providers.
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
    providers: Vec<Provider>,
}

impl PlanCatalog {
    /// Build a catalog from explicit records.
    ///
    /// Used by tests and by any host that wants to supply its own data;
    /// production uses [`PlanCatalog::builtin`].
    #[must_use]
    pub const fn new(plans: Vec<Plan>, providers: Vec<Provider>) -> Self {
        Self { plans, providers }
    }

    /// All plans, in catalog order.
    #[must_use]
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// All providers, in display order.
    #[must_use]
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Look up a provider by slug.
    #[must_use]
    pub fn provider(&self, slug: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.slug == slug)
    }

    /// Plans offered by one provider, in catalog order.
    pub fn plans_for_provider<'a>(&'a self, slug: &'a str) -> impl Iterator<Item = &'a Plan> {
        self.plans.iter().filter(move |p| p.provider_slug == slug)
    }

    /// Plans flagged with promotional pricing, in catalog order.
    pub fn promo_plans(&self) -> impl Iterator<Item = &Plan> {
        self.plans.iter().filter(|p| p.promo)
    }

    /// Example plans "available" at the given ZIP code.
    ///
    /// Placeholder behavior: once the input validates, the result is a
    /// fixed-size prefix of the catalog and does not depend on the ZIP.
    /// A real deployment would swap in an address-level availability lookup
    /// behind the same signature.
    ///
    /// # Errors
    ///
    /// Returns [`ZipError::InvalidFormat`] when the input is not a 5-digit
    /// ZIP or ZIP+4.
    pub fn search_by_zip(&self, zip: &str) -> Result<Vec<Plan>, ZipError> {
        let _zip = ZipCode::parse(zip)?;
        Ok(self
            .plans
            .iter()
            .take(AVAILABILITY_RESULT_LIMIT)
            .cloned()
            .collect())
    }

    /// The compiled-in production catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            plans: builtin_plans(),
            providers: builtin_providers(),
        }
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Dollars-and-cents literal helper for the static data below.
fn usd(cents: i64) -> Decimal {
    Decimal::from_i128_with_scale(cents as i128, 2)
}

fn builtin_providers() -> Vec<Provider> {
    vec![
        Provider {
            slug: "verizon".to_string(),
            name: "Verizon".to_string(),
            color: "#cd040b".to_string(),
            color_dark: "#ff5a5f".to_string(),
        },
        Provider {
            slug: "spectrum".to_string(),
            name: "Spectrum".to_string(),
            color: "#0076ce".to_string(),
            color_dark: "#4da3e8".to_string(),
        },
        Provider {
            slug: "att".to_string(),
            name: "AT&T".to_string(),
            color: "#00a8e0".to_string(),
            color_dark: "#5fc8ef".to_string(),
        },
        Provider {
            slug: "optimum".to_string(),
            name: "Optimum".to_string(),
            color: "#f47920".to_string(),
            color_dark: "#ff9d57".to_string(),
        },
    ]
}

#[allow(clippy::too_many_lines)]
fn builtin_plans() -> Vec<Plan> {
    vec![
        Plan {
            id: 1,
            provider: "Verizon".to_string(),
            provider_slug: "verizon".to_string(),
            name: "Fios 300".to_string(),
            speed: 300,
            price: usd(49_99),
            price_note: "for 12 months w/ Auto Pay".to_string(),
            features: vec![
                "Symmetrical upload speeds".to_string(),
                "No data caps".to_string(),
                "Router rental included".to_string(),
            ],
            contract: "No annual contract required".to_string(),
            promo: true,
        },
        Plan {
            id: 2,
            provider: "Verizon".to_string(),
            provider_slug: "verizon".to_string(),
            name: "Fios 500".to_string(),
            speed: 500,
            price: usd(69_99),
            price_note: "for 12 months w/ Auto Pay".to_string(),
            features: vec![
                "Symmetrical upload speeds".to_string(),
                "No data caps".to_string(),
                "Whole-home Wi-Fi option".to_string(),
            ],
            contract: "No annual contract required".to_string(),
            promo: false,
        },
        Plan {
            id: 3,
            provider: "Verizon".to_string(),
            provider_slug: "verizon".to_string(),
            name: "Fios Gigabit".to_string(),
            speed: 940,
            price: usd(89_99),
            price_note: "for 24 months w/ Auto Pay".to_string(),
            features: vec![
                "Up to 940 Mbps down / 880 Mbps up".to_string(),
                "No data caps".to_string(),
                "Streaming perks may be available".to_string(),
            ],
            contract: "No annual contract required".to_string(),
            promo: true,
        },
        Plan {
            id: 4,
            provider: "Spectrum".to_string(),
            provider_slug: "spectrum".to_string(),
            name: "Internet".to_string(),
            speed: 300,
            price: usd(49_99),
            price_note: "for 12 months".to_string(),
            features: vec![
                "Free modem".to_string(),
                "No data caps".to_string(),
                "Antivirus software included".to_string(),
            ],
            contract: "No contract - month to month".to_string(),
            promo: true,
        },
        Plan {
            id: 5,
            provider: "Spectrum".to_string(),
            provider_slug: "spectrum".to_string(),
            name: "Internet Ultra".to_string(),
            speed: 500,
            price: usd(69_99),
            price_note: "for 12 months".to_string(),
            features: vec![
                "Free modem".to_string(),
                "No data caps".to_string(),
                "Good for streaming on multiple devices".to_string(),
            ],
            contract: "No contract - month to month".to_string(),
            promo: false,
        },
        Plan {
            id: 6,
            provider: "Spectrum".to_string(),
            provider_slug: "spectrum".to_string(),
            name: "Internet Gig".to_string(),
            speed: 1000,
            price: usd(89_99),
            price_note: "for 12 months".to_string(),
            features: vec![
                "Free modem".to_string(),
                "No data caps".to_string(),
                "TV and mobile bundles available".to_string(),
            ],
            contract: "No contract - month to month".to_string(),
            promo: false,
        },
        Plan {
            id: 7,
            provider: "AT&T".to_string(),
            provider_slug: "att".to_string(),
            name: "Internet 300".to_string(),
            speed: 300,
            price: usd(55_00),
            price_note: "plus taxes w/ Auto Pay".to_string(),
            features: vec![
                "AT&T Fiber where available".to_string(),
                "Unlimited data".to_string(),
                "ActiveArmor security included".to_string(),
            ],
            contract: "No annual contract".to_string(),
            promo: false,
        },
        Plan {
            id: 8,
            provider: "AT&T".to_string(),
            provider_slug: "att".to_string(),
            name: "Fiber 500".to_string(),
            speed: 500,
            price: usd(65_00),
            price_note: "plus taxes w/ Auto Pay".to_string(),
            features: vec![
                "Symmetrical fiber speeds".to_string(),
                "Unlimited data".to_string(),
                "Wi-Fi gateway included".to_string(),
            ],
            contract: "No annual contract".to_string(),
            promo: true,
        },
        Plan {
            id: 9,
            provider: "AT&T".to_string(),
            provider_slug: "att".to_string(),
            name: "Fiber 1000".to_string(),
            speed: 1000,
            price: usd(80_00),
            price_note: "plus taxes w/ Auto Pay".to_string(),
            features: vec![
                "Symmetrical gig speeds".to_string(),
                "Unlimited data".to_string(),
                "HBO Max promo may be available".to_string(),
            ],
            contract: "No annual contract".to_string(),
            promo: false,
        },
        Plan {
            id: 10,
            provider: "Optimum".to_string(),
            provider_slug: "optimum".to_string(),
            name: "300 Mbps Internet".to_string(),
            speed: 300,
            price: usd(40_00),
            price_note: "for 12 months w/ Auto Pay".to_string(),
            features: vec![
                "Free installation online".to_string(),
                "No data caps".to_string(),
                "Gateway included".to_string(),
            ],
            contract: "No annual contract".to_string(),
            promo: true,
        },
        Plan {
            id: 11,
            provider: "Optimum".to_string(),
            provider_slug: "optimum".to_string(),
            name: "500 Mbps Internet".to_string(),
            speed: 500,
            price: usd(60_00),
            price_note: "for 12 months w/ Auto Pay".to_string(),
            features: vec![
                "Free installation online".to_string(),
                "No data caps".to_string(),
                "Smart Wi-Fi included".to_string(),
            ],
            contract: "No annual contract".to_string(),
            promo: false,
        },
        Plan {
            id: 12,
            provider: "Optimum".to_string(),
            provider_slug: "optimum".to_string(),
            name: "1 Gig Internet".to_string(),
            speed: 940,
            price: usd(70_00),
            price_note: "for 12 months w/ Auto Pay".to_string(),
            features: vec![
                "Fiber where available".to_string(),
                "No data caps".to_string(),
                "TV bundles available".to_string(),
            ],
            contract: "No annual contract".to_string(),
            promo: false,
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn builtin_plans_satisfy_invariants() {
        let catalog = PlanCatalog::builtin();
        assert!(!catalog.plans().is_empty());
        for plan in catalog.plans() {
            assert!(plan.speed > 0, "plan {} has non-positive speed", plan.id);
            assert!(
                plan.price > Decimal::ZERO,
                "plan {} has non-positive price",
                plan.id
            );
            assert!(
                catalog.provider(&plan.provider_slug).is_some(),
                "plan {} references unknown provider {}",
                plan.id,
                plan.provider_slug
            );
        }
    }

    #[test]
    fn builtin_plan_ids_are_unique() {
        let catalog = PlanCatalog::builtin();
        let mut ids: Vec<u32> = catalog.plans().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.plans().len());
    }

    #[test]
    fn provider_lookup_by_slug() {
        let catalog = PlanCatalog::builtin();
        assert_eq!(catalog.provider("verizon").unwrap().name, "Verizon");
        assert!(catalog.provider("comcast").is_none());
    }

    #[test]
    fn plans_for_provider_preserves_catalog_order() {
        let catalog = PlanCatalog::builtin();
        let speeds: Vec<u32> = catalog.plans_for_provider("verizon").map(|p| p.speed).collect();
        assert_eq!(speeds, vec![300, 500, 940]);
    }

    #[test]
    fn search_by_zip_returns_fixed_prefix() {
        let catalog = PlanCatalog::builtin();
        let plans = catalog.search_by_zip("12345").unwrap();
        assert_eq!(plans.len(), AVAILABILITY_RESULT_LIMIT);
        assert_eq!(plans[0].id, catalog.plans()[0].id);
    }

    #[test]
    fn search_by_zip_accepts_zip_plus_four() {
        let catalog = PlanCatalog::builtin();
        assert!(catalog.search_by_zip("12345-6789").is_ok());
    }

    #[test]
    fn search_by_zip_rejects_malformed_input() {
        let catalog = PlanCatalog::builtin();
        assert_eq!(catalog.search_by_zip("1234"), Err(ZipError::InvalidFormat));
        assert_eq!(catalog.search_by_zip("abcde"), Err(ZipError::InvalidFormat));
    }

    #[test]
    fn plan_serializes_price_as_string() {
        let plan = PlanCatalog::builtin().plans()[0].clone();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["price"], serde_json::json!("49.99"));
    }
}
