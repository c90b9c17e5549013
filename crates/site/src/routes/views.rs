//! Display data passed to templates.
//!
//! Prices and brand colors are resolved here so templates only ever see
//! pre-formatted strings.

use internetone_core::{Plan, PlanCatalog, Provider};

/// Plan display data for templates.
#[derive(Debug, Clone)]
pub struct PlanView {
    pub id: u32,
    pub provider: String,
    pub provider_slug: String,
    pub name: String,
    pub speed: u32,
    /// Pre-formatted dollar amount, e.g. "49.99".
    pub price: String,
    pub price_note: String,
    pub features: Vec<String>,
    pub contract: String,
    pub promo: bool,
    /// Provider brand color for inline badges.
    pub color: String,
    /// Single-letter badge initial.
    pub initial: String,
}

/// Provider display data for templates.
#[derive(Debug, Clone)]
pub struct ProviderView {
    pub slug: String,
    pub name: String,
    pub color: String,
    pub color_dark: String,
}

/// Fallback badge color for plans whose provider record is missing.
const NEUTRAL_COLOR: &str = "#64748b";

impl PlanView {
    /// Build a view for one plan, resolving the brand color from the catalog.
    #[must_use]
    pub fn from_plan(plan: &Plan, catalog: &PlanCatalog) -> Self {
        let color = catalog
            .provider(&plan.provider_slug)
            .map_or_else(|| NEUTRAL_COLOR.to_string(), |p| p.color.clone());

        Self {
            id: plan.id,
            provider: plan.provider.clone(),
            provider_slug: plan.provider_slug.clone(),
            name: plan.name.clone(),
            speed: plan.speed,
            price: format!("{:.2}", plan.price),
            price_note: plan.price_note.clone(),
            features: plan.features.clone(),
            contract: plan.contract.clone(),
            promo: plan.promo,
            color,
            initial: plan.provider.chars().next().unwrap_or('?').to_string(),
        }
    }
}

impl From<&Provider> for ProviderView {
    fn from(provider: &Provider) -> Self {
        Self {
            slug: provider.slug.clone(),
            name: provider.name.clone(),
            color: provider.color.clone(),
            color_dark: provider.color_dark.clone(),
        }
    }
}

/// Build views for a list of plans.
#[must_use]
pub fn plan_views(plans: &[Plan], catalog: &PlanCatalog) -> Vec<PlanView> {
    plans
        .iter()
        .map(|plan| PlanView::from_plan(plan, catalog))
        .collect()
}

/// Build views for every provider in the catalog.
#[must_use]
pub fn provider_views(catalog: &PlanCatalog) -> Vec<ProviderView> {
    catalog.providers().iter().map(ProviderView::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_formats_with_two_decimals() {
        let catalog = PlanCatalog::builtin();
        let views = plan_views(catalog.plans(), &catalog);
        assert_eq!(views[0].price, "49.99");
        assert!(views.iter().all(|v| v.price.contains('.')));
    }

    #[test]
    fn test_color_resolved_from_provider_record() {
        let catalog = PlanCatalog::builtin();
        let views = plan_views(catalog.plans(), &catalog);
        let verizon = views.iter().find(|v| v.provider_slug == "verizon");
        assert_eq!(verizon.map(|v| v.color.as_str()), Some("#cd040b"));
    }
}
