//! Internet + TV bundle page, grouped by provider.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::filters;
use crate::state::AppState;

use super::views::{PlanView, ProviderView};

/// One provider's bundle section.
pub struct ProviderSection {
    pub provider: ProviderView,
    pub plans: Vec<PlanView>,
}

/// Bundles page template.
#[derive(Template, WebTemplate)]
#[template(path = "bundles.html")]
pub struct BundlesTemplate {
    pub sections: Vec<ProviderSection>,
    pub phone: String,
    pub phone_raw: String,
}

/// Display the bundles page.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog();
    let sections = catalog
        .providers()
        .iter()
        .map(|provider| ProviderSection {
            provider: ProviderView::from(provider),
            plans: catalog
                .plans_for_provider(&provider.slug)
                .map(|plan| PlanView::from_plan(plan, catalog))
                .collect(),
        })
        .collect();

    BundlesTemplate {
        sections,
        phone: state.config().contact_phone.clone(),
        phone_raw: state.config().contact_phone_raw(),
    }
}
