//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::filters;
use crate::state::AppState;

use super::views::{PlanView, ProviderView, provider_views};

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub featured_plans: Vec<PlanView>,
    pub providers: Vec<ProviderView>,
    pub phone: String,
    pub phone_raw: String,
}

/// Display the home page: hero with availability search, featured promo
/// deals, and the provider grid.
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog();
    let featured_plans = catalog
        .promo_plans()
        .map(|plan| PlanView::from_plan(plan, catalog))
        .collect();

    HomeTemplate {
        featured_plans,
        providers: provider_views(catalog),
        phone: state.config().contact_phone.clone(),
        phone_raw: state.config().contact_phone_raw(),
    }
}
