//! Current deals page: the promotionally priced subset of the catalog.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::filters;
use crate::state::AppState;

use super::views::PlanView;

/// Deals page template.
#[derive(Template, WebTemplate)]
#[template(path = "deals.html")]
pub struct DealsTemplate {
    pub plans: Vec<PlanView>,
    pub phone: String,
    pub phone_raw: String,
}

/// Display the deals page.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog();
    let plans = catalog
        .promo_plans()
        .map(|plan| PlanView::from_plan(plan, catalog))
        .collect();

    DealsTemplate {
        plans,
        phone: state.config().contact_phone.clone(),
        phone_raw: state.config().contact_phone_raw(),
    }
}
