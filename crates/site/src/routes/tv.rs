//! TV service landing page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::filters;
use crate::state::AppState;

use super::views::{ProviderView, provider_views};

/// TV page template.
#[derive(Template, WebTemplate)]
#[template(path = "tv.html")]
pub struct TvTemplate {
    pub providers: Vec<ProviderView>,
    pub phone: String,
    pub phone_raw: String,
}

/// Display the TV landing page.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    TvTemplate {
        providers: provider_views(state.catalog()),
        phone: state.config().contact_phone.clone(),
        phone_raw: state.config().contact_phone_raw(),
    }
}
