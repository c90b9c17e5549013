//! Provider landing pages and the call-now popup.
//!
//! Each provider page may show a one-time "call now" popup. Dismissal is a
//! plain form POST that sets a per-provider session flag and redirects back,
//! so the popup stays dismissed for the rest of the browsing session without
//! any client-side storage.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect};
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::session::keys;
use crate::state::AppState;

use super::views::{PlanView, ProviderView};

/// Provider landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "provider.html")]
pub struct ProviderTemplate {
    pub provider: ProviderView,
    pub plans: Vec<PlanView>,
    pub show_popup: bool,
    pub phone: String,
    pub phone_raw: String,
}

/// Display a provider landing page.
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    session: Session,
) -> Result<impl IntoResponse> {
    let catalog = state.catalog();
    let provider = catalog
        .provider(&slug)
        .ok_or_else(|| AppError::NotFound(format!("provider '{slug}'")))?;

    let dismissed: bool = session
        .get(&keys::popup_dismissed(&slug))
        .await?
        .unwrap_or(false);

    let plans = catalog
        .plans_for_provider(&slug)
        .map(|plan| PlanView::from_plan(plan, catalog))
        .collect();

    Ok(ProviderTemplate {
        provider: ProviderView::from(provider),
        plans,
        show_popup: !dismissed,
        phone: state.config().contact_phone.clone(),
        phone_raw: state.config().contact_phone_raw(),
    })
}

/// Dismiss the provider popup for the rest of the session.
pub async fn dismiss_popup(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    session: Session,
) -> Result<Redirect> {
    if state.catalog().provider(&slug).is_none() {
        return Err(AppError::NotFound(format!("provider '{slug}'")));
    }

    session.insert(&keys::popup_dismissed(&slug), true).await?;
    tracing::debug!(provider = %slug, "Popup dismissed");

    Ok(Redirect::to(&format!("/providers/{slug}")))
}
