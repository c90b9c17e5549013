//! ZIP availability search.
//!
//! The search is a plain form POST: the page re-renders with either matched
//! plans, an empty-result notice, or a validation message. An invalid ZIP is
//! an expected outcome and renders as a 200 with an inline error, never as an
//! HTTP failure.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::filters;
use crate::state::AppState;

use super::views::{PlanView, plan_views};

/// Availability form payload.
#[derive(Debug, Deserialize)]
pub struct AvailabilityForm {
    pub zip: String,
}

/// Availability page template.
#[derive(Template, WebTemplate)]
#[template(path = "availability.html")]
pub struct AvailabilityTemplate {
    /// Echoed form value.
    pub zip: String,
    pub plans: Vec<PlanView>,
    pub error: Option<String>,
    /// Whether a search was submitted (distinguishes the blank form page).
    pub searched: bool,
    pub phone: String,
    pub phone_raw: String,
}

/// Display the blank availability search page.
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    AvailabilityTemplate {
        zip: String::new(),
        plans: Vec::new(),
        error: None,
        searched: false,
        phone: state.config().contact_phone.clone(),
        phone_raw: state.config().contact_phone_raw(),
    }
}

/// Handle an availability search submission.
pub async fn check(
    State(state): State<AppState>,
    Form(form): Form<AvailabilityForm>,
) -> impl IntoResponse {
    let zip = form.zip.trim().to_string();

    let (plans, error) = match state.availability().check(&zip).await {
        Ok(plans) => (plan_views(&plans, state.catalog()), None),
        Err(err) => {
            tracing::debug!(zip = %zip, "Rejected availability search: {err}");
            (Vec::new(), Some(err.to_string()))
        }
    };

    AvailabilityTemplate {
        zip,
        plans,
        error,
        searched: true,
        phone: state.config().contact_phone.clone(),
        phone_raw: state.config().contact_phone_raw(),
    }
}
