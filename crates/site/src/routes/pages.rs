//! Markdown-backed informational and legal pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::content::Page;
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Markdown page template.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub page: Page,
}

fn render(state: &AppState, slug: &str) -> Result<PageTemplate> {
    let page = state
        .content()
        .get_page(slug)
        .ok_or_else(|| AppError::NotFound(format!("page '{slug}'")))?
        .clone();
    Ok(PageTemplate { page })
}

pub async fn about(State(state): State<AppState>) -> Result<impl IntoResponse> {
    render(&state, "about")
}

pub async fn why_us(State(state): State<AppState>) -> Result<impl IntoResponse> {
    render(&state, "why-us")
}

pub async fn privacy_policy(State(state): State<AppState>) -> Result<impl IntoResponse> {
    render(&state, "privacy-policy")
}

pub async fn terms_and_conditions(State(state): State<AppState>) -> Result<impl IntoResponse> {
    render(&state, "terms-and-conditions")
}

pub async fn disclosures(State(state): State<AppState>) -> Result<impl IntoResponse> {
    render(&state, "disclosures")
}

pub async fn accessibility(State(state): State<AppState>) -> Result<impl IntoResponse> {
    render(&state, "accessibility")
}
