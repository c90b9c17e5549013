//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Plans
//! GET  /compare                - Comparison table (filters and sort in query)
//! GET  /deals                  - Current promotional deals
//! GET  /bundles                - Internet + TV bundles by provider
//! GET  /tv                     - TV service landing page
//!
//! # Providers
//! GET  /providers/{slug}       - Provider landing page
//! POST /providers/{slug}/popup/dismiss - Dismiss call-now popup (session)
//!
//! # Availability (rate limited)
//! GET  /availability           - ZIP search form
//! POST /availability           - ZIP search submission
//!
//! # Contact (rate limited)
//! GET  /contact                - Contact page
//! POST /contact                - Contact form submission
//!
//! # Informational
//! GET  /faq                    - FAQ accordion
//! GET  /about                  - About page (markdown)
//! GET  /why-us                 - Why choose us (markdown)
//! GET  /privacy-policy         - Privacy policy (markdown)
//! GET  /terms-and-conditions   - Terms (markdown)
//! GET  /disclosures            - Compensation disclosures (markdown)
//! GET  /accessibility          - Accessibility statement (markdown)
//! GET  /sitemap                - Human-readable sitemap
//! ```

pub mod availability;
pub mod bundles;
pub mod compare;
pub mod contact;
pub mod deals;
pub mod faq;
pub mod home;
pub mod pages;
pub mod providers;
pub mod sitemap;
pub mod tv;
pub mod views;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::form_rate_limiter;
use crate::state::AppState;

/// Create the form routes router. These accept submissions and sit behind
/// the per-IP rate limiter.
pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/availability",
            get(availability::show).post(availability::check),
        )
        .route("/contact", get(contact::show).post(contact::submit))
        .route_layer(form_rate_limiter())
}

/// Create the provider routes router.
pub fn provider_routes() -> Router<AppState> {
    Router::new()
        .route("/{slug}", get(providers::show))
        .route("/{slug}/popup/dismiss", post(providers::dismiss_popup))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Plan pages
        .route("/compare", get(compare::index))
        .route("/deals", get(deals::index))
        .route("/bundles", get(bundles::index))
        .route("/tv", get(tv::index))
        // Provider routes
        .nest("/providers", provider_routes())
        // Informational pages
        .route("/faq", get(faq::index))
        .route("/about", get(pages::about))
        .route("/why-us", get(pages::why_us))
        .route("/privacy-policy", get(pages::privacy_policy))
        .route("/terms-and-conditions", get(pages::terms_and_conditions))
        .route("/disclosures", get(pages::disclosures))
        .route("/accessibility", get(pages::accessibility))
        .route("/sitemap", get(sitemap::index))
        // Form routes (rate limited)
        .merge(form_routes())
}
