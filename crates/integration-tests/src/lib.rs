//! Integration tests for InternetOne.
//!
//! The tests drive the full application router in-process with
//! [`tower::ServiceExt::oneshot`], so no server, network, or external state
//! is required. Each test builds a fresh app with the compiled-in catalog
//! and the real markdown content directory.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p internetone-integration-tests
//! ```

use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use internetone_site::config::SiteConfig;
use internetone_site::state::AppState;

/// Build the application exactly as `main` does, minus the Sentry layers,
/// with zero availability-lookup latency.
///
/// # Panics
///
/// Panics if the site content directory cannot be loaded.
#[must_use]
pub fn test_app() -> Router {
    let content_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../site/content");
    let config = SiteConfig::for_tests(content_dir);
    let state = AppState::new(config).expect("Failed to build test application state");
    internetone_site::app(state)
}

/// Send a GET request to the app.
///
/// # Panics
///
/// Panics if the request cannot be constructed or the service fails.
pub async fn get(app: &Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("Failed to build request");
    app.clone()
        .oneshot(request)
        .await
        .expect("Request to test app failed")
}

/// Send a GET request with a `Cookie` header.
///
/// # Panics
///
/// Panics if the request cannot be constructed or the service fails.
pub async fn get_with_cookie(app: &Router, path: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(path)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .expect("Failed to build request");
    app.clone()
        .oneshot(request)
        .await
        .expect("Request to test app failed")
}

/// Send an urlencoded form POST to the app.
///
/// # Panics
///
/// Panics if the request cannot be constructed or the service fails.
pub async fn post_form(app: &Router, path: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    app.clone()
        .oneshot(request)
        .await
        .expect("Request to test app failed")
}

/// Read a response body to a string.
///
/// # Panics
///
/// Panics if the body cannot be collected or is not UTF-8.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("Response body was not UTF-8")
}
