//! Integration tests for the static and content-backed pages.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use internetone_integration_tests::{body_string, get, test_app};

// ============================================================================
// Health & Home
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = test_app();
    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_home_page_lists_providers_and_deals() {
    let app = test_app();
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    for provider in ["Verizon", "Spectrum", "AT&amp;T", "Optimum"] {
        assert!(body.contains(provider), "home missing provider {provider}");
    }
    assert!(body.contains("Check Availability"));
    assert!(body.contains("Special Offer"));
}

// ============================================================================
// Informational pages
// ============================================================================

#[tokio::test]
async fn test_markdown_pages_render() {
    let app = test_app();
    for (path, needle) in [
        ("/about", "independent comparison"),
        ("/why-us", "Independent comparisons"),
        ("/privacy-policy", "session cookie"),
        ("/terms-and-conditions", "examples"),
        ("/disclosures", "compensation"),
        ("/accessibility", "assistive technologies"),
    ] {
        let response = get(&app, path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        let body = body_string(response).await;
        assert!(body.contains(needle), "{path} missing {needle:?}");
    }
}

#[tokio::test]
async fn test_faq_page_renders_all_categories() {
    let app = test_app();
    let response = get(&app, "/faq").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    for category in [
        "About Our Service",
        "Availability &amp; Pricing",
        "Internet Service",
        "TV Service",
        "Installation &amp; Setup",
        "Contracts &amp; Billing",
    ] {
        assert!(body.contains(category), "faq missing category {category}");
    }
    assert!(body.contains("What are data caps?"));
}

#[tokio::test]
async fn test_sitemap_links_every_section() {
    let app = test_app();
    let body = body_string(get(&app, "/sitemap").await).await;
    for href in [
        "/compare",
        "/deals",
        "/bundles",
        "/tv",
        "/providers/verizon",
        "/providers/optimum",
        "/privacy-policy",
        "/accessibility",
    ] {
        assert!(body.contains(href), "sitemap missing link {href}");
    }
}

#[tokio::test]
async fn test_tv_and_bundles_pages_render() {
    let app = test_app();
    for path in ["/tv", "/bundles", "/deals"] {
        let response = get(&app, path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }
}

// ============================================================================
// Errors & headers
// ============================================================================

#[tokio::test]
async fn test_unknown_path_is_404() {
    let app = test_app();
    let response = get(&app, "/no-such-page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_security_headers_present() {
    let app = test_app();
    let response = get(&app, "/").await;
    let headers = response.headers();

    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert!(headers.contains_key("content-security-policy"));
    assert!(headers.contains_key("permissions-policy"));
}

#[tokio::test]
async fn test_request_id_header_is_echoed() {
    let app = test_app();
    let response = get(&app, "/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}
