//! Integration tests for provider pages and the call-now popup dismissal.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use internetone_integration_tests::{body_string, get, get_with_cookie, test_app};
use tower::ServiceExt;

#[tokio::test]
async fn test_provider_page_renders_plans_and_popup() {
    let app = test_app();
    let response = get(&app, "/providers/verizon").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Verizon Plans"));
    assert!(body.contains("Fios 300"));
    assert!(body.contains("popup-overlay"));
    assert!(body.contains("/providers/verizon/popup/dismiss"));
}

#[tokio::test]
async fn test_unknown_provider_is_404() {
    let app = test_app();
    let response = get(&app, "/providers/comcast").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(&app, "/providers/comcast/popup/dismiss").await;
    // Route exists only for POST; GET falls through to method rejection.
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_dismissal_persists_for_the_session() {
    let app = test_app();

    // Dismiss the Verizon popup.
    let request = Request::builder()
        .method("POST")
        .uri("/providers/verizon/popup/dismiss")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/providers/verizon"
    );

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("dismissal must establish a session")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    // Same session: the popup stays hidden.
    let response = get_with_cookie(&app, "/providers/verizon", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(!body.contains("popup-overlay"));

    // The flag is keyed per provider, so other pages still show theirs.
    let response = get_with_cookie(&app, "/providers/spectrum", &cookie).await;
    let body = body_string(response).await;
    assert!(body.contains("popup-overlay"));

    // A fresh session (no cookie) sees the popup again.
    let body = body_string(get(&app, "/providers/verizon").await).await;
    assert!(body.contains("popup-overlay"));
}

#[tokio::test]
async fn test_dismissing_unknown_provider_is_404() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/providers/nowhere/popup/dismiss")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
