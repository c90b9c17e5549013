//! Integration tests for the contact form.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use internetone_integration_tests::{body_string, get, post_form, test_app};

#[tokio::test]
async fn test_contact_page_renders_form_and_phone() {
    let app = test_app();
    let response = get(&app, "/contact").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("(888) 524-0250"));
    assert!(body.contains("tel:8885240250"));
    assert!(body.contains("name=\"message\""));
}

#[tokio::test]
async fn test_valid_submission_shows_confirmation() {
    let app = test_app();
    let response = post_form(
        &app,
        "/contact",
        "name=Jordan&email=jordan%40example.com&phone=&message=Which+plans+serve+Albany%3F",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Thanks for reaching out"));
    assert!(!body.contains("form-error"));
}

#[tokio::test]
async fn test_invalid_submission_re_renders_with_error_and_values() {
    let app = test_app();
    let response = post_form(
        &app,
        "/contact",
        "name=Jordan&email=not-an-email&phone=&message=Hello",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("valid email address"));
    // Entered values are echoed back so nothing is lost.
    assert!(body.contains("value=\"Jordan\""));
    assert!(body.contains("value=\"not-an-email\""));
    assert!(!body.contains("Thanks for reaching out"));
}

#[tokio::test]
async fn test_empty_submission_is_rejected() {
    let app = test_app();
    let response = post_form(&app, "/contact", "name=&email=&phone=&message=").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("form-error"));
}
