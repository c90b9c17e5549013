//! Integration tests for the comparison table: filters, sorting, and the
//! sort-toggle links.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use internetone_integration_tests::{body_string, get, test_app};

/// Slice the rendered page down to the table body, past the filter controls
/// (whose `<select>` options also name every provider).
fn table_rows(body: &str) -> &str {
    let start = body.find("<tbody>").expect("no table body rendered");
    &body[start..]
}

/// Positions at which the given needles appear in `haystack`, in order.
fn positions(haystack: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            haystack
                .find(needle)
                .unwrap_or_else(|| panic!("{needle:?} not rendered"))
        })
        .collect()
}

#[tokio::test]
async fn test_default_view_shows_all_plans_sorted_by_price() {
    let app = test_app();
    let response = get(&app, "/compare").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Showing 12 of 12 plans"));

    // Cheapest builtin plan is $40.00, most expensive $89.99.
    let rows = table_rows(&body);
    let found = positions(rows, &["$40.00", "$49.99", "$89.99"]);
    assert!(found[0] < found[1]);
    assert!(found[1] < found[2]);
}

#[tokio::test]
async fn test_price_desc_reverses_order() {
    let app = test_app();
    let body = body_string(get(&app, "/compare?sort=price&dir=desc").await).await;
    let found = positions(table_rows(&body), &["$89.99", "$40.00"]);
    assert!(found[0] < found[1]);
}

#[tokio::test]
async fn test_speed_band_filter_narrows_results() {
    let app = test_app();
    let body = body_string(get(&app, "/compare?speed=over500").await).await;

    // Only the gigabit-class plans pass the strict over-500 boundary.
    assert!(body.contains("Showing 4 of 12 plans"));
    let rows = table_rows(&body);
    assert!(rows.contains("940 Mbps"));
    assert!(rows.contains("1000 Mbps"));
    assert!(!rows.contains(">300 Mbps</td>"));
    assert!(!rows.contains(">500 Mbps</td>"));
    assert!(body.contains("1 active"));
}

#[tokio::test]
async fn test_provider_filter_keeps_single_provider() {
    let app = test_app();
    let body = body_string(get(&app, "/compare?provider=optimum").await).await;

    assert!(body.contains("Showing 3 of 12 plans"));
    let rows = table_rows(&body);
    assert!(rows.contains("Optimum"));
    assert!(!rows.contains("Fios"));
    assert!(!rows.contains("Spectrum"));
}

#[tokio::test]
async fn test_promo_filter_shows_offers_only() {
    let app = test_app();
    let body = body_string(get(&app, "/compare?promo=1").await).await;
    assert!(body.contains("Showing 5 of 12 plans"));
}

#[tokio::test]
async fn test_conflicting_filters_render_empty_state_not_error() {
    let app = test_app();
    let response = get(&app, "/compare?speed=under300").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("No plans match your filters"));
}

#[tokio::test]
async fn test_unknown_filter_values_fall_back_to_defaults() {
    let app = test_app();
    let body = body_string(get(&app, "/compare?speed=warp&sort=color&dir=up").await).await;
    assert!(body.contains("Showing 12 of 12 plans"));
}

#[tokio::test]
async fn test_active_column_link_toggles_direction() {
    let app = test_app();

    // Default state: price ascending, so the price header links to desc.
    let body = body_string(get(&app, "/compare").await).await;
    assert!(body.contains("sort=price&amp;dir=desc"));

    // Inactive columns link to ascending.
    assert!(body.contains("sort=speed&amp;dir=asc"));
    assert!(body.contains("sort=provider&amp;dir=asc"));
}

#[tokio::test]
async fn test_sort_links_preserve_filters() {
    let app = test_app();
    let body = body_string(get(&app, "/compare?provider=att&promo=1").await).await;
    assert!(body.contains("provider=att&amp;promo=1&amp;sort=speed&amp;dir=asc"));
}

#[tokio::test]
async fn test_provider_sort_is_lexicographic() {
    let app = test_app();
    let body = body_string(get(&app, "/compare?sort=provider&dir=asc").await).await;

    let rows = table_rows(&body);
    let found = positions(rows, &["AT&amp;T", "Optimum", "Spectrum", "Verizon"]);
    assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
}
