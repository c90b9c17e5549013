//! Plan comparison table: filtering and sortable columns.
//!
//! All widget state travels in the query string, so every combination of
//! filters and sort order is a plain link and the page works without
//! client-side scripting. Column headers link to the toggled sort state for
//! that column.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use internetone_core::{
    PlanFilters, ProviderFilter, SortDirection, SortKey, SpeedRange, filter_plans, sort_plans,
    toggle_sort,
};

use crate::filters;
use crate::state::AppState;

use super::views::{PlanView, ProviderView, plan_views, provider_views};

/// Comparison table query parameters. Every field is optional; absent or
/// unrecognized values fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct CompareQuery {
    pub speed: Option<String>,
    pub provider: Option<String>,
    pub promo: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

/// Current form selections, echoed back into the filter controls.
pub struct Selection {
    pub speed: String,
    pub provider: String,
    pub promo: bool,
    pub sort: String,
    pub dir: String,
}

/// A sortable column header link.
pub struct SortColumn {
    pub label: String,
    /// Href preserving the current filters with the toggled sort state.
    pub href: String,
    pub active: bool,
    /// "asc" or "desc" when active, empty otherwise.
    pub direction: String,
}

/// Comparison page template.
#[derive(Template, WebTemplate)]
#[template(path = "compare.html")]
pub struct CompareTemplate {
    pub plans: Vec<PlanView>,
    pub providers: Vec<ProviderView>,
    pub selection: Selection,
    pub columns: Vec<SortColumn>,
    pub active_filter_count: usize,
    pub total_plans: usize,
}

impl CompareQuery {
    fn filters(&self) -> PlanFilters {
        PlanFilters {
            speed_range: SpeedRange::parse(self.speed.as_deref().unwrap_or("all")),
            provider: ProviderFilter::parse(self.provider.as_deref().unwrap_or("all")),
            promo: matches!(self.promo.as_deref(), Some("1" | "true" | "on")),
        }
    }

    fn sort(&self) -> (SortKey, SortDirection) {
        (
            SortKey::parse(self.sort.as_deref().unwrap_or("price")),
            SortDirection::parse(self.dir.as_deref().unwrap_or("asc")),
        )
    }
}

/// Display the comparison table.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> impl IntoResponse {
    let catalog = state.catalog();
    let filters = query.filters();
    let (key, direction) = query.sort();

    let matched = filter_plans(catalog.plans(), &filters);
    let sorted = sort_plans(&matched, key, direction);

    let selection = Selection {
        speed: filters.speed_range.as_str().to_string(),
        provider: filters.provider.as_str().to_string(),
        promo: filters.promo,
        sort: key.as_str().to_string(),
        dir: direction.as_str().to_string(),
    };
    let columns = sort_columns(&selection, key, direction);

    CompareTemplate {
        plans: plan_views(&sorted, catalog),
        providers: provider_views(catalog),
        selection,
        columns,
        active_filter_count: filters.active_count(),
        total_plans: catalog.plans().len(),
    }
}

/// Build the three sortable column headers. Each href carries the current
/// filters plus the sort state that clicking that column would produce.
fn sort_columns(
    selection: &Selection,
    current_key: SortKey,
    current_direction: SortDirection,
) -> Vec<SortColumn> {
    [
        (SortKey::Provider, "Provider"),
        (SortKey::Speed, "Speed"),
        (SortKey::Price, "Price"),
    ]
    .into_iter()
    .map(|(key, label)| {
        let (next_key, next_direction) = toggle_sort(current_key, current_direction, key);
        let active = key == current_key;
        SortColumn {
            label: label.to_string(),
            href: compare_href(selection, next_key, next_direction),
            active,
            direction: if active {
                current_direction.as_str().to_string()
            } else {
                String::new()
            },
        }
    })
    .collect()
}

/// Build a `/compare` href for the given filters and sort state.
///
/// Filter values are restricted to slugs and fixed tokens, so plain string
/// assembly is safe here.
fn compare_href(selection: &Selection, key: SortKey, direction: SortDirection) -> String {
    let mut href = format!(
        "/compare?speed={}&provider={}",
        selection.speed, selection.provider
    );
    if selection.promo {
        href.push_str("&promo=1");
    }
    href.push_str("&sort=");
    href.push_str(key.as_str());
    href.push_str("&dir=");
    href.push_str(direction.as_str());
    href
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> Selection {
        Selection {
            speed: "all".to_string(),
            provider: "all".to_string(),
            promo: false,
            sort: "price".to_string(),
            dir: "asc".to_string(),
        }
    }

    #[test]
    fn test_query_defaults_to_show_everything() {
        let query = CompareQuery::default();
        assert_eq!(query.filters(), PlanFilters::default());
        assert_eq!(query.sort(), (SortKey::Price, SortDirection::Asc));
    }

    #[test]
    fn test_unrecognized_values_fall_back_to_defaults() {
        let query = CompareQuery {
            speed: Some("warp10".to_string()),
            sort: Some("color".to_string()),
            dir: Some("sideways".to_string()),
            ..CompareQuery::default()
        };
        assert_eq!(query.filters().speed_range, SpeedRange::All);
        assert_eq!(query.sort(), (SortKey::Price, SortDirection::Asc));
    }

    #[test]
    fn test_active_column_links_to_flipped_direction() {
        let columns = sort_columns(&selection(), SortKey::Price, SortDirection::Asc);
        let price = columns.iter().find(|c| c.label == "Price").map(|c| &c.href);
        assert_eq!(
            price.map(String::as_str),
            Some("/compare?speed=all&provider=all&sort=price&dir=desc")
        );
    }

    #[test]
    fn test_inactive_column_links_to_ascending() {
        let columns = sort_columns(&selection(), SortKey::Price, SortDirection::Desc);
        let speed = columns.iter().find(|c| c.label == "Speed");
        assert!(speed.is_some_and(|c| !c.active && c.href.ends_with("sort=speed&dir=asc")));
    }

    #[test]
    fn test_href_carries_promo_flag() {
        let mut sel = selection();
        sel.promo = true;
        sel.provider = "att".to_string();
        let href = compare_href(&sel, SortKey::Speed, SortDirection::Asc);
        assert_eq!(href, "/compare?speed=all&provider=att&promo=1&sort=speed&dir=asc");
    }
}
