//! InternetOne Core - Plan catalog domain library.
//!
//! This crate owns the static catalog of example internet/TV plans and the
//! operations the site runs over it: filtering, stable sorting, sort-control
//! toggling, and ZIP-code validation for the availability search.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no timers. The catalog is compiled in and read-only for the lifetime of
//! the process; every operation returns a new value and leaves its inputs
//! untouched. The only fallible operation is the ZIP search, whose failure
//! mode is a value ([`ZipError::InvalidFormat`]), never a panic.
//!
//! # Modules
//!
//! - [`catalog`] - `Plan`, `Provider`, and the compiled-in `PlanCatalog`
//! - [`filter`] - `PlanFilters` and the speed/provider/promo predicates
//! - [`sort`] - Stable plan sorting and the sort-control state toggle
//! - [`zip`] - Validated ZIP code newtype

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod filter;
pub mod sort;
pub mod zip;

pub use catalog::{AVAILABILITY_RESULT_LIMIT, Plan, PlanCatalog, Provider};
pub use filter::{PlanFilters, ProviderFilter, SpeedRange, filter_plans};
pub use sort::{SortDirection, SortKey, sort_plans, toggle_sort};
pub use zip::{ZipCode, ZipError};
