//! Service objects owned by the application state.

pub mod availability;

pub use availability::AvailabilityService;
