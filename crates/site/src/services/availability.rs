//! Availability search over the plan catalog.
//!
//! Wraps the synchronous catalog stub in an async call with a configurable
//! simulated lookup latency, so the HTTP layer already has the shape a real
//! address-level availability service would have. Validation failures return
//! immediately; only successful lookups pay the delay. Cancellation is
//! dropping the future - axum drops the handler when the client goes away,
//! and a re-submitted search is simply a new, independent request.

use std::sync::Arc;
use std::time::Duration;

use internetone_core::{Plan, PlanCatalog, ZipError};
use tracing::instrument;

/// Async facade over [`PlanCatalog::search_by_zip`].
#[derive(Debug, Clone)]
pub struct AvailabilityService {
    catalog: Arc<PlanCatalog>,
    lookup_delay: Duration,
}

impl AvailabilityService {
    /// Create a service over a shared catalog.
    #[must_use]
    pub const fn new(catalog: Arc<PlanCatalog>, lookup_delay: Duration) -> Self {
        Self {
            catalog,
            lookup_delay,
        }
    }

    /// Look up example plans for a ZIP code.
    ///
    /// # Errors
    ///
    /// Returns [`ZipError::InvalidFormat`] for malformed input, without
    /// waiting out the simulated latency.
    #[instrument(skip(self))]
    pub async fn check(&self, zip: &str) -> Result<Vec<Plan>, ZipError> {
        let plans = self.catalog.search_by_zip(zip)?;

        if !self.lookup_delay.is_zero() {
            tokio::time::sleep(self.lookup_delay).await;
        }

        tracing::debug!(zip, results = plans.len(), "availability lookup served");
        Ok(plans)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use internetone_core::AVAILABILITY_RESULT_LIMIT;

    fn service() -> AvailabilityService {
        AvailabilityService::new(Arc::new(PlanCatalog::builtin()), Duration::ZERO)
    }

    #[tokio::test]
    async fn valid_zip_returns_plans() {
        let plans = service().check("12345").await.unwrap();
        assert_eq!(plans.len(), AVAILABILITY_RESULT_LIMIT);
    }

    #[tokio::test]
    async fn invalid_zip_fails_fast() {
        let service = AvailabilityService::new(
            Arc::new(PlanCatalog::builtin()),
            Duration::from_secs(3600),
        );
        // Must not wait out the hour-long delay for invalid input.
        let result = tokio::time::timeout(Duration::from_millis(100), service.check("nope"))
            .await
            .unwrap();
        assert_eq!(result, Err(ZipError::InvalidFormat));
    }

    #[tokio::test]
    async fn delay_is_awaited_for_valid_input() {
        tokio::time::pause();
        let service = AvailabilityService::new(
            Arc::new(PlanCatalog::builtin()),
            Duration::from_secs(1),
        );
        let start = tokio::time::Instant::now();
        service.check("90210").await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
