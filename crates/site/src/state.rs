//! Application state shared across handlers.

use std::sync::Arc;

use internetone_core::PlanCatalog;

use crate::config::SiteConfig;
use crate::content::{ContentError, ContentStore};
use crate::services::AvailabilityService;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; everything inside is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    catalog: Arc<PlanCatalog>,
    content: ContentStore,
    availability: AvailabilityService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Loads the markdown content store from `config.content_dir` and wires
    /// the availability service over the compiled-in catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the content directory cannot be read.
    pub fn new(config: SiteConfig) -> Result<Self, ContentError> {
        let catalog = Arc::new(PlanCatalog::builtin());
        let content = ContentStore::load(&config.content_dir)?;
        let availability =
            AvailabilityService::new(Arc::clone(&catalog), config.availability_delay);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                content,
                availability,
            }),
        })
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the plan catalog.
    #[must_use]
    pub fn catalog(&self) -> &PlanCatalog {
        &self.inner.catalog
    }

    /// Get a reference to the markdown content store.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    /// Get a reference to the availability service.
    #[must_use]
    pub fn availability(&self) -> &AvailabilityService {
        &self.inner.availability
    }
}
