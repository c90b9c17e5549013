//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. The only session state
//! this site keeps is per-provider popup dismissal flags, which are meant to
//! last exactly one browsing session, so an in-memory store with inactivity
//! expiry is the whole persistence story.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::SiteConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "io_session";

/// Session expiry time in seconds (4 hours of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 4 * 60 * 60;

/// Session keys for UI state.
pub mod keys {
    /// Prefix for per-provider popup dismissal flags.
    /// Full key: `popup-dismissed-{provider_slug}`.
    pub const POPUP_DISMISSED_PREFIX: &str = "popup-dismissed-";

    /// Build the dismissal key for a provider slug.
    #[must_use]
    pub fn popup_dismissed(slug: &str) -> String {
        format!("{POPUP_DISMISSED_PREFIX}{slug}")
    }
}

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer(config: &SiteConfig) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    // Secure cookies when served over HTTPS
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_dismissed_key_shape() {
        assert_eq!(keys::popup_dismissed("verizon"), "popup-dismissed-verizon");
    }
}
