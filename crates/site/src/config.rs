//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults run a local instance.
//!
//! - `SITE_HOST` - Bind address (default: 127.0.0.1)
//! - `SITE_PORT` - Listen port (default: 3000)
//! - `SITE_BASE_URL` - Public URL (default: `http://localhost:3000`)
//! - `SITE_CONTENT_DIR` - Markdown content directory (default: crates/site/content)
//! - `CONTACT_PHONE` - Display phone number for call CTAs
//! - `AVAILABILITY_DELAY_MS` - Simulated availability-lookup latency (default: 1000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Directory holding markdown content pages
    pub content_dir: PathBuf,
    /// Display phone number for call CTAs, e.g. "(888) 524-0250"
    pub contact_phone: String,
    /// Simulated latency for the availability lookup stub
    pub availability_delay: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SITE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SITE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_PORT".to_string(), e.to_string()))?;

        let base_url = get_env_or_default("SITE_BASE_URL", "http://localhost:3000");
        Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_BASE_URL".to_string(), e.to_string()))?;

        let content_dir =
            PathBuf::from(get_env_or_default("SITE_CONTENT_DIR", "crates/site/content"));
        let contact_phone = get_env_or_default("CONTACT_PHONE", "(888) 524-0250");

        let delay_ms = get_env_or_default("AVAILABILITY_DELAY_MS", "1000")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("AVAILABILITY_DELAY_MS".to_string(), e.to_string())
            })?;

        Ok(Self {
            host,
            port,
            base_url,
            content_dir,
            contact_phone,
            availability_delay: Duration::from_millis(delay_ms),
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Configuration suitable for tests: loopback bind, no simulated latency.
    #[must_use]
    pub fn for_tests(content_dir: PathBuf) -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            base_url: "http://localhost:3000".to_string(),
            content_dir,
            contact_phone: "(888) 524-0250".to_string(),
            availability_delay: Duration::ZERO,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Phone number reduced to a `tel:` href payload (digits and `+` only).
    #[must_use]
    pub fn contact_phone_raw(&self) -> String {
        self.contact_phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect()
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
