//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CHAPTER_TWO_DATA_DIR` - Directory for on-device state (default: .chapter-two)
//! - `CHAPTER_TWO_FEATURED_LIMIT` - Products shown in the featured listing (default: 8)
//! - `CHAPTER_TWO_AUTH_DELAY_MS` - Simulated login/signup latency (default: 1000)
//! - `CHAPTER_TWO_REVIEW_DELAY_MS` - Simulated review submission latency (default: 1000)
//! - `CHAPTER_TWO_NEWSLETTER_DELAY_MS` - Simulated newsletter latency (default: 1500)
//! - `CHAPTER_TWO_CONTACT_DELAY_MS` - Simulated contact form latency (default: 2000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".chapter-two";
const DEFAULT_FEATURED_LIMIT: usize = 8;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the on-device key-value files
    pub data_dir: PathBuf,
    /// Maximum products in the featured listing when a preference is set
    pub featured_limit: usize,
    /// Simulated backend latency
    pub latency: LatencyConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

/// Artificial delays standing in for network round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyConfig {
    pub auth: Duration,
    pub review: Duration,
    pub newsletter: Duration,
    pub contact: Duration,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            auth: Duration::from_millis(1000),
            review: Duration::from_millis(1000),
            newsletter: Duration::from_millis(1500),
            contact: Duration::from_millis(2000),
        }
    }
}

impl LatencyConfig {
    /// No delays at all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            auth: Duration::ZERO,
            review: Duration::ZERO,
            newsletter: Duration::ZERO,
            contact: Duration::ZERO,
        }
    }

    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            auth: get_millis("CHAPTER_TWO_AUTH_DELAY_MS", defaults.auth)?,
            review: get_millis("CHAPTER_TWO_REVIEW_DELAY_MS", defaults.review)?,
            newsletter: get_millis("CHAPTER_TWO_NEWSLETTER_DELAY_MS", defaults.newsletter)?,
            contact: get_millis("CHAPTER_TWO_CONTACT_DELAY_MS", defaults.contact)?,
        })
    }
}

impl StorefrontConfig {
    /// Default configuration storing state under `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            featured_limit: DEFAULT_FEATURED_LIMIT,
            latency: LatencyConfig::default(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    /// Replace the simulated latency.
    #[must_use]
    pub fn with_latency(mut self, latency: LatencyConfig) -> Self {
        self.latency = latency;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("CHAPTER_TWO_DATA_DIR", DEFAULT_DATA_DIR));
        let featured_limit = get_env_or_default(
            "CHAPTER_TWO_FEATURED_LIMIT",
            &DEFAULT_FEATURED_LIMIT.to_string(),
        )
        .parse::<usize>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("CHAPTER_TWO_FEATURED_LIMIT".to_string(), e.to_string())
        })?;

        Ok(Self {
            data_dir,
            featured_limit,
            latency: LatencyConfig::from_env()?,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating blank as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a millisecond duration, falling back to `default` when unset.
fn get_millis(key: &str, default: Duration) -> Result<Duration, ConfigError> {
    get_optional_env(key).map_or(Ok(default), |raw| parse_millis(key, &raw))
}

fn parse_millis(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::new("/tmp/c2");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/c2"));
        assert_eq!(config.featured_limit, 8);
        assert_eq!(config.latency.auth, Duration::from_millis(1000));
        assert_eq!(config.latency.newsletter, Duration::from_millis(1500));
        assert_eq!(config.latency.contact, Duration::from_millis(2000));
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_with_latency_none() {
        let config = StorefrontConfig::new("data").with_latency(LatencyConfig::none());
        assert_eq!(config.latency.review, Duration::ZERO);
    }

    #[test]
    fn test_parse_millis() {
        assert_eq!(
            parse_millis("X", " 250 ").unwrap(),
            Duration::from_millis(250)
        );

        let err = parse_millis("CHAPTER_TWO_AUTH_DELAY_MS", "soon").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "CHAPTER_TWO_AUTH_DELAY_MS"));
    }
}
