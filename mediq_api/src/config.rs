//! Static endpoint configuration, resolved once at process start.

use std::time::Duration;

use url::Url;

/// Default per-request timeout, matching the upstream gateway's own limit.
const DEFAULT_TIMEOUT_SECS: u64 = 100;

/// Errors raised while building an [`ApiConfig`] from the environment.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is absent.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    /// An environment variable is present but unusable.
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Base URL and timeout for the clinic API, validated up front.
///
/// Endpoint paths are never assembled from the environment per call; the
/// base URL is checked here once and every request builds on it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Reads `MEDIQ_API_URL` (required) and `MEDIQ_TIMEOUT_SECS` (optional)
    /// from the environment. Fails fast on a missing or unparsable base URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("MEDIQ_API_URL")
            .map_err(|_| ConfigError::Missing("MEDIQ_API_URL"))?;
        Url::parse(&base_url).map_err(|e| ConfigError::Invalid {
            var: "MEDIQ_API_URL",
            reason: e.to_string(),
        })?;

        let timeout = match std::env::var("MEDIQ_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                    var: "MEDIQ_TIMEOUT_SECS",
                    reason: e.to_string(),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Builds a config pointing at an arbitrary base URL with the default
    /// timeout. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
