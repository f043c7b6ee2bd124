use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const BASE_URL_VAR: &str = "IQ_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "IQ_API_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where and how the candidate API is reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Read `IQ_API_BASE_URL` and `IQ_API_TIMEOUT_SECS`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as `from_env`, with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(BASE_URL_VAR) {
            config = config.with_base_url(raw)?;
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            config.timeout = parse_timeout_secs(TIMEOUT_VAR, &raw)?;
        }

        Ok(config)
    }

    /// Replace the base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Empty` for a blank value.
    pub fn with_base_url(mut self, raw: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Empty { var: BASE_URL_VAR });
        }
        self.base_url = trimmed.trim_end_matches('/').to_string();
        Ok(self)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL for an API path such as `/candidate/start`.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Parse a positive whole number of seconds.
///
/// # Errors
///
/// Returns `ConfigError::Invalid` for anything but a positive integer.
pub fn parse_timeout_secs(var: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Invalid {
            var,
            raw: raw.to_string(),
        }),
    }
}
