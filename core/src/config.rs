//! Optional client configuration.
//!
//! Everything here has a default; a client built with `ClientConfig::default()`
//! talks to the production connector with no timeout.

use std::time::Duration;

use crate::error::ApiError;

/// Production connector endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.baselinker.com/connector.php";

pub const ENDPOINT_ENV: &str = "BASELINKER_ENDPOINT";
pub const TIMEOUT_ENV: &str = "BASELINKER_TIMEOUT_SECS";
pub const MAX_REPLY_BYTES_ENV: &str = "BASELINKER_MAX_REPLY_BYTES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    /// Whole-call timeout. `None` leaves the transport's default in place.
    pub timeout: Option<Duration>,
    pub user_agent: String,
    /// Cap on a reply body. `None` reads replies of any size.
    pub max_reply_bytes: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            user_agent: concat!("baselinker-core/", env!("CARGO_PKG_VERSION")).to_string(),
            max_reply_bytes: None,
        }
    }
}

impl ClientConfig {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn max_reply_bytes(mut self, limit: u64) -> Self {
        self.max_reply_bytes = Some(limit);
        self
    }

    /// Defaults overridden by `BASELINKER_ENDPOINT`,
    /// `BASELINKER_TIMEOUT_SECS` and `BASELINKER_MAX_REPLY_BYTES` when set.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let mut config = Self::default();
        if let Some(endpoint) = lookup(ENDPOINT_ENV) {
            config.endpoint = endpoint;
        }
        if let Some(secs) = lookup(TIMEOUT_ENV) {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| ApiError::Configuration(format!("{TIMEOUT_ENV} must be a whole number of seconds, got {secs:?}")))?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(bytes) = lookup(MAX_REPLY_BYTES_ENV) {
            let bytes: u64 = bytes
                .trim()
                .parse()
                .map_err(|_| ApiError::Configuration(format!("{MAX_REPLY_BYTES_ENV} must be a byte count, got {bytes:?}")))?;
            config.max_reply_bytes = Some(bytes);
        }
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<(), ApiError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ApiError::Configuration(format!(
                "endpoint must be an http(s) URL, got {:?}",
                self.endpoint
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("baselinker-core/"));
        assert!(config.max_reply_bytes.is_none());
    }

    #[test]
    fn lookup_overrides_defaults() {
        let config = ClientConfig::from_lookup(|key| match key {
            ENDPOINT_ENV => Some("http://127.0.0.1:3000/connector.php".to_string()),
            TIMEOUT_ENV => Some("5".to_string()),
            MAX_REPLY_BYTES_ENV => Some("1048576".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.endpoint, "http://127.0.0.1:3000/connector.php");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.max_reply_bytes, Some(1_048_576));
    }

    #[test]
    fn bad_timeout_is_a_configuration_error() {
        let err = ClientConfig::from_lookup(|key| (key == TIMEOUT_ENV).then(|| "soon".to_string())).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn bad_reply_limit_is_a_configuration_error() {
        let err = ClientConfig::from_lookup(|key| (key == MAX_REPLY_BYTES_ENV).then(|| "10MB".to_string())).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let config = ClientConfig::default().endpoint("ftp://example.com");
        assert!(matches!(config.validate(), Err(ApiError::Configuration(_))));
    }
}
