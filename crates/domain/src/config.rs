//! Client configuration

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{FlumeError, Result};

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://api.flumewater.com";

/// Transport timeout applied to every request unless configured otherwise
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings needed to talk to the Flume API
///
/// The client secret is never serialized and is redacted from `Debug`
/// output.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub client_id: String,
    #[serde(skip_serializing)]
    pub client_secret: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    /// Configuration for the production API with the given client
    /// credentials
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the API host (tests, staging)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Transport timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject configurations that cannot produce a working client.
    ///
    /// # Errors
    /// Returns `FlumeError::Config` when the base URL is blank or the
    /// timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(FlumeError::Config("base_url cannot be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(FlumeError::Config("timeout_secs must be greater than zero".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_when_fields_missing() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"client_id":"id","client_secret":"secret"}"#).unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_secret_never_serialized_or_printed() {
        let config = ClientConfig::new("id", "super-secret");

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));
        assert!(!format!("{config:?}").contains("super-secret"));
    }

    #[test]
    fn test_validate() {
        assert!(ClientConfig::new("id", "secret").validate().is_ok());

        let blank = ClientConfig::new("id", "secret").with_base_url("  ");
        assert!(matches!(blank.validate(), Err(FlumeError::Config(_))));

        let mut zero = ClientConfig::new("id", "secret");
        zero.timeout_secs = 0;
        assert!(matches!(zero.validate(), Err(FlumeError::Config(_))));
    }
}
