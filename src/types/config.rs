//! Client configuration

use std::fmt;
use std::time::Duration;

use url::Url;

use super::constants::DEFAULT_BASE_URL;

/// Configuration for a [`RacePayClient`](crate::RacePayClient)
///
/// Holds the merchant access token, the API endpoint, and an optional
/// request timeout. By default no timeout is installed: a hung network
/// call keeps the awaiting caller suspended until the transport gives up.
#[derive(Clone)]
pub struct ClientConfig {
    /// Merchant access token sent with every request
    pub access_token: String,
    /// Base URL of the API; remote method names are appended directly,
    /// so the URL must end with a path separator
    pub base_url: String,
    /// Request timeout, unset by default
    pub timeout: Option<Duration>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Create a config for the production endpoint
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.access_token.is_empty() {
            return Err(crate::RacePayError::config(
                "Access token must not be empty",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(crate::RacePayError::config(
                "Base URL must start with http:// or https://",
            ));
        }

        Url::parse(&self.base_url)
            .map_err(|e| crate::RacePayError::config(format!("Invalid base URL: {}", e)))?;

        Ok(())
    }

    /// Point the client at a different endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
