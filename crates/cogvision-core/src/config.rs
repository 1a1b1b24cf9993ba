//! Endpoint and credential configuration.
//!
//! Credentials come from the `COMPUTER_VISION_SUBSCRIPTION_KEY` and
//! `COMPUTER_VISION_ENDPOINT` environment variables, or are built
//! explicitly and handed to [`crate::VisionClient`].

use std::fmt;
use std::time::Duration;

use reqwest::header::HeaderValue;
use url::Url;

use crate::error::{VisionError, VisionResult};

/// Environment variable holding the subscription key.
pub const KEY_ENV: &str = "COMPUTER_VISION_SUBSCRIPTION_KEY";

/// Environment variable holding the endpoint base URL.
pub const ENDPOINT_ENV: &str = "COMPUTER_VISION_ENDPOINT";

/// Header carrying the subscription key on every request.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Credentials and transport settings for the Vision API.
#[derive(Clone)]
pub struct VisionConfig {
    endpoint: String,
    subscription_key: String,
    timeout: Option<Duration>,
}

impl VisionConfig {
    /// Create a config from an endpoint base URL and a subscription key.
    pub fn new(endpoint: &str, subscription_key: &str) -> Self {
        Self {
            endpoint: endpoint.trim().trim_end_matches('/').to_string(),
            subscription_key: subscription_key.trim().to_string(),
            timeout: None,
        }
    }

    /// Read the config from `COMPUTER_VISION_ENDPOINT` and
    /// `COMPUTER_VISION_SUBSCRIPTION_KEY`.
    pub fn from_env() -> VisionResult<Self> {
        let endpoint = read_env(ENDPOINT_ENV)?;
        let key = read_env(KEY_ENV)?;
        let config = Self::new(&endpoint, &key);
        config.validate()?;
        Ok(config)
    }

    /// Set a request timeout. Without one the HTTP client default applies.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Check that the key is present and the endpoint is an absolute http(s) URL.
    pub fn validate(&self) -> VisionResult<()> {
        if self.subscription_key.is_empty() {
            return Err(VisionError::config("subscription key is empty"));
        }
        if HeaderValue::from_str(&self.subscription_key).is_err() {
            return Err(VisionError::config(
                "subscription key contains characters not allowed in an HTTP header",
            ));
        }

        let parsed = Url::parse(&self.endpoint).map_err(|e| {
            VisionError::config(format!("endpoint '{}' is not a valid URL: {}", self.endpoint, e))
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(VisionError::config(format!(
                "endpoint scheme must be http or https, got '{}'",
                other
            ))),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn subscription_key(&self) -> &str {
        &self.subscription_key
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for VisionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisionConfig")
            .field("endpoint", &self.endpoint)
            .field("subscription_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn read_env(name: &str) -> VisionResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(VisionError::config(format!(
            "{} environment variable not set",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = VisionConfig::new("https://westus.api.cognitive.microsoft.com/", "K");
        assert_eq!(config.endpoint(), "https://westus.api.cognitive.microsoft.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_key_rejected() {
        let config = VisionConfig::new("https://api.example.com", "  ");
        assert!(matches!(config.validate(), Err(VisionError::Config(_))));
    }

    #[test]
    fn test_key_must_be_header_safe() {
        let config = VisionConfig::new("https://api.example.com", "bad\u{7f}key");
        assert!(matches!(config.validate(), Err(VisionError::Config(_))));

        let config = VisionConfig::new("https://api.example.com", "bad\nkey");
        assert!(matches!(config.validate(), Err(VisionError::Config(_))));
    }

    #[test]
    fn test_bad_endpoint_rejected() {
        assert!(VisionConfig::new("api.example.com", "K").validate().is_err());
        assert!(VisionConfig::new("ftp://api.example.com", "K").validate().is_err());
    }

    #[test]
    fn test_from_env() {
        std::env::set_var(ENDPOINT_ENV, "https://api.example.com/");
        std::env::set_var(KEY_ENV, "K");
        let config = VisionConfig::from_env().unwrap();
        assert_eq!(config.endpoint(), "https://api.example.com");
        assert_eq!(config.subscription_key(), "K");

        std::env::remove_var(KEY_ENV);
        let err = VisionConfig::from_env().unwrap_err();
        assert!(err.to_string().contains(KEY_ENV));
        std::env::remove_var(ENDPOINT_ENV);
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = VisionConfig::new("https://api.example.com", "super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
