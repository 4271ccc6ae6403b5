//! Places service configuration

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the Google Maps Web Services client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    /// Base URL of the Maps API (endpoints are appended to it)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent with every request (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Response language (empty to let the API decide)
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_language() -> String {
    "ko".to_string()
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            language: default_language(),
        }
    }
}

impl PlacesConfig {
    /// Create a configuration suitable for testing against a mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Some(SecretString::from("test-key".to_string())),
            timeout_secs: 5,
            language: String::new(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.api_key.is_none() {
            return Err("api_key must be set".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlacesConfig::default();
        assert_eq!(config.base_url, "https://maps.googleapis.com/maps/api");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.language, "ko");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_testing_config_is_valid() {
        let config = PlacesConfig::for_testing("http://127.0.0.1:9999");
        assert!(config.validate().is_ok());
        assert!(config.language.is_empty());
    }

    #[test]
    fn test_validation_missing_key() {
        let config = PlacesConfig::default();
        assert_eq!(config.validate().unwrap_err(), "api_key must be set");
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = PlacesConfig {
            timeout_secs: 0,
            ..PlacesConfig::for_testing("http://localhost")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = PlacesConfig::for_testing("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_key_never_serialized() {
        let config = PlacesConfig::for_testing("http://localhost");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("test-key"));
        assert!(!json.contains("api_key"));

        let debug = format!("{config:?}");
        assert!(!debug.contains("test-key"));
    }

    #[test]
    fn test_deserialize_with_key() {
        let config: PlacesConfig =
            serde_json::from_str(r#"{ "api_key": "abc", "language": "en" }"#).unwrap();
        assert!(config.api_key.is_some());
        assert_eq!(config.language, "en");
        assert_eq!(config.timeout_secs, 10);
    }
}
