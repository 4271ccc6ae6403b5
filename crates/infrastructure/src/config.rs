//! Application configuration

use std::{path::Path, time::Duration};

use application::SearchSettings;
use domain::value_objects::Coordinate;
use integration_places::PlacesConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::LoggingConfig;

/// Prefix of environment overrides (e.g. `CLINICMAP_PLACES__API_KEY`)
pub const ENV_PREFIX: &str = "CLINICMAP";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Google Maps client configuration
    #[serde(default)]
    pub places: PlacesConfig,

    /// Search pipeline tunables
    #[serde(default)]
    pub search: SearchConfig,

    /// Startup position of the map
    #[serde(default)]
    pub location: LocationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Search pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Time budget of each lookup in seconds
    #[serde(default = "default_lookup_timeout_secs")]
    pub lookup_timeout_secs: u64,

    /// Maximum details lookups in flight per search
    #[serde(default = "default_max_concurrent_enrichments")]
    pub max_concurrent_enrichments: usize,
}

const fn default_lookup_timeout_secs() -> u64 {
    10
}

const fn default_max_concurrent_enrichments() -> usize {
    application::DEFAULT_MAX_CONCURRENT_ENRICHMENTS
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_secs: default_lookup_timeout_secs(),
            max_concurrent_enrichments: default_max_concurrent_enrichments(),
        }
    }
}

impl SearchConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a value is zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.lookup_timeout_secs == 0 {
            return Err("lookup_timeout_secs must be greater than 0".to_string());
        }
        if self.max_concurrent_enrichments == 0 {
            return Err("max_concurrent_enrichments must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Pipeline settings for the search service
    #[must_use]
    pub const fn settings(&self) -> SearchSettings {
        SearchSettings {
            lookup_timeout: Duration::from_secs(self.lookup_timeout_secs),
            max_concurrent_enrichments: self.max_concurrent_enrichments,
        }
    }
}

/// Last known device position, if configured
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Latitude in degrees
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Longitude in degrees
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl LocationConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if only one half of the pair is set or the pair is
    /// out of range.
    pub fn validate(&self) -> Result<(), String> {
        match (self.latitude, self.longitude) {
            (None, None) => Ok(()),
            (Some(lat), Some(lon)) => Coordinate::new(lat, lon)
                .map(|_| ())
                .map_err(|e| e.to_string()),
            _ => Err("latitude and longitude must be set together".to_string()),
        }
    }

    /// The configured position, if complete and valid
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::new(self.latitude?, self.longitude?).ok()
    }
}

impl AppConfig {
    /// Load configuration from defaults, a file, and the environment
    ///
    /// Without `path`, an optional `config.toml` in the working directory is
    /// read. An explicit `path` must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("places.timeout_secs", 10)?
            .set_default("search.lookup_timeout_secs", 10)?
            .set_default("logging.filter", "info")?
            .add_source(file)
            // Override with environment variables (e.g., CLINICMAP_PLACES__API_KEY)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first problem found, prefixed with its section.
    pub fn validate(&self) -> Result<(), String> {
        self.places
            .validate()
            .map_err(|e| format!("places: {e}"))?;
        self.search
            .validate()
            .map_err(|e| format!("search: {e}"))?;
        self.location
            .validate()
            .map_err(|e| format!("location: {e}"))?;
        self.logging
            .validate()
            .map_err(|e| format!("logging: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.search.lookup_timeout_secs, 10);
        assert_eq!(config.search.max_concurrent_enrichments, 20);
        assert!(config.location.coordinate().is_none());
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_default_config_needs_api_key() {
        let err = AppConfig::default().validate().unwrap_err();
        assert!(err.starts_with("places:"));
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
            [places]
            api_key = "file-key"
            language = "en"

            [search]
            lookup_timeout_secs = 3
            max_concurrent_enrichments = 5

            [location]
            latitude = 37.5547
            longitude = 126.9707

            [logging]
            format = "json"
            "#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert!(config.places.api_key.is_some());
        assert_eq!(config.places.language, "en");
        assert_eq!(
            config.places.base_url,
            "https://maps.googleapis.com/maps/api"
        );
        assert_eq!(config.search.settings().lookup_timeout, Duration::from_secs(3));
        assert_eq!(config.search.settings().max_concurrent_enrichments, 5);
        assert_eq!(
            config.location.coordinate(),
            Some(Coordinate::seoul_station())
        );
        assert_eq!(config.logging.format, crate::telemetry::LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/clinic-map.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_search_validation() {
        let config = SearchConfig {
            lookup_timeout_secs: 0,
            ..SearchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SearchConfig {
            max_concurrent_enrichments: 0,
            ..SearchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_location_validation() {
        let half = LocationConfig {
            latitude: Some(37.5),
            longitude: None,
        };
        assert!(half.validate().is_err());
        assert!(half.coordinate().is_none());

        let out_of_range = LocationConfig {
            latitude: Some(95.0),
            longitude: Some(0.0),
        };
        assert!(out_of_range.validate().is_err());

        assert!(LocationConfig::default().validate().is_ok());
    }
}
