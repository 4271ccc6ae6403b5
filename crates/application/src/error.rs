//! Application-level errors

use thiserror::Error;

/// Failure of a single provider lookup (geocode, nearby search, or details)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Network unreachable, non-2xx status, or request refused by the provider
    #[error("Transport error: {0}")]
    Transport(String),

    /// The lookup did not finish within its time budget
    #[error("Lookup timed out after {timeout_ms} ms")]
    Timeout {
        /// The elapsed budget in milliseconds
        timeout_ms: u64,
    },

    /// Expected fields missing from the provider response
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The provider returned zero results
    #[error("No results for '{0}'")]
    NotFound(String),
}

impl LookupError {
    /// Whether this failure belongs to the transport class
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout { .. })
    }
}

/// Errors surfaced once per search to the UI boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Search text was empty
    #[error("Please enter a place name")]
    EmptyQuery,

    /// The search text could not be resolved to a coordinate
    #[error("Could not locate the place: {0}")]
    Geocoding(#[source] LookupError),

    /// Looking up clinics around the coordinate failed
    #[error("Clinic search failed: {0}")]
    NearbySearch(#[source] LookupError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// The lookup failure behind this error, if any
    #[must_use]
    pub const fn lookup(&self) -> Option<&LookupError> {
        match self {
            Self::Geocoding(e) | Self::NearbySearch(e) => Some(e),
            Self::EmptyQuery | Self::Configuration(_) => None,
        }
    }
}
