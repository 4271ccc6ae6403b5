//! Places error types

use thiserror::Error;

/// Errors that can occur when talking to the Google Maps endpoints
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request failed or the API reported an unexpected status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the response, or expected fields were missing
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The lookup returned zero results
    #[error("Not found: {0}")]
    NotFound(String),

    /// Quota exhausted (`OVER_QUERY_LIMIT` or HTTP 429)
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// The API refused the request (`REQUEST_DENIED`, usually the key)
    #[error("Request denied: {0}")]
    RequestDenied(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}
