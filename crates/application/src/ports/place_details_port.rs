//! Place details port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::LookupError;

/// Optional fields returned by a details lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceDetails {
    /// Formatted phone number
    pub phone: Option<String>,
    /// Formatted address
    pub address: Option<String>,
}

/// Port for per-place detail lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlaceDetailsPort: Send + Sync {
    /// Fetch phone and address for a place id
    async fn lookup(&self, place_id: &str) -> Result<PlaceDetails, LookupError>;
}
