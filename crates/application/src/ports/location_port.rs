//! Device location port

use async_trait::async_trait;
use domain::value_objects::Coordinate;
#[cfg(test)]
use mockall::automock;

/// Port for the optional last known position of the user
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationPort: Send + Sync {
    /// Last known coordinate; `None` when unknown or not permitted
    async fn last_known_location(&self) -> Option<Coordinate>;
}
