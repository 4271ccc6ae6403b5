//! Static location adapter - a device position fixed by configuration

use application::ports::LocationPort;
use async_trait::async_trait;
use domain::value_objects::Coordinate;

/// Location provider that always reports the same position, if any
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLocationProvider {
    position: Option<Coordinate>,
}

impl StaticLocationProvider {
    /// Provider reporting `position`
    #[must_use]
    pub const fn new(position: Option<Coordinate>) -> Self {
        Self { position }
    }

    /// Provider with no known position
    #[must_use]
    pub const fn unknown() -> Self {
        Self { position: None }
    }
}

#[async_trait]
impl LocationPort for StaticLocationProvider {
    async fn last_known_location(&self) -> Option<Coordinate> {
        self.position
    }
}
