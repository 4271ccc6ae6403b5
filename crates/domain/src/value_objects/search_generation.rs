//! Search generation token

use std::fmt;

use serde::{Deserialize, Serialize};

/// Monotonic identifier of one user-initiated search
///
/// Results tagged with a generation other than the current one are stale and
/// must never reach the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchGeneration(u64);

impl SearchGeneration {
    /// The generation before any search has been submitted
    pub const INITIAL: Self = Self(0);

    /// The generation that follows this one
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Raw counter value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SearchGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
