//! Enriched place entity

use serde::{Deserialize, Serialize};

use super::PlaceStub;

/// Placeholder for places whose details carry no phone number
pub const UNKNOWN_PHONE: &str = "unknown";

/// A place stub merged with its details lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedPlace {
    /// The stub this place was built from
    pub stub: PlaceStub,
    /// Formatted phone number, or [`UNKNOWN_PHONE`]
    pub phone: String,
    /// Preferred address: the detailed one, else the stub's fallback
    pub address: String,
}

impl EnrichedPlace {
    /// Merge a stub with the optional fields of a details lookup
    ///
    /// Blank strings are treated the same as absent fields.
    #[must_use]
    pub fn merge(stub: PlaceStub, phone: Option<String>, address: Option<String>) -> Self {
        let phone = non_blank(phone).unwrap_or_else(|| UNKNOWN_PHONE.to_string());
        let address = non_blank(address).unwrap_or_else(|| stub.fallback_address.clone());
        Self {
            stub,
            phone,
            address,
        }
    }

    /// Provider place id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.stub.id
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
