//! Domain layer for the clinic map
//!
//! Contains the place records that flow through the search pipeline and the
//! value objects they are built from. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
