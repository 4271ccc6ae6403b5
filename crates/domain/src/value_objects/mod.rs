//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod search_generation;

pub use coordinate::Coordinate;
pub use search_generation::SearchGeneration;
