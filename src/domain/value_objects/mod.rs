//! # Value Objects
//!
//! Immutable value types used by the domain entities.

mod species;

pub use species::{Species, UnknownSpecies};
