//! # Domain Entities
//!
//! Core domain entities. All entities map directly to their corresponding
//! database tables.
//!
//! - **Pet**: an animal listed for adoption
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod pet;

pub use pet::{NewPet, Pet, PetRepository, MAX_AGE, MIN_AGE};
