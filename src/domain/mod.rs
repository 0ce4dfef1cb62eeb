//! # Domain Layer
//!
//! The domain layer contains the pet record and its storage contract.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: The `Pet` entity and `PetRepository` trait
//! - **value_objects**: Immutable value types (`Species`)

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
