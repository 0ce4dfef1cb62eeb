//! Repository Implementations
//!
//! Concrete implementations of the domain repository traits.
//!
//! - **PgPetRepository** - PostgreSQL storage for the `pets` table
//! - **InMemoryPetRepository** - process-local storage used by tests
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pet_adoption::domain::PetRepository;
//! use pet_adoption::infrastructure::repositories::PgPetRepository;
//!
//! let pets: Arc<dyn PetRepository> = Arc::new(PgPetRepository::new(pool));
//! ```

pub mod memory;
pub mod pet_repository;

pub use memory::InMemoryPetRepository;
pub use pet_repository::{PetEntity, PgPetRepository};
