//! Pet entity and repository trait.
//!
//! Maps to the `pets` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Species;
use crate::shared::error::AppError;

/// Youngest age the shelter records.
pub const MIN_AGE: i32 = 0;

/// Oldest age the shelter records.
pub const MAX_AGE: i32 = 30;

/// A pet listed for adoption.
///
/// Maps to the `pets` table:
/// - id: SERIAL PRIMARY KEY
/// - name: TEXT NOT NULL
/// - species: TEXT NOT NULL (dog, cat, porcupine)
/// - photo_url: TEXT NULL
/// - age: INTEGER NOT NULL (0-30)
/// - notes: TEXT NULL
/// - available: BOOLEAN NOT NULL DEFAULT TRUE
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Storage-assigned identifier
    pub id: i32,

    pub name: String,

    pub species: Species,

    /// Absolute URL of a photo, None when not provided
    pub photo_url: Option<String>,

    /// Age in years
    pub age: i32,

    pub notes: Option<String>,

    /// Whether the pet can still be adopted
    pub available: bool,
}

/// A validated pet that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    pub species: Species,
    pub photo_url: Option<String>,
    pub age: i32,
    pub notes: Option<String>,
    pub available: bool,
}

impl NewPet {
    /// Attach the identifier chosen by storage.
    pub fn into_pet(self, id: i32) -> Pet {
        Pet {
            id,
            name: self.name,
            species: self.species,
            photo_url: self.photo_url,
            age: self.age,
            notes: self.notes,
            available: self.available,
        }
    }
}

/// Repository trait for Pet data access operations.
///
/// Records are only ever inserted and read back; there is no update or delete.
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// All stored pets in storage order.
    async fn list_all(&self) -> Result<Vec<Pet>, AppError>;

    /// Insert a pet and return it with its assigned id.
    async fn create(&self, pet: &NewPet) -> Result<Pet, AppError>;

    /// Cheap round trip used by the readiness probe.
    async fn health_check(&self) -> Result<(), AppError>;
}
