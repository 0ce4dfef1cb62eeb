//! Pet Directory Service
//!
//! Serves the current set of pets and stores newly accepted ones.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{NewPet, Pet, PetRepository};
use crate::shared::error::AppError;

/// Directory service trait defining pet listing operations.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// All stored pets, in storage order. Read only.
    async fn list_all(&self) -> Result<Vec<Pet>, AppError>;

    /// Persist an accepted pet.
    async fn add(&self, pet: NewPet) -> Result<Pet, AppError>;
}

/// Directory service implementation.
///
/// Storage failures are not recovered here; they reach the caller unchanged.
pub struct DirectoryServiceImpl<R>
where
    R: PetRepository + ?Sized,
{
    pet_repo: Arc<R>,
}

impl<R> DirectoryServiceImpl<R>
where
    R: PetRepository + ?Sized,
{
    /// Create a new DirectoryServiceImpl.
    pub fn new(pet_repo: Arc<R>) -> Self {
        Self { pet_repo }
    }
}

#[async_trait]
impl<R> DirectoryService for DirectoryServiceImpl<R>
where
    R: PetRepository + ?Sized + 'static,
{
    async fn list_all(&self) -> Result<Vec<Pet>, AppError> {
        let pets = self.pet_repo.list_all().await?;
        tracing::debug!(count = pets.len(), "Listed pets");
        Ok(pets)
    }

    async fn add(&self, pet: NewPet) -> Result<Pet, AppError> {
        let created = self.pet_repo.create(&pet).await?;
        tracing::info!(
            pet_id = created.id,
            name = %created.name,
            species = %created.species,
            "Pet added"
        );
        Ok(created)
    }
}
