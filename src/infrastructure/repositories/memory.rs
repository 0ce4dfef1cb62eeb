//! In-memory pet storage for tests and local runs without PostgreSQL.

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{NewPet, Pet, PetRepository};
use crate::shared::error::AppError;

/// Keeps pets in insertion order and hands out ids starting at 1.
#[derive(Debug)]
pub struct InMemoryPetRepository {
    pets: RwLock<Vec<Pet>>,
    next_id: AtomicI32,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self {
            pets: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Number of stored pets.
    pub fn len(&self) -> usize {
        self.pets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.read().is_empty()
    }
}

impl Default for InMemoryPetRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn list_all(&self) -> Result<Vec<Pet>, AppError> {
        Ok(self.pets.read().clone())
    }

    async fn create(&self, pet: &NewPet) -> Result<Pet, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = pet.clone().into_pet(id);
        self.pets.write().push(stored.clone());
        Ok(stored)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
