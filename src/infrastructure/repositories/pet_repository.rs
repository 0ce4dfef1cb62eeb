//! Pet Repository Implementation
//!
//! PostgreSQL implementation of pet listing and intake storage.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{NewPet, Pet, PetRepository, Species};
use crate::shared::error::AppError;

/// Row shape of the `pets` table.
///
/// `species` is kept as text here and parsed when converting into [`Pet`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PetEntity {
    pub id: i32,
    pub name: String,
    pub species: String,
    pub photo_url: Option<String>,
    pub age: i32,
    pub notes: Option<String>,
    pub available: bool,
}

impl TryFrom<PetEntity> for Pet {
    type Error = AppError;

    fn try_from(row: PetEntity) -> Result<Self, Self::Error> {
        let species: Species = row
            .species
            .parse()
            .map_err(|e| AppError::Internal(format!("pet {}: {}", row.id, e)))?;

        Ok(Pet {
            id: row.id,
            name: row.name,
            species,
            photo_url: row.photo_url,
            age: row.age,
            notes: row.notes,
            available: row.available,
        })
    }
}

/// PostgreSQL implementation of the PetRepository.
pub struct PgPetRepository {
    pool: PgPool,
}

impl PgPetRepository {
    /// Creates a new PgPetRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PetRepository for PgPetRepository {
    /// Returns pets ordered by id, which is insertion order.
    async fn list_all(&self) -> Result<Vec<Pet>, AppError> {
        let rows = sqlx::query_as::<_, PetEntity>(
            r#"
            SELECT id, name, species, photo_url, age, notes, available
            FROM pets
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Pet::try_from).collect()
    }

    /// Single autocommitted insert.
    async fn create(&self, pet: &NewPet) -> Result<Pet, AppError> {
        let row = sqlx::query_as::<_, PetEntity>(
            r#"
            INSERT INTO pets (name, species, photo_url, age, notes, available)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, species, photo_url, age, notes, available
            "#,
        )
        .bind(&pet.name)
        .bind(pet.species.as_str())
        .bind(&pet.photo_url)
        .bind(pet.age)
        .bind(&pet.notes)
        .bind(pet.available)
        .fetch_one(&self.pool)
        .await?;

        Pet::try_from(row)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
