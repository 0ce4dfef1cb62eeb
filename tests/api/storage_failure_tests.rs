//! Storage Failure Tests
//!
//! A failing pet store must surface as a plain 500 with nothing stored and
//! no confirmation.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use mockall::mock;

use pet_adoption::domain::{NewPet, Pet, PetRepository};
use pet_adoption::shared::error::AppError;

use crate::common::server_for;

mock! {
    pub Pets {}

    #[async_trait]
    impl PetRepository for Pets {
        async fn list_all(&self) -> Result<Vec<Pet>, AppError>;
        async fn create(&self, pet: &NewPet) -> Result<Pet, AppError>;
        async fn health_check(&self) -> Result<(), AppError>;
    }
}

#[tokio::test]
async fn test_insert_failure_returns_server_error_without_flash() {
    let mut pets = MockPets::new();
    pets.expect_create()
        .times(1)
        .returning(|_| Err(AppError::Database(sqlx::Error::PoolTimedOut)));
    let server = server_for(Arc::new(pets), false);

    let response = server
        .post("/add")
        .form(&[("name", "Rex"), ("species", "dog"), ("age", "3")])
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("Internal server error"));
    assert!(response.maybe_cookie("flash").is_none());
}

#[tokio::test]
async fn test_invalid_submission_never_reaches_storage() {
    let mut pets = MockPets::new();
    pets.expect_create().never();
    let server = server_for(Arc::new(pets), false);

    let response = server
        .post("/add")
        .form(&[("name", "Spike"), ("species", "dog"), ("age", "40")])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_listing_failure_returns_server_error() {
    let mut pets = MockPets::new();
    pets.expect_list_all()
        .returning(|| Err(AppError::Database(sqlx::Error::PoolClosed)));
    let server = server_for(Arc::new(pets), false);

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_readiness_reports_unavailable_store() {
    let mut pets = MockPets::new();
    pets.expect_health_check()
        .returning(|| Err(AppError::Database(sqlx::Error::PoolTimedOut)));
    let server = server_for(Arc::new(pets), false);

    let response = server.get("/health/ready").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["checks"]["database"]["status"], "unhealthy");
}
