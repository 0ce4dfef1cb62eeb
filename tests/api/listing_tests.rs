//! Listing Page API Tests

use axum::http::StatusCode;

use pet_adoption::domain::{NewPet, PetRepository, Species};

use crate::common::TestApp;

fn new_pet(name: &str, species: Species, photo_url: Option<&str>) -> NewPet {
    NewPet {
        name: name.to_string(),
        species,
        photo_url: photo_url.map(str::to_string),
        age: 4,
        notes: None,
        available: true,
    }
}

#[tokio::test]
async fn test_empty_listing() {
    let app = TestApp::new();

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let page = response.text();
    assert!(page.contains("No pets yet."));
    assert!(page.contains("href=\"/add\""));
}

#[tokio::test]
async fn test_listing_shows_every_pet_in_order() {
    let app = TestApp::new();
    app.pets
        .create(&new_pet("Tom", Species::Cat, Some("https://example.com/tom.jpg")))
        .await
        .unwrap();
    app.pets
        .create(&new_pet("Quill", Species::Porcupine, None))
        .await
        .unwrap();

    let page = app.server.get("/").await.text();

    let tom = page.find("<strong>Tom</strong>").expect("Tom listed");
    let quill = page.find("<strong>Quill</strong>").expect("Quill listed");
    assert!(tom < quill);
    assert!(page.contains("src=\"https://example.com/tom.jpg\""));
    assert!(page.contains("Porcupine, age 4"));
}

#[tokio::test]
async fn test_listing_is_stable_between_reads() {
    let app = TestApp::new();
    app.pets
        .create(&new_pet("Rex", Species::Dog, None))
        .await
        .unwrap();

    let first = app.server.get("/").await.text();
    let second = app.server.get("/").await.text();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.server.get("/pets/1/edit").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.text().contains("Page not found"));
}

#[tokio::test]
async fn test_security_headers_present() {
    let app = TestApp::new();

    let response = app.server.get("/").await;

    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "DENY");
}
