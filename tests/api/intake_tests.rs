//! Intake Form API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use pet_adoption::domain::{PetRepository, Species};

use crate::common::{extract_csrf_token, TestApp};

#[tokio::test]
async fn test_add_form_renders_empty() {
    let app = TestApp::new();

    let response = app.server.get("/add").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let page = response.text();
    assert!(page.contains("<form method=\"POST\" action=\"/add\">"));
    assert!(page.contains("<option value=\"porcupine\">Porcupine</option>"));
    assert!(extract_csrf_token(&page).is_none());
}

#[tokio::test]
async fn test_valid_submission_creates_pet_and_redirects() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/add")
        .form(&[
            ("name", "Rex"),
            ("species", "dog"),
            ("image_url", ""),
            ("age", "3"),
            ("notes", ""),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
    assert!(response.maybe_cookie("flash").is_some());

    let pets = app.pets.list_all().await.unwrap();
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].name, "Rex");
    assert_eq!(pets[0].species, Species::Dog);
    assert_eq!(pets[0].photo_url, None);
    assert_eq!(pets[0].notes, None);
    assert_eq!(pets[0].age, 3);
    assert!(pets[0].available);
}

#[tokio::test]
async fn test_confirmation_shown_once_on_listing() {
    let app = TestApp::new();

    let created = app
        .server
        .post("/add")
        .form(&[("name", "Rex"), ("species", "dog"), ("age", "3")])
        .await;
    let flash = created.cookie("flash");

    let listing = app.server.get("/").add_cookie(flash).await;
    assert_eq!(listing.status_code(), StatusCode::OK);
    let page = listing.text();
    assert!(page.contains("Added Rex to pets list."));
    assert!(page.contains("<strong>Rex</strong>"));

    let cleared = listing.cookie("flash");
    assert_eq!(cleared.value(), "");
    assert!(cleared.max_age().is_some_and(|age| age.is_zero()));
    assert_eq!(cleared.path(), Some("/"));
}

#[tokio::test]
async fn test_listing_without_confirmation_sets_no_flash() {
    let app = TestApp::new();

    let listing = app.server.get("/").await;

    assert!(listing.maybe_cookie("flash").is_none());
    assert!(!listing.text().contains("class=\"flash\""));
}

#[tokio::test]
async fn test_photo_url_is_stored() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/add")
        .form(&[
            ("name", "Quill"),
            ("species", "porcupine"),
            ("image_url", "https://example.com/quill.jpg"),
            ("age", "1"),
            ("notes", "Prickly but friendly"),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    let pets = app.pets.list_all().await.unwrap();
    assert_eq!(
        pets[0].photo_url.as_deref(),
        Some("https://example.com/quill.jpg")
    );
    assert_eq!(pets[0].notes.as_deref(), Some("Prickly but friendly"));
}

#[tokio::test]
async fn test_missing_name_is_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/add")
        .form(&[("name", ""), ("species", "dog"), ("age", "3")])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let page = response.text();
    assert!(page.contains("This field is required."));
    assert!(page.contains("<option value=\"dog\" selected>Dog</option>"));
    assert!(page.contains("value=\"3\""));
    assert!(response.maybe_cookie("flash").is_none());
    assert!(app.pets.is_empty());
}

#[tokio::test]
async fn test_age_out_of_range_is_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/add")
        .form(&[("name", "Spike"), ("species", "dog"), ("age", "40")])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let page = response.text();
    assert!(page.contains("Number must be between 0 and 30."));
    assert!(page.contains("value=\"Spike\""));
    assert!(app.pets.is_empty());
}

#[tokio::test]
async fn test_unknown_species_is_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/add")
        .form(&[("name", "Pat"), ("species", "fish"), ("age", "2")])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Not a valid choice."));
    assert!(app.pets.is_empty());
}

#[tokio::test]
async fn test_malformed_image_url_is_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/add")
        .form(&[
            ("name", "Rex"),
            ("species", "dog"),
            ("image_url", "not a url"),
            ("age", "3"),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let page = response.text();
    assert!(page.contains("Invalid URL."));
    assert!(page.contains("value=\"not a url\""));
    assert!(app.pets.is_empty());
}

#[tokio::test]
async fn test_non_integer_age_is_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/add")
        .form(&[("name", "Rex"), ("species", "cat"), ("age", "three")])
        .await;

    assert!(response.text().contains("Not a valid integer value."));
    assert!(app.pets.is_empty());
}

#[tokio::test]
async fn test_submitted_text_is_escaped_on_redisplay() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/add")
        .form(&[("name", "<script>x</script>"), ("species", "fish"), ("age", "2")])
        .await;

    let page = response.text();
    assert!(!page.contains("<script>"));
    assert!(page.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn test_csrf_token_round_trip() {
    let app = TestApp::with_csrf();

    let form_page = app.server.get("/add").await;
    let token = extract_csrf_token(&form_page.text()).expect("form carries a csrf token");
    let csrf_cookie = form_page.cookie("csrf_token");

    let response = app
        .server
        .post("/add")
        .add_cookie(csrf_cookie)
        .form(&[
            ("name", "Rex"),
            ("species", "dog"),
            ("age", "3"),
            ("csrf_token", token.as_str()),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(app.pets.len(), 1);
}

#[tokio::test]
async fn test_missing_csrf_token_is_rejected() {
    let app = TestApp::with_csrf();

    let response = app
        .server
        .post("/add")
        .form(&[("name", "Rex"), ("species", "dog"), ("age", "3")])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("The CSRF token is missing."));
    assert!(app.pets.is_empty());
}

#[tokio::test]
async fn test_forged_csrf_token_is_rejected() {
    let app = TestApp::with_csrf();

    let form_page = app.server.get("/add").await;
    let csrf_cookie = form_page.cookie("csrf_token");

    let response = app
        .server
        .post("/add")
        .add_cookie(csrf_cookie)
        .form(&[
            ("name", "Rex"),
            ("species", "dog"),
            ("age", "3"),
            ("csrf_token", "forged"),
        ])
        .await;

    assert!(response.text().contains("The CSRF tokens do not match."));
    assert!(app.pets.is_empty());
}
