//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum_test::TestServer;

use pet_adoption::config::{DatabaseSettings, SecuritySettings, ServerSettings, Settings};
use pet_adoption::domain::PetRepository;
use pet_adoption::infrastructure::repositories::InMemoryPetRepository;
use pet_adoption::startup::{build_router, AppState};

/// 64-byte signing secret for tests
pub const TEST_SECRET: &str = "test-secret-test-secret-test-secret-test-secret-test-secret-0123";

/// Settings pointing nowhere; tests never open a database connection.
pub fn test_settings(csrf_enabled: bool) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "postgres://localhost/pets_test".into(),
            max_connections: 1,
            min_connections: 0,
            acquire_timeout: 1,
            run_migrations: false,
            log_statements: false,
        },
        security: SecuritySettings {
            secret_key: TEST_SECRET.into(),
            csrf_enabled,
        },
        environment: "test".into(),
    }
}

/// Test server wired to the given pet store.
pub fn server_for(pets: Arc<dyn PetRepository>, csrf_enabled: bool) -> TestServer {
    let state = AppState::new(pets, test_settings(csrf_enabled)).expect("valid test state");
    TestServer::new(build_router(state)).expect("failed to start test server")
}

/// Test application backed by in-memory storage
pub struct TestApp {
    pub server: TestServer,
    pub pets: Arc<InMemoryPetRepository>,
}

impl TestApp {
    /// Application with CSRF protection off, so forms can be posted directly
    pub fn new() -> Self {
        Self::build(false)
    }

    /// Application with CSRF protection on
    pub fn with_csrf() -> Self {
        Self::build(true)
    }

    fn build(csrf_enabled: bool) -> Self {
        let pets = Arc::new(InMemoryPetRepository::new());
        let server = server_for(pets.clone(), csrf_enabled);
        Self { server, pets }
    }
}

/// Pull the hidden CSRF token out of a rendered intake form.
pub fn extract_csrf_token(html: &str) -> Option<String> {
    let marker = "name=\"csrf_token\" value=\"";
    let start = html.find(marker)? + marker.len();
    let end = html[start..].find('"')? + start;
    Some(html[start..end].to_string())
}
