//! # Pet Adoption Library
//!
//! A small adoption listing service:
//! - `GET /` lists every pet
//! - `GET /add` and `POST /add` serve and process the intake form
//! - PostgreSQL for persistent storage
//!
//! ## Architecture
//!
//! - **Domain Layer**: The `Pet` entity, `Species`, and the repository trait
//! - **Application Layer**: Directory service and the intake validation pipeline
//! - **Infrastructure Layer**: Database pool, repositories, metrics
//! - **Presentation Layer**: HTTP handlers, HTML views, signed cookies, middleware
//!
//! ## Module Structure
//!
//! ```text
//! pet_adoption/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, repository traits
//! +-- application/    Services and form DTOs
//! +-- infrastructure/ Database, repositories, metrics
//! +-- presentation/   HTTP routes, views, middleware
//! +-- shared/         Errors and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers and views
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
