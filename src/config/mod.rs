//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__, plus DATABASE_URL and SECRET_KEY)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! Settings are loaded once in `main` and handed to `Application::build`;
//! nothing reads configuration from global state afterwards.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pet_adoption::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Server will listen on {}", settings.server_addr());
//! ```

mod settings;

pub use settings::*;
