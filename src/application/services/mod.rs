//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **DirectoryService**: Lists stored pets and stores accepted ones
//! - **intake**: Validation pipeline and submission flow for the add-pet form

pub mod directory;
pub mod intake;

pub use directory::{DirectoryService, DirectoryServiceImpl};
pub use intake::{submit, validate_submission, CsrfPolicy, IntakeOutcome};
