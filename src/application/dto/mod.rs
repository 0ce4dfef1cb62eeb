//! Data Transfer Objects

pub mod request;

pub use request::AddPetForm;
