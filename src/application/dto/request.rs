//! Request DTOs
//!
//! Data structures for submitted form bodies.

use serde::{Deserialize, Serialize};

/// Raw "add pet" form submission.
///
/// Every field is kept as submitted text so a rejected form can be shown
/// again exactly as the user typed it. Missing fields deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AddPetForm {
    pub name: String,
    pub species: String,
    pub image_url: String,
    pub age: String,
    pub notes: String,
    pub csrf_token: String,
}

impl AddPetForm {
    /// Form field names in display order.
    pub const FIELDS: [&'static str; 6] =
        ["csrf_token", "name", "species", "image_url", "age", "notes"];
}
