//! Species accepted by the shelter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of species a pet record may carry.
///
/// Stored as lowercase text in the `pets.species` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Porcupine,
}

/// Returned when text does not name a known species.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown species: {0}")]
pub struct UnknownSpecies(pub String);

impl Species {
    /// Every species, in the order the intake form offers them.
    pub const ALL: [Species; 3] = [Species::Dog, Species::Cat, Species::Porcupine];

    /// Stored/submitted value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Porcupine => "porcupine",
        }
    }

    /// Human-facing label for the select box.
    pub fn label(&self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
            Species::Porcupine => "Porcupine",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = UnknownSpecies;

    /// Exact match on the stored value; the select box only submits these.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .into_iter()
            .find(|species| species.as_str() == s)
            .ok_or_else(|| UnknownSpecies(s.to_string()))
    }
}
