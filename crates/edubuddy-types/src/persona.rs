//! Mentor personas.
//!
//! A persona selects the specialization section of the system prompt and the
//! set of quick actions available to the client. Maps to the CHECK constraint
//! in the SQLite schema:
//! `CHECK (persona IN ('code', 'stem', 'business', 'general'))`

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Mentor specialization selected per conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Programming mentor.
    Code,
    /// Science/technology/engineering/mathematics specialist.
    Stem,
    /// Business and management advisor.
    Business,
    /// Broad general-education mentor.
    General,
}

impl Persona {
    /// All personas, in catalog order.
    pub const ALL: [Persona; 4] = [
        Persona::Code,
        Persona::Stem,
        Persona::Business,
        Persona::General,
    ];
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Persona::Code => write!(f, "code"),
            Persona::Stem => write!(f, "stem"),
            Persona::Business => write!(f, "business"),
            Persona::General => write!(f, "general"),
        }
    }
}

impl FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "code" => Ok(Persona::Code),
            "stem" => Ok(Persona::Stem),
            "business" => Ok(Persona::Business),
            "general" => Ok(Persona::General),
            other => Err(format!("invalid persona: '{other}'")),
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Persona::General
    }
}
