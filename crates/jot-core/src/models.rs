//! Core data models for jot.
//!
//! These types are shared across all jot crates and represent the core
//! domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A persisted note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub archived: bool,
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: DateTime<Utc>,
}

/// Category tag for a note.
///
/// Stored as TEXT in the database; the CHECK constraint there mirrors this
/// enum, so both layers reject values outside the set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Work,
    Ideas,
    Shopping,
    #[default]
    Personal,
}

impl Category {
    /// The canonical string form, as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Ideas => "Ideas",
            Category::Shopping => "Shopping",
            Category::Personal => "Personal",
        }
    }

    /// All valid categories, for error messages and validation.
    pub fn all() -> &'static [Category] {
        &[
            Category::Work,
            Category::Ideas,
            Category::Shopping,
            Category::Personal,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Work" => Ok(Category::Work),
            "Ideas" => Ok(Category::Ideas),
            "Shopping" => Ok(Category::Shopping),
            "Personal" => Ok(Category::Personal),
            other => Err(Error::InvalidInput(format!(
                "Unknown category: {} (expected one of Work, Ideas, Shopping, Personal)",
                other
            ))),
        }
    }
}
