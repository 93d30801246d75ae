//! Note domain model.
//!
//! # Invariants
//! - `id` is assigned by storage on insert and never changes afterwards.
//! - A persisted note always has both `title` and `description` (possibly
//!   empty strings).

use serde::{Deserialize, Serialize};

/// Storage-assigned row id of a note.
pub type NoteId = i64;

/// Full note as returned by id lookup and full listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub description: String,
}

/// List projection returned by keyword search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    pub id: NoteId,
    pub title: String,
}

impl Note {
    /// Projects this note to its list shape.
    pub fn summary(&self) -> NoteSummary {
        NoteSummary {
            id: self.id,
            title: self.title.clone(),
        }
    }
}

impl From<Note> for NoteSummary {
    fn from(value: Note) -> Self {
        Self {
            id: value.id,
            title: value.title,
        }
    }
}
