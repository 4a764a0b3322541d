//! Note record as owned by the external note store.
//!
//! # Responsibility
//! - Mirror the store's note shape so collections can be passed in as
//!   read-only snapshots.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `title` is the display title that wiki links resolve against.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one note.
pub type NoteId = Uuid;

/// Note snapshot handed to the engine by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    /// Display title. Wiki links match against the current value.
    pub title: String,
    /// Raw note body containing the link/image micro-syntax.
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub folder: Option<String>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds.
    pub updated_at: i64,
}

impl Note {
    /// Creates a note with a generated id and zeroed timestamps.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, content)
    }

    /// Creates a note with a caller-provided id.
    ///
    /// Used when the identity already exists in the store.
    pub fn with_id(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            color: None,
            folder: None,
            created_at: 0,
            updated_at: 0,
        }
    }
}
