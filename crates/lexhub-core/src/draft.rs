//! Draft types exchanged with the generative draft assistant.

use serde::{Deserialize, Serialize};

/// Free-text notes for the draft assistant: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftNotes(String);

impl DraftNotes {
    /// Returns `None` when the notes are empty after trimming.
    pub fn new(notes: &str) -> Option<Self> {
        let trimmed = notes.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A structured article draft. Every field is required on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
}
