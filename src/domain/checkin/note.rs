//! Free-text journal note attached to a check-in.

use serde::{Deserialize, Serialize};

/// Maximum note length in characters.
pub const MAX_NOTE_CHARS: usize = 2000;

/// Journal text, at most [`MAX_NOTE_CHARS`] characters.
///
/// Overlong input is truncated when it is typed, never at submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct Note(String);

impl Note {
    /// Creates a note, trimming whitespace and truncating to the limit.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        Self(trimmed.chars().take(MAX_NOTE_CHARS).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// True when nothing was journaled.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shortened form for list views: the first `limit` characters plus `...`.
    ///
    /// Returns `None` for an empty note.
    pub fn preview(&self, limit: usize) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        if self.char_count() <= limit {
            return Some(self.0.clone());
        }
        let head: String = self.0.chars().take(limit).collect();
        Some(format!("{head}..."))
    }
}

impl From<String> for Note {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Note {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
