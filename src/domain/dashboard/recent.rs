//! Recent check-ins shown under the charts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::checkin::{Entry, Note, Tag, TagSet};
use crate::domain::foundation::Timestamp;

/// Characters of a note shown before it is cut.
pub const NOTE_PREVIEW_CHARS: usize = 120;

/// A past check-in as listed by the persistence service.
///
/// Mood is kept as the raw string; the list only displays it. Tags outside
/// the vocabulary are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEntry {
    pub id: Option<String>,
    pub mood: String,
    pub intensity: Option<i64>,
    pub note: Note,
    pub tags: TagSet,
    pub at: Option<Timestamp>,
}

impl RecentEntry {
    /// Reads one listed entry leniently. Anything that is not an object is skipped.
    pub fn from_json(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let id = obj.get("id").and_then(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
        let words: Vec<&str> = obj
            .get("tags")
            .and_then(Value::as_array)
            .map(|arr| arr.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        Some(Self {
            id,
            mood: obj
                .get("mood")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            intensity: obj.get("intensity").and_then(Value::as_i64),
            note: Note::new(obj.get("note").and_then(Value::as_str).unwrap_or_default()),
            tags: TagSet::from_words(&words),
            at: obj
                .get("at")
                .and_then(Value::as_str)
                .and_then(Timestamp::parse_rfc3339),
        })
    }

    /// Note shortened for the list, `None` when there is no journal text.
    pub fn note_preview(&self) -> Option<String> {
        self.note.preview(NOTE_PREVIEW_CHARS)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        Tag::parse(tag).is_ok_and(|t| self.tags.contains(t))
    }
}

impl From<&Entry> for RecentEntry {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id().map(|id| id.to_string()),
            mood: entry.mood().id().to_string(),
            intensity: Some(entry.intensity().value() as i64),
            note: entry.note().clone(),
            tags: entry.tags().clone(),
            at: Some(entry.at()),
        }
    }
}

/// Recent entries in the order the service returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecentEntries(Vec<RecentEntry>);

impl RecentEntries {
    pub fn new(entries: Vec<RecentEntry>) -> Self {
        Self(entries)
    }

    /// Reads `{entries: [...]}`; a missing or malformed list is empty.
    pub fn from_json(value: &Value) -> Self {
        let entries = value
            .get("entries")
            .and_then(Value::as_array)
            .map(|arr| arr.iter().filter_map(RecentEntry::from_json).collect())
            .unwrap_or_default();
        Self(entries)
    }

    /// Entries carrying `tag`, or all of them when no tag is selected.
    pub fn filter_by_tag(&self, tag: Option<&str>) -> Vec<&RecentEntry> {
        match tag {
            None => self.0.iter().collect(),
            Some(tag) => self.0.iter().filter(|e| e.has_tag(tag)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecentEntry> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<RecentEntry> {
        self.0
    }
}

impl From<Vec<RecentEntry>> for RecentEntries {
    fn from(entries: Vec<RecentEntry>) -> Self {
        Self(entries)
    }
}
