//! Check-in entry and the in-progress draft that produces it.
//!
//! A draft mirrors the check-in form: mood unset, intensity at the slider
//! midpoint, empty journal, no tags. Submitting the draft stamps it with the
//! anonymous user id and the submission instant, producing an [`Entry`].

use serde::{Deserialize, Serialize};

use super::{Intensity, Mood, Note, Tag, TagSet};
use crate::domain::foundation::{EntryId, Timestamp, UserId, ValidationError};

/// One check-in record.
///
/// # Invariants
///
/// - `mood` is always one of the five scale values
/// - `intensity` is always within 1-5
/// - `note` never exceeds 2000 characters
/// - `at` and `user_id` never change after construction
/// - `id` is absent until the persistence service acknowledges the entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<EntryId>,
    user_id: UserId,
    mood: Mood,
    intensity: Intensity,
    #[serde(default)]
    note: Note,
    #[serde(default)]
    tags: TagSet,
    at: Timestamp,
}

impl Entry {
    /// Creates an entry from already-validated parts.
    pub fn new(
        user_id: UserId,
        mood: Mood,
        intensity: Intensity,
        note: Note,
        tags: TagSet,
        at: Timestamp,
    ) -> Self {
        Self {
            id: None,
            user_id,
            mood,
            intensity,
            note,
            tags,
            at,
        }
    }

    /// Creates an entry from unvalidated input.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `UnknownValue` if `mood` is not one of the five moods
    ///
    /// Intensity outside 1-5 is clamped rather than rejected.
    pub fn from_raw(
        user_id: UserId,
        mood: &str,
        intensity: i64,
        note: &str,
        tags: &[&str],
        at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let mood = Mood::parse(mood)?;
        let tags = tags
            .iter()
            .map(|t| Tag::parse(t))
            .collect::<Result<TagSet, _>>()?;
        Ok(Self::new(
            user_id,
            mood,
            Intensity::clamped(intensity),
            Note::new(note),
            tags,
            at,
        ))
    }

    /// Returns a copy carrying the server-assigned id.
    pub fn with_id(mut self, id: EntryId) -> Self {
        self.id = Some(id);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> Option<&EntryId> {
        self.id.as_ref()
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn at(&self) -> Timestamp {
        self.at
    }

    /// True when the entry carries journal text.
    pub fn has_journal(&self) -> bool {
        !self.note.is_empty()
    }
}

/// The check-in form before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    mood: Option<Mood>,
    intensity: Intensity,
    note: Note,
    tags: TagSet,
}

impl EntryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_mood(&mut self, mood: Mood) -> &mut Self {
        self.mood = Some(mood);
        self
    }

    /// Sets intensity from slider input, clamping to range.
    pub fn set_intensity(&mut self, value: i64) -> &mut Self {
        self.intensity = Intensity::clamped(value);
        self
    }

    /// Replaces the journal text; overlong input is cut at the limit.
    pub fn set_note(&mut self, text: impl Into<String>) -> &mut Self {
        self.note = Note::new(text);
        self
    }

    pub fn toggle_tag(&mut self, tag: Tag) -> &mut Self {
        self.tags.toggle(tag);
        self
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Whether the submit action is enabled.
    pub fn is_submittable(&self) -> bool {
        self.mood.is_some()
    }

    /// Turns the draft into an entry stamped with user and instant.
    ///
    /// # Errors
    ///
    /// - `EmptyField("mood")` if no mood was chosen
    pub fn submit(&self, user_id: UserId, at: Timestamp) -> Result<Entry, ValidationError> {
        let mood = self.mood.ok_or_else(|| ValidationError::empty_field("mood"))?;
        Ok(Entry::new(
            user_id,
            mood,
            self.intensity,
            self.note.clone(),
            self.tags.clone(),
            at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn user() -> UserId {
        UserId::new("anon-1").unwrap()
    }

    #[test]
    fn draft_starts_unsubmittable_with_default_intensity() {
        let draft = EntryDraft::new();
        assert!(!draft.is_submittable());
        assert_eq!(draft.intensity().value(), 3);
        assert!(draft.note().is_empty());
        assert!(draft.tags().is_empty());
    }

    #[test]
    fn submit_without_mood_fails() {
        let err = EntryDraft::new().submit(user(), Timestamp::now()).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("mood"));
    }

    #[test]
    fn submit_carries_form_fields() {
        let at = Timestamp::now();
        let mut draft = EntryDraft::new();
        draft
            .select_mood(Mood::Low)
            .set_intensity(5)
            .set_note("long week")
            .toggle_tag(Tag::Exhausted)
            .toggle_tag(Tag::Lonely)
            .toggle_tag(Tag::Lonely);

        let entry = draft.submit(user(), at).unwrap();
        assert_eq!(entry.mood(), Mood::Low);
        assert_eq!(entry.intensity().value(), 5);
        assert_eq!(entry.note().as_str(), "long week");
        assert!(entry.tags().contains(Tag::Exhausted));
        assert!(!entry.tags().contains(Tag::Lonely));
        assert_eq!(entry.at(), at);
        assert!(entry.id().is_none());
    }

    #[test]
    fn from_raw_rejects_invalid_mood() {
        let result = Entry::from_raw(user(), "elated", 3, "", &[], Timestamp::now());
        assert!(matches!(result, Err(ValidationError::UnknownValue { .. })));
    }

    #[test]
    fn from_raw_rejects_unknown_tag() {
        let result = Entry::from_raw(user(), "good", 3, "", &["bored"], Timestamp::now());
        assert!(result.is_err());
    }

    #[test]
    fn from_raw_clamps_intensity() {
        let entry = Entry::from_raw(user(), "good", 11, "", &[], Timestamp::now()).unwrap();
        assert_eq!(entry.intensity().value(), 5);
    }

    #[test]
    fn with_id_sets_server_id_only() {
        let entry = Entry::from_raw(user(), "great", 4, "yay", &["proud"], Timestamp::now()).unwrap();
        let acknowledged = entry.clone().with_id(EntryId::new("srv-1").unwrap());
        assert_eq!(acknowledged.id().map(EntryId::as_str), Some("srv-1"));
        assert_eq!(acknowledged.mood(), entry.mood());
        assert_eq!(acknowledged.at(), entry.at());
    }

    #[test]
    fn serializes_camel_case_without_id() {
        let at = Timestamp::parse_rfc3339("2024-05-01T09:00:00Z").unwrap();
        let entry = Entry::from_raw(user(), "neutral", 2, "", &["hopeful"], at).unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["userId"], "anon-1");
        assert_eq!(json["mood"], "neutral");
        assert_eq!(json["intensity"], 2);
        assert_eq!(json["tags"][0], "hopeful");
        assert!(json.get("id").is_none());
    }

    proptest! {
        #[test]
        fn every_valid_mood_and_intensity_constructs(idx in 0usize..5, intensity in 1i64..=5) {
            let mood = Mood::ALL[idx];
            let entry = Entry::from_raw(user(), mood.id(), intensity, "", &[], Timestamp::now()).unwrap();
            prop_assert_eq!(entry.mood(), mood);
            prop_assert_eq!(entry.intensity().value() as i64, intensity);
        }
    }
}
