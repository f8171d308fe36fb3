//! Guided reflection attached to a check-in.
//!
//! A [`ReflectionDraft`] collects the mode and the two answers while the
//! reflection step is open. It can be turned into a [`Reflection`] exactly
//! once per session; after a successful save it is frozen.

use serde::{Deserialize, Serialize};

use super::ReflectionMode;
use crate::domain::foundation::{DomainError, EntryId, ErrorCode, ValidationError};
use crate::domain::session::CheckInContext;

/// Answers to the two prompts of a mode. Missing answers are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionResponses {
    #[serde(default)]
    pub q1: String,
    #[serde(default)]
    pub q2: String,
}

/// A saved guided reflection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    /// Server id of the entry; null if it was never acknowledged.
    pub entry_id: Option<EntryId>,
    pub mode: ReflectionMode,
    pub responses: ReflectionResponses,
}

/// The reflection step's in-progress state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectionDraft {
    entry_id: Option<EntryId>,
    context_version: u64,
    mode: Option<ReflectionMode>,
    answers: [String; 2],
    saved: bool,
}

impl ReflectionDraft {
    /// Opens a reflection for the check-in in `context`.
    pub fn new(context: &CheckInContext) -> Self {
        Self {
            entry_id: context.entry_id().cloned(),
            context_version: context.version(),
            mode: None,
            answers: Default::default(),
            saved: false,
        }
    }

    /// Picks the mode. Switching to a different mode discards earlier answers.
    ///
    /// # Errors
    ///
    /// - `ReflectionAlreadySaved` once the reflection was saved
    pub fn choose_mode(&mut self, mode: ReflectionMode) -> Result<(), DomainError> {
        self.ensure_editable()?;
        if self.mode != Some(mode) {
            self.answers = Default::default();
        }
        self.mode = Some(mode);
        Ok(())
    }

    /// Records the answer to question `index` (0 or 1).
    ///
    /// # Errors
    ///
    /// - `ReflectionAlreadySaved` once the reflection was saved
    /// - `ReflectionModeRequired` before a mode is chosen
    /// - `OutOfRange` for any other index
    pub fn answer(&mut self, index: usize, text: impl Into<String>) -> Result<(), DomainError> {
        self.ensure_editable()?;
        if self.mode.is_none() {
            return Err(DomainError::new(
                ErrorCode::ReflectionModeRequired,
                "Choose a reflection mode first",
            ));
        }
        let slot = self
            .answers
            .get_mut(index)
            .ok_or_else(|| ValidationError::out_of_range("question", 0, 1, index as i64))?;
        *slot = text.into();
        Ok(())
    }

    /// Picks up a server id that arrived after the step opened.
    ///
    /// Ignored when `context` belongs to a different check-in.
    pub fn refresh_entry_id(&mut self, context: &CheckInContext) {
        if context.version() == self.context_version {
            if let Some(id) = context.entry_id() {
                self.entry_id = Some(id.clone());
            }
        }
    }

    pub fn mode(&self) -> Option<ReflectionMode> {
        self.mode
    }

    pub fn entry_id(&self) -> Option<&EntryId> {
        self.entry_id.as_ref()
    }

    /// Prompts for the chosen mode.
    pub fn questions(&self) -> Option<[&'static str; 2]> {
        self.mode.map(|m| m.questions())
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Whether the save action is enabled.
    pub fn can_save(&self) -> bool {
        self.mode.is_some() && !self.saved
    }

    /// Builds the payload to persist.
    ///
    /// # Errors
    ///
    /// - `ReflectionAlreadySaved` once the reflection was saved
    /// - `ReflectionModeRequired` without a mode
    pub fn to_reflection(&self) -> Result<Reflection, DomainError> {
        self.ensure_editable()?;
        let mode = self.mode.ok_or_else(|| {
            DomainError::new(ErrorCode::ReflectionModeRequired, "Choose a reflection mode first")
        })?;
        let [q1, q2] = self.answers.clone();
        Ok(Reflection {
            entry_id: self.entry_id.clone(),
            mode,
            responses: ReflectionResponses { q1, q2 },
        })
    }

    /// Freezes the draft after the service accepted it.
    pub fn mark_saved(&mut self) {
        self.saved = true;
    }

    fn ensure_editable(&self) -> Result<(), DomainError> {
        if self.saved {
            return Err(DomainError::new(
                ErrorCode::ReflectionAlreadySaved,
                "Reflection was already saved",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkin::Entry;
    use crate::domain::foundation::{Timestamp, UserId};
    use crate::domain::session::{SessionStore, SetEntry};

    fn store_with_entry() -> SessionStore {
        let store = SessionStore::new();
        let entry = Entry::from_raw(
            UserId::new("anon").unwrap(),
            "low",
            4,
            "",
            &[],
            Timestamp::now(),
        )
        .unwrap();
        store.set_entry(SetEntry::Replace(entry));
        store
    }

    #[test]
    fn cannot_build_without_mode() {
        let draft = ReflectionDraft::new(&CheckInContext::empty());
        let err = draft.to_reflection().unwrap_err();
        assert_eq!(err.code, ErrorCode::ReflectionModeRequired);
        assert!(!draft.can_save());
    }

    #[test]
    fn missing_answers_become_empty_strings() {
        let mut draft = ReflectionDraft::new(&CheckInContext::empty());
        draft.choose_mode(ReflectionMode::Vent).unwrap();
        draft.answer(1, "that it was unfair").unwrap();

        let reflection = draft.to_reflection().unwrap();
        assert_eq!(reflection.responses.q1, "");
        assert_eq!(reflection.responses.q2, "that it was unfair");
        assert!(reflection.entry_id.is_none());
    }

    #[test]
    fn switching_mode_clears_answers() {
        let mut draft = ReflectionDraft::new(&CheckInContext::empty());
        draft.choose_mode(ReflectionMode::Clarity).unwrap();
        draft.answer(0, "what now").unwrap();
        draft.choose_mode(ReflectionMode::Clarity).unwrap();
        assert_eq!(draft.to_reflection().unwrap().responses.q1, "what now");

        draft.choose_mode(ReflectionMode::Grounding).unwrap();
        assert_eq!(draft.to_reflection().unwrap().responses.q1, "");
    }

    #[test]
    fn answer_index_is_bounded() {
        let mut draft = ReflectionDraft::new(&CheckInContext::empty());
        draft.choose_mode(ReflectionMode::Vent).unwrap();
        let err = draft.answer(2, "extra").unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRange);
    }

    #[test]
    fn saved_draft_is_write_once() {
        let mut draft = ReflectionDraft::new(&CheckInContext::empty());
        draft.choose_mode(ReflectionMode::Encouragement).unwrap();
        draft.mark_saved();

        assert_eq!(
            draft.to_reflection().unwrap_err().code,
            ErrorCode::ReflectionAlreadySaved
        );
        assert!(draft.answer(0, "edit").is_err());
        assert!(draft.choose_mode(ReflectionMode::Vent).is_err());
    }

    #[test]
    fn refresh_ignores_id_for_replaced_check_in() {
        let store = store_with_entry();
        let mut draft = ReflectionDraft::new(&store.snapshot());
        assert!(draft.entry_id().is_none());

        let ticket = store.set_entry(SetEntry::update(|prev| prev.cloned()));
        store.assign_id(ticket, EntryId::new("srv").unwrap());
        draft.refresh_entry_id(&store.snapshot());

        assert!(draft.entry_id().is_none());
    }

    #[test]
    fn refresh_attaches_id_for_same_check_in() {
        let store = SessionStore::new();
        let entry = Entry::from_raw(
            UserId::new("anon").unwrap(),
            "good",
            2,
            "",
            &[],
            Timestamp::now(),
        )
        .unwrap();
        let ticket = store.set_entry(SetEntry::Replace(entry));
        let mut draft = ReflectionDraft::new(&store.snapshot());

        store.assign_id(ticket, EntryId::new("srv-7").unwrap());
        draft.refresh_entry_id(&store.snapshot());

        assert_eq!(draft.entry_id().unwrap().as_str(), "srv-7");
    }

    #[test]
    fn serializes_wire_shape() {
        let reflection = Reflection {
            entry_id: Some(EntryId::new("e1").unwrap()),
            mode: ReflectionMode::Grounding,
            responses: ReflectionResponses {
                q1: "warm feet".into(),
                q2: String::new(),
            },
        };
        let json = serde_json::to_value(&reflection).unwrap();
        assert_eq!(json["entryId"], "e1");
        assert_eq!(json["mode"], "grounding");
        assert_eq!(json["responses"]["q1"], "warm feet");
        assert_eq!(json["responses"]["q2"], "");
    }
}
