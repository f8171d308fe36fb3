//! Check-In Gateway Port - Interface to the remote persistence service.
//!
//! The service stores check-ins and reflections and answers the dashboard
//! queries. Every call is fallible and callers treat failures as transient:
//! they log and move on, nothing is retried.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::checkin::{Entry, Intensity, Mood, Note, TagSet};
use crate::domain::dashboard::{DashboardPayload, RecentEntry};
use crate::domain::foundation::{DomainError, EntryId, ErrorCode, Timestamp, UserId};
use crate::domain::reflection::Reflection;

/// Errors that can occur talking to the persistence service
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

impl PersistenceError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedBody(message.into())
    }
}

impl From<PersistenceError> for DomainError {
    fn from(err: PersistenceError) -> Self {
        DomainError::new(ErrorCode::NetworkError, err.to_string())
    }
}

/// Body of a check-in submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCheckIn {
    pub mood: Mood,
    pub intensity: Intensity,
    pub note: Note,
    pub tags: TagSet,
    pub at: Timestamp,
    pub user_id: UserId,
}

impl From<&Entry> for NewCheckIn {
    fn from(entry: &Entry) -> Self {
        Self {
            mood: entry.mood(),
            intensity: entry.intensity(),
            note: entry.note().clone(),
            tags: entry.tags().clone(),
            at: entry.at(),
            user_id: entry.user_id().clone(),
        }
    }
}

impl NewCheckIn {
    /// Rebuilds the entry this submission describes.
    pub fn to_entry(&self) -> Entry {
        Entry::new(
            self.user_id.clone(),
            self.mood,
            self.intensity,
            self.note.clone(),
            self.tags.clone(),
            self.at,
        )
    }
}

/// Outcome of a reflection submission the service answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectionReceipt {
    Accepted,
    /// The service refused the reflection with this status.
    Rejected(u16),
}

/// Port for the remote check-in store.
#[async_trait]
pub trait CheckInGateway: Send + Sync {
    /// Stores a check-in; returns the id the service assigned, if it sent one.
    async fn submit_check_in(&self, check_in: &NewCheckIn)
        -> Result<Option<EntryId>, PersistenceError>;

    /// Stores a reflection linked to a check-in.
    async fn submit_reflection(
        &self,
        reflection: &Reflection,
    ) -> Result<ReflectionReceipt, PersistenceError>;

    /// Loads the weekly dashboard series for a user.
    async fn fetch_dashboard(&self, user_id: &UserId) -> Result<DashboardPayload, PersistenceError>;

    /// Loads the user's most recent check-ins, newest first.
    async fn fetch_recent_entries(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<RecentEntry>, PersistenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_check_in_serializes_wire_names() {
        let entry = Entry::from_raw(
            UserId::new("u-1").unwrap(),
            "good",
            4,
            "walked the dog",
            &["grateful"],
            Timestamp::parse_rfc3339("2024-05-15T08:00:00Z").unwrap(),
        )
        .unwrap();
        let body = serde_json::to_value(NewCheckIn::from(&entry)).unwrap();
        assert_eq!(body["mood"], "good");
        assert_eq!(body["intensity"], 4);
        assert_eq!(body["note"], "walked the dog");
        assert_eq!(body["tags"], serde_json::json!(["grateful"]));
        assert_eq!(body["userId"], "u-1");
        assert!(body["at"].as_str().unwrap().starts_with("2024-05-15T08:00:00"));
    }

    #[test]
    fn to_entry_round_trips_fields() {
        let entry = Entry::from_raw(
            UserId::new("u-1").unwrap(),
            "low",
            2,
            "",
            &[],
            Timestamp::now(),
        )
        .unwrap();
        assert_eq!(NewCheckIn::from(&entry).to_entry(), entry);
    }

    #[test]
    fn unexpected_status_shows_code() {
        let err = PersistenceError::unexpected_status(503, "busy");
        assert_eq!(err.to_string(), "unexpected status 503: busy");
    }
}
