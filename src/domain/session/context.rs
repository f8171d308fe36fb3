//! Immutable snapshot of the session handed to each step of the flow.

use crate::domain::checkin::Entry;
use crate::domain::foundation::EntryId;

/// What a step sees of the current check-in.
///
/// Taken from the [`SessionStore`](super::SessionStore) and passed down the
/// check-in → reflection chain explicitly. It never changes after creation;
/// take a fresh snapshot to observe later writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInContext {
    entry: Option<Entry>,
    version: u64,
}

impl CheckInContext {
    pub(super) fn new(entry: Option<Entry>, version: u64) -> Self {
        Self { entry, version }
    }

    /// A context with no check-in this session.
    pub fn empty() -> Self {
        Self::new(None, 0)
    }

    pub fn entry(&self) -> Option<&Entry> {
        self.entry.as_ref()
    }

    /// Server id of the entry, if it has been acknowledged.
    pub fn entry_id(&self) -> Option<&EntryId> {
        self.entry.as_ref().and_then(Entry::id)
    }

    /// Store version this snapshot was taken at.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn has_entry(&self) -> bool {
        self.entry.is_some()
    }
}

impl Default for CheckInContext {
    fn default() -> Self {
        Self::empty()
    }
}
