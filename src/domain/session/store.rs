//! Session store - holder of the current check-in.
//!
//! Holds at most one entry for the lifetime of the process. Nothing is
//! written to disk: journal text only leaves memory through the persistence
//! service.
//!
//! # Stale updates
//!
//! Every write through [`SessionStore::set_entry`] bumps a monotonic version
//! and returns an [`EntryTicket`]. Work dispatched against an entry (such as
//! waiting for the server to assign an id) keeps the ticket, and
//! [`SessionStore::assign_id`] only merges when the store still holds that
//! version. A response for an entry the user has since replaced is dropped.

use std::sync::{Arc, PoisonError, RwLock};

use super::CheckInContext;
use crate::domain::checkin::Entry;
use crate::domain::foundation::EntryId;

/// Replacement applied by [`SessionStore::set_entry`].
pub enum SetEntry {
    /// Replace the current entry wholesale.
    Replace(Entry),
    /// Compute the new entry from the previous one.
    Update(Box<dyn FnOnce(Option<&Entry>) -> Option<Entry> + Send>),
    /// Forget the current entry.
    Clear,
}

impl SetEntry {
    /// Convenience constructor for [`SetEntry::Update`].
    pub fn update<F>(f: F) -> Self
    where
        F: FnOnce(Option<&Entry>) -> Option<Entry> + Send + 'static,
    {
        SetEntry::Update(Box::new(f))
    }
}

/// Proof of which write produced the current entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryTicket {
    version: u64,
}

impl EntryTicket {
    pub fn version(&self) -> u64 {
        self.version
    }
}

/// Result of merging a server-assigned id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOutcome {
    /// The id was attached to the entry the ticket refers to.
    Applied,
    /// The entry was replaced since the ticket was issued; nothing changed.
    Stale,
}

#[derive(Debug, Default)]
struct SessionState {
    entry: Option<Entry>,
    version: u64,
}

/// Shared handle to the session's current entry.
///
/// Cloning yields another handle to the same state.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    state: Arc<RwLock<SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a replacement and returns the ticket for the new state.
    pub fn set_entry(&self, change: SetEntry) -> EntryTicket {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.entry = match change {
            SetEntry::Replace(entry) => Some(entry),
            SetEntry::Update(f) => f(state.entry.as_ref()),
            SetEntry::Clear => None,
        };
        state.version += 1;
        EntryTicket {
            version: state.version,
        }
    }

    /// Returns the current entry, or `None` if no check-in happened yet.
    pub fn get_entry(&self) -> Option<Entry> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entry
            .clone()
    }

    /// Forgets the current entry.
    pub fn clear(&self) -> EntryTicket {
        self.set_entry(SetEntry::Clear)
    }

    /// Attaches a server id if `ticket` still identifies the current entry.
    ///
    /// Does not bump the version: the entry is amended, not replaced.
    pub fn assign_id(&self, ticket: EntryTicket, id: EntryId) -> AssignOutcome {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.version != ticket.version {
            return AssignOutcome::Stale;
        }
        match state.entry.take() {
            Some(entry) => {
                state.entry = Some(entry.with_id(id));
                AssignOutcome::Applied
            }
            None => AssignOutcome::Stale,
        }
    }

    /// Immutable view of the current state.
    pub fn snapshot(&self) -> CheckInContext {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        CheckInContext::new(state.entry.clone(), state.version)
    }
}
