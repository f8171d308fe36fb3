//! SubmitCheckInHandler - Command handler for finishing the check-in step.
//!
//! The entry goes into the session store at once so the reflection step can
//! open without waiting. Persistence runs in the background; its id is merged
//! back only if the store still holds the same entry.

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::domain::checkin::{Entry, EntryDraft};
use crate::domain::foundation::{DomainError, EntryId, Timestamp};
use crate::domain::session::{AssignOutcome, EntryTicket, SessionStore, SetEntry};
use crate::ports::{CheckInGateway, IdentityProvider, NewCheckIn};

/// Command to submit the check-in form.
#[derive(Debug, Clone)]
pub struct SubmitCheckInCommand {
    pub draft: EntryDraft,
}

/// How the background submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// The service assigned an id and it was attached to the current entry.
    Assigned(EntryId),
    /// The service answered after the entry was replaced; the id was dropped.
    Stale(EntryId),
    /// Stored, but the service sent no id.
    NoId,
    /// The request failed. Already logged.
    Failed,
}

/// Result of a submitted check-in.
#[derive(Debug)]
pub struct SubmitCheckInResult {
    pub entry: Entry,
    pub ticket: EntryTicket,
    /// Background persistence; awaiting it is optional.
    pub persistence: JoinHandle<PersistOutcome>,
}

/// Handler for submitting check-ins.
pub struct SubmitCheckInHandler {
    store: SessionStore,
    identity: Arc<dyn IdentityProvider>,
    gateway: Arc<dyn CheckInGateway>,
}

impl SubmitCheckInHandler {
    pub fn new(
        store: SessionStore,
        identity: Arc<dyn IdentityProvider>,
        gateway: Arc<dyn CheckInGateway>,
    ) -> Self {
        Self {
            store,
            identity,
            gateway,
        }
    }

    /// Must be called within a tokio runtime.
    pub async fn handle(&self, cmd: SubmitCheckInCommand) -> Result<SubmitCheckInResult, DomainError> {
        // 1. Build the entry (fails without a mood)
        let user_id = self.identity.user_id().await?;
        let entry = cmd.draft.submit(user_id, Timestamp::now())?;

        // 2. Make it the current entry
        let ticket = self.store.set_entry(SetEntry::Replace(entry.clone()));
        tracing::debug!(mood = %entry.mood(), version = ticket.version(), "check-in recorded");

        // 3. Persist in the background
        let store = self.store.clone();
        let gateway = Arc::clone(&self.gateway);
        let body = NewCheckIn::from(&entry);
        let persistence = tokio::spawn(async move {
            match gateway.submit_check_in(&body).await {
                Ok(Some(id)) => match store.assign_id(ticket, id.clone()) {
                    AssignOutcome::Applied => PersistOutcome::Assigned(id),
                    AssignOutcome::Stale => {
                        tracing::debug!(entry_id = %id, "dropping id for replaced check-in");
                        PersistOutcome::Stale(id)
                    }
                },
                Ok(None) => {
                    tracing::debug!("check-in stored without id");
                    PersistOutcome::NoId
                }
                Err(e) => {
                    tracing::warn!("Failed to persist check-in: {}", e);
                    PersistOutcome::Failed
                }
            }
        });

        Ok(SubmitCheckInResult {
            entry,
            ticket,
            persistence,
        })
    }
}
