//! SaveReflectionHandler - Command handler for persisting a guided reflection.
//!
//! A reflection is saved at most once. The entry id is refreshed from the
//! session store right before sending, since the check-in's id may arrive
//! after the reflection step opened.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::reflection::ReflectionDraft;
use crate::domain::session::SessionStore;
use crate::ports::{CheckInGateway, ReflectionReceipt};

/// How a save attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveReflectionOutcome {
    /// Accepted; the draft is now frozen.
    Saved,
    /// The service refused it; the draft stays editable.
    Rejected(u16),
    /// The request failed; the draft stays editable. Already logged.
    Failed,
}

/// Handler for saving reflections.
pub struct SaveReflectionHandler {
    store: SessionStore,
    gateway: Arc<dyn CheckInGateway>,
}

impl SaveReflectionHandler {
    pub fn new(store: SessionStore, gateway: Arc<dyn CheckInGateway>) -> Self {
        Self { store, gateway }
    }

    /// Opens a reflection for the current check-in.
    pub fn open_draft(&self) -> ReflectionDraft {
        ReflectionDraft::new(&self.store.snapshot())
    }

    /// # Errors
    ///
    /// - `ReflectionAlreadySaved` if the draft was saved before
    /// - `ReflectionModeRequired` if no mode was chosen
    pub async fn handle(
        &self,
        draft: &mut ReflectionDraft,
    ) -> Result<SaveReflectionOutcome, DomainError> {
        draft.refresh_entry_id(&self.store.snapshot());
        let reflection = draft.to_reflection()?;

        match self.gateway.submit_reflection(&reflection).await {
            Ok(ReflectionReceipt::Accepted) => {
                draft.mark_saved();
                tracing::debug!(mode = %reflection.mode, "reflection saved");
                Ok(SaveReflectionOutcome::Saved)
            }
            Ok(ReflectionReceipt::Rejected(status)) => {
                tracing::warn!(status, "Reflection rejected by service");
                Ok(SaveReflectionOutcome::Rejected(status))
            }
            Err(e) => {
                tracing::warn!("Failed to save reflection: {}", e);
                Ok(SaveReflectionOutcome::Failed)
            }
        }
    }
}
