//! In-Memory Check-In Gateway
//!
//! Stores check-ins and reflections in memory and answers dashboard queries
//! the way the persistence service does. Useful for testing and development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::checkin::Entry;
use crate::domain::dashboard::{summarize_entries, DashboardPayload, RecentEntry};
use crate::domain::foundation::{EntryId, Timestamp, UserId};
use crate::domain::reflection::Reflection;
use crate::ports::{CheckInGateway, NewCheckIn, PersistenceError, ReflectionReceipt};

/// Most entries returned by `fetch_recent_entries`.
pub const RECENT_ENTRIES_LIMIT: usize = 12;

/// Status returned for a reflection with no entry id.
const MISSING_ENTRY_STATUS: u16 = 400;

/// In-memory stand-in for the persistence service
#[derive(Debug, Clone, Default)]
pub struct InMemoryCheckInGateway {
    entries: Arc<RwLock<Vec<Entry>>>,
    reflections: Arc<RwLock<Vec<Reflection>>>,
    next_id: Arc<AtomicU64>,
    offline: Arc<AtomicBool>,
    now: Option<Timestamp>,
}

impl InMemoryCheckInGateway {
    /// Create an empty gateway
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the clock used for dashboard windows
    pub fn with_now(mut self, now: Timestamp) -> Self {
        self.now = Some(now);
        self
    }

    /// While offline every call fails with a network error
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Get all stored entries, oldest first
    pub async fn entries(&self) -> Vec<Entry> {
        self.entries.read().await.clone()
    }

    /// Get all accepted reflections
    pub async fn reflections(&self) -> Vec<Reflection> {
        self.reflections.read().await.clone()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.entries.write().await.clear();
        self.reflections.write().await.clear();
    }

    fn ensure_online(&self) -> Result<(), PersistenceError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(PersistenceError::network("service unreachable"));
        }
        Ok(())
    }

    fn now(&self) -> Timestamp {
        self.now.unwrap_or_else(Timestamp::now)
    }

    async fn entries_of(&self, user_id: &UserId) -> Vec<Entry> {
        self.entries
            .read()
            .await
            .iter()
            .filter(|e| e.user_id() == user_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CheckInGateway for InMemoryCheckInGateway {
    async fn submit_check_in(
        &self,
        check_in: &NewCheckIn,
    ) -> Result<Option<EntryId>, PersistenceError> {
        self.ensure_online()?;
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let id = EntryId::new(format!("entry-{n}"))
            .map_err(|e| PersistenceError::malformed(e.to_string()))?;
        self.entries
            .write()
            .await
            .push(check_in.to_entry().with_id(id.clone()));
        Ok(Some(id))
    }

    async fn submit_reflection(
        &self,
        reflection: &Reflection,
    ) -> Result<ReflectionReceipt, PersistenceError> {
        self.ensure_online()?;
        if reflection.entry_id.is_none() {
            return Ok(ReflectionReceipt::Rejected(MISSING_ENTRY_STATUS));
        }
        self.reflections.write().await.push(reflection.clone());
        Ok(ReflectionReceipt::Accepted)
    }

    async fn fetch_dashboard(&self, user_id: &UserId) -> Result<DashboardPayload, PersistenceError> {
        self.ensure_online()?;
        let entries = self.entries_of(user_id).await;
        Ok(summarize_entries(&entries, self.now()))
    }

    async fn fetch_recent_entries(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<RecentEntry>, PersistenceError> {
        self.ensure_online()?;
        let mut entries = self.entries_of(user_id).await;
        entries.sort_by_key(|e| std::cmp::Reverse(e.at()));
        Ok(entries
            .iter()
            .take(RECENT_ENTRIES_LIMIT)
            .map(RecentEntry::from)
            .collect())
    }
}
