//! GetReflectionMessagesHandler - Query for the supportive lines atop the reflection step.

use crate::domain::reflection::messages_for_entry;
use crate::domain::session::SessionStore;

/// Handler reading the current check-in from the session store.
pub struct GetReflectionMessagesHandler {
    store: SessionStore,
}

impl GetReflectionMessagesHandler {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    pub fn handle(&self) -> Vec<&'static str> {
        let entry = self.store.get_entry();
        messages_for_entry(entry.as_ref())
    }
}
