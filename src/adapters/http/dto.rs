//! Wire shapes of the persistence service that have no domain counterpart.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::foundation::EntryId;

/// Response to `POST /submit-mood`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitMoodResponse {
    #[serde(default)]
    pub id: Option<Value>,
}

impl SubmitMoodResponse {
    /// Id assigned by the service. Numeric ids are accepted and kept as text.
    pub fn entry_id(&self) -> Option<EntryId> {
        let raw = match self.id.as_ref()? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        EntryId::new(raw).ok()
    }
}
