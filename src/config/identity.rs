//! Anonymous identity configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the anonymous user id is kept
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl IdentityConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("IDENTITY__PATH"));
        }
        Ok(())
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from(".echo_user_id")
}
