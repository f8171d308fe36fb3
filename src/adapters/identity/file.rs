//! File-backed anonymous identity.
//!
//! The id is a UUID v4 stored as plain text. A missing or blank file gets a
//! fresh id written to it; an existing id is never replaced.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::foundation::UserId;
use crate::ports::{IdentityError, IdentityProvider};

/// Identity persisted in a local file
#[derive(Debug)]
pub struct FileIdentityProvider {
    path: PathBuf,
    cached: Mutex<Option<UserId>>,
}

impl FileIdentityProvider {
    /// Create a provider storing its id at `path`
    ///
    /// # Example
    /// ```ignore
    /// let identity = FileIdentityProvider::new(".echo_user_id");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cached: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_stored(&self) -> Result<Option<UserId>, IdentityError> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(UserId::new(contents.trim()).ok()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                Err(IdentityError::Corrupt(format!("{}: {}", self.path.display(), e)))
            }
            Err(e) => Err(IdentityError::Storage(e.to_string())),
        }
    }

    async fn write_new(&self) -> Result<UserId, IdentityError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| IdentityError::Storage(e.to_string()))?;
        }
        let id = UserId::generate();
        fs::write(&self.path, id.as_str())
            .await
            .map_err(|e| IdentityError::Storage(e.to_string()))?;
        tracing::info!(path = %self.path.display(), "created anonymous identity");
        Ok(id)
    }
}

#[async_trait]
impl IdentityProvider for FileIdentityProvider {
    async fn user_id(&self) -> Result<UserId, IdentityError> {
        // Held across the file access so concurrent first calls agree on one id.
        let mut cached = self.cached.lock().await;
        if let Some(id) = cached.as_ref() {
            return Ok(id.clone());
        }
        let id = match self.read_stored().await? {
            Some(id) => id,
            None => self.write_new().await?,
        };
        *cached = Some(id.clone());
        Ok(id)
    }
}
