//! Identity Port - anonymous, device-local user identity.
//!
//! No account exists. The first call creates a random identifier; every later
//! call returns the same one.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Errors that can occur while resolving the anonymous identity
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity storage unavailable: {0}")]
    Storage(String),

    #[error("stored identity is unreadable: {0}")]
    Corrupt(String),
}

impl From<IdentityError> for DomainError {
    fn from(err: IdentityError) -> Self {
        DomainError::new(ErrorCode::IdentityUnavailable, err.to_string())
    }
}

/// Port for the stable anonymous user id.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the user id, creating and persisting one on first use.
    ///
    /// # Errors
    /// Returns `IdentityError::Storage` if the id cannot be persisted.
    async fn user_id(&self) -> Result<UserId, IdentityError>;
}
