use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::ports::{IdentityError, IdentityProvider};

/// Identity that always returns the same id. For tests and tooling.
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider {
    user_id: UserId,
}

impl StaticIdentityProvider {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    /// Provider with a freshly generated id.
    pub fn generated() -> Self {
        Self::new(UserId::generate())
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn user_id(&self) -> Result<UserId, IdentityError> {
        Ok(self.user_id.clone())
    }
}
