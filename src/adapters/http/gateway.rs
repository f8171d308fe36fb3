//! HTTP Check-In Gateway - `CheckInGateway` over the persistence service's JSON API.
//!
//! # Configuration
//!
//! ```ignore
//! let gateway = HttpCheckInGateway::new(
//!     HttpGatewayConfig::new("http://localhost:5000").with_timeout(Duration::from_secs(5)),
//! )?;
//! ```
//!
//! Dashboard and recent-entry responses are read leniently; missing or
//! mistyped fields become absent values rather than errors.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

use super::dto::SubmitMoodResponse;
use crate::domain::dashboard::{DashboardPayload, RecentEntries, RecentEntry};
use crate::domain::foundation::{EntryId, UserId};
use crate::domain::reflection::Reflection;
use crate::ports::{CheckInGateway, NewCheckIn, PersistenceError, ReflectionReceipt};

/// Configuration for the HTTP gateway.
#[derive(Debug, Clone)]
pub struct HttpGatewayConfig {
    /// Base URL of the persistence service, without trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl HttpGatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// reqwest-backed gateway.
#[derive(Debug, Clone)]
pub struct HttpCheckInGateway {
    config: HttpGatewayConfig,
    client: Client,
}

impl HttpCheckInGateway {
    /// Creates the gateway.
    ///
    /// # Errors
    /// Returns `PersistenceError::Network` if the HTTP client cannot be built.
    pub fn new(config: HttpGatewayConfig) -> Result<Self, PersistenceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PersistenceError::network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }

    fn map_send_error(&self, e: reqwest::Error) -> PersistenceError {
        if e.is_timeout() {
            PersistenceError::Timeout(self.config.timeout.as_secs())
        } else if e.is_connect() {
            PersistenceError::network(format!("Connection failed: {}", e))
        } else {
            PersistenceError::network(e.to_string())
        }
    }

    /// Passes 2xx responses through; anything else becomes `UnexpectedStatus`.
    async fn ensure_success(response: Response) -> Result<Response, PersistenceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(PersistenceError::unexpected_status(status.as_u16(), body))
    }

    async fn json_body(response: Response) -> Result<Value, PersistenceError> {
        response
            .json::<Value>()
            .await
            .map_err(|e| PersistenceError::malformed(e.to_string()))
    }

    async fn get_for_user(&self, path: &str, user_id: &UserId) -> Result<Value, PersistenceError> {
        let response = self
            .client
            .get(self.url(path))
            .query(&[("userId", user_id.as_str())])
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        let response = Self::ensure_success(response).await?;
        Self::json_body(response).await
    }
}

#[async_trait]
impl CheckInGateway for HttpCheckInGateway {
    async fn submit_check_in(
        &self,
        check_in: &NewCheckIn,
    ) -> Result<Option<EntryId>, PersistenceError> {
        let response = self
            .client
            .post(self.url("submit-mood"))
            .json(check_in)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        let response = Self::ensure_success(response).await?;

        // An unreadable body still means the entry was stored.
        let body: SubmitMoodResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(error = %e, "submit-mood response had no readable body");
                SubmitMoodResponse::default()
            }
        };
        let id = body.entry_id();
        tracing::debug!(entry_id = ?id, "check-in stored");
        Ok(id)
    }

    async fn submit_reflection(
        &self,
        reflection: &Reflection,
    ) -> Result<ReflectionReceipt, PersistenceError> {
        let response = self
            .client
            .post(self.url("submit-reflection"))
            .json(reflection)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if status.is_success() {
            Ok(ReflectionReceipt::Accepted)
        } else {
            tracing::debug!(status = status.as_u16(), "reflection rejected");
            Ok(ReflectionReceipt::Rejected(status.as_u16()))
        }
    }

    async fn fetch_dashboard(&self, user_id: &UserId) -> Result<DashboardPayload, PersistenceError> {
        let body = self.get_for_user("dashboard-data", user_id).await?;
        Ok(DashboardPayload::from_json(&body))
    }

    async fn fetch_recent_entries(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<RecentEntry>, PersistenceError> {
        let body = self.get_for_user("recent-entries", user_id).await?;
        Ok(RecentEntries::from_json(&body).into_inner())
    }
}
