//! GetDashboardHandler - Query handler for the weekly dashboard.
//!
//! Fetches the aggregated series and the recent entries concurrently. Either
//! request may fail; the dashboard is then built from what did arrive.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::dashboard::{DashboardOverview, RecentEntries};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::{CheckInGateway, IdentityProvider};

/// Query for the dashboard.
#[derive(Debug, Clone)]
pub struct GetDashboardQuery {
    /// Day used to pick the quote.
    pub today: NaiveDate,
}

impl Default for GetDashboardQuery {
    fn default() -> Self {
        Self {
            today: Timestamp::now().date(),
        }
    }
}

/// Result of a dashboard query.
pub type GetDashboardResult = DashboardOverview;

/// Handler for the dashboard query.
pub struct GetDashboardHandler {
    identity: Arc<dyn IdentityProvider>,
    gateway: Arc<dyn CheckInGateway>,
}

impl GetDashboardHandler {
    pub fn new(identity: Arc<dyn IdentityProvider>, gateway: Arc<dyn CheckInGateway>) -> Self {
        Self { identity, gateway }
    }

    /// # Errors
    ///
    /// Only when the anonymous identity cannot be resolved; service failures
    /// degrade to an empty dashboard.
    pub async fn handle(&self, query: GetDashboardQuery) -> Result<GetDashboardResult, DomainError> {
        let user_id = self.identity.user_id().await?;

        let (payload, recent) = futures::join!(
            self.gateway.fetch_dashboard(&user_id),
            self.gateway.fetch_recent_entries(&user_id),
        );

        let payload = payload
            .map_err(|e| tracing::warn!("Failed to load dashboard data: {}", e))
            .ok();
        let recent = recent
            .map_err(|e| tracing::warn!("Failed to load recent entries: {}", e))
            .ok()
            .map(RecentEntries::from);

        tracing::debug!(
            has_series = payload.is_some(),
            recent = recent.as_ref().map_or(0, RecentEntries::len),
            "dashboard loaded"
        );

        Ok(DashboardOverview::build(payload.as_ref(), recent, query.today))
    }
}
