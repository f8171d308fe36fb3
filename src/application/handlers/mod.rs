//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod checkin;
pub mod dashboard;
pub mod reflection;

pub use checkin::{
    PersistOutcome, SubmitCheckInCommand, SubmitCheckInHandler, SubmitCheckInResult,
    VoiceMemoHandler,
};
pub use dashboard::{GetDashboardHandler, GetDashboardQuery, GetDashboardResult};
pub use reflection::{GetReflectionMessagesHandler, SaveReflectionHandler, SaveReflectionOutcome};
