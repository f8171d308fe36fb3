//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands change the current check-in or persist it; queries read it back.

pub mod handlers;

pub use handlers::{
    // Check-in
    PersistOutcome, SubmitCheckInCommand, SubmitCheckInHandler, SubmitCheckInResult,
    VoiceMemoHandler,
    // Reflection
    GetReflectionMessagesHandler, SaveReflectionHandler, SaveReflectionOutcome,
    // Dashboard
    GetDashboardHandler, GetDashboardQuery, GetDashboardResult,
};
