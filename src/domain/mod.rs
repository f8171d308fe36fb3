//! Domain layer containing the check-in rules and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, errors)
//! - `checkin` - Mood, intensity, tags, notes and the entry itself
//! - `session` - Current check-in context shared across steps
//! - `reflection` - Guided reflection modes and supportive messages
//! - `dashboard` - Aggregation, insights and the assembled dashboard

pub mod checkin;
pub mod dashboard;
pub mod foundation;
pub mod reflection;
pub mod session;
