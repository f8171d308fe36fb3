//! Session module - the current check-in and the snapshots handed to each step.

mod context;
mod store;

pub use context::CheckInContext;
pub use store::{AssignOutcome, EntryTicket, SessionStore, SetEntry};
