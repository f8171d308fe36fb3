//! Reflection module - guided follow-up to a check-in.
//!
//! - `mode` - the four guided modes and their question templates
//! - `draft` - write-once reflection state for the current session
//! - `messages` - supportive sentences chosen from mood and intensity

mod draft;
pub mod messages;
mod mode;

pub use draft::{Reflection, ReflectionDraft, ReflectionResponses};
pub use messages::{build_messages, messages_for_entry, MoodReading};
pub use mode::ReflectionMode;
