//! Reflection handlers.

mod get_reflection_messages;
mod save_reflection;

pub use get_reflection_messages::GetReflectionMessagesHandler;
pub use save_reflection::{SaveReflectionHandler, SaveReflectionOutcome};
