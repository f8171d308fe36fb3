//! Check-in command handlers.

mod submit_check_in;
mod voice_memo;

pub use submit_check_in::{
    PersistOutcome, SubmitCheckInCommand, SubmitCheckInHandler, SubmitCheckInResult,
};
pub use voice_memo::VoiceMemoHandler;
