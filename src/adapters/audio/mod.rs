//! Audio Adapters
//!
//! - **InMemoryVoiceRecorder** - Timing-only `VoiceRecorder` with an injectable clock

mod in_memory_recorder;

pub use in_memory_recorder::{InMemoryVoiceRecorder, ManualClock, RecorderClock, SystemClock};
