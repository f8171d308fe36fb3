//! Voice Recorder Port - optional spoken memo attached to a check-in.
//!
//! Only the existence of a finished recording matters to the flow; the audio
//! itself stays on the device.

use std::time::Duration;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Longest memo kept; recording beyond this is cut.
pub const MAX_RECORDING_SECS: u64 = 60;

/// Errors that can occur while recording or playing back
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecorderError {
    #[error("recording already in progress")]
    AlreadyRecording,

    #[error("not recording")]
    NotRecording,

    #[error("no recording to play")]
    NoRecording,

    #[error("audio device unavailable: {0}")]
    DeviceUnavailable(String),
}

impl From<RecorderError> for DomainError {
    fn from(err: RecorderError) -> Self {
        let code = match err {
            RecorderError::AlreadyRecording => ErrorCode::RecordingInProgress,
            RecorderError::NotRecording | RecorderError::NoRecording => ErrorCode::NoRecording,
            RecorderError::DeviceUnavailable(_) => ErrorCode::DeviceUnavailable,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Where the recorder stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingStatus {
    Idle,
    Recording { elapsed: Duration },
    Recorded { duration: Duration },
}

impl RecordingStatus {
    /// True once a memo exists and the user may move on.
    pub fn has_recording(&self) -> bool {
        matches!(self, Self::Recorded { .. })
    }
}

/// Port for capturing a voice memo.
pub trait VoiceRecorder: Send + Sync {
    /// Starts a new recording, discarding any previous one.
    fn start(&self) -> Result<(), RecorderError>;

    /// Stops recording and returns the kept duration, at most [`MAX_RECORDING_SECS`].
    fn stop(&self) -> Result<Duration, RecorderError>;

    /// Plays back the finished recording.
    fn play(&self) -> Result<Duration, RecorderError>;

    fn status(&self) -> RecordingStatus;
}
