//! VoiceMemoHandler - Optional voice memo during the check-in step.
//!
//! The memo is never uploaded. Once a recording exists the user may continue.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::foundation::DomainError;
use crate::ports::{RecordingStatus, VoiceRecorder};

/// Handler wrapping the recorder for the check-in flow.
pub struct VoiceMemoHandler {
    recorder: Arc<dyn VoiceRecorder>,
}

impl VoiceMemoHandler {
    pub fn new(recorder: Arc<dyn VoiceRecorder>) -> Self {
        Self { recorder }
    }

    pub fn start(&self) -> Result<(), DomainError> {
        self.recorder.start()?;
        tracing::debug!("voice memo started");
        Ok(())
    }

    /// Stops recording and returns the kept length.
    pub fn stop(&self) -> Result<Duration, DomainError> {
        let duration = self.recorder.stop()?;
        tracing::debug!(secs = duration.as_secs(), "voice memo stopped");
        Ok(duration)
    }

    pub fn play(&self) -> Result<Duration, DomainError> {
        Ok(self.recorder.play()?)
    }

    pub fn status(&self) -> RecordingStatus {
        self.recorder.status()
    }

    /// True once a finished memo exists.
    pub fn can_continue(&self) -> bool {
        self.recorder.status().has_recording()
    }
}
