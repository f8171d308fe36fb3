//! In-Memory Voice Recorder
//!
//! Tracks recording state against a clock without touching audio hardware.
//! The clock is injectable so the 60-second cap can be tested without waiting.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::ports::{RecorderError, RecordingStatus, VoiceRecorder, MAX_RECORDING_SECS};

/// Monotonic time source for the recorder.
pub trait RecorderClock: Send + Sync {
    /// Time elapsed since an arbitrary fixed origin.
    fn elapsed(&self) -> Duration;
}

/// Wall-clock time via `Instant`.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl RecorderClock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl RecorderClock for ManualClock {
    fn elapsed(&self) -> Duration {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Recording { started: Duration },
    Recorded { duration: Duration },
}

/// Recorder that keeps only timing, no audio.
pub struct InMemoryVoiceRecorder<C: RecorderClock = SystemClock> {
    clock: C,
    state: Mutex<State>,
}

impl InMemoryVoiceRecorder<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock::default())
    }
}

impl Default for InMemoryVoiceRecorder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: RecorderClock> InMemoryVoiceRecorder<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: Mutex::new(State::Idle),
        }
    }

    fn cap() -> Duration {
        Duration::from_secs(MAX_RECORDING_SECS)
    }

    /// Ends a recording that ran past the cap.
    fn settle(&self, state: &mut State) {
        if let State::Recording { started } = *state {
            if self.clock.elapsed().saturating_sub(started) >= Self::cap() {
                tracing::debug!("voice memo reached {}s cap", MAX_RECORDING_SECS);
                *state = State::Recorded {
                    duration: Self::cap(),
                };
            }
        }
    }
}

impl<C: RecorderClock> VoiceRecorder for InMemoryVoiceRecorder<C> {
    fn start(&self) -> Result<(), RecorderError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        self.settle(&mut state);
        if matches!(*state, State::Recording { .. }) {
            return Err(RecorderError::AlreadyRecording);
        }
        *state = State::Recording {
            started: self.clock.elapsed(),
        };
        Ok(())
    }

    fn stop(&self) -> Result<Duration, RecorderError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match *state {
            State::Recording { started } => {
                let duration = self
                    .clock
                    .elapsed()
                    .saturating_sub(started)
                    .min(Self::cap());
                *state = State::Recorded { duration };
                Ok(duration)
            }
            _ => Err(RecorderError::NotRecording),
        }
    }

    fn play(&self) -> Result<Duration, RecorderError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        self.settle(&mut state);
        match *state {
            State::Recorded { duration } => Ok(duration),
            _ => Err(RecorderError::NoRecording),
        }
    }

    fn status(&self) -> RecordingStatus {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        self.settle(&mut state);
        match *state {
            State::Idle => RecordingStatus::Idle,
            State::Recording { started } => RecordingStatus::Recording {
                elapsed: self.clock.elapsed().saturating_sub(started),
            },
            State::Recorded { duration } => RecordingStatus::Recorded { duration },
        }
    }
}
