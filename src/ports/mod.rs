//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `IdentityProvider` - Stable anonymous user id
//! - `CheckInGateway` - Remote store for check-ins, reflections and dashboard data
//! - `VoiceRecorder` - Optional voice memo capture

mod identity;
mod persistence;
mod voice_recorder;

pub use identity::{IdentityError, IdentityProvider};
pub use persistence::{CheckInGateway, NewCheckIn, PersistenceError, ReflectionReceipt};
pub use voice_recorder::{RecorderError, RecordingStatus, VoiceRecorder, MAX_RECORDING_SECS};
