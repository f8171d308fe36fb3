//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - reqwest client for the persistence service
//! - `storage` - In-memory persistence service (testing/development)
//! - `identity` - Anonymous user id providers
//! - `audio` - Voice memo recorder

pub mod audio;
pub mod http;
pub mod identity;
pub mod storage;

pub use audio::InMemoryVoiceRecorder;
pub use http::{HttpCheckInGateway, HttpGatewayConfig};
pub use identity::{FileIdentityProvider, StaticIdentityProvider};
pub use storage::InMemoryCheckInGateway;
