//! Identity Adapters
//!
//! - **FileIdentityProvider** - UUID persisted in a local file
//! - **StaticIdentityProvider** - Fixed id (testing/tooling)

mod file;
mod fixed;

pub use file::FileIdentityProvider;
pub use fixed::StaticIdentityProvider;
