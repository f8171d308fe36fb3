//! Storage Adapters
//!
//! - **InMemoryCheckInGateway** - In-memory implementation of the `CheckInGateway`
//!   port (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryCheckInGateway;
//!
//! let gateway = InMemoryCheckInGateway::new();
//! ```

mod in_memory_gateway;

pub use in_memory_gateway::{InMemoryCheckInGateway, RECENT_ENTRIES_LIMIT};
