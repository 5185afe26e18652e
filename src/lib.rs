//! Roster - an offline-capable paginated record client
//!
//! Fetches pages of user records over HTTP and keeps serving them from a
//! bounded disk cache when the network is down.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;

pub use cache::{CacheKey, CacheStats, CacheStore};
pub use config::{CacheConfig, FetchConfig};
pub use error::FetchError;
pub use fetch::{HttpTransport, RecordClient, Transport, TransportResponse};
pub use models::{RecordPage, RecordQuery};
