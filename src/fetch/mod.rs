//! Fetch Module
//!
//! The live network path and its coordination with the offline cache.

mod client;
mod transport;

// Re-export public types
pub use client::RecordClient;
pub use transport::{HttpTransport, Transport, TransportResponse};
