//! Error types for the fetch path
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Fetch Error Enum ==
/// Unified error type for record fetching.
///
/// Cache I/O failures never appear here: the disk cache is best-effort and
/// absorbs its own errors internally. A `FetchError` reaches the caller only
/// when the live network path failed and the cache fallback could not help.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Request parameters or URL construction were invalid
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The underlying network transport failed
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The server answered with a status outside the 200-299 range
    #[error("HTTP error: status {0}")]
    Http(u16),

    /// The response body did not match the expected schema
    #[error("Decode failure: {0}")]
    Decode(String),
}

// == Result Type Alias ==
/// Convenience Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
