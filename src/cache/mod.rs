//! Cache Module
//!
//! Provides a disk-backed cache with TTL expiration and LRU eviction, bounded
//! by total bytes and entry count.

mod entry;
mod key;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::EntryMeta;
pub use key::CacheKey;
pub use stats::CacheStats;
pub use store::CacheStore;
