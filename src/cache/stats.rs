//! Cache Statistics Module
//!
//! Tracks cache activity counters: hits, misses, expirations, evictions, and
//! write outcomes.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache activity counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of reads that returned a payload
    pub hits: u64,
    /// Number of reads that found nothing usable
    pub misses: u64,
    /// Number of entries removed because their age exceeded the TTL
    pub expirations: u64,
    /// Number of entries removed to satisfy the byte or count bound
    pub evictions: u64,
    /// Number of payloads persisted
    pub writes: u64,
    /// Number of writes that failed on disk and were absorbed
    pub write_failures: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Expiration ==
    /// Increments the expiration counter.
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Write ==
    /// Increments the write counter.
    pub fn record_write(&mut self) {
        self.writes += 1;
    }

    // == Record Write Failure ==
    /// Increments the write failure counter.
    pub fn record_write_failure(&mut self) {
        self.write_failures += 1;
    }
}
