//! Cache Entry Module
//!
//! Metadata snapshot of a single on-disk cache entry. The file's modification
//! time is the entry's recency timestamp: every write, read, and touch
//! refreshes it, and eviction order is derived from it.

use std::fs::Metadata;
use std::path::PathBuf;
use std::time::{Duration, UNIX_EPOCH};

use chrono::{DateTime, Utc};

// == Entry Metadata ==
/// Size and recency snapshot of one cached file.
#[derive(Debug, Clone)]
pub struct EntryMeta {
    /// Absolute path of the backing file
    pub path: PathBuf,
    /// Payload size in bytes
    pub size: u64,
    /// Modification time, the entry's recency timestamp
    pub modified: DateTime<Utc>,
}

impl EntryMeta {
    // == Constructor ==
    /// Builds a snapshot from filesystem metadata.
    ///
    /// A file whose modification time cannot be read is ranked oldest, so a
    /// bound violation removes it before any readable entry.
    ///
    /// # Arguments
    /// * `path` - Path of the backing file
    /// * `meta` - Filesystem metadata for that file
    pub fn from_path(path: PathBuf, meta: &Metadata) -> Self {
        let modified = meta
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| DateTime::<Utc>::from(UNIX_EPOCH));

        Self {
            path,
            size: meta.len(),
            modified,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry's age exceeds the time-to-live.
    ///
    /// Boundary condition: an entry exactly `ttl` old is not yet expired;
    /// expiry requires the age to be strictly greater.
    ///
    /// # Arguments
    /// * `ttl` - Maximum allowed age
    /// * `now` - Reference instant for the age calculation
    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        match chrono::Duration::from_std(ttl) {
            Ok(ttl) => now - self.modified > ttl,
            // a ttl too large for the time math never expires anything
            Err(_) => false,
        }
    }

    // == Key String ==
    /// Returns the cache key this file backs (the file stem), for logging.
    pub fn key_str(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("")
    }
}
