//! Cache Store Module
//!
//! Disk-backed bounded key-to-bytes store. One file per key under the
//! resolved cache directory; the file mtime is the recency timestamp that
//! drives both TTL expiry and least-recently-used eviction.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use chrono::Utc;
use filetime::FileTime;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::cache::{CacheKey, CacheStats, EntryMeta};
use crate::config::CacheConfig;

// == Cache Store ==
/// Disk-backed cache enforcing byte, count, and age bounds.
///
/// Cloning is cheap and clones share state: all operations funnel through one
/// async mutex held for the operation's full duration, including maintenance,
/// so operations from concurrent tasks never interleave. Each store instance
/// owns its directory exclusively.
///
/// Disk failures never surface to callers. A failed write leaves the cache
/// without that entry, a failed read registers as a miss; both are logged.
#[derive(Debug, Clone)]
pub struct CacheStore {
    inner: Arc<Mutex<StoreInner>>,
}

#[derive(Debug)]
struct StoreInner {
    /// Directory this instance owns
    dir: PathBuf,
    /// Bounds and TTL settings
    config: CacheConfig,
    /// Activity counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore over the directory the config resolves to.
    ///
    /// The directory is created lazily on first write, so construction never
    /// fails.
    pub fn new(config: CacheConfig) -> Self {
        let dir = config.resolve_dir();
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                dir,
                config,
                stats: CacheStats::new(),
            })),
        }
    }

    // == Write ==
    /// Persists a payload under a key, then enforces the bounds.
    ///
    /// Maintenance runs twice: once before persisting with the incoming
    /// payload size counted as pending, so room is made ahead of the write,
    /// and once after, so the post-write state satisfies every bound. An
    /// existing payload under the same key is replaced and its recency reset.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `payload` - The raw bytes to persist
    pub async fn write(&self, key: &CacheKey, payload: &[u8]) {
        let mut inner = self.inner.lock().await;
        inner.maintain(payload.len() as u64).await;
        inner.persist(key, payload).await;
        inner.maintain(0).await;
    }

    // == Read ==
    /// Retrieves the payload stored under a key.
    ///
    /// Returns `None` when the key is absent or its entry has outlived the
    /// TTL; an expired entry is deleted on the spot. A successful read
    /// refreshes the entry's recency, so recently read entries outlast
    /// recently written ones under eviction pressure.
    ///
    /// # Arguments
    /// * `key` - The key to look up
    pub async fn read(&self, key: &CacheKey) -> Option<Vec<u8>> {
        let mut inner = self.inner.lock().await;
        inner.read(key).await
    }

    // == Touch ==
    /// Marks an entry as recently used without reading it.
    ///
    /// No-op if the key is absent.
    pub async fn touch(&self, key: &CacheKey) {
        let inner = self.inner.lock().await;
        inner.touch(key).await;
    }

    // == Stats ==
    /// Returns a snapshot of the activity counters.
    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats.clone()
    }

    // == Entry Count ==
    /// Returns the current number of entries on disk.
    pub async fn entry_count(&self) -> usize {
        let inner = self.inner.lock().await;
        inner.enumerate().await.len()
    }

    // == Total Bytes ==
    /// Returns the current total payload bytes on disk.
    pub async fn total_bytes(&self) -> u64 {
        let inner = self.inner.lock().await;
        inner.enumerate().await.iter().map(|entry| entry.size).sum()
    }
}

impl StoreInner {
    /// Returns the backing file path for a key.
    fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.dir.join(key.file_name())
    }

    /// Writes the payload file, creating the cache directory if needed.
    async fn persist(&mut self, key: &CacheKey, payload: &[u8]) {
        if let Err(err) = fs::create_dir_all(&self.dir).await {
            warn!(key = %key, error = %err, "Failed to create cache directory");
            self.stats.record_write_failure();
            return;
        }

        let path = self.path_for(key);
        match fs::write(&path, payload).await {
            Ok(()) => {
                self.stats.record_write();
                debug!(key = %key, bytes = payload.len(), "Cached payload");
            }
            Err(err) => {
                warn!(key = %key, error = %err, "Failed to write cache entry");
                self.stats.record_write_failure();
            }
        }
    }

    /// Reads one entry, applying lazy expiry and refreshing recency on a hit.
    async fn read(&mut self, key: &CacheKey) -> Option<Vec<u8>> {
        let path = self.path_for(key);

        let meta = match fs::metadata(&path).await {
            Ok(meta) => meta,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!(key = %key, error = %err, "Failed to stat cache entry");
                }
                self.stats.record_miss();
                return None;
            }
        };

        if let Some(ttl) = self.config.time_to_live {
            let entry = EntryMeta::from_path(path.clone(), &meta);
            if entry.is_expired(ttl, Utc::now()) {
                if let Err(err) = fs::remove_file(&path).await {
                    warn!(key = %key, error = %err, "Failed to remove expired entry");
                }
                self.stats.record_expiration();
                self.stats.record_miss();
                debug!(key = %key, "Entry expired");
                return None;
            }
        }

        match fs::read(&path).await {
            Ok(payload) => {
                // a read counts as a use
                refresh_mtime(&path);
                self.stats.record_hit();
                Some(payload)
            }
            Err(err) => {
                warn!(key = %key, error = %err, "Failed to read cache entry");
                self.stats.record_miss();
                None
            }
        }
    }

    /// Refreshes an entry's recency without reading its payload.
    async fn touch(&self, key: &CacheKey) {
        let path = self.path_for(key);
        if fs::metadata(&path).await.is_ok() {
            refresh_mtime(&path);
        }
    }

    /// Lists the current entries. A missing directory reads as empty.
    async fn enumerate(&self) -> Vec<EntryMeta> {
        let mut entries = Vec::new();
        let mut dir = match fs::read_dir(&self.dir).await {
            Ok(dir) => dir,
            Err(_) => return entries,
        };

        loop {
            match dir.next_entry().await {
                Ok(Some(item)) => {
                    let path = item.path();
                    if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                        continue;
                    }
                    match item.metadata().await {
                        Ok(meta) if meta.is_file() => {
                            entries.push(EntryMeta::from_path(path, &meta));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            warn!(path = %path.display(), error = %err, "Failed to stat cache entry");
                        }
                    }
                }
                Ok(None) => break,
                Err(err) => {
                    warn!(error = %err, "Failed to list cache directory");
                    break;
                }
            }
        }

        entries
    }

    // == Maintenance ==
    /// Enforces the TTL, byte, and count bounds, oldest entries first.
    ///
    /// `pending_bytes` reserves room for a payload about to be written, so
    /// the pre-write pass can evict ahead of the write. Expired entries are
    /// removed unconditionally before any bound is checked. Survivors are
    /// ordered by modification time with the file name breaking ties.
    ///
    /// A deletion failure is logged and the entry leaves the candidate list,
    /// so the pass always terminates; its bytes are only subtracted from the
    /// running total when the deletion succeeded.
    async fn maintain(&mut self, pending_bytes: u64) {
        let mut entries = self.enumerate().await;

        if let Some(ttl) = self.config.time_to_live {
            let now = Utc::now();
            let mut survivors = Vec::with_capacity(entries.len());
            for entry in entries {
                if entry.is_expired(ttl, now) {
                    if self.remove_entry(&entry, "expired").await {
                        self.stats.record_expiration();
                    }
                } else {
                    survivors.push(entry);
                }
            }
            entries = survivors;
        }

        // oldest first; the file name tie-break keeps the order reproducible
        entries.sort_by(|a, b| {
            a.modified
                .cmp(&b.modified)
                .then_with(|| a.path.file_name().cmp(&b.path.file_name()))
        });

        let mut total: u64 = entries.iter().map(|entry| entry.size).sum();
        let mut candidates: VecDeque<EntryMeta> = entries.into();

        while total + pending_bytes > self.config.max_bytes {
            let entry = match candidates.pop_front() {
                Some(entry) => entry,
                None => break,
            };
            if self.remove_entry(&entry, "size bound").await {
                self.stats.record_eviction();
                total -= entry.size;
            }
        }

        while candidates.len() > self.config.max_file_count {
            let entry = match candidates.pop_front() {
                Some(entry) => entry,
                None => break,
            };
            if self.remove_entry(&entry, "count bound").await {
                self.stats.record_eviction();
            }
        }
    }

    /// Deletes one entry's file. Returns whether the deletion succeeded.
    async fn remove_entry(&self, entry: &EntryMeta, reason: &str) -> bool {
        match fs::remove_file(&entry.path).await {
            Ok(()) => {
                debug!(
                    key = entry.key_str(),
                    reason,
                    bytes = entry.size,
                    "Removed cache entry"
                );
                true
            }
            Err(err) => {
                warn!(key = entry.key_str(), error = %err, "Failed to remove cache entry");
                false
            }
        }
    }
}

// == Utility Functions ==
/// Sets a file's mtime to now, re-ranking it as most recently used.
fn refresh_mtime(path: &Path) {
    let now = FileTime::from_system_time(SystemTime::now());
    if let Err(err) = filetime::set_file_mtime(path, now) {
        warn!(path = %path.display(), error = %err, "Failed to refresh entry mtime");
    }
}
