//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the store's bound, ordering, and accounting
//! invariants over arbitrary operation sequences.

use proptest::prelude::*;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use filetime::FileTime;

use crate::cache::{CacheKey, CacheStore};
use crate::config::CacheConfig;
use crate::models::RecordQuery;

// == Test Configuration ==
fn bounded_config(root: &Path, max_bytes: u64, max_file_count: usize) -> CacheConfig {
    CacheConfig {
        max_bytes,
        max_file_count,
        time_to_live: None,
        directory_name: "bounded".to_string(),
        root: Some(root.to_path_buf()),
    }
}

fn key_for(seed: &str) -> CacheKey {
    CacheKey::for_query(&RecordQuery::with_seed(1, 1, seed))
}

/// Writes an entry file directly and backdates its mtime, so eviction order
/// is fully determined before the store ever runs.
fn plant_entry(cache_dir: &Path, name: &str, size: usize, age_secs: u64) -> PathBuf {
    std::fs::create_dir_all(cache_dir).unwrap();
    let path = cache_dir.join(format!("{}.json", name));
    std::fs::write(&path, vec![b'x'; size]).unwrap();
    let mtime = FileTime::from_system_time(SystemTime::now() - Duration::from_secs(age_secs));
    filetime::set_file_mtime(&path, mtime).unwrap();
    path
}

// == Strategies ==
/// Generates a sequence of store operations over a small key space, so reads
/// produce a meaningful mix of hits and misses.
#[derive(Debug, Clone)]
enum CacheOp {
    Write { seed: String, payload: Vec<u8> },
    Read { seed: String },
    Touch { seed: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        ("[a-c]{1,2}", prop::collection::vec(any::<u8>(), 1..64))
            .prop_map(|(seed, payload)| CacheOp::Write { seed, payload }),
        "[a-c]{1,2}".prop_map(|seed| CacheOp::Read { seed }),
        "[a-c]{1,2}".prop_map(|seed| CacheOp::Touch { seed }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any payload and key, a write followed by a read returns exactly
    // the bytes that were written.
    #[test]
    fn prop_round_trip_any_payload(
        payload in prop::collection::vec(any::<u8>(), 0..512),
        seed in "[a-z]{1,10}",
        page in 1u32..100,
        results in 1u32..100,
    ) {
        tokio_test::block_on(async {
            let dir = tempfile::tempdir().unwrap();
            let store = CacheStore::new(bounded_config(dir.path(), 1 << 20, 100));
            let key = CacheKey::for_query(&RecordQuery::with_seed(page, results, seed));

            store.write(&key, &payload).await;
            let read = store.read(&key).await;

            prop_assert_eq!(read.as_deref(), Some(payload.as_slice()));
            Ok(())
        })?;
    }

    // For any sequence of operations, the hit, miss, and write counters
    // reflect exactly the operations that occurred.
    #[test]
    fn prop_statistics_track_operations(
        ops in prop::collection::vec(cache_op_strategy(), 1..40)
    ) {
        tokio_test::block_on(async {
            let dir = tempfile::tempdir().unwrap();
            let store = CacheStore::new(bounded_config(dir.path(), 1 << 20, 100));
            let mut expected_hits: u64 = 0;
            let mut expected_misses: u64 = 0;
            let mut expected_writes: u64 = 0;

            for op in &ops {
                match op {
                    CacheOp::Write { seed, payload } => {
                        store.write(&key_for(seed), payload).await;
                        expected_writes += 1;
                    }
                    CacheOp::Read { seed } => {
                        match store.read(&key_for(seed)).await {
                            Some(_) => expected_hits += 1,
                            None => expected_misses += 1,
                        }
                    }
                    CacheOp::Touch { seed } => {
                        store.touch(&key_for(seed)).await;
                    }
                }
            }

            let stats = store.stats().await;
            prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
            prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
            prop_assert_eq!(stats.writes, expected_writes, "Writes mismatch");
            prop_assert_eq!(stats.write_failures, 0, "No write may fail here");
            Ok(())
        })?;
    }
}

// Separate proptest block with fewer cases for the disk-heavy eviction
// properties; each case plants several backdated files.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // For any sequence of writes under any bounds, the store never ends a
    // write holding more bytes or more entries than the bounds allow.
    #[test]
    fn prop_bounds_hold_after_every_write(
        writes in prop::collection::vec(
            ("[a-z]{1,8}", prop::collection::vec(any::<u8>(), 0..512)),
            1..20
        ),
        max_bytes in 64u64..2048,
        max_file_count in 1usize..8,
    ) {
        tokio_test::block_on(async {
            let dir = tempfile::tempdir().unwrap();
            let store = CacheStore::new(bounded_config(dir.path(), max_bytes, max_file_count));

            for (seed, payload) in &writes {
                store.write(&key_for(seed), payload).await;

                let total = store.total_bytes().await;
                let count = store.entry_count().await;
                prop_assert!(total <= max_bytes, "total {} exceeds {}", total, max_bytes);
                prop_assert!(
                    count <= max_file_count,
                    "count {} exceeds {}",
                    count,
                    max_file_count
                );
            }
            Ok(())
        })?;
    }

    // When the count bound forces evictions, the removed entries are exactly
    // the oldest ones; no entry survives while an older one was evicted.
    #[test]
    fn prop_count_eviction_removes_exactly_the_oldest(
        extra in 1usize..5,
        max_file_count in 2usize..6,
    ) {
        tokio_test::block_on(async {
            let dir = tempfile::tempdir().unwrap();
            let cache_dir = dir.path().join("bounded");
            let n = max_file_count + extra;

            // entry i is strictly newer than entry i-1
            let mut planted = Vec::new();
            for i in 0..n {
                let age = ((n - i) * 60) as u64;
                planted.push(plant_entry(&cache_dir, &format!("k{:02}", i), 2, age));
            }

            let store = CacheStore::new(bounded_config(dir.path(), 1 << 20, max_file_count));
            let fresh = key_for("fresh");
            store.write(&fresh, b"xx").await;

            // the oldest `cutoff` planted entries go, the rest survive
            let cutoff = n + 1 - max_file_count;
            for (i, path) in planted.iter().enumerate() {
                prop_assert_eq!(
                    path.exists(),
                    i >= cutoff,
                    "planted entry {} in wrong state after eviction",
                    i
                );
            }
            prop_assert!(cache_dir.join(fresh.file_name()).exists());
            prop_assert_eq!(store.entry_count().await, max_file_count);
            Ok(())
        })?;
    }

    // When the byte bound forces evictions, the evicted set is a prefix of
    // the age-ordered entry list.
    #[test]
    fn prop_size_eviction_preserves_newest(
        sizes in prop::collection::vec(4u64..64, 2..8),
        incoming_size in 4usize..64,
    ) {
        tokio_test::block_on(async {
            let dir = tempfile::tempdir().unwrap();
            let cache_dir = dir.path().join("bounded");
            let n = sizes.len();

            let mut planted = Vec::new();
            for (i, size) in sizes.iter().enumerate() {
                let age = ((n - i) * 60) as u64;
                planted.push(plant_entry(&cache_dir, &format!("k{:02}", i), *size as usize, age));
            }

            // one byte short of fitting everything, so at least one eviction
            let total_planted: u64 = sizes.iter().sum();
            let max_bytes = total_planted + incoming_size as u64 - 1;
            let store = CacheStore::new(bounded_config(dir.path(), max_bytes, 100));

            let fresh = key_for("fresh");
            store.write(&fresh, &vec![b'y'; incoming_size]).await;

            let alive: Vec<bool> = planted.iter().map(|path| path.exists()).collect();
            let first_alive = alive.iter().position(|&a| a).unwrap_or(n);
            for (i, &is_alive) in alive.iter().enumerate() {
                prop_assert_eq!(
                    is_alive,
                    i >= first_alive,
                    "entry {} broke the oldest-first eviction order",
                    i
                );
            }
            prop_assert!(cache_dir.join(fresh.file_name()).exists());
            prop_assert!(store.total_bytes().await <= max_bytes);
            Ok(())
        })?;
    }
}
