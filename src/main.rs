//! Roster demo binary
//!
//! Fetches one page of user records through the offline-capable client and
//! prints a short summary. Run it once online to warm the cache, then again
//! without a network to watch the fallback serve the same page.

use std::env;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster::{CacheConfig, CacheStore, FetchConfig, HttpTransport, RecordClient, RecordQuery};

/// Reads the query parameters from the environment.
///
/// # Environment Variables
/// - `FETCH_PAGE` - 1-based page number (default: 1)
/// - `FETCH_RESULTS` - Records per page (default: 25)
/// - `FETCH_SEED` - Optional generation seed
fn query_from_env() -> RecordQuery {
    let page = env::var("FETCH_PAGE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1);
    let results = env::var("FETCH_RESULTS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(25);

    match env::var("FETCH_SEED") {
        Ok(seed) => RecordQuery::with_seed(page, results, seed),
        Err(_) => RecordQuery::new(page, results),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cache_config = CacheConfig::from_env();
    let fetch_config = FetchConfig::from_env();
    info!(
        cache_dir = %cache_config.resolve_dir().display(),
        max_bytes = cache_config.max_bytes,
        max_files = cache_config.max_file_count,
        "Configuration loaded"
    );

    let store = CacheStore::new(cache_config);
    let transport = HttpTransport::new(&fetch_config);
    let client = RecordClient::new(transport, store.clone(), fetch_config);

    let query = query_from_env();
    let page = client.fetch(&query).await?;

    println!(
        "Page {} ({} records, seed {}):",
        page.info.page,
        page.results.len(),
        page.info.seed
    );
    for record in &page.results {
        println!(
            "  {} <{}> [{}]",
            record.full_name(),
            record.email,
            record.nat
        );
    }

    let stats = store.stats().await;
    info!(
        entries = store.entry_count().await,
        bytes = store.total_bytes().await,
        hits = stats.hits,
        misses = stats.misses,
        "Cache state"
    );

    Ok(())
}
