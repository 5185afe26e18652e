//! Configuration Module
//!
//! Handles loading cache and fetch configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

// == Defaults ==
/// Default ceiling on total cached bytes (50 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 50 * 1024 * 1024;

/// Default ceiling on the number of cached entries.
pub const DEFAULT_MAX_FILE_COUNT: usize = 300;

/// Default entry time-to-live (7 days).
pub const DEFAULT_TIME_TO_LIVE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Default namespace directory under the platform caches root.
pub const DEFAULT_DIRECTORY_NAME: &str = "roster";

/// Default base URL of the record API.
pub const DEFAULT_BASE_URL: &str = "https://randomuser.me/api/";

/// Default connection establishment timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default whole-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

// == Cache Config Structure ==
/// Bounds and placement for the disk cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Ceiling on total cached bytes after a maintenance pass
    pub max_bytes: u64,
    /// Ceiling on the number of cache entries after a maintenance pass
    pub max_file_count: usize,
    /// Entries older than this are purged lazily; None disables expiry
    pub time_to_live: Option<Duration>,
    /// Namespace directory created under the caches root
    pub directory_name: String,
    /// Caches root override; None selects the platform caches directory
    pub root: Option<PathBuf>,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_BYTES` - Total byte ceiling (default: 52428800, 50 MiB)
    /// - `CACHE_MAX_FILES` - Entry count ceiling (default: 300)
    /// - `CACHE_TTL_SECS` - Entry time-to-live in seconds, 0 disables expiry
    ///   (default: 604800, 7 days)
    /// - `CACHE_DIR_NAME` - Namespace under the caches root (default: "roster")
    pub fn from_env() -> Self {
        let time_to_live = match env::var("CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => Some(DEFAULT_TIME_TO_LIVE),
        };

        Self {
            max_bytes: env::var("CACHE_MAX_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_BYTES),
            max_file_count: env::var("CACHE_MAX_FILES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_FILE_COUNT),
            time_to_live,
            directory_name: env::var("CACHE_DIR_NAME")
                .unwrap_or_else(|_| DEFAULT_DIRECTORY_NAME.to_string()),
            root: None,
        }
    }

    /// Resolves the directory this cache owns on disk.
    ///
    /// The explicit root override wins, then the platform caches directory,
    /// then the system temp directory. `directory_name` is always appended so
    /// differently named instances never share files.
    pub fn resolve_dir(&self) -> PathBuf {
        let base = self
            .root
            .clone()
            .or_else(dirs::cache_dir)
            .unwrap_or_else(env::temp_dir);
        base.join(&self.directory_name)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            max_file_count: DEFAULT_MAX_FILE_COUNT,
            time_to_live: Some(DEFAULT_TIME_TO_LIVE),
            directory_name: DEFAULT_DIRECTORY_NAME.to_string(),
            root: None,
        }
    }
}

// == Fetch Config Structure ==
/// Endpoint and timeouts for the live fetch path.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Base URL of the record API
    pub base_url: String,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
    /// Whole-request timeout, including body transfer
    pub request_timeout: Duration,
}

impl FetchConfig {
    /// Creates a new FetchConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `API_BASE_URL` - Record API endpoint (default: "https://randomuser.me/api/")
    /// - `HTTP_CONNECT_TIMEOUT_SECS` - Connection timeout (default: 30)
    /// - `HTTP_REQUEST_TIMEOUT_SECS` - Whole-request timeout (default: 60)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            connect_timeout: Duration::from_secs(
                env::var("HTTP_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
            ),
            request_timeout: Duration::from_secs(
                env::var("HTTP_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}
