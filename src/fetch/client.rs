//! Fetch Client Module
//!
//! Coordinates the live network path with the offline cache: successful
//! responses are written through, failures fall back to a cached copy.

use tracing::{debug, info, warn};
use url::Url;

use crate::cache::{CacheKey, CacheStore};
use crate::config::FetchConfig;
use crate::error::{FetchError, Result};
use crate::fetch::{Transport, TransportResponse};
use crate::models::{RecordPage, RecordQuery};

// == Record Client ==
/// Fetches pages of records, transparently falling back to the cache.
///
/// All collaborators are injected at construction; there is no shared global
/// instance. Callers cannot tell a live success from a cache fallback:
/// freshness is deliberately not part of the success type. Concurrent
/// identical fetches each do their own round-trip.
pub struct RecordClient<T: Transport> {
    transport: T,
    cache: CacheStore,
    config: FetchConfig,
}

impl<T: Transport> RecordClient<T> {
    // == Constructor ==
    /// Creates a client from its collaborators.
    pub fn new(transport: T, cache: CacheStore, config: FetchConfig) -> Self {
        Self {
            transport,
            cache,
            config,
        }
    }

    // == Fetch ==
    /// Fetches one page of records.
    ///
    /// The live path runs first and a successfully decoded response is
    /// persisted under the query's canonical key before it is returned. When
    /// the live path fails for any reason other than an invalid request, a
    /// cached payload for the same key is decoded and returned instead and
    /// the live error is discarded. With no usable cached copy the live
    /// error propagates unchanged.
    ///
    /// # Arguments
    /// * `query` - Page number, page size, and optional seed
    ///
    /// # Returns
    /// The decoded page, from the network or from the cache.
    pub async fn fetch(&self, query: &RecordQuery) -> Result<RecordPage> {
        let key = CacheKey::for_query(query);

        // invalid parameters fail immediately, never shadowed by the cache
        if let Some(message) = query.validate() {
            return Err(FetchError::InvalidRequest(message));
        }
        let url = self.request_url(query)?;

        match self.live_fetch(&key, &url).await {
            Ok(page) => Ok(page),
            Err(err) => self.fall_back(&key, err).await,
        }
    }

    /// Builds the request URL for a query.
    fn request_url(&self, query: &RecordQuery) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|err| FetchError::InvalidRequest(format!("Invalid base URL: {}", err)))?;

        url.query_pairs_mut()
            .append_pair("page", &query.page.to_string())
            .append_pair("results", &query.results.to_string());
        if let Some(seed) = &query.seed {
            url.query_pairs_mut().append_pair("seed", seed);
        }

        Ok(url)
    }

    /// Runs the network path, writing a decoded success through the cache.
    async fn live_fetch(&self, key: &CacheKey, url: &Url) -> Result<RecordPage> {
        let TransportResponse { status, body } = self.transport.send(url).await?;

        if !(200..300).contains(&status) {
            return Err(FetchError::Http(status));
        }

        let page: RecordPage =
            serde_json::from_slice(&body).map_err(|err| FetchError::Decode(err.to_string()))?;

        // only a fully received and decoded body reaches the cache
        self.cache.write(key, &body).await;
        debug!(key = %key, records = page.results.len(), "Fetched page from network");
        Ok(page)
    }

    /// Serves a cached copy after a live failure, or propagates the failure.
    async fn fall_back(&self, key: &CacheKey, live_error: FetchError) -> Result<RecordPage> {
        let payload = match self.cache.read(key).await {
            Some(payload) => payload,
            None => return Err(live_error),
        };

        match serde_json::from_slice::<RecordPage>(&payload) {
            Ok(page) => {
                info!(key = %key, error = %live_error, "Serving cached page after fetch failure");
                Ok(page)
            }
            Err(decode_err) => {
                warn!(key = %key, error = %decode_err, "Cached payload failed to decode");
                Err(live_error)
            }
        }
    }
}
