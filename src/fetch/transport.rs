//! Transport Module
//!
//! The network boundary of the fetch path: a capability trait returning the
//! raw status and body of one HTTP exchange, plus the reqwest-backed
//! production implementation.

use async_trait::async_trait;
use url::Url;

use crate::config::FetchConfig;
use crate::error::{FetchError, Result};

// == Transport Response ==
/// Raw outcome of one HTTP exchange.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body bytes
    pub body: Vec<u8>,
}

// == Transport Trait ==
/// Capability to perform one GET exchange.
///
/// Implementations report network-level failure as `FetchError::Transport`
/// and otherwise hand back status and body uninterpreted; deciding what a
/// status means is the caller's job. No retry or backoff happens at this
/// boundary.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one GET request against the URL.
    async fn send(&self, url: &Url) -> Result<TransportResponse>;
}

// == HTTP Transport ==
/// Production transport backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with the configured timeouts.
    pub fn new(config: &FetchConfig) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, url: &Url) -> Result<TransportResponse> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?
            .to_vec();

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_transport_builds_with_defaults() {
        let _transport = HttpTransport::new(&FetchConfig::default());
    }
}
