//! Page fetching.
//!
//! One blocking GET per permalink. Only the status code and the raw body
//! bytes are kept; decoding is left to the extractor.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::error::{Error, Result};

/// A fetched page: HTTP status and undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl Page {
    /// True for status 200 exactly.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Source of page bytes for the pipeline.
pub trait PageFetcher {
    /// Fetch `url`, returning its status and body.
    ///
    /// # Errors
    ///
    /// Returns an error when no response could be obtained at all. A non-200
    /// response is not an error.
    fn fetch(&self, url: &str) -> Result<Page>;
}

/// Blocking HTTP fetcher backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher, optionally with a per-request timeout.
    ///
    /// With `None` requests wait indefinitely; reqwest's blocking client
    /// would otherwise cut them off after 30 seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Page> {
        let url = validate_url(url)?;
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();
        tracing::trace!(status, bytes = body.len(), "fetched page");
        Ok(Page { status, body })
    }
}

/// Parse a permalink, accepting only absolute http(s) URLs.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] when the string does not parse or uses
/// another scheme.
pub fn validate_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| Error::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        scheme => Err(Error::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme {scheme:?}"),
        }),
    }
}
