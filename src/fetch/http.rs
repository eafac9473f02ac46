// src/fetch/http.rs
// =============================================================================
// This module downloads pages over HTTP(S).
//
// Key functionality:
// - Makes HTTP GET requests and reads the whole body as bytes
// - Follows redirects with reqwest's default policy
// - Keeps the body of non-2xx responses (a 404 page is still mirrored)
// - Turns reqwest failures into FetchError variants (timeout, DNS, ...)
//
// Rust concepts:
// - async/await: For network I/O
// - Traits: So the crawler can be tested without a network
// =============================================================================

use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::error::FetchError;

/// A downloaded response: status code plus the untouched body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Anything that can turn a URL into bytes
///
/// Implementations must not touch crawl state; they only perform the request.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// The real fetcher, backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds a client with a per-request timeout
    //
    // We reuse this client for all requests (connection pooling)
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        // Refuse mailto:, javascript:, data: and unresolved references
        // before they reach the network
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(FetchError::UnsupportedScheme(url.to_string()));
        }

        let response = self.client.get(parsed).send().await.map_err(categorize_error)?;
        let status = response.status();

        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "non-success response, keeping body");
        }

        let body = response.bytes().await.map_err(categorize_error)?;

        Ok(FetchedPage {
            status: status.as_u16(),
            body: body.to_vec(),
        })
    }
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - Too many redirects
// - etc.
fn categorize_error(error: reqwest::Error) -> FetchError {
    let error_string = error.to_string().to_lowercase();

    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::TooManyRedirects
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        if error_string.contains("dns") {
            FetchError::Dns
        } else {
            FetchError::Connect(error_string)
        }
    } else {
        FetchError::Request(error)
    }
}
