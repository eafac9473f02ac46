// src/error.rs
// =============================================================================
// Error types for the mirror.
//
// None of these errors stop a crawl. A failed fetch or a failed save only
// ends the branch that hit it; the crawler logs it, records it in the report
// and moves on to the rest of the frontier.
//
// Broken markup and unparseable links are not errors at all:
// - the HTML parser recovers from anything it is given
// - the resolver passes a link through unchanged if it cannot resolve it
//
// The only fatal errors are configuration errors, raised before crawling.
//
// Rust concepts:
// - thiserror: derive macro that implements std::error::Error and Display
// - #[from]: automatic conversion so the ? operator works across error types
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Why a URL could not be downloaded
#[derive(Debug, Error)]
pub enum FetchError {
    /// Only http and https are fetched
    #[error("unsupported URL scheme in '{0}'")]
    UnsupportedScheme(String),

    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request timed out")]
    Timeout,

    #[error("too many redirects")]
    TooManyRedirects,

    #[error("could not resolve hostname")]
    Dns,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Why a downloaded body could not be written into the mirror
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cannot map '{url}' to a file: {reason}")]
    Unmappable { url: String, reason: String },

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single crawl node ended in the Failed state
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error("crawl deadline exceeded before this page was fetched")]
    DeadlineExceeded,
}

impl CrawlError {
    /// Which step of the node state machine failed
    pub fn stage(&self) -> FailureStage {
        match self {
            CrawlError::Fetch(_) => FailureStage::Fetch,
            CrawlError::Persist(_) => FailureStage::Save,
            CrawlError::DeadlineExceeded => FailureStage::Deadline,
        }
    }
}

/// The step where a node failed, as shown in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    Fetch,
    Save,
    Deadline,
}

/// Problems with the command line that stop us before the first request
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid seed URL '{url}': {source}")]
    InvalidSeed {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("concurrency must be greater than 0")]
    ZeroConcurrency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_of_each_error() {
        let fetch = CrawlError::from(FetchError::Timeout);
        assert_eq!(fetch.stage(), FailureStage::Fetch);

        let save = CrawlError::from(PersistError::Unmappable {
            url: "mailto:x".to_string(),
            reason: "no host".to_string(),
        });
        assert_eq!(save.stage(), FailureStage::Save);

        assert_eq!(CrawlError::DeadlineExceeded.stage(), FailureStage::Deadline);
    }

    #[test]
    fn test_transparent_display() {
        let err = CrawlError::from(FetchError::UnsupportedScheme("mailto:a@b.c".to_string()));
        assert_eq!(err.to_string(), "unsupported URL scheme in 'mailto:a@b.c'");
    }
}
