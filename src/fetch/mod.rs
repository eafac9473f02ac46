// src/fetch/mod.rs
// =============================================================================
// This module downloads pages.
//
// The crawler only needs "give me the bytes behind this URL", so that is
// expressed as the `Fetcher` trait. `HttpFetcher` is the real implementation
// on top of reqwest; the crawler tests swap in an in-memory one.
//
// Rust concepts:
// - Traits: Shared behaviour that different types can implement
// - async fn in traits: Supported since Rust 1.75
// =============================================================================

mod http;

pub use http::{FetchedPage, Fetcher, HttpFetcher};
