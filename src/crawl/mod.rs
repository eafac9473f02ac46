// src/crawl/mod.rs
// =============================================================================
// This module handles mirroring a website.
//
// Features:
// - Depth-limited crawling starting from a seed URL
// - Every URL downloaded at most once
// - Depth-first with one download at a time, or a bounded number of
//   downloads running concurrently
// - Failures only end their own branch of the crawl
//
// Links are followed to any host: the mirror tree has one directory per host.
// =============================================================================

mod config;
mod queue;
mod visited;

pub use config::CrawlConfig;
pub use queue::Crawler;
