// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Usage:
//   site-mirror https://example.com                 # just the one page
//   site-mirror -r -l 2 -o mirror https://example.com
// =============================================================================

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::crawl::CrawlConfig;

// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "site-mirror",
    version = "0.1.0",
    about = "Download a web page, or a whole site, into a local directory tree",
    long_about = "site-mirror downloads a URL into <output>/<host>/<path>. With --recursive it \
                  also downloads every page, stylesheet, script and image the page references, \
                  down to the given depth, fetching each URL at most once."
)]
pub struct Cli {
    /// URL to download (e.g., https://example.com/docs/)
    ///
    /// This is a positional argument (required, no flag needed)
    pub url: String,

    /// Follow links and assets found in downloaded pages
    #[arg(short, long)]
    pub recursive: bool,

    /// Maximum link depth when recursive (default: 1)
    ///
    /// Depth 0 = just the starting page
    /// Depth 1 = starting page + everything it references
    /// etc.
    #[arg(short = 'l', long = "level", default_value_t = 1)]
    pub max_depth: usize,

    /// Directory the mirror tree is written to
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// How many downloads may run at once
    ///
    /// 1 crawls depth-first, one page at a time
    #[arg(long, default_value_t = 1)]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Give up on pages not yet downloaded after this many seconds
    #[arg(long)]
    pub deadline: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long, default_value = concat!("site-mirror/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,

    /// Output the crawl report in JSON format instead of a table
    #[arg(long)]
    pub json: bool,

    /// Log every step, including skipped duplicate links
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        let mut config = CrawlConfig::new(self.url.clone());
        config.recursive = self.recursive;
        config.max_depth = self.max_depth;
        config.output_root = self.output.clone();
        config.concurrency = self.concurrency;
        config.deadline = self.deadline.map(Duration::from_secs);
        config
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
