// src/crawl/config.rs
// =============================================================================
// Settings for one crawl.
//
// A CrawlConfig is built once from the command line, validated, and then only
// read. Each crawl node carries its own URL and depth, so the config never
// has to be copied or changed while crawling.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Where the crawl starts (depth 0)
    pub seed_url: String,
    /// Without this only the seed is downloaded
    pub recursive: bool,
    /// Deepest level that is still downloaded; the seed is level 0
    pub max_depth: usize,
    /// Root of the mirror tree
    pub output_root: PathBuf,
    /// How many pages may be downloading at once (1 = depth-first, one at a time)
    pub concurrency: usize,
    /// Overall time budget; pages not started before it runs out are skipped
    pub deadline: Option<Duration>,
}

impl CrawlConfig {
    // Creates a config with the defaults of the command line:
    // not recursive, depth 1, current directory, one download at a time
    pub fn new(seed_url: impl Into<String>) -> Self {
        Self {
            seed_url: seed_url.into(),
            recursive: false,
            max_depth: 1,
            output_root: PathBuf::from("."),
            concurrency: 1,
            deadline: None,
        }
    }

    // Checks everything that would make the crawl pointless to start
    //
    // The seed is re-expressed through the URL parser so it compares equal
    // to the same URL found later as a resolved link.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let seed = Url::parse(&self.seed_url).map_err(|source| ConfigError::InvalidSeed {
            url: self.seed_url.clone(),
            source,
        })?;

        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }

        self.seed_url = seed.to_string();
        Ok(self)
    }
}
