// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing) on stderr
// 3. Build and validate the crawl configuration
// 4. Crawl, then print what was mirrored and what failed
// 5. Exit with proper code (0 = crawl ran, 2 = could not start)
//
// A crawl where some pages failed still exits with 0: a partial mirror is a
// normal result, and the report says which pages are missing.
// =============================================================================

mod cli;
mod crawl;
mod error;
mod fetch;
mod links;
mod mirror;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use crawl::Crawler;
use fetch::HttpFetcher;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.crawl_config().validate()?;
    let fetcher = HttpFetcher::new(cli.request_timeout(), &cli.user_agent)
        .context("failed to create HTTP client")?;

    if !cli.json {
        println!("🔍 Mirroring: {}", config.seed_url);
        println!("📁 Output directory: {}", config.output_root.display());
        if config.recursive {
            println!("📊 Max depth: {}", config.max_depth);
        }
    }

    let crawler = Crawler::new(config, fetcher);
    let report = crawler.run().await;

    report::print_report(&report, cli.json)
}

// RUST_LOG wins if set, otherwise info (or debug with --verbose)
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
