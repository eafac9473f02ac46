// src/report.rs
// =============================================================================
// What a crawl did: which files were mirrored and which pages failed.
//
// There is no pass/fail verdict. A partial mirror is a normal outcome; the
// report just lists both sides so the user can see what is missing.
//
// Output formats:
// - a human-readable table (default)
// - JSON (--json), for scripts
// =============================================================================

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::error::{CrawlError, FailureStage};

/// One downloaded and saved URL
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MirroredFile {
    pub url: String,
    pub depth: usize,
    pub path: PathBuf,
    /// HTTP status of the response whose body was saved
    pub status: u16,
    /// Size of the saved body
    pub bytes: usize,
}

/// One URL whose branch ended in the Failed state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeFailure {
    pub url: String,
    pub depth: usize,
    pub stage: FailureStage,
    pub message: String,
}

impl NodeFailure {
    pub fn new(url: String, depth: usize, error: &CrawlError) -> Self {
        Self {
            url,
            depth,
            stage: error.stage(),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CrawlReport {
    pub seed: String,
    pub mirrored: Vec<MirroredFile>,
    pub failures: Vec<NodeFailure>,
}

impl CrawlReport {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            ..Self::default()
        }
    }

    // URLs in the order they were saved
    #[cfg(test)]
    pub fn mirrored_urls(&self) -> Vec<&str> {
        self.mirrored.iter().map(|m| m.url.as_str()).collect()
    }
}

// Prints the report either as a table or JSON
pub fn print_report(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        print_table(report);
    }
    Ok(())
}

fn print_table(report: &CrawlReport) {
    println!("{:<6} {:<60} {:<8} {}", "DEPTH", "URL", "STATUS", "RESULT");
    println!("{}", "=".repeat(105));

    for file in &report.mirrored {
        println!(
            "{:<6} {:<60} {:<8} {}",
            file.depth,
            truncate(&file.url),
            file.status,
            file.path.display()
        );
    }

    for failure in &report.failures {
        let stage = match failure.stage {
            FailureStage::Fetch => "FETCH",
            FailureStage::Save => "SAVE",
            FailureStage::Deadline => "SKIPPED",
        };
        println!(
            "{:<6} {:<60} {:<8} {}",
            failure.depth,
            truncate(&failure.url),
            stage,
            failure.message
        );
    }

    println!();

    let total_bytes: usize = report.mirrored.iter().map(|m| m.bytes).sum();
    println!("📊 Summary:");
    println!("   ✅ Mirrored: {} ({} bytes)", report.mirrored.len(), total_bytes);
    println!("   ❌ Failed: {}", report.failures.len());
}

// Truncate URL if too long for display
fn truncate(url: &str) -> String {
    if url.chars().count() > 57 {
        let head: String = url.chars().take(57).collect();
        format!("{}...", head)
    } else {
        url.to_string()
    }
}
