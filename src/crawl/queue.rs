// src/crawl/queue.rs
// =============================================================================
// This module drives the crawl.
//
// How it works:
// 1. Put the seed URL (depth 0) in the frontier and mark it visited
// 2. Take a node from the frontier and download it
// 3. Save the body into the mirror tree
// 4. If crawling recursively and below the depth limit, extract links
// 5. Every link not seen before is marked visited and added at depth + 1
// 6. Repeat until the frontier is empty and nothing is downloading
//
// Each node goes Pending -> Fetching -> Saving -> (Extracting -> Recursing)
// -> Done. A failed download or save ends that node's branch only: it is
// logged, recorded in the report, and the rest of the frontier carries on.
//
// Two traversal modes share this loop:
// - concurrency 1: the frontier is a stack, so the crawl is depth-first in
//   document order with one download at a time
// - concurrency N: the frontier is a queue and up to N downloads run at once
//
// Rust concepts:
// - VecDeque: Works as a stack (pop_back) or a queue (pop_front)
// - FuturesUnordered: A set of futures polled together, yielding results as
//   they finish
// - Generics: Crawler<F> works with any Fetcher
// =============================================================================

use futures::stream::{FuturesUnordered, StreamExt};
use std::collections::VecDeque;
use std::path::PathBuf;
use tokio::time::Instant;

use super::config::CrawlConfig;
use super::visited::VisitedSet;
use crate::error::CrawlError;
use crate::fetch::Fetcher;
use crate::links;
use crate::mirror;
use crate::report::{CrawlReport, MirroredFile, NodeFailure};

// Represents a page waiting in the frontier
#[derive(Debug, Clone, PartialEq, Eq)]
struct CrawlNode {
    url: String,
    depth: usize, // How many link hops from the seed
}

// What a successfully processed node produced
#[derive(Debug)]
struct Visit {
    path: PathBuf,
    status: u16,
    bytes: usize,
    links: Vec<String>,
}

pub struct Crawler<F> {
    config: CrawlConfig,
    fetcher: F,
    visited: VisitedSet,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(config: CrawlConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            visited: VisitedSet::new(),
        }
    }

    // Crawls from the seed until no pending nodes remain
    //
    // Returns: the report of every mirrored file and every failed node
    pub async fn run(&self) -> CrawlReport {
        let seed = self.config.seed_url.clone();
        let mut report = CrawlReport::new(seed.clone());
        let deadline = self.config.deadline.map(|budget| Instant::now() + budget);

        self.visited.try_visit(&seed);
        let mut frontier = VecDeque::new();
        frontier.push_back(CrawlNode { url: seed, depth: 0 });

        let mut in_flight = FuturesUnordered::new();

        loop {
            // Fill the free download slots from the frontier
            while in_flight.len() < self.config.concurrency {
                let Some(node) = self.next_node(&mut frontier) else {
                    break;
                };
                in_flight.push(self.visit(node, deadline));
            }

            // Nothing downloading and nothing left to start: done
            let Some((node, outcome)) = in_flight.next().await else {
                break;
            };

            match outcome {
                Ok(visit) => {
                    tracing::info!(
                        url = %node.url,
                        depth = node.depth,
                        path = %visit.path.display(),
                        "saved"
                    );
                    self.schedule(&node, visit.links, &mut frontier);
                    report.mirrored.push(MirroredFile {
                        url: node.url,
                        depth: node.depth,
                        path: visit.path,
                        status: visit.status,
                        bytes: visit.bytes,
                    });
                }
                Err(error) => {
                    tracing::warn!(url = %node.url, depth = node.depth, %error, "branch failed");
                    report.failures.push(NodeFailure::new(node.url, node.depth, &error));
                }
            }
        }

        tracing::info!(
            mirrored = report.mirrored.len(),
            failed = report.failures.len(),
            seen = self.visited.len(),
            "crawl finished"
        );

        report
    }

    // Depth-first takes the newest node, the concurrent mode the oldest
    fn next_node(&self, frontier: &mut VecDeque<CrawlNode>) -> Option<CrawlNode> {
        if self.config.concurrency == 1 {
            frontier.pop_back()
        } else {
            frontier.pop_front()
        }
    }

    // Adds every link not seen before to the frontier at depth + 1
    //
    // Links are marked visited here, before anything below them is
    // scheduled, so a URL linked twice is only ever downloaded once.
    fn schedule(&self, parent: &CrawlNode, links: Vec<String>, frontier: &mut VecDeque<CrawlNode>) {
        let depth = parent.depth + 1;
        if depth > self.config.max_depth {
            return;
        }

        let mut novel = Vec::new();
        for link in links {
            if self.visited.try_visit(&link) {
                novel.push(CrawlNode { url: link, depth });
            } else {
                tracing::debug!(url = %link, "already visited");
            }
        }

        if self.config.concurrency == 1 {
            // Pushed in reverse so the first link on the page is popped first
            frontier.extend(novel.into_iter().rev());
        } else {
            frontier.extend(novel);
        }
    }

    // Processes one node: fetch, save, and extract links if allowed
    async fn visit(
        &self,
        node: CrawlNode,
        deadline: Option<Instant>,
    ) -> (CrawlNode, Result<Visit, CrawlError>) {
        let outcome = self.fetch_and_save(&node, deadline).await;
        (node, outcome)
    }

    async fn fetch_and_save(
        &self,
        node: &CrawlNode,
        deadline: Option<Instant>,
    ) -> Result<Visit, CrawlError> {
        let page = match deadline {
            Some(deadline) => {
                if Instant::now() >= deadline {
                    return Err(CrawlError::DeadlineExceeded);
                }
                tokio::time::timeout_at(deadline, self.fetcher.fetch(&node.url))
                    .await
                    .map_err(|_| CrawlError::DeadlineExceeded)??
            }
            None => self.fetcher.fetch(&node.url).await?,
        };

        let path = mirror::save(&self.config.output_root, &node.url, &page.body).await?;

        let links = if self.config.recursive && node.depth < self.config.max_depth {
            links::extract_links(&node.url, &page.body)
        } else {
            Vec::new()
        };

        Ok(Visit {
            path,
            status: page.status,
            bytes: page.body.len(),
            links,
        })
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why mark URLs visited when scheduling instead of after downloading?
//    - If a page links to /shared twice, the second link is seen before
//      /shared has been downloaded
//    - Marking at scheduling time means the second copy is already known
//    - With several downloads running, try_visit checks and marks in one step
//      so two results can never both claim the same URL
//
// 2. What does `let Some(x) = ... else { break };` do?
//    - It is "let-else": bind x if the pattern matches, otherwise run the
//      else block, which must leave the current scope (break, return, ...)
//
// 3. Why FuturesUnordered instead of tokio::spawn?
//    - The futures borrow the crawler (&self), and spawned tasks cannot
//      borrow from the caller
//    - All futures run on the current task, which is enough because the
//      work is waiting on the network, not using the CPU
//
// 4. What is `??`?
//    - timeout_at gives Result<Result<FetchedPage, FetchError>, Elapsed>
//    - map_err turns the timeout into DeadlineExceeded, the first ? returns
//      it, the second ? converts and returns the fetch error
// -----------------------------------------------------------------------------
