// src/crawl/visited.rs
// =============================================================================
// The set of URLs this crawl has already taken on.
//
// A URL goes in the moment it is scheduled, before it is downloaded, so two
// links to the same page on one page (or on two pages downloading at the same
// time) cannot both be treated as new. The set only grows and lives for one
// crawl.
//
// URLs are compared as strings exactly as the resolver produced them: no
// trailing-slash, case or default-port normalization beyond what the URL
// parser already does.
//
// Rust concepts:
// - Mutex: Only one caller at a time may look at or change the set
// - Interior mutability: Methods take &self, so the set can be shared
// =============================================================================

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: Mutex<HashSet<String>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    // True if `url` has not been recorded yet
    //
    // On its own this is only a snapshot, the crawler uses try_visit.
    #[cfg(test)]
    pub fn should_visit(&self, url: &str) -> bool {
        !self.lock().contains(url)
    }

    // Checks whether `url` should be visited and marks it visited, returning
    // true if it was new
    //
    // HashSet::insert checks and inserts in one call under one lock, so
    // concurrent callers can never both get true for the same URL.
    pub fn try_visit(&self, url: &str) -> bool {
        self.lock().insert(url.to_string())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    // A poisoned lock still holds a valid set: inserts cannot be half done
    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.urls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
