// src/links/mod.rs
// =============================================================================
// This module finds the URLs a page points to.
//
// Submodules:
// - resolve: Turns a relative reference into an absolute URL
// - html: Scans HTML for links, stylesheets, scripts and images
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod html;
mod resolve;

// Callers write `links::extract_links()` instead of `links::html::extract_links()`
pub use html::extract_links;
pub use resolve::resolve;
