// src/links/html.rs
// =============================================================================
// This module extracts the URLs a page references.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which never rejects input: broken or truncated
//   markup just produces a smaller tree, so extraction simply finds fewer links
//
// The tree is built with scripting disabled. With scripting on, html5ever
// keeps <noscript> contents as plain text, and the fallback images and
// stylesheets pages put there would never be mirrored.
//
// Four tag/attribute pairs are collected:
//   <a href>       always
//   <link href>    only stylesheets (.css) or absolute http(s) links
//   <script src>   only .js files or absolute http(s) links
//   <img src>      always
//
// Every match is resolved against the page URL. The result keeps document
// order and may contain duplicates; the crawler's visited set deals with those.
// =============================================================================

use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{Html, Selector};

use super::resolve;

// One selector for all four tags, so matches come back in document order
const LINK_SELECTOR: &str = "a[href], link[href], script[src], img[src]";

// Extracts all mirrorable references from an HTML body
//
// Parameters:
//   base_url: the URL the body was downloaded from
//   body: the raw bytes of the page (invalid UTF-8 is replaced, not rejected)
//
// Returns: Vec<String> of resolved URLs in the order they appear
//
// Example:
//   base_url = "http://h/p/"
//   body = "<a href='/x'></a><img src='y.jpg'>"
//   result = ["http://h/x", "http://h/p/y.jpg"]
pub fn extract_links(base_url: &str, body: &[u8]) -> Vec<String> {
    let html = String::from_utf8_lossy(body);
    let document = parse_without_scripting(&html);

    // The selector is a constant and known to be valid
    let selector = Selector::parse(LINK_SELECTOR).unwrap();

    document
        .select(&selector)
        .filter_map(|element| {
            let element = element.value();
            match element.name() {
                "a" => element.attr("href"),
                "link" => element.attr("href").filter(|v| is_stylesheet_ref(v)),
                "script" => element.attr("src").filter(|v| is_script_ref(v)),
                "img" => element.attr("src"),
                _ => None,
            }
        })
        .map(|reference| resolve(base_url, reference))
        .collect()
}

// Same as Html::parse_document, except <noscript> content is parsed as markup
fn parse_without_scripting(html: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };

    html5ever::parse_document(Html::new_document(), opts).one(html)
}

// <link> tags also carry icons, preloads, feeds... we only follow stylesheets
// and anything given as a full URL
fn is_stylesheet_ref(value: &str) -> bool {
    !value.is_empty() && (value.ends_with(".css") || value.starts_with("http"))
}

fn is_script_ref(value: &str) -> bool {
    !value.is_empty() && (value.ends_with(".js") || value.starts_with("http"))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why one selector with commas instead of four selectors?
//    - "a[href], link[href]" matches either kind of element
//    - scraper walks the tree once and yields matches in document order
//    - Four separate passes would give all <a> first, then all <link>, etc.
//
// 2. What is filter_map?
//    - Like map, but the closure returns Option
//    - None values are dropped, Some(x) values are unwrapped and kept
//
// 3. What does Option::filter do?
//    - Keeps Some(x) only if the predicate returns true, otherwise gives None
//
// 4. Why call html5ever directly?
//    - scraper's Html is a "tree sink": html5ever parses, Html stores the nodes
//    - Html::parse_document always uses the default options (scripting on)
//    - Passing our own ParseOpts is the only way to turn scripting off
//
// 5. Why String::from_utf8_lossy?
//    - Pages are downloaded as raw bytes and may not be valid UTF-8
//    - Invalid sequences become U+FFFD instead of failing the whole page
//    - It returns Cow<str>: borrowed when the input was already valid
// -----------------------------------------------------------------------------
