// src/links/resolve.rs
// =============================================================================
// Resolves a reference found on a page against the page's own URL.
//
// The `url` crate implements the standard (RFC 3986 / WHATWG) resolution
// rules, so "../x", "/x", "x" and "//host/x" all come out the way a browser
// would resolve them.
//
// Resolution never fails. If either side does not parse, the reference is
// handed back verbatim and whoever consumes it has to cope with a string that
// is not an absolute URL (the fetcher will refuse it).
// =============================================================================

use url::Url;

// Resolves `reference` against `base_url`
//
// Returns the absolute URL as a string. Absolute references also go through
// the parser, so equivalent spellings ("HTTP://Other/z") compare equal
// afterwards.
//
// Examples:
//   base = "http://h/p/", reference = "/x"             -> "http://h/x"
//   base = "http://h/p/", reference = "y.jpg"          -> "http://h/p/y.jpg"
//   base = "http://h/p/", reference = "http://other/z" -> "http://other/z"
//   base = "not a url",   reference = "y.jpg"          -> "y.jpg"
pub fn resolve(base_url: &str, reference: &str) -> String {
    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(_) => return reference.to_string(),
    };

    match base.join(reference) {
        Ok(url) => url.to_string(),
        Err(_) => reference.to_string(),
    }
}
