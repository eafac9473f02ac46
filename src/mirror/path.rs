// src/mirror/path.rs
// =============================================================================
// Maps a URL to the file it is stored in.
//
//   http://example.com/a/b        -> <root>/example.com/a/b.html
//   http://example.com/a/         -> <root>/example.com/a/index.html
//   http://example.com            -> <root>/example.com/index.html
//   http://example.com/s/app.js   -> <root>/example.com/s/app.js
//   http://localhost:8080/x       -> <root>/localhost:8080/x.html
//
// The mapping is a pure function of the URL and the root. Query strings and
// fragments are dropped, so "/page?a=1" and "/page?a=2" share one file and the
// later download overwrites the earlier one. That is a known limitation.
// =============================================================================

use std::path::{Path, PathBuf};
use url::Url;

use crate::error::PersistError;

// Computes where `url` lives under `output_root`
//
// Returns PersistError::Unmappable for strings that are not absolute URLs
// with a host (unresolved references, mailto: links, ...)
pub fn map_path(output_root: &Path, url: &str) -> Result<PathBuf, PersistError> {
    let unmappable = |reason: &str| PersistError::Unmappable {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    let parsed = Url::parse(url).map_err(|e| unmappable(&e.to_string()))?;
    let host = parsed.host_str().ok_or_else(|| unmappable("URL has no host"))?;

    let mut path = output_root.to_path_buf();
    match parsed.port() {
        Some(port) => path.push(format!("{}:{}", host, port)),
        None => path.push(host),
    }

    // The parser has already removed "." and ".." segments; anything that
    // still looks like one is skipped so nothing escapes the host directory
    let segments: Vec<&str> = parsed
        .path()
        .split('/')
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .collect();

    if parsed.path().ends_with('/') || segments.is_empty() {
        path.extend(&segments);
        path.push("index.html");
        return Ok(path);
    }

    let (last, parents) = match segments.split_last() {
        Some(split) => split,
        None => return Err(unmappable("empty path")),
    };
    path.extend(parents);

    // No extension means we assume it is a page
    if last.contains('.') {
        path.push(last);
    } else {
        path.push(format!("{}.html", last));
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> PathBuf {
        PathBuf::from("/mirror")
    }

    #[test]
    fn test_page_without_extension_gets_html() {
        let path = map_path(&root(), "http://example.com/a/b").unwrap();
        assert_eq!(path, root().join("example.com").join("a").join("b.html"));
    }

    #[test]
    fn test_trailing_slash_is_index() {
        let path = map_path(&root(), "http://example.com/a/").unwrap();
        assert_eq!(path, root().join("example.com").join("a").join("index.html"));
    }

    #[test]
    fn test_bare_host_is_index() {
        let path = map_path(&root(), "http://example.com").unwrap();
        assert_eq!(path, root().join("example.com").join("index.html"));
    }

    #[test]
    fn test_extension_is_kept() {
        let path = map_path(&root(), "https://example.com/static/app.js").unwrap();
        assert_eq!(path, root().join("example.com").join("static").join("app.js"));
    }

    #[test]
    fn test_query_and_fragment_are_dropped() {
        let a = map_path(&root(), "http://example.com/page?a=1").unwrap();
        let b = map_path(&root(), "http://example.com/page?a=2#top").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, root().join("example.com").join("page.html"));
    }

    #[test]
    fn test_port_is_part_of_host_directory() {
        let path = map_path(&root(), "http://localhost:8080/x").unwrap();
        assert_eq!(path, root().join("localhost:8080").join("x.html"));
    }

    #[test]
    fn test_dot_segments_cannot_escape() {
        let path = map_path(&root(), "http://example.com/a/../../../etc/passwd").unwrap();
        assert_eq!(path, root().join("example.com").join("etc").join("passwd.html"));
    }

    #[test]
    fn test_same_url_same_path() {
        let first = map_path(&root(), "http://example.com/a/b").unwrap();
        let second = map_path(&root(), "http://example.com/a/b").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unmappable_urls() {
        assert!(matches!(
            map_path(&root(), "page.html"),
            Err(PersistError::Unmappable { .. })
        ));
        assert!(matches!(
            map_path(&root(), "mailto:someone@example.com"),
            Err(PersistError::Unmappable { .. })
        ));
    }
}
