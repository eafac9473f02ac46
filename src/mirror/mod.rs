// src/mirror/mod.rs
// =============================================================================
// This module writes downloaded bodies into the local mirror tree.
//
// Layout: <output root>/<host>/<url path>, see path.rs for the exact rules.
// Files hold the exact bytes that were downloaded; links are not rewritten.
//
// Rust concepts:
// - tokio::fs: Async versions of std::fs functions
// =============================================================================

mod path;

pub use path::map_path;

use std::path::{Path, PathBuf};

use crate::error::PersistError;

// Saves `body` as the mirror file for `url`
//
// Parent directories are created as needed. Saving the same URL twice
// overwrites the earlier file.
//
// Returns: the path that was written
pub async fn save(output_root: &Path, url: &str, body: &[u8]) -> Result<PathBuf, PersistError> {
    let path = map_path(output_root, url)?;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| PersistError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    tokio::fs::write(&path, body)
        .await
        .map_err(|source| PersistError::Io {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_page() {
        let dir = TempDir::new().unwrap();
        let body = b"<html><body>Test</body></html>";

        let path = save(dir.path(), "http://example.com/test", body).await.unwrap();

        assert_eq!(path, dir.path().join("example.com").join("test.html"));
        assert_eq!(std::fs::read(&path).unwrap(), body);
    }

    #[tokio::test]
    async fn test_save_twice_overwrites() {
        let dir = TempDir::new().unwrap();

        save(dir.path(), "http://example.com/a/?v=1", b"first").await.unwrap();
        let path = save(dir.path(), "http://example.com/a/?v=2", b"second").await.unwrap();

        assert_eq!(path, dir.path().join("example.com").join("a").join("index.html"));
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_save_into_file_blocked_directory() {
        let dir = TempDir::new().unwrap();
        // "example.com" exists as a file, so no directory can be created under it
        std::fs::write(dir.path().join("example.com"), b"in the way").unwrap();

        let result = save(dir.path(), "http://example.com/page", b"x").await;

        assert!(matches!(result, Err(PersistError::Io { .. })));
    }
}
