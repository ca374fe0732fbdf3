// ABOUTME: Content stores that load raw guide HTML by slug.
// ABOUTME: FsContentStore reads <root>/<slug>.html; MemoryContentStore serves in-memory fixtures.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::decode::decode_html;
use crate::error::ContentError;

static SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").unwrap());

/// Check that a slug is safe to use as a file stem.
pub fn validate_slug(slug: &str) -> Result<(), ContentError> {
    if SLUG.is_match(slug) {
        Ok(())
    } else {
        Err(ContentError::invalid_slug(slug))
    }
}

/// Source of raw reference HTML, keyed by guide slug.
pub trait ContentStore: Send + Sync {
    /// Returns `Ok(None)` when the slug has no content.
    fn load(&self, slug: &str) -> Result<Option<String>, ContentError>;
}

/// Reads `<root>/<slug>.html` from disk.
#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, slug: &str) -> PathBuf {
        self.root.join(format!("{}.html", slug))
    }
}

impl ContentStore for FsContentStore {
    fn load(&self, slug: &str) -> Result<Option<String>, ContentError> {
        validate_slug(slug)?;
        let path = self.path_for(slug);

        match fs::read(&path) {
            Ok(bytes) => {
                debug!("loaded {} byte(s) from {}", bytes.len(), path.display());
                Ok(Some(decode_html(&bytes)))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ContentError::io(path, err)),
        }
    }
}

/// In-memory store, mostly for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentStore {
    pages: HashMap<String, String>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, slug: impl Into<String>, html: impl Into<String>) {
        self.pages.insert(slug.into(), html.into());
    }

    pub fn with_page(mut self, slug: impl Into<String>, html: impl Into<String>) -> Self {
        self.insert(slug, html);
        self
    }
}

impl ContentStore for MemoryContentStore {
    fn load(&self, slug: &str) -> Result<Option<String>, ContentError> {
        validate_slug(slug)?;
        Ok(self.pages.get(slug).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_slug_validation() {
        for ok in ["starter-guide", "3-27-league", "a"] {
            assert!(validate_slug(ok).is_ok(), "{} should be valid", ok);
        }
        for bad in ["", "-lead", "../etc/passwd", "Upper", "a/b", "a.html", "a b"] {
            assert!(validate_slug(bad).unwrap_err().is_invalid_slug(), "{} should be invalid", bad);
        }
    }

    #[test]
    fn test_fs_store_reads_and_misses() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("starter-guide.html"), "<p>Hello</p>").unwrap();
        let store = FsContentStore::new(dir.path());

        assert_eq!(
            store.load("starter-guide").unwrap(),
            Some("<p>Hello</p>".to_string())
        );
        assert_eq!(store.load("missing").unwrap(), None);
    }

    #[test]
    fn test_fs_store_rejects_traversal() {
        let dir = TempDir::new().unwrap();
        let store = FsContentStore::new(dir.path());
        assert!(store.load("../secret").unwrap_err().is_invalid_slug());
    }

    #[test]
    fn test_fs_store_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("folder.html")).unwrap();
        let store = FsContentStore::new(dir.path());

        let err = store.load("folder").unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
        assert!(err.to_string().contains("folder.html"));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryContentStore::new().with_page("gear", "<p>Gear</p>");
        assert_eq!(store.load("gear").unwrap().as_deref(), Some("<p>Gear</p>"));
        assert_eq!(store.load("gems").unwrap(), None);
    }
}
