// ABOUTME: Error types for guide content loading and rendering.
// ABOUTME: ContentError covers bad slugs, filesystem failures, and malformed override files.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    /// Slug is empty or contains characters outside `[a-z0-9-]`.
    #[error("invalid slug {0:?}")]
    InvalidSlug(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The override registry file could not be parsed.
    #[error("invalid overrides: {0}")]
    Overrides(String),
}

impl ContentError {
    pub fn invalid_slug(slug: impl Into<String>) -> Self {
        ContentError::InvalidSlug(slug.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ContentError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn overrides(err: impl std::fmt::Display) -> Self {
        ContentError::Overrides(err.to_string())
    }

    pub fn is_invalid_slug(&self) -> bool {
        matches!(self, ContentError::InvalidSlug(_))
    }
}
