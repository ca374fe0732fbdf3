// ABOUTME: Registry of hand-curated guide pages that replace transformed content.
// ABOUTME: Loaded from a JSON object mapping slug to { html, headings }.

use std::collections::HashMap;

use guidehub_sanitize::Heading;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::store::validate_slug;

/// Hand-authored page content with its own table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedPage {
    pub html: String,
    #[serde(default)]
    pub headings: Vec<Heading>,
}

#[derive(Debug, Clone, Default)]
pub struct OverrideRegistry {
    pages: HashMap<String, CuratedPage>,
}

impl OverrideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `{"slug": {"html": "...", "headings": [...]}, ...}`.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let pages: HashMap<String, CuratedPage> =
            serde_json::from_str(json).map_err(ContentError::overrides)?;
        for slug in pages.keys() {
            validate_slug(slug)?;
        }
        Ok(Self { pages })
    }

    pub fn insert(&mut self, slug: impl Into<String>, page: CuratedPage) {
        self.pages.insert(slug.into(), page);
    }

    pub fn get(&self, slug: &str) -> Option<&CuratedPage> {
        self.pages.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.pages.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
