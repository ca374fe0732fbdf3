// ABOUTME: Page renderer glue choosing between curated override, transformed source, and placeholder.
// ABOUTME: GuidePage records which of the three produced the page.

use std::fmt;

use guidehub_sanitize::{extract_headings, Heading, Transformer};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::overrides::OverrideRegistry;
use crate::store::{validate_slug, ContentStore};

/// Fragment shown for guides whose reference content does not exist yet.
pub const PLACEHOLDER_HTML: &str = "<p>Guide content is coming soon.</p>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSource {
    Curated,
    Transformed,
    Placeholder,
}

impl fmt::Display for PageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PageSource::Curated => "curated",
            PageSource::Transformed => "transformed",
            PageSource::Placeholder => "placeholder",
        };
        write!(f, "{}", s)
    }
}

/// A rendered guide body plus its table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidePage {
    pub slug: String,
    pub html: String,
    pub headings: Vec<Heading>,
    pub source: PageSource,
}

pub struct GuideRenderer<S> {
    store: S,
    overrides: OverrideRegistry,
    transformer: Transformer,
}

impl<S: ContentStore> GuideRenderer<S> {
    pub fn new(store: S, transformer: Transformer) -> Self {
        Self {
            store,
            overrides: OverrideRegistry::new(),
            transformer,
        }
    }

    pub fn with_overrides(mut self, overrides: OverrideRegistry) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    /// Curated override first, then the transformed source, then the placeholder.
    pub fn render(&self, slug: &str) -> Result<GuidePage, ContentError> {
        validate_slug(slug)?;

        if let Some(page) = self.overrides.get(slug) {
            debug!("{}: using curated override", slug);
            return Ok(GuidePage {
                slug: slug.to_string(),
                html: page.html.clone(),
                headings: page.headings.clone(),
                source: PageSource::Curated,
            });
        }

        let Some(raw) = self.store.load(slug)? else {
            info!("{}: no content, rendering placeholder", slug);
            return Ok(GuidePage {
                slug: slug.to_string(),
                html: PLACEHOLDER_HTML.to_string(),
                headings: Vec::new(),
                source: PageSource::Placeholder,
            });
        };

        let html = self.transformer.transform(&raw);
        let headings = extract_headings(&html);
        debug!("{}: transformed with {} heading(s)", slug, headings.len());

        Ok(GuidePage {
            slug: slug.to_string(),
            html,
            headings,
            source: PageSource::Transformed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::CuratedPage;
    use crate::store::MemoryContentStore;

    #[test]
    fn test_source_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PageSource::Placeholder).unwrap(),
            r#""placeholder""#
        );
        assert_eq!(PageSource::Curated.to_string(), "curated");
    }

    #[test]
    fn test_override_wins_over_store() {
        let store = MemoryContentStore::new().with_page("gear", "<h1>Scraped</h1>");
        let mut overrides = OverrideRegistry::new();
        overrides.insert(
            "gear",
            CuratedPage {
                html: "<p>Curated</p>".to_string(),
                headings: Vec::new(),
            },
        );

        let renderer = GuideRenderer::new(store, Transformer::default()).with_overrides(overrides);
        let page = renderer.render("gear").unwrap();

        assert_eq!(page.source, PageSource::Curated);
        assert_eq!(page.html, "<p>Curated</p>");
    }

    #[test]
    fn test_invalid_slug() {
        let renderer = GuideRenderer::new(MemoryContentStore::new(), Transformer::default());
        assert!(renderer.render("../gear").unwrap_err().is_invalid_slug());
    }
}
