// ABOUTME: Explicit render cache keyed by slug, shared by reference across request handlers.
// ABOUTME: Read-mostly, so an RwLock guards the map; a poisoned lock is recovered, not propagated.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::ContentError;
use crate::renderer::{GuidePage, GuideRenderer};
use crate::store::ContentStore;

#[derive(Debug, Default)]
pub struct RenderCache {
    pages: RwLock<HashMap<String, Arc<GuidePage>>>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slug: &str) -> Option<Arc<GuidePage>> {
        let pages = self.pages.read().unwrap_or_else(PoisonError::into_inner);
        pages.get(slug).cloned()
    }

    /// Returns the cached page or renders and stores it. Errors are not cached.
    pub fn get_or_render<S: ContentStore>(
        &self,
        renderer: &GuideRenderer<S>,
        slug: &str,
    ) -> Result<Arc<GuidePage>, ContentError> {
        if let Some(page) = self.get(slug) {
            return Ok(page);
        }

        let rendered = Arc::new(renderer.render(slug)?);
        let mut pages = self.pages.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have rendered the same slug meanwhile.
        let page = pages
            .entry(slug.to_string())
            .or_insert_with(|| rendered.clone());
        Ok(page.clone())
    }

    pub fn invalidate(&self, slug: &str) -> bool {
        let mut pages = self.pages.write().unwrap_or_else(PoisonError::into_inner);
        pages.remove(slug).is_some()
    }

    pub fn clear(&self) {
        self.pages
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.pages.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
