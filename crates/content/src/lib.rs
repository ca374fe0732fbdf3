// ABOUTME: Guide content layer: stores, curated overrides, the page renderer, and a render cache.
// ABOUTME: Wires raw reference HTML through guidehub-sanitize into pages with a table of contents.

//! guidehub-content - turns a slug into a renderable guide page.
//!
//! # Example
//!
//! ```
//! use guidehub_content::{GuideRenderer, MemoryContentStore, PageSource};
//! use guidehub_sanitize::Transformer;
//!
//! let store = MemoryContentStore::new().with_page("starter-guide", "<h1>Starter Guide</h1>");
//! let renderer = GuideRenderer::new(store, Transformer::default());
//!
//! let page = renderer.render("starter-guide").unwrap();
//! assert_eq!(page.source, PageSource::Transformed);
//! assert_eq!(page.headings[0].id, "starter-guide");
//!
//! let missing = renderer.render("endgame").unwrap();
//! assert_eq!(missing.source, PageSource::Placeholder);
//! ```

pub mod cache;
pub mod decode;
pub mod error;
pub mod overrides;
pub mod renderer;
pub mod store;

pub use crate::cache::RenderCache;
pub use crate::decode::decode_html;
pub use crate::error::ContentError;
pub use crate::overrides::{CuratedPage, OverrideRegistry};
pub use crate::renderer::{GuidePage, GuideRenderer, PageSource, PLACEHOLDER_HTML};
pub use crate::store::{validate_slug, ContentStore, FsContentStore, MemoryContentStore};

pub type Result<T> = std::result::Result<T, ContentError>;
