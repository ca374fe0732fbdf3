// ABOUTME: Main library entry point for the guide HTML sanitizer.
// ABOUTME: Re-exports the public API: transform, extract_headings, Transformer, Options, Heading.

//! guidehub-sanitize - rewrites scraped reference HTML into site-styled markup.
//!
//! The transformer parses an untrusted fragment, runs an ordered list of
//! heuristic rewrite passes over the tree, and serializes the cleaned body.
//! A second, independent pass re-reads cleaned HTML to build a table of
//! contents.
//!
//! # Example
//!
//! ```
//! use guidehub_sanitize::{extract_headings, transform};
//!
//! let html = transform("<h1>Starter Guide</h1><p>Tip: Always cap resistances.</p>");
//! let headings = extract_headings(&html);
//!
//! assert_eq!(headings[0].id, "starter-guide");
//! assert!(html.contains(r#"data-callout="tip""#));
//! ```

pub mod dom;
pub mod error;
pub mod headings;
pub mod options;
pub mod passes;
pub mod pipeline;
pub mod safelist;
pub mod slug;
pub mod text;
pub mod transformer;

pub use crate::error::SanitizeError;
pub use crate::headings::{extract_headings, Heading};
pub use crate::options::{IdCollisionPolicy, Options, OptionsBuilder};
pub use crate::pipeline::{Pass, PassContext, Pipeline};
pub use crate::slug::{slugify, SlugRegistry};
pub use crate::transformer::{transform, Rendered, Transformer};

/// Result alias for fallible sanitizer operations.
pub type Result<T> = std::result::Result<T, SanitizeError>;
