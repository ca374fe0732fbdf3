// ABOUTME: The Transformer that parses raw guide HTML, runs the pass pipeline, and serializes the result.
// ABOUTME: Also provides the default-options transform() entry point and render() for html plus headings.

use dom_query::Document;
use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::dom::body_html;
use crate::error::SanitizeError;
use crate::headings::{extract_headings, Heading};
use crate::options::{Options, OptionsBuilder};
use crate::pipeline::{PassContext, Pipeline, TokenMatchers};
use crate::safelist;

static DEFAULT_TRANSFORMER: Lazy<Transformer> =
    Lazy::new(|| Transformer::new(Options::default()).expect("default options are valid"));

/// Cleaned HTML together with its table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub html: String,
    pub headings: Vec<Heading>,
}

/// Rewrites scraped reference HTML into site markup.
///
/// Construction validates the options and compiles the token matchers once;
/// `transform` can then be called from any number of threads.
pub struct Transformer {
    opts: Options,
    matchers: TokenMatchers,
    pipeline: Pipeline,
}

impl Transformer {
    /// Create a new OptionsBuilder for configuring a transformer.
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::new()
    }

    /// Create a transformer with the standard pass order.
    pub fn new(opts: Options) -> Result<Self, SanitizeError> {
        opts.validate()?;
        let matchers = TokenMatchers::new(&opts)?;
        Ok(Self {
            opts,
            matchers,
            pipeline: Pipeline::default_passes(),
        })
    }

    /// Replace the pass list, e.g. to run a subset of passes.
    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Transform raw HTML into cleaned body-level HTML. Never fails;
    /// malformed markup is repaired by the parser.
    pub fn transform(&self, raw_html: &str) -> String {
        let doc = Document::from(raw_html);
        let ctx = PassContext::new(&self.opts, &self.matchers);
        self.pipeline.run(&doc, &ctx);

        let html = body_html(&doc);
        let html = if self.opts.enforce_safelist {
            safelist::clean(&html)
        } else {
            html
        };

        debug!(
            "transformed {} byte(s) of input into {} byte(s)",
            raw_html.len(),
            html.len()
        );
        html
    }

    /// Transform and extract the table of contents in one call.
    pub fn render(&self, raw_html: &str) -> Rendered {
        let html = self.transform(raw_html);
        let headings = extract_headings(&html);
        Rendered { html, headings }
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self {
            opts: Options::default(),
            matchers: DEFAULT_TRANSFORMER.matchers.clone(),
            pipeline: Pipeline::default_passes(),
        }
    }
}

/// Transform raw HTML with the default options.
pub fn transform(raw_html: &str) -> String {
    DEFAULT_TRANSFORMER.transform(raw_html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::{AssignHeadingIds, DemoteHeadings};

    #[test]
    fn test_transformer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Transformer>();
    }

    #[test]
    fn test_rejects_invalid_options() {
        let opts = Options::builder().top_heading_level(0).build();
        let err = Transformer::new(opts).err().unwrap();
        assert!(err.is_invalid_options());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(transform(""), "");
    }

    #[test]
    fn test_custom_pipeline() {
        let transformer = Transformer::default().with_pipeline(Pipeline::with_passes(vec![
            Box::new(DemoteHeadings),
            Box::new(AssignHeadingIds),
        ]));

        let rendered = transformer.render("<h1>Title</h1><p class=\"x\">Body</p>");
        assert_eq!(rendered.html, r#"<h2 id="title">Title</h2><p>Body</p>"#);
        assert_eq!(rendered.headings.len(), 1);
        assert_eq!(rendered.headings[0].level, 2);
    }

    #[test]
    fn test_safelist_can_be_disabled() {
        let opts = Options::builder().enforce_safelist(false).build();
        let transformer = Transformer::new(opts)
            .unwrap()
            .with_pipeline(Pipeline::with_passes(Vec::new()));

        let html = transformer.transform("<p onclick=\"x()\">Body</p>");
        assert_eq!(html, r#"<p onclick="x()">Body</p>"#);
    }
}
