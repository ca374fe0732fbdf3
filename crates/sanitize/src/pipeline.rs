// ABOUTME: The Pass trait, the per-run PassContext, and the ordered Pipeline of rewrite passes.
// ABOUTME: Pipeline::default_passes fixes the pass order the transformer relies on.

use aho_corasick::AhoCorasick;
use dom_query::Document;
use log::debug;

use crate::error::SanitizeError;
use crate::options::Options;
use crate::passes::{
    AssignHeadingIds, CoalesceBullets, CoalesceRoman, DecorateImages, DemoteHeadings, DropSections,
    EmbedVideos, HardenLinks, PromoteHeadings, RewriteCallouts, SplitLineBreaks,
    SplitLongParagraphs, StripBrand, StripDisallowed, StripMetaNoise, StripPresentation,
    StripStrayPunctuation, UnwrapMarks, WrapTables,
};

/// One rewrite over the parsed document.
///
/// Passes run in sequence against the same tree and must tolerate whatever
/// earlier passes left behind. `run` returns how many nodes it touched,
/// which only feeds debug logging.
pub trait Pass: Send + Sync {
    fn name(&self) -> &'static str;

    fn run(&self, doc: &Document, ctx: &PassContext<'_>) -> usize;
}

/// Case-insensitive token matchers compiled once per transformer.
#[derive(Debug, Clone)]
pub struct TokenMatchers {
    brands: AhoCorasick,
    leagues: AhoCorasick,
    has_brands: bool,
}

impl TokenMatchers {
    pub fn new(options: &Options) -> Result<Self, SanitizeError> {
        Ok(Self {
            brands: build_matcher(&options.brand_tokens)?,
            leagues: build_matcher(&options.league_tokens)?,
            has_brands: options.brand_tokens.iter().any(|t| !t.trim().is_empty()),
        })
    }
}

fn build_matcher(tokens: &[String]) -> Result<AhoCorasick, SanitizeError> {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(tokens.iter().map(|t| t.trim()).filter(|t| !t.is_empty()))
        .map_err(SanitizeError::invalid_options)
}

/// Read-only state shared by every pass of one run.
pub struct PassContext<'a> {
    options: &'a Options,
    matchers: &'a TokenMatchers,
}

impl<'a> PassContext<'a> {
    pub fn new(options: &'a Options, matchers: &'a TokenMatchers) -> Self {
        Self { options, matchers }
    }

    pub fn options(&self) -> &Options {
        self.options
    }

    pub fn has_brand_tokens(&self) -> bool {
        self.matchers.has_brands
    }

    pub fn mentions_brand(&self, text: &str) -> bool {
        self.matchers.brands.is_match(text)
    }

    pub fn mentions_league(&self, text: &str) -> bool {
        self.matchers.leagues.is_match(text)
    }
}

/// An ordered list of passes.
pub struct Pipeline {
    passes: Vec<Box<dyn Pass>>,
}

impl Pipeline {
    /// The standard pass order. Line-break splitting must precede bullet
    /// coalescing, which must precede long-paragraph splitting; heading ids
    /// are assigned last so promoted headings get one too.
    pub fn default_passes() -> Self {
        Self::with_passes(vec![
            Box::new(StripDisallowed),
            Box::new(SplitLineBreaks),
            Box::new(StripBrand),
            Box::new(DropSections),
            Box::new(DemoteHeadings),
            Box::new(UnwrapMarks),
            Box::new(StripPresentation),
            Box::new(StripMetaNoise),
            Box::new(DecorateImages),
            Box::new(WrapTables),
            Box::new(EmbedVideos),
            Box::new(PromoteHeadings),
            Box::new(CoalesceBullets),
            Box::new(CoalesceRoman),
            Box::new(StripStrayPunctuation),
            Box::new(SplitLongParagraphs),
            Box::new(RewriteCallouts),
            Box::new(HardenLinks),
            Box::new(AssignHeadingIds),
        ])
    }

    pub fn with_passes(passes: Vec<Box<dyn Pass>>) -> Self {
        Self { passes }
    }

    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    pub fn run(&self, doc: &Document, ctx: &PassContext<'_>) {
        for pass in &self.passes {
            let touched = pass.run(doc, ctx);
            if touched > 0 {
                debug!("pass {} touched {} node(s)", pass.name(), touched);
            }
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::default_passes()
    }
}
