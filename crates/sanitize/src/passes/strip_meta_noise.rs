// ABOUTME: Removes page furniture that survives scraping: bylines, dates, league tags, icon stubs.
// ABOUTME: A global sweep over leaf blocks, then a scan of the blocks right after the first heading.

use dom_query::{Document, NodeRef};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::dom::{
    block_text, contains_media, heading_level, is_attached, is_leaf_block, is_tag,
    HEADING_SELECTOR,
};
use crate::pipeline::{Pass, PassContext};
use crate::text::{char_len, is_punctuation_only};

const LEAF_SELECTOR: &str = "p, div, li";

const EXACT_NOISE: &[&str] = &["faq", "changelog", "follow"];

const SCOPED_TAGS: &[&str] = &[
    "p", "div", "span", "section", "header", "aside", "small", "time",
];

const ICON_TAGS: &[&str] = &["i", "span", "svg", "path", "use", "g", "circle", "rect"];

static LAST_UPDATED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^last\s+updated\b").unwrap());

static META_LIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^(by|written by|posted by|author:?)\s",
        r"|(?i)\b(updated|published|min read|views|patch|last edited)\b",
        r"|\b\d{1,2}[/.-]\d{1,2}[/.-]\d{2,4}\b",
        r"|(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december",
        r"|jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec)\.?\s+\d{1,2}(st|nd|rd|th)?\b",
    ))
    .unwrap()
});

pub struct StripMetaNoise;

impl Pass for StripMetaNoise {
    fn name(&self) -> &'static str {
        "strip-meta-noise"
    }

    fn run(&self, doc: &Document, ctx: &PassContext<'_>) -> usize {
        let mut removed = 0;

        for block in doc.select(LEAF_SELECTOR).nodes().iter().rev() {
            if !is_attached(block) || !is_leaf_block(block) || contains_media(block) {
                continue;
            }
            if is_noise_line(&block_text(block), ctx) {
                block.remove_from_parent();
                removed += 1;
            }
        }

        removed + strip_after_first_heading(doc, ctx)
    }
}

fn is_noise_line(text: &str, ctx: &PassContext<'_>) -> bool {
    let options = ctx.options();
    let len = char_len(text);

    is_punctuation_only(text)
        || (LAST_UPDATED.is_match(text) && len < options.last_updated_max_chars)
        || EXACT_NOISE.iter().any(|n| text.eq_ignore_ascii_case(n))
        || (len < options.league_block_max_chars && ctx.mentions_league(text))
}

/// Bylines and icon rows cluster right under the title; only that stretch is scanned.
fn strip_after_first_heading(doc: &Document, ctx: &PassContext<'_>) -> usize {
    let headings = doc.select(HEADING_SELECTOR);
    let Some(first) = headings.nodes().first() else {
        return 0;
    };

    let options = ctx.options();
    let mut removed = 0;
    let mut seen = 0;
    let mut next = first.next_element_sibling();

    while let Some(node) = next {
        if seen >= options.meta_scan_siblings || heading_level(&node).is_some() {
            break;
        }
        seen += 1;
        next = node.next_element_sibling();

        if !is_tag(&node, SCOPED_TAGS) {
            continue;
        }
        if is_icon_placeholder(&node) {
            node.remove_from_parent();
            removed += 1;
            continue;
        }
        if contains_media(&node) {
            continue;
        }

        let text = block_text(&node);
        if char_len(&text) < options.meta_block_max_chars && META_LIKE.is_match(&text) {
            node.remove_from_parent();
            removed += 1;
        }
    }

    removed
}

/// No text, and nothing but icon markup inside (or nothing at all).
fn is_icon_placeholder(node: &NodeRef) -> bool {
    node.text().trim().is_empty()
        && node
            .descendants()
            .iter()
            .filter(|d| d.is_element() && d.id != node.id)
            .all(|d| is_tag(d, ICON_TAGS))
}
