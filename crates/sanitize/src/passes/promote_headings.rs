// ABOUTME: Promotes short title-like lines (bold labels, "Early Game", etc.) to <h3> headings.
// ABOUTME: Lines inside lists, tables, figures, quotes or callouts are never promoted.

use dom_query::{Document, NodeRef};

use crate::dom::{
    block_text, has_ancestor, has_only_inline_children, is_attached, is_leaf_block, is_tag,
};
use crate::options::Options;
use crate::pipeline::{Pass, PassContext};
use crate::text::{
    ends_with_sentence_punctuation, is_roman_numeral, is_stray, is_title_case, parse_callout,
    strip_bullet, word_count,
};

const EXCLUDED_CONTAINERS: &[&str] = &[
    "li", "td", "th", "ul", "ol", "table", "figure", "blockquote",
];

pub struct PromoteHeadings;

impl Pass for PromoteHeadings {
    fn name(&self) -> &'static str {
        "promote-headings"
    }

    fn run(&self, doc: &Document, ctx: &PassContext<'_>) -> usize {
        let mut promoted = 0;

        for block in doc.select("p, div").nodes().to_vec() {
            if !is_attached(&block) || !is_candidate(&block) {
                continue;
            }
            if looks_like_heading(&block_text(&block), ctx.options()) {
                block.rename("h3");
                promoted += 1;
            }
        }

        promoted
    }
}

fn is_candidate(block: &NodeRef) -> bool {
    is_leaf_block(block)
        && has_only_inline_children(block)
        && !block.has_attr("data-callout")
        && !has_ancestor(block, |n| {
            is_tag(n, EXCLUDED_CONTAINERS) || n.has_attr("data-callout")
        })
}

/// Short, unpunctuated, Title Case or keyword text.
pub(crate) fn looks_like_heading(text: &str, options: &Options) -> bool {
    let words = word_count(text);
    if words == 0 || words > options.promote_max_words {
        return false;
    }
    if !text.chars().any(char::is_alphabetic) || is_stray(text) {
        return false;
    }
    if strip_bullet(text).is_some() || is_roman_numeral(text) || parse_callout(text).is_some() {
        return false;
    }
    if ends_with_sentence_punctuation(text) {
        return false;
    }

    let label = text.trim_end_matches(':').trim().to_lowercase();
    is_title_case(text)
        || options
            .promote_keywords
            .iter()
            .any(|k| k.trim().to_lowercase() == label)
}
