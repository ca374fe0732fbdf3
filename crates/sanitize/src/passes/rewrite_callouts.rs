// ABOUTME: Rewrites "Note:", "Tip:", "Warning:" and "Important:" paragraphs into callout blocks.
// ABOUTME: Output is <div data-callout="kind" role="note"> with the keyword as written in bold, then the remainder.

use std::fmt;

use dom_query::{Document, NodeRef};

use crate::dom::{block_text, has_ancestor, is_attached};
use crate::pipeline::{Pass, PassContext};
use crate::text::parse_callout;

/// The closed set of callout kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalloutKind {
    Note,
    Tip,
    Warning,
    Important,
}

impl CalloutKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "note" => Some(CalloutKind::Note),
            "tip" => Some(CalloutKind::Tip),
            "warning" => Some(CalloutKind::Warning),
            "important" => Some(CalloutKind::Important),
            _ => None,
        }
    }

    /// Value of the `data-callout` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            CalloutKind::Note => "note",
            CalloutKind::Tip => "tip",
            CalloutKind::Warning => "warning",
            CalloutKind::Important => "important",
        }
    }
}

impl fmt::Display for CalloutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct RewriteCallouts;

impl Pass for RewriteCallouts {
    fn name(&self) -> &'static str {
        "rewrite-callouts"
    }

    fn run(&self, doc: &Document, _ctx: &PassContext<'_>) -> usize {
        let mut rewritten = 0;

        for p in doc.select("p").nodes().to_vec() {
            if !is_attached(&p) || has_ancestor(&p, |n| n.has_attr("data-callout")) {
                continue;
            }

            let text = block_text(&p);
            let Some((keyword, rest)) = parse_callout(&text) else {
                continue;
            };
            let Some(kind) = CalloutKind::from_keyword(keyword) else {
                continue;
            };

            let body = rest_html(&p, keyword.len())
                .unwrap_or_else(|| html_escape::encode_text(rest).into_owned());
            p.replace_with_html(format!(
                r#"<div data-callout="{}" role="note"><p><strong>{}:</strong> {}</p></div>"#,
                kind.as_str(),
                keyword,
                body
            ));
            rewritten += 1;
        }

        rewritten
    }
}

/// The paragraph's markup after `Keyword:`, when the keyword leads the raw HTML.
fn rest_html(p: &NodeRef, keyword_len: usize) -> Option<String> {
    let inner = p.inner_html();
    let inner = inner.trim_start();

    CalloutKind::from_keyword(inner.get(..keyword_len)?)?;

    let after = inner.get(keyword_len..)?.trim_start();
    let rest = after.strip_prefix(':')?.trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}
