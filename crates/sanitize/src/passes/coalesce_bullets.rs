// ABOUTME: Coalesces runs of adjacent bullet-prefixed paragraphs into a single <ul>.
// ABOUTME: The glyph is stripped from each item; a lone bulleted line stays a paragraph.

use dom_query::{Document, NodeRef};

use crate::dom::{block_text, is_attached, is_leaf_block, replace_run, sibling_runs};
use crate::pipeline::{Pass, PassContext};
use crate::text::strip_bullet;

pub struct CoalesceBullets;

impl Pass for CoalesceBullets {
    fn name(&self) -> &'static str {
        "coalesce-bullets"
    }

    fn run(&self, doc: &Document, _ctx: &PassContext<'_>) -> usize {
        let candidates: Vec<NodeRef> = doc
            .select("p, div")
            .nodes()
            .iter()
            .filter(|n| is_attached(n) && is_leaf_block(n))
            .filter(|n| strip_bullet(&block_text(n)).is_some())
            .cloned()
            .collect();

        let mut coalesced = 0;
        for run in sibling_runs(candidates) {
            if run.len() < 2 {
                continue;
            }
            let items: String = run
                .iter()
                .map(|node| format!("<li>{}</li>", item_html(node)))
                .collect();
            replace_run(&run, &format!("<ul>{}</ul>", items));
            coalesced += run.len();
        }
        coalesced
    }
}

/// Inner markup minus the bullet, or the escaped text when the glyph sits inside markup.
fn item_html(node: &NodeRef) -> String {
    let inner = node.inner_html();
    let inner = trim_nbsp(&inner);

    if let Some(rest) = strip_bullet(inner) {
        return trim_nbsp(rest).trim_end().to_string();
    }

    let text = block_text(node);
    let stripped = strip_bullet(&text).unwrap_or(&text);
    html_escape::encode_text(stripped.trim()).into_owned()
}

fn trim_nbsp(s: &str) -> &str {
    let mut s = s.trim_start();
    while let Some(rest) = s.strip_prefix("&nbsp;") {
        s = rest.trim_start();
    }
    s
}
