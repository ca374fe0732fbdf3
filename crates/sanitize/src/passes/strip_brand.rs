// ABOUTME: Removes competitor-brand mentions: short blocks, then anchors, then images.
// ABOUTME: Blocks are visited innermost first so only the smallest enclosing block goes.

use dom_query::{Document, NodeRef};

use crate::dom::{block_text, is_attached};
use crate::pipeline::{Pass, PassContext};
use crate::text::char_len;

const BRAND_BLOCK_SELECTOR: &str =
    "p, div, li, section, aside, blockquote, figure, figcaption, h1, h2, h3, h4, h5, h6";

pub struct StripBrand;

impl Pass for StripBrand {
    fn name(&self) -> &'static str {
        "strip-brand"
    }

    fn run(&self, doc: &Document, ctx: &PassContext<'_>) -> usize {
        if !ctx.has_brand_tokens() {
            return 0;
        }

        let max_chars = ctx.options().brand_block_max_chars;
        let mut removed = 0;

        // Reverse document order puts descendants before their ancestors.
        for block in doc.select(BRAND_BLOCK_SELECTOR).nodes().iter().rev() {
            if !is_attached(block) {
                continue;
            }
            let text = block_text(block);
            if ctx.mentions_brand(&text) && char_len(&text) < max_chars {
                block.remove_from_parent();
                removed += 1;
            }
        }

        for anchor in doc.select("a").nodes().to_vec() {
            if !is_attached(&anchor) {
                continue;
            }
            if attr_mentions_brand(&anchor, &["href"], ctx) || ctx.mentions_brand(&anchor.text()) {
                anchor.remove_from_parent();
                removed += 1;
            }
        }

        for img in doc.select("img").nodes().to_vec() {
            if is_attached(&img) && attr_mentions_brand(&img, &["src", "srcset", "alt"], ctx) {
                img.remove_from_parent();
                removed += 1;
            }
        }

        removed
    }
}

fn attr_mentions_brand(node: &NodeRef, attrs: &[&str], ctx: &PassContext<'_>) -> bool {
    attrs
        .iter()
        .filter_map(|name| node.attr(name))
        .any(|value| ctx.mentions_brand(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::pipeline::test_support::{run_pass, run_pass_with};

    #[test]
    fn test_removes_short_block() {
        let html = run_pass(
            &StripBrand,
            "<p>Guide written by the Maxroll team.</p><p>Cap your resistances.</p>",
        );
        assert_eq!(html, "<p>Cap your resistances.</p>");
    }

    #[test]
    fn test_removes_innermost_block_only() {
        let html = run_pass(
            &StripBrand,
            "<div><p>Keep this line.</p><p>Visit maxroll.gg for more.</p></div>",
        );
        assert_eq!(html, "<div><p>Keep this line.</p></div>");
    }

    #[test]
    fn test_keeps_long_block() {
        let long = format!("{} maxroll", "word ".repeat(300));
        let input = format!("<p>{}</p>", long.trim());
        let html = run_pass(&StripBrand, &input);
        assert_eq!(html, input);
    }

    #[test]
    fn test_removes_anchor_by_href() {
        let html = run_pass(
            &StripBrand,
            r#"<span>See <a href="https://maxroll.gg/poe">this planner</a> now</span>"#,
        );
        assert_eq!(html, "<span>See  now</span>");
    }

    #[test]
    fn test_removes_image_by_src() {
        let html = run_pass(
            &StripBrand,
            r#"<figure><img src="https://assets-ng.maxroll.gg/x.png"><img src="/ok.png"></figure>"#,
        );
        assert_eq!(html, r#"<figure><img src="/ok.png"></figure>"#);
    }

    #[test]
    fn test_no_tokens_is_noop() {
        let options = Options::builder().brand_tokens(Vec::<String>::new()).build();
        let input = "<p>Maxroll</p>";
        assert_eq!(run_pass_with(&StripBrand, input, &options), input);
    }
}
