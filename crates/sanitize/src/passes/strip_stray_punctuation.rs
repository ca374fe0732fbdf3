// ABOUTME: Removes leftover standalone blocks holding a single character or only punctuation.
// ABOUTME: Table contents are left alone since a lone digit in a cell is data.

use dom_query::Document;

use crate::dom::{block_text, contains_media, has_ancestor, is_attached, is_leaf_block, is_tag};
use crate::pipeline::{Pass, PassContext};
use crate::text::is_stray;

pub struct StripStrayPunctuation;

impl Pass for StripStrayPunctuation {
    fn name(&self) -> &'static str {
        "strip-stray-punctuation"
    }

    fn run(&self, doc: &Document, _ctx: &PassContext<'_>) -> usize {
        let mut removed = 0;
        for block in doc.select("p, div").nodes().iter().rev() {
            if !is_attached(block) || !is_leaf_block(block) || contains_media(block) {
                continue;
            }
            if has_ancestor(block, |n| is_tag(n, &["table"])) {
                continue;
            }
            if is_stray(&block_text(block)) {
                block.remove_from_parent();
                removed += 1;
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::test_support::run_pass;

    #[test]
    fn test_removes_stray_blocks() {
        let html = run_pass(
            &StripStrayPunctuation,
            "<p>»</p><p>Body text</p><div>x</div>",
        );
        assert_eq!(html, "<p>Body text</p>");
    }

    #[test]
    fn test_keeps_inline_single_characters() {
        let input = "<p>Press <span>Q</span> to dodge roll, then socket a <span>+</span> gem.</p>";
        assert_eq!(run_pass(&StripStrayPunctuation, input), input);
    }

    #[test]
    fn test_keeps_roman_list_items_and_cells() {
        let input = r#"<ol type="I"><li>I</li><li>V</li></ol><table><tbody><tr><td><span>5</span></td></tr></tbody></table>"#;
        assert_eq!(run_pass(&StripStrayPunctuation, input), input);
    }

    #[test]
    fn test_keeps_image_wrappers() {
        let input = r#"<p>See <span data-guide="image"><img src="a.png"></span></p>"#;
        assert_eq!(run_pass(&StripStrayPunctuation, input), input);
    }
}
