// ABOUTME: Coalesces runs of adjacent blocks holding only a Roman numeral into <ol type="I">.

use dom_query::{Document, NodeRef};

use crate::dom::{block_text, is_attached, is_leaf_block, replace_run, sibling_runs};
use crate::pipeline::{Pass, PassContext};
use crate::text::is_roman_numeral;

pub struct CoalesceRoman;

impl Pass for CoalesceRoman {
    fn name(&self) -> &'static str {
        "coalesce-roman"
    }

    fn run(&self, doc: &Document, _ctx: &PassContext<'_>) -> usize {
        let candidates: Vec<NodeRef> = doc
            .select("p, div")
            .nodes()
            .iter()
            .filter(|n| is_attached(n) && is_leaf_block(n))
            .filter(|n| is_roman_numeral(&block_text(n)))
            .cloned()
            .collect();

        let mut coalesced = 0;
        for run in sibling_runs(candidates) {
            if run.len() < 2 {
                continue;
            }
            let items: String = run
                .iter()
                .map(|node| format!("<li>{}</li>", block_text(node)))
                .collect();
            replace_run(&run, &format!(r#"<ol type="I">{}</ol>"#, items));
            coalesced += run.len();
        }
        coalesced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::test_support::run_pass;

    #[test]
    fn test_coalesces_numerals() {
        let html = run_pass(&CoalesceRoman, "<p>I</p> <p>II</p> <p>III</p>");
        assert_eq!(
            html,
            r#"<ol type="I"><li>I</li><li>II</li><li>III</li></ol>"#
        );
    }

    #[test]
    fn test_lone_numeral_untouched() {
        let input = "<p>Intro</p><p>IV</p><p>Outro</p>";
        assert_eq!(run_pass(&CoalesceRoman, input), input);
    }

    #[test]
    fn test_rejects_non_canonical() {
        let input = "<p>IIII</p><p>VX</p>";
        assert_eq!(run_pass(&CoalesceRoman, input), input);
    }
}
