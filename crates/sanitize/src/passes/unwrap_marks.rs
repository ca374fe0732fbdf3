// ABOUTME: Replaces <mark> highlight elements with their contents.

use dom_query::Document;

use crate::dom::unwrap;
use crate::pipeline::{Pass, PassContext};

pub struct UnwrapMarks;

impl Pass for UnwrapMarks {
    fn name(&self) -> &'static str {
        "unwrap-marks"
    }

    fn run(&self, doc: &Document, _ctx: &PassContext<'_>) -> usize {
        let marks = doc.select("mark").nodes().to_vec();
        for mark in &marks {
            unwrap(mark);
        }
        marks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::test_support::run_pass;

    #[test]
    fn test_unwraps_marks() {
        let html = run_pass(
            &UnwrapMarks,
            "<p>Use <mark>Righteous <mark>Fire</mark></mark> early</p>",
        );
        assert_eq!(html, "<p>Use Righteous Fire early</p>");
    }

    #[test]
    fn test_keeps_nested_markup() {
        let html = run_pass(&UnwrapMarks, "<p><mark><b>Key</b> node</mark></p>");
        assert_eq!(html, "<p><b>Key</b> node</p>");
    }
}
