// ABOUTME: Drops trailing site sections such as Credits, Changelog and Related Posts.
// ABOUTME: The heading goes with every following sibling up to the next heading of equal or higher rank.

use dom_query::{Document, NodeRef};

use crate::dom::{block_text, heading_level, is_attached, HEADING_SELECTOR};
use crate::pipeline::{Pass, PassContext};

pub struct DropSections;

impl Pass for DropSections {
    fn name(&self) -> &'static str {
        "drop-sections"
    }

    fn run(&self, doc: &Document, ctx: &PassContext<'_>) -> usize {
        let prefixes: Vec<String> = ctx
            .options()
            .section_prefixes
            .iter()
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        if prefixes.is_empty() {
            return 0;
        }

        let mut removed = 0;
        for heading in doc.select(HEADING_SELECTOR).nodes().to_vec() {
            if !is_attached(&heading) {
                continue;
            }
            let Some(level) = heading_level(&heading) else {
                continue;
            };

            let text = block_text(&heading).to_lowercase();
            if !prefixes.iter().any(|p| text.starts_with(p.as_str())) {
                continue;
            }

            removed += remove_section(&heading, level);
        }

        removed
    }
}

/// Removes `heading` and its following siblings until a heading at `level` or above.
fn remove_section(heading: &NodeRef, level: u8) -> usize {
    let mut removed = 1;
    let mut next = heading.next_sibling();

    while let Some(node) = next {
        if heading_level(&node).is_some_and(|l| l <= level) {
            break;
        }
        next = node.next_sibling();
        node.remove_from_parent();
        removed += 1;
    }

    heading.remove_from_parent();
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::test_support::run_pass;

    #[test]
    fn test_drops_credits_section() {
        let html = run_pass(
            &DropSections,
            "<h2>Credits</h2><p>Thanks to X</p><h2>Next Section</h2><p>Keep me</p>",
        );
        assert_eq!(html, "<h2>Next Section</h2><p>Keep me</p>");
    }

    #[test]
    fn test_lower_headings_are_part_of_section() {
        let html = run_pass(
            &DropSections,
            "<h2>Changelog</h2><h3>3.27.0</h3><ul><li>x</li></ul><h2>Gear</h2>",
        );
        assert_eq!(html, "<h2>Gear</h2>");
    }

    #[test]
    fn test_stops_at_higher_heading() {
        let html = run_pass(
            &DropSections,
            "<h2>Intro</h2><h3>Related Posts and Guides</h3><p>links</p><h2>Build</h2>",
        );
        assert_eq!(html, "<h2>Intro</h2><h2>Build</h2>");
    }

    #[test]
    fn test_section_runs_to_end() {
        let html = run_pass(&DropSections, "<p>Body</p><h2>credits</h2><p>a</p><p>b</p>");
        assert_eq!(html, "<p>Body</p>");
    }

    #[test]
    fn test_prefix_must_lead() {
        let input = "<h2>Our Credits</h2><p>Keep</p>";
        assert_eq!(run_pass(&DropSections, input), input);
    }
}
