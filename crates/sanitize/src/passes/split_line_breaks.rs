// ABOUTME: Splits paragraph-like blocks on <br> into one <p> per line.
// ABOUTME: Scraped guides often fake paragraphs with <br>; empty lines are dropped.

use dom_query::{Document, NodeRef};

use crate::dom::{is_attached, is_leaf_block, is_tag, MEDIA_TAGS};
use crate::pipeline::{Pass, PassContext};

pub struct SplitLineBreaks;

impl Pass for SplitLineBreaks {
    fn name(&self) -> &'static str {
        "split-line-breaks"
    }

    fn run(&self, doc: &Document, _ctx: &PassContext<'_>) -> usize {
        let mut split = 0;

        for block in doc.select("p, div").nodes().to_vec() {
            if !is_attached(&block) || !is_leaf_block(&block) {
                continue;
            }
            if !block.children().iter().any(|c| is_tag(c, &["br"])) {
                continue;
            }

            let html: String = Self::lines(&block)
                .into_iter()
                .map(|line| format!("<p>{}</p>", line))
                .collect();
            block.replace_with_html(html);
            split += 1;
        }

        split
    }
}

#[derive(Default)]
struct Line {
    html: String,
    has_content: bool,
}

impl SplitLineBreaks {
    /// Serialized children grouped by `<br>`, keeping only lines with text or media.
    fn lines(block: &NodeRef) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = Line::default();

        for child in block.children() {
            if is_tag(&child, &["br"]) {
                lines.push(std::mem::take(&mut current));
                continue;
            }

            if child.is_text() {
                let text = child.text();
                current.has_content |= !text.trim().is_empty();
                current.html.push_str(&html_escape::encode_text(&text));
            } else if child.is_element() {
                current.has_content |= !child.text().trim().is_empty()
                    || is_tag(&child, MEDIA_TAGS)
                    || child.descendants().iter().any(|d| is_tag(d, MEDIA_TAGS));
                current.html.push_str(&child.html());
            }
        }
        lines.push(current);

        lines
            .into_iter()
            .filter(|line| line.has_content)
            .map(|line| line.html.trim().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::test_support::run_pass;

    #[test]
    fn test_splits_paragraph_on_br() {
        let html = run_pass(&SplitLineBreaks, "<p>First line<br>Second line<br/>Third</p>");
        assert_eq!(html, "<p>First line</p><p>Second line</p><p>Third</p>");
    }

    #[test]
    fn test_drops_empty_lines() {
        let html = run_pass(&SplitLineBreaks, "<div>One<br><br> <br>Two<br></div>");
        assert_eq!(html, "<p>One</p><p>Two</p>");
    }

    #[test]
    fn test_keeps_inline_markup() {
        let html = run_pass(
            &SplitLineBreaks,
            r#"<p><b>Bold</b> start<br><a href="/x">link</a> &amp; more</p>"#,
        );
        assert_eq!(
            html,
            r#"<p><b>Bold</b> start</p><p><a href="/x">link</a> &amp; more</p>"#
        );
    }

    #[test]
    fn test_keeps_image_only_line() {
        let html = run_pass(&SplitLineBreaks, r#"<p>Caption<br><img src="a.png"></p>"#);
        assert_eq!(html, r#"<p>Caption</p><p><img src="a.png"></p>"#);
    }

    #[test]
    fn test_skips_containers_with_blocks() {
        let input = "<div><p>a</p>b<br>c</div>";
        let html = run_pass(&SplitLineBreaks, input);
        assert_eq!(html, input);
    }

    #[test]
    fn test_no_br_untouched() {
        let html = run_pass(&SplitLineBreaks, "<p>Plain</p>");
        assert_eq!(html, "<p>Plain</p>");
    }
}
