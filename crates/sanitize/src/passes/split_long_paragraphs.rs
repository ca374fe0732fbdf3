// ABOUTME: Breaks walls of text into shorter paragraphs at sentence boundaries.
// ABOUTME: Boundaries are taken from the paragraph's own text nodes; inline elements move whole.

use std::mem;

use dom_query::{Document, NodeRef};

use crate::dom::{block_text, has_ancestor, is_attached};
use crate::pipeline::{Pass, PassContext};
use crate::text::{char_len, group_spans, sentence_breaks};

const MIN_SENTENCES: usize = 3;

pub struct SplitLongParagraphs;

impl Pass for SplitLongParagraphs {
    fn name(&self) -> &'static str {
        "split-long-paragraphs"
    }

    fn run(&self, doc: &Document, ctx: &PassContext<'_>) -> usize {
        let options = ctx.options();
        let mut split = 0;

        for p in doc.select("p").nodes().to_vec() {
            if !is_attached(&p) || has_ancestor(&p, |n| n.has_attr("data-callout")) {
                continue;
            }
            if char_len(&block_text(&p)) <= options.long_paragraph_chars {
                continue;
            }

            let sentences = sentences_of(&p);
            if sentences.len() < MIN_SENTENCES {
                continue;
            }

            let lengths: Vec<usize> = sentences.iter().map(|s| char_len(&s.text)).collect();
            let spans = group_spans(
                &lengths,
                options.paragraph_chunk_chars,
                options.paragraph_chunk_sentences,
            );
            if spans.len() < 2 {
                continue;
            }

            let html: String = spans
                .into_iter()
                .map(|span| {
                    let chunk: Vec<&str> =
                        sentences[span].iter().map(|s| s.html.as_str()).collect();
                    format!("<p>{}</p>", chunk.join(" "))
                })
                .collect();
            p.replace_with_html(html);
            split += 1;
        }

        split
    }
}

/// A sentence as serialized markup plus its visible text.
struct Sentence {
    html: String,
    text: String,
}

/// Cuts a paragraph into sentences. Only breaks inside its direct text nodes
/// count, so a link or bold run always lands whole in one sentence.
fn sentences_of(p: &NodeRef) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut current = Sentence {
        html: String::new(),
        text: String::new(),
    };

    for child in p.children() {
        if child.is_element() {
            current.html.push_str(&child.html());
            current.text.push_str(&child.text());
        } else if child.is_text() {
            let raw = child.text();
            let mut start = 0;
            for (end, next) in sentence_breaks(&raw) {
                current.push_text(&raw[start..end]);
                current.finish_into(&mut sentences);
                start = next;
            }
            current.push_text(&raw[start..]);
        }
    }

    current.finish_into(&mut sentences);
    sentences
}

impl Sentence {
    fn push_text(&mut self, text: &str) {
        let text = if self.html.is_empty() {
            text.trim_start()
        } else {
            text
        };
        self.html.push_str(&html_escape::encode_text(text));
        self.text.push_str(text);
    }

    fn finish_into(&mut self, sentences: &mut Vec<Sentence>) {
        let html = mem::take(&mut self.html);
        let text = mem::take(&mut self.text);
        if html.trim().is_empty() {
            return;
        }
        sentences.push(Sentence {
            html: html.trim_end().to_string(),
            text: text.trim().to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::test_support::run_pass;

    fn sentence(n: usize) -> String {
        format!(
            "Sentence {} explains a mechanic of the passive tree in enough detail to matter for new players starting out in the league.",
            n
        )
    }

    #[test]
    fn test_splits_wall_of_text() {
        let text: Vec<String> = (1..=6).map(sentence).collect();
        let input = format!("<p>{}</p>", text.join(" "));
        let html = run_pass(&SplitLongParagraphs, &input);

        assert_eq!(html.matches("<p>").count(), 3);
        assert!(html.starts_with(&format!("<p>{} {}</p>", text[0], text[1])));
    }

    #[test]
    fn test_short_paragraph_untouched() {
        let input = "<p>One. Two. Three.</p>";
        assert_eq!(run_pass(&SplitLongParagraphs, input), input);
    }

    #[test]
    fn test_splits_around_inline_markup() {
        let text: Vec<String> = (1..=6).map(sentence).collect();
        let input = format!(
            r#"<p><b>Sentence 0</b> opens the list. {} See <a href="/x">the tree</a> for details.</p>"#,
            text.join(" ")
        );
        let html = run_pass(&SplitLongParagraphs, &input);

        assert!(html.matches("<p>").count() >= 3);
        assert!(html.starts_with("<p><b>Sentence 0</b> opens the list."));
        assert!(html.ends_with(r#"See <a href="/x">the tree</a> for details.</p>"#));
    }

    #[test]
    fn test_break_inside_markup_is_not_used() {
        let inner: Vec<String> = (1..=6).map(sentence).collect();
        let input = format!("<p>Lead in. <i>{}</i> Tail here.</p>", inner.join(" "));
        assert_eq!(run_pass(&SplitLongParagraphs, &input), input);
    }

    #[test]
    fn test_escapes_text_when_splitting() {
        let text: Vec<String> = (1..=6).map(sentence).collect();
        let input = format!("<p>Flasks &amp; charges matter. {}</p>", text.join(" "));
        let html = run_pass(&SplitLongParagraphs, &input);

        assert!(html.starts_with("<p>Flasks &amp; charges matter."));
        assert!(html.matches("<p>").count() >= 3);
    }

    #[test]
    fn test_too_few_sentences_untouched() {
        let long = "word ".repeat(120);
        let input = format!("<p>{}ends here. Second sentence.</p>", long);
        assert_eq!(run_pass(&SplitLongParagraphs, &input), input);
    }
}
