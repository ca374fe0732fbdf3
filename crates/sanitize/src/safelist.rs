// ABOUTME: Final tag/attribute safelist applied to serialized transformer output.
// ABOUTME: Built on ammonia; allows exactly the markup the rewrite passes can produce.

use ammonia::{Builder, UrlRelative};
use once_cell::sync::Lazy;

static SAFELIST: Lazy<Builder<'static>> = Lazy::new(|| {
    let mut builder = Builder::default();
    builder
        .strip_comments(true)
        .add_tags(&["figure", "figcaption", "iframe"])
        .add_generic_attributes(&["role"])
        .add_generic_attribute_prefixes(&["data-"])
        .add_tag_attributes("img", &["loading", "decoding", "srcset", "sizes"])
        // rel is set by the link-hardening pass, so ammonia must not manage it.
        .link_rel(None)
        .add_tag_attributes("a", &["target", "rel"])
        .add_tag_attributes(
            "iframe",
            &[
                "src",
                "title",
                "loading",
                "referrerpolicy",
                "allow",
                "allowfullscreen",
                "width",
                "height",
                "frameborder",
            ],
        )
        .add_tag_attributes("ol", &["type"])
        .add_tag_attributes("h2", &["id"])
        .add_tag_attributes("h3", &["id"])
        .add_tag_attributes("h4", &["id"])
        .url_relative(UrlRelative::PassThrough);
    builder
});

/// Re-filters already transformed HTML through the safelist.
pub fn clean(html: &str) -> String {
    SAFELIST.clean(html).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_pipeline_markup() {
        let html = concat!(
            r#"<h2 id="gear">Gear</h2>"#,
            r#"<div data-callout="tip" role="note"><p><strong>Tip:</strong> x</p></div>"#,
            r#"<ol type="I"><li>I</li></ol>"#,
            r#"<a href="https://poe.ninja" target="_blank" rel="noopener noreferrer">n</a>"#
        );
        assert_eq!(clean(html), html);
    }

    #[test]
    fn test_keeps_video_embed() {
        let html = clean(
            r#"<div data-guide="video"><iframe src="https://www.youtube.com/embed/a" loading="lazy" referrerpolicy="no-referrer" allowfullscreen=""></iframe></div>"#,
        );
        assert!(html.contains("<iframe"));
        assert!(html.contains(r#"referrerpolicy="no-referrer""#));
        assert!(html.contains("allowfullscreen"));
    }

    #[test]
    fn test_drops_unknown_markup() {
        let html = clean(r#"<p onclick="x()">a<font>b</font><!-- c --></p><form><input></form>"#);
        assert_eq!(html, "<p>ab</p>");
    }

    #[test]
    fn test_relative_links_survive() {
        let html = clean(r#"<a href="/guides/gear">gear</a>"#);
        assert_eq!(html, r#"<a href="/guides/gear">gear</a>"#);
    }
}
