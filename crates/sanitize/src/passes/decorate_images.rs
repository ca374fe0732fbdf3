// ABOUTME: Adds lazy-loading attributes and default dimensions to images and wraps them.
// ABOUTME: Block images become <figure data-guide="image">, inline ones <span data-guide="image">.

use dom_query::{Document, NodeRef};

use crate::dom::{has_ancestor, has_data_attr, is_attached, is_tag, wrap};
use crate::pipeline::{Pass, PassContext};

const GUIDE_ATTR: &str = "data-guide";
const IMAGE_MARKER: &str = "image";

pub struct DecorateImages;

impl Pass for DecorateImages {
    fn name(&self) -> &'static str {
        "decorate-images"
    }

    fn run(&self, doc: &Document, ctx: &PassContext<'_>) -> usize {
        let options = ctx.options();
        let width = options.default_image_width.to_string();
        let height = options.default_image_height.to_string();
        let mut decorated = 0;

        for img in doc.select("img").nodes().to_vec() {
            if !is_attached(&img) {
                continue;
            }

            img.set_attr("loading", "lazy");
            img.set_attr("decoding", "async");
            if !img.has_attr("width") {
                img.set_attr("width", &width);
            }
            if !img.has_attr("height") {
                img.set_attr("height", &height);
            }
            decorated += 1;

            if has_ancestor(&img, |n| has_data_attr(n, GUIDE_ATTR, IMAGE_MARKER)) {
                continue;
            }
            Self::wrap_image(&img);
        }

        decorated
    }
}

impl DecorateImages {
    fn wrap_image(img: &NodeRef) {
        // A linked image moves together with its anchor.
        let target = match img.parent() {
            Some(parent) if is_tag(&parent, &["a"]) && is_alone(img) => parent,
            _ => img.clone(),
        };
        let Some(parent) = target.parent() else {
            return;
        };

        if is_tag(&parent, &["figure"]) {
            parent.set_attr(GUIDE_ATTR, IMAGE_MARKER);
        } else if is_tag(&parent, &["p"]) && is_alone(&target) {
            parent.rename("figure");
            parent.set_attr(GUIDE_ATTR, IMAGE_MARKER);
        } else if has_inline_siblings(&target) {
            wrap(&target, "span", &[(GUIDE_ATTR, IMAGE_MARKER)]);
        } else {
            wrap(&target, "figure", &[(GUIDE_ATTR, IMAGE_MARKER)]);
        }
    }
}

/// The node is its parent's only child apart from blank text.
fn is_alone(node: &NodeRef) -> bool {
    node.parent().is_some_and(|parent| {
        parent
            .children()
            .iter()
            .all(|c| c.id == node.id || (c.is_text() && c.text().trim().is_empty()))
    })
}

/// Shares its parent with text, as in an image placed mid-sentence.
fn has_inline_siblings(node: &NodeRef) -> bool {
    node.parent().is_some_and(|parent| {
        parent
            .children()
            .iter()
            .any(|c| c.id != node.id && c.is_text() && !c.text().trim().is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::test_support::run_pass;

    #[test]
    fn test_lone_image_paragraph_becomes_figure() {
        let html = run_pass(&DecorateImages, r#"<p><img src="a.png" alt="Tree"></p>"#);
        assert_eq!(
            html,
            r#"<figure data-guide="image"><img src="a.png" alt="Tree" loading="lazy" decoding="async" width="800" height="450"></figure>"#
        );
    }

    #[test]
    fn test_keeps_existing_dimensions() {
        let html = run_pass(
            &DecorateImages,
            r#"<div><img src="a.png" width="64" height="64"></div>"#,
        );
        assert_eq!(
            html,
            r#"<div><figure data-guide="image"><img src="a.png" width="64" height="64" loading="lazy" decoding="async"></figure></div>"#
        );
    }

    #[test]
    fn test_inline_image_gets_span() {
        let html = run_pass(&DecorateImages, r#"<p>Socket <img src="gem.png"> here</p>"#);
        assert!(html.starts_with(r#"<p>Socket <span data-guide="image"><img src="gem.png""#));
        assert!(html.ends_with("</span> here</p>"));
    }

    #[test]
    fn test_linked_image_wraps_anchor() {
        let html = run_pass(&DecorateImages, r#"<p><a href="/full.png"><img src="a.png"></a></p>"#);
        assert!(html.starts_with(r#"<figure data-guide="image"><a href="/full.png"><img"#));
    }

    #[test]
    fn test_existing_figure_is_marked_not_rewrapped() {
        let html = run_pass(
            &DecorateImages,
            r#"<figure><img src="a.png"><figcaption>Cap</figcaption></figure>"#,
        );
        assert!(html.starts_with(r#"<figure data-guide="image"><img"#));
        assert_eq!(html.matches("<figure").count(), 1);
    }

    #[test]
    fn test_second_run_is_stable() {
        let once = run_pass(&DecorateImages, r#"<p><img src="a.png"></p>"#);
        let twice = run_pass(&DecorateImages, &once);
        assert_eq!(once, twice);
    }
}
