// ABOUTME: Removes presentational attributes (style, class, id and legacy font/color attributes).
// ABOUTME: Heading ids are reassigned later, so source ids never leak through.

use dom_query::Document;

use crate::pipeline::{Pass, PassContext};

const PRESENTATION_ATTRS: &[&str] = &["style", "class", "id", "align", "bgcolor", "color", "face"];

pub struct StripPresentation;

impl Pass for StripPresentation {
    fn name(&self) -> &'static str {
        "strip-presentation"
    }

    fn run(&self, doc: &Document, _ctx: &PassContext<'_>) -> usize {
        let mut stripped = 0;
        for node in doc.select("body *").nodes() {
            if PRESENTATION_ATTRS.iter().any(|attr| node.has_attr(attr)) {
                node.remove_attrs(PRESENTATION_ATTRS);
                stripped += 1;
            }
        }
        stripped
    }
}
