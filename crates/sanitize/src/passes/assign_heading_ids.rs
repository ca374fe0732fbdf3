// ABOUTME: Gives every h2-h4 a slug id derived from its text, for the table of contents.
// ABOUTME: Collisions are resolved by the configured policy, in document order.

use dom_query::Document;

use crate::dom::block_text;
use crate::pipeline::{Pass, PassContext};
use crate::slug::SlugRegistry;

pub struct AssignHeadingIds;

impl Pass for AssignHeadingIds {
    fn name(&self) -> &'static str {
        "assign-heading-ids"
    }

    fn run(&self, doc: &Document, ctx: &PassContext<'_>) -> usize {
        let mut registry = SlugRegistry::new(ctx.options().id_collision);
        let headings = doc.select("h2, h3, h4");

        for heading in headings.nodes() {
            let id = registry.claim(&block_text(heading));
            heading.set_attr("id", &id);
        }
        headings.length()
    }
}
