// ABOUTME: Demotes the top heading tag by one level when it outranks the page's own h1.
// ABOUTME: Only the single highest tag present is renamed; lower headings keep their level.

use dom_query::Document;

use crate::dom::{heading_level, HEADING_SELECTOR};
use crate::pipeline::{Pass, PassContext};

pub struct DemoteHeadings;

impl Pass for DemoteHeadings {
    fn name(&self) -> &'static str {
        "demote-headings"
    }

    fn run(&self, doc: &Document, ctx: &PassContext<'_>) -> usize {
        let headings = doc.select(HEADING_SELECTOR);
        let Some(top) = headings.nodes().iter().filter_map(heading_level).min() else {
            return 0;
        };
        if top >= ctx.options().top_heading_level {
            return 0;
        }

        let tag = format!("h{}", top);
        let demoted = doc.select(&tag);
        let count = demoted.length();
        demoted.rename(&format!("h{}", top + 1));
        count
    }
}
