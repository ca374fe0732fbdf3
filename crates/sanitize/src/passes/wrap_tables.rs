// ABOUTME: Wraps outermost tables in <div data-guide="table"> for horizontal scrolling.

use dom_query::Document;

use crate::dom::{has_ancestor, has_data_attr, is_attached, is_tag, wrap};
use crate::pipeline::{Pass, PassContext};

pub struct WrapTables;

impl Pass for WrapTables {
    fn name(&self) -> &'static str {
        "wrap-tables"
    }

    fn run(&self, doc: &Document, _ctx: &PassContext<'_>) -> usize {
        let mut wrapped = 0;
        for table in doc.select("table").nodes().to_vec() {
            if !is_attached(&table) || has_ancestor(&table, |n| is_tag(n, &["table"])) {
                continue;
            }
            let already = table
                .parent()
                .is_some_and(|p| is_tag(&p, &["div"]) && has_data_attr(&p, "data-guide", "table"));
            if already {
                continue;
            }
            wrap(&table, "div", &[("data-guide", "table")]);
            wrapped += 1;
        }
        wrapped
    }
}
