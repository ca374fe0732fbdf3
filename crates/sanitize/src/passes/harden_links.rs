// ABOUTME: Opens absolute http(s) links in a new tab with rel="noopener noreferrer".

use dom_query::Document;
use url::Url;

use crate::pipeline::{Pass, PassContext};

pub struct HardenLinks;

impl Pass for HardenLinks {
    fn name(&self) -> &'static str {
        "harden-links"
    }

    fn run(&self, doc: &Document, _ctx: &PassContext<'_>) -> usize {
        let mut hardened = 0;
        for anchor in doc.select("a[href]").nodes() {
            let Some(href) = anchor.attr("href") else {
                continue;
            };
            if !is_external(&href) {
                continue;
            }
            anchor.set_attr("target", "_blank");
            anchor.set_attr("rel", "noopener noreferrer");
            hardened += 1;
        }
        hardened
    }
}

fn is_external(href: &str) -> bool {
    Url::parse(href.trim())
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}
