// ABOUTME: Table-of-contents extraction from cleaned HTML.
// ABOUTME: Re-parses the fragment read-only and lists every h2/h3 with its id and text.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::slug::{slugify, EMPTY_SLUG_FALLBACK};
use crate::text::normalize_whitespace;

static TOC_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h2, h3").unwrap());

/// One table-of-contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub id: String,
    pub text: String,
    pub level: u8,
}

/// Lists the `h2`/`h3` headings of `cleaned_html` in document order.
///
/// The id comes from the element's `id` attribute; headings without one get
/// a slug of their text. Nothing is written back.
pub fn extract_headings(cleaned_html: &str) -> Vec<Heading> {
    let fragment = Html::parse_fragment(cleaned_html);

    fragment
        .select(&TOC_SELECTOR)
        .map(|element| {
            let text = normalize_whitespace(&element.text().collect::<String>());
            let level = if element.value().name() == "h2" { 2 } else { 3 };
            let id = match element.value().attr("id").map(str::trim) {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => derive_id(&text),
            };
            Heading { id, text, level }
        })
        .collect()
}

fn derive_id(text: &str) -> String {
    let slug = slugify(text);
    if slug.is_empty() {
        EMPTY_SLUG_FALLBACK.to_string()
    } else {
        slug
    }
}
