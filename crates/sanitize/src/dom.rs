// ABOUTME: DOM helpers shared by the rewrite passes.
// ABOUTME: Tag inspection, attachment checks, wrapping, and adjacent sibling-run detection on dom_query trees.

//! DOM utilities for the rewrite passes.
//!
//! Passes hold `NodeRef`s collected up front and mutate the tree while
//! walking them, so most helpers here answer "is this node still where I
//! think it is" questions cheaply.

use std::iter;
use std::mem;

use dom_query::{Document, NodeRef};

use crate::text::normalize_whitespace;

pub const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

pub const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "details", "div", "dl", "fieldset", "figure",
    "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav",
    "ol", "p", "pre", "section", "table", "ul",
];

pub const INLINE_FORMATTING_TAGS: &[&str] = &[
    "abbr", "b", "code", "em", "i", "kbd", "s", "small", "span", "strong", "sub", "sup", "u",
];

pub const MEDIA_TAGS: &[&str] = &[
    "audio", "embed", "iframe", "img", "object", "picture", "svg", "table", "video",
];

/// Lowercased tag name, `None` for non-elements.
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|name| name.to_ascii_lowercase())
}

pub fn is_tag(node: &NodeRef, names: &[&str]) -> bool {
    tag_name(node).is_some_and(|name| names.contains(&name.as_str()))
}

/// Heading level for `h1`..`h6`.
pub fn heading_level(node: &NodeRef) -> Option<u8> {
    let name = tag_name(node)?;
    let digit = name.strip_prefix('h')?;
    match digit.parse::<u8>() {
        Ok(level) if (1..=6).contains(&level) => Some(level),
        _ => None,
    }
}

/// Whitespace-normalized text content.
pub fn block_text(node: &NodeRef) -> String {
    normalize_whitespace(&node.text())
}

/// True while the node still hangs under `<body>`. Nodes inside a removed
/// subtree keep their parent link, so checking `parent()` alone is not enough.
pub fn is_attached(node: &NodeRef) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if is_tag(&parent, &["body"]) {
            return true;
        }
        current = parent.parent();
    }
    false
}

pub fn has_ancestor(node: &NodeRef, pred: impl Fn(&NodeRef) -> bool) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if is_tag(&parent, &["body"]) {
            return false;
        }
        if pred(&parent) {
            return true;
        }
        current = parent.parent();
    }
    false
}

pub fn has_data_attr(node: &NodeRef, name: &str, value: &str) -> bool {
    node.attr(name).is_some_and(|v| &*v == value)
}

pub fn contains_media(node: &NodeRef) -> bool {
    node.descendants().iter().any(|d| is_tag(d, MEDIA_TAGS))
}

/// No block-level element children.
pub fn is_leaf_block(node: &NodeRef) -> bool {
    !node.element_children().iter().any(|c| is_tag(c, BLOCK_TAGS))
}

pub fn has_only_inline_children(node: &NodeRef) -> bool {
    node.element_children()
        .iter()
        .all(|c| is_tag(c, INLINE_FORMATTING_TAGS))
}

/// Next sibling that is an element or non-blank text.
pub fn next_significant<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    iter::successors(node.next_sibling(), NodeRef::next_sibling)
        .find(|n| n.is_element() || (n.is_text() && !n.text().trim().is_empty()))
}

/// Groups candidates (in document order) into runs of directly adjacent
/// siblings. Adjacency implies a shared parent, so runs never cross containers.
pub fn sibling_runs<'a>(candidates: Vec<NodeRef<'a>>) -> Vec<Vec<NodeRef<'a>>> {
    let mut runs = Vec::new();
    let mut current: Vec<NodeRef<'a>> = Vec::new();

    for node in candidates {
        let adjacent = current
            .last()
            .and_then(next_significant)
            .is_some_and(|next| next.id == node.id);

        if !adjacent && !current.is_empty() {
            runs.push(mem::take(&mut current));
        }
        current.push(node);
    }

    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Replaces a run of siblings, and the blank text between them, with one chunk of markup.
pub fn replace_run(run: &[NodeRef], html: &str) {
    if let Some((first, rest)) = run.split_first() {
        for node in rest {
            while let Some(prev) = node.prev_sibling() {
                if !prev.is_text() || !prev.text().trim().is_empty() {
                    break;
                }
                prev.remove_from_parent();
            }
            node.remove_from_parent();
        }
        first.replace_with_html(html);
    }
}

/// Moves `node` into a new `tag` element that takes its place.
pub fn wrap<'a>(node: &NodeRef<'a>, tag: &str, attrs: &[(&str, &str)]) -> NodeRef<'a> {
    let wrapper = node.tree.new_element(tag);
    for (name, value) in attrs {
        wrapper.set_attr(name, value);
    }
    node.replace_with(&wrapper);
    wrapper.append_child(node);
    wrapper
}

/// Replaces an element with its children.
pub fn unwrap(node: &NodeRef) {
    for child in node.children() {
        node.insert_before(&child);
    }
    node.remove_from_parent();
}

/// Serialized inner HTML of `<body>`.
pub fn body_html(doc: &Document) -> String {
    doc.select("body").inner_html().to_string()
}
