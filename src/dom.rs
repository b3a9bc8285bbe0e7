//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` for the few tree operations the extractor
//! needs: selecting, swapping nodes for text, and reading visible text with
//! per-node whitespace stripping.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

use crate::patterns::INVISIBLE_TEXT_TAGS;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Querying ===

/// First element in the document matching a CSS selector
#[must_use]
pub fn find_first<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    let found = doc.select(selector).first();
    if found.is_empty() {
        None
    } else {
        Some(found)
    }
}

/// Query all descendants by CSS selector, in document order
#[inline]
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector)
}

// === Tree Manipulation ===

/// Replace every element in the selection with a text node.
///
/// `text` is escaped, so it always lands as character data.
pub fn replace_with_text(sel: &Selection, text: &str) {
    if sel.is_empty() {
        return;
    }
    sel.replace_with_html(escape_text(text));
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

// === Text Content ===

/// Visible text with each text node stripped.
///
/// Every descendant text node is trimmed, empty ones are dropped, and the
/// rest are concatenated with no separator. Text inside `script`, `style`
/// and `template` is skipped. Comments are not text nodes and never appear.
///
/// Adjacent inline elements therefore fuse: `<p>a <b>b</b></p>` gives `"ab"`.
#[must_use]
pub fn stripped_text(sel: &Selection) -> String {
    let mut out = String::new();
    for node in sel.nodes() {
        collect_stripped(node, &mut out);
    }
    out
}

fn collect_stripped(node: &NodeRef, out: &mut String) {
    if node.is_text() {
        let text = node.text();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            out.push_str(trimmed);
        }
        return;
    }

    if node.is_element() && is_invisible(node) {
        return;
    }

    let mut child = node.first_child();
    while let Some(c) = child {
        collect_stripped(&c, out);
        child = c.next_sibling();
    }
}

fn is_invisible(node: &NodeRef) -> bool {
    node.node_name()
        .is_some_and(|name| INVISIBLE_TEXT_TAGS.contains(&&*name))
}
