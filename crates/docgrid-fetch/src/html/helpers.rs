//! Tree traversal helpers over the rcdom document
//!
//! Walks use an explicit stack so deeply nested markup cannot exhaust the
//! thread's call stack.

use markup5ever_rcdom::{Handle, NodeData};

/// Returns true if `handle` is an element with local name `tag`
pub fn is_element(handle: &Handle, tag: &str) -> bool {
    match &handle.data {
        NodeData::Element { name, .. } => name.local.as_ref() == tag,
        _ => false,
    }
}

/// Pushes the children of `handle` so the first child is popped first
fn push_children(stack: &mut Vec<Handle>, handle: &Handle) {
    stack.extend(handle.children.borrow().iter().rev().cloned());
}

/// Collects descendant elements named `tag` in document order
///
/// `handle` itself is not included.
pub fn descendants_by_tag(handle: &Handle, tag: &str) -> Vec<Handle> {
    let mut found = Vec::new();
    let mut stack = Vec::new();
    push_children(&mut stack, handle);

    while let Some(node) = stack.pop() {
        if is_element(&node, tag) {
            found.push(node.clone());
        }
        push_children(&mut stack, &node);
    }
    found
}

/// Finds the first descendant element named `tag` in document order
pub fn first_descendant_by_tag(handle: &Handle, tag: &str) -> Option<Handle> {
    let mut stack = Vec::new();
    push_children(&mut stack, handle);

    while let Some(node) = stack.pop() {
        if is_element(&node, tag) {
            return Some(node);
        }
        push_children(&mut stack, &node);
    }
    None
}

/// Collects all text content below `handle`
///
/// Flattens all text nodes within the element tree.
pub fn collect_text(handle: &Handle) -> String {
    let mut text = String::new();
    let mut stack = Vec::new();
    push_children(&mut stack, handle);

    while let Some(node) = stack.pop() {
        match &node.data {
            NodeData::Text { contents } => text.push_str(&contents.borrow()),
            NodeData::Element { .. } => push_children(&mut stack, &node),
            _ => {}
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::parse_html;

    #[test]
    fn test_descendants_in_document_order() {
        let doc = parse_html("<p>a</p><div><p>b</p><p>c</p></div><p>d</p>").unwrap();

        let texts: Vec<String> = descendants_by_tag(doc.root(), "p")
            .iter()
            .map(collect_text)
            .collect();

        assert_eq!(texts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_first_descendant_prefers_outer_match() {
        let doc = parse_html("<div><section><b>inner</b></section></div><b>outer</b>").unwrap();

        let first = first_descendant_by_tag(doc.root(), "b").unwrap();

        assert_eq!(collect_text(&first), "inner");
    }

    #[test]
    fn test_collect_text_skips_comments() {
        let doc = parse_html("<p>a<!-- hidden --><em>b</em>c</p>").unwrap();
        let p = first_descendant_by_tag(doc.root(), "p").unwrap();

        assert_eq!(collect_text(&p), "abc");
    }

    #[test]
    fn test_deeply_nested_markup() {
        let depth = 30_000;
        let html = format!("<p>{}deep{}</p>", "<span>".repeat(depth), "</span>".repeat(depth));
        let doc = parse_html(&html).unwrap();

        let p = first_descendant_by_tag(doc.root(), "p").unwrap();
        assert_eq!(collect_text(&p), "deep");
        assert_eq!(descendants_by_tag(&p, "span").len(), depth);
        assert!(first_descendant_by_tag(doc.root(), "table").is_none());
    }
}
