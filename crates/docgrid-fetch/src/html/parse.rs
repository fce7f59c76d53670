//! Permissive HTML parsing into an rcdom tree

use crate::html::HtmlError;
use crate::html::helpers;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, RcDom};

/// Parsed HTML document
pub struct HtmlDocument {
    dom: RcDom,
}

impl HtmlDocument {
    /// Document root node
    pub fn root(&self) -> &Handle {
        &self.dom.document
    }

    /// First element named `tag` in document order
    pub fn select_first(&self, tag: &str) -> Option<Handle> {
        helpers::first_descendant_by_tag(self.root(), tag)
    }
}

impl std::fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDocument").finish_non_exhaustive()
    }
}

/// Parses HTML text into a document tree
///
/// Malformed markup is repaired the way browsers repair it (implied
/// `<html>`, `<body>` and `<tbody>` elements, unclosed tags).
///
/// # Errors
///
/// Returns error if the parser sink fails to read the input
pub fn parse_html(html: &str) -> Result<HtmlDocument, HtmlError> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| HtmlError::ParseError(e.to_string()))?;

    Ok(HtmlDocument { dom })
}
