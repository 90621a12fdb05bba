//! Tree-query primitives over `roxmltree` documents.
//!
//! Field extraction works with ordered lists of alternate tag queries: the
//! first query in the list that matches anywhere under the scope node wins.

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::{MarkupFormat, ParseError, Result};

/// A tag-name query, optionally narrowed by `class` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagQuery {
    pub tag: &'static str,
    pub class: Option<&'static str>,
}

impl TagQuery {
    pub const fn tag(tag: &'static str) -> Self {
        Self { tag, class: None }
    }

    pub const fn with_class(tag: &'static str, class: &'static str) -> Self {
        Self {
            tag,
            class: Some(class),
        }
    }

    /// Whether `node` is an element satisfying this query.
    pub fn matches(&self, node: Node<'_, '_>) -> bool {
        if !has_tag(node, self.tag) {
            return false;
        }
        match self.class {
            Some(class) => node
                .attribute("class")
                .is_some_and(|attr| attr.split_whitespace().any(|c| c == class)),
            None => true,
        }
    }
}

/// Parse markup into a document.
///
/// DTDs are allowed so XHTML documents with a doctype parse.
///
/// # Errors
/// Returns [`ParseError::MalformedMarkup`] tagged with `format` when the
/// markup is not well-formed.
pub fn parse_document(text: &str, format: MarkupFormat) -> Result<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(text, options)
        .map_err(|source| ParseError::MalformedMarkup { format, source })
}

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use borme_core::xml::get_tag_name;
///
/// let doc = Document::parse(r#"<anuncio><titulo>x</titulo></anuncio>"#).unwrap();
/// let titulo = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(titulo), "titulo");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with a specific tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Find the first child element with the given tag name.
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag(*child, tag))
}

/// Find the first element under `scope` matching the query list.
///
/// Queries are tried in list order; within one query the first match in
/// document order wins. The scope node itself is never matched.
///
/// # Arguments
/// * `scope` - Node whose descendants are searched
/// * `queries` - Alternate spellings, highest priority first
///
/// # Returns
/// The winning element, or `None` if no query matches
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use borme_core::xml::{find_first, get_text, TagQuery};
///
/// let doc = Document::parse("<a><Titulo>upper</Titulo><titulo>lower</titulo></a>").unwrap();
/// let queries = [TagQuery::tag("titulo"), TagQuery::tag("Titulo")];
/// let node = find_first(doc.root_element(), &queries).unwrap();
/// assert_eq!(get_text(node), "lower");
/// ```
pub fn find_first<'a, 'input>(
    scope: Node<'a, 'input>,
    queries: &[TagQuery],
) -> Option<Node<'a, 'input>> {
    queries.iter().find_map(|query| {
        scope
            .descendants()
            .skip(1)
            .find(|node| query.matches(*node))
    })
}

/// Find every element under `scope` matching any query, in document order.
pub fn find_all<'a, 'input>(scope: Node<'a, 'input>, queries: &[TagQuery]) -> Vec<Node<'a, 'input>> {
    scope
        .descendants()
        .skip(1)
        .filter(|node| queries.iter().any(|query| query.matches(*node)))
        .collect()
}

/// Get the text content of a node and its descendants, trimmed.
///
/// Runs of whitespace are collapsed to one space.
pub fn get_text(node: Node<'_, '_>) -> String {
    let raw: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Get an attribute value from a node.
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

/// Trimmed text of the first element matching the query list.
pub fn first_text(scope: Node<'_, '_>, queries: &[TagQuery]) -> Option<String> {
    find_first(scope, queries).map(get_text)
}
