//! Field extraction for Section C XML and HTML documents.

use chrono::NaiveDate;
use roxmltree::Node;
use tracing::debug;

use super::fields;
use crate::error::{MarkupFormat, Result};
use crate::types::SectionCAnnouncement;
use crate::xml::{find_all, first_text, get_text, parse_document, TagQuery};

/// Whether Section C content should be read as XML rather than HTML.
pub fn is_xml(content: &str) -> bool {
    content.contains("<?xml") || content.contains("<xml")
}

/// Extract one announcement from a whole XML document.
///
/// # Errors
/// Returns [`crate::ParseError::MalformedMarkup`] if the XML is not
/// well-formed.
pub fn parse_xml(content: &str) -> Result<SectionCAnnouncement> {
    let doc = parse_document(content, MarkupFormat::Xml)?;
    Ok(announcement_from_node(doc.root()))
}

/// Extract one announcement per `anuncio` node of an XML document.
///
/// Each record is filled only from its own node's descendants.
///
/// # Errors
/// Returns [`crate::ParseError::MalformedMarkup`] if the XML is not
/// well-formed.
pub fn parse_announcements(content: &str) -> Result<Vec<SectionCAnnouncement>> {
    let doc = parse_document(content, MarkupFormat::Xml)?;
    let records: Vec<SectionCAnnouncement> = announcement_nodes(doc.root())
        .into_iter()
        .map(announcement_from_node)
        .collect();
    debug!(count = records.len(), "Section C announcements extracted");
    Ok(records)
}

/// Extract one announcement from an HTML document.
///
/// HTML has no fixed schema: the title comes from the first heading, the
/// body from every paragraph and `div.texto`, the company from the first
/// bold or `span.empresa` element.
///
/// # Errors
/// Returns [`crate::ParseError::MalformedMarkup`] if the markup cannot be
/// parsed as a tree.
pub fn parse_html(content: &str) -> Result<SectionCAnnouncement> {
    let doc = parse_document(content, MarkupFormat::Html)?;
    let root = doc.root();

    let text = outermost(find_all(root, fields::HTML_TEXT), fields::HTML_TEXT)
        .into_iter()
        .map(get_text)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(SectionCAnnouncement {
        title: first_text(root, fields::HTML_TITLE).unwrap_or_default(),
        text,
        company: first_text(root, fields::HTML_COMPANY).unwrap_or_default(),
        ..SectionCAnnouncement::default()
    })
}

/// Extract every announcement a Section C document holds.
///
/// XML with `anuncio` container nodes yields one record per node, any other
/// XML one record for the whole document. HTML always yields one record.
///
/// # Errors
/// Returns [`crate::ParseError::MalformedMarkup`] if the markup is not
/// well-formed.
pub fn extract_section_c(content: &str) -> Result<Vec<SectionCAnnouncement>> {
    if !is_xml(content) {
        return parse_html(content).map(|record| vec![record]);
    }

    let doc = parse_document(content, MarkupFormat::Xml)?;
    let nodes = announcement_nodes(doc.root());
    if nodes.is_empty() {
        return Ok(vec![announcement_from_node(doc.root())]);
    }
    debug!(count = nodes.len(), "Multi-announcement Section C document");
    Ok(nodes.into_iter().map(announcement_from_node).collect())
}

/// Announcement container nodes under `scope`, outermost only.
pub(crate) fn announcement_nodes<'a, 'input>(scope: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    outermost(find_all(scope, fields::ANNOUNCEMENT_NODE), fields::ANNOUNCEMENT_NODE)
}

fn announcement_from_node(scope: Node<'_, '_>) -> SectionCAnnouncement {
    let text = |queries: &[TagQuery]| first_text(scope, queries).unwrap_or_default();
    let number = |queries: &[TagQuery]| {
        first_text(scope, queries)
            .and_then(|t| leading_number(&t))
            .unwrap_or_default()
    };
    let list = |queries: &[TagQuery]| {
        innermost(find_all(scope, queries), queries)
            .into_iter()
            .map(get_text)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
    };

    SectionCAnnouncement {
        department: text(fields::DEPARTMENT),
        text: text(fields::TEXT),
        bulletin_number: number(fields::BULLETIN_NUMBER),
        announcement_number: text(fields::ANNOUNCEMENT_NUMBER),
        announcement_id: text(fields::ANNOUNCEMENT_ID),
        start_page: number(fields::START_PAGE),
        end_page: number(fields::END_PAGE),
        date: first_text(scope, fields::DATE).and_then(|t| parse_date(&t)),
        title: text(fields::TITLE),
        company: text(fields::COMPANY),
        related_companies: list(fields::RELATED_COMPANIES),
        tax_ids: list(fields::TAX_IDS),
        cve: text(fields::CVE),
        ..SectionCAnnouncement::default()
    }
}

/// Drop matches nested inside another match.
fn outermost<'a, 'input>(
    nodes: Vec<Node<'a, 'input>>,
    queries: &[TagQuery],
) -> Vec<Node<'a, 'input>> {
    nodes
        .into_iter()
        .filter(|node| {
            !node
                .ancestors()
                .skip(1)
                .any(|a| queries.iter().any(|q| q.matches(a)))
        })
        .collect()
}

/// Drop matches that merely wrap other matches (`<empresas_relacionadas>`
/// around `<relacionada>` items).
fn innermost<'a, 'input>(
    nodes: Vec<Node<'a, 'input>>,
    queries: &[TagQuery],
) -> Vec<Node<'a, 'input>> {
    nodes
        .into_iter()
        .filter(|node| {
            !node
                .descendants()
                .skip(1)
                .any(|d| queries.iter().any(|q| q.matches(d)))
        })
        .collect()
}

/// Leading decimal digits of a field (`"12 (bis)"` -> 12).
fn leading_number(text: &str) -> Option<u32> {
    let digits: String = text
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// `YYYY-MM-DD` or `YYYYMMDD`.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%Y%m%d"))
        .ok()
}
