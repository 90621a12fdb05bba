//! Section C extraction.
//!
//! Section C announcements arrive as XML or HTML. Each field is looked up
//! through an ordered list of alternate tag spellings; there is no shared
//! state with the Section A/B extractor.

mod extractor;
pub mod fields;

pub use extractor::{
    extract_section_c, is_xml, parse_announcements, parse_html, parse_xml,
};

use crate::error::Result;
use crate::source::Source;
use crate::types::SectionCAnnouncement;

/// Parse a single-announcement document, sniffing XML vs HTML.
///
/// # Errors
/// Returns [`crate::ParseError::MalformedMarkup`] if the markup is not
/// well-formed.
pub fn parse_announcement(content: &str) -> Result<SectionCAnnouncement> {
    if is_xml(content) {
        parse_xml(content)
    } else {
        parse_html(content)
    }
}

/// Read a source and extract its Section C announcements.
///
/// Every record gets the source name as its `filename`.
///
/// # Errors
/// Propagates read errors from the source and markup errors from parsing.
pub fn parse_section_c(source: &Source) -> Result<Vec<SectionCAnnouncement>> {
    let content = source.read_text()?;
    let name = source.name();

    let mut records = extract_section_c(&content)?;
    for record in &mut records {
        record.filename = name.clone();
    }
    Ok(records)
}
