//! Top-level document dispatch.

use tracing::debug;

use crate::error::{ParseError, Result};
use crate::section_ab::{extract_bulletin, parse_bulletin};
use crate::section_c::{extract_section_c, parse_section_c};
use crate::source::{is_binary_pdf, Source};
use crate::types::{Bulletin, Section, SectionCAnnouncement};

/// Output of parsing one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedDocument {
    /// Section A or B.
    Bulletin(Bulletin),
    /// Section C, one record per announcement.
    SectionC(Vec<SectionCAnnouncement>),
}

impl ParsedDocument {
    /// Number of announcements extracted.
    pub fn announcement_count(&self) -> usize {
        match self {
            Self::Bulletin(bulletin) => bulletin.announcements.len(),
            Self::SectionC(records) => records.len(),
        }
    }
}

/// Parse one document from a source.
///
/// Sections A and B go through the line-oriented extractor, section C
/// through the XML/HTML field extractor.
///
/// # Errors
/// Any error from reading the source or, for section C, from building the
/// markup tree.
pub fn parse_document(source: &Source, section: Section) -> Result<ParsedDocument> {
    debug!(source = ?source.name(), section = %section, "Dispatching document");
    match section {
        Section::A | Section::B => parse_bulletin(source, section).map(ParsedDocument::Bulletin),
        Section::C => parse_section_c(source).map(ParsedDocument::SectionC),
    }
}

/// Parse already-decoded text given a section tag.
///
/// # Errors
/// [`crate::ParseError::UnsupportedSection`] for tags other than A, B or C,
/// [`crate::ParseError::BinaryFormatUnsupported`] when the text is still a
/// raw PDF stream, plus markup errors for section C.
///
/// # Examples
/// ```
/// use borme_core::{parse_text, ParsedDocument};
///
/// let doc = parse_text("Cabecera\n1 - ACME SL\n", "A").unwrap();
/// assert!(matches!(doc, ParsedDocument::Bulletin(_)));
/// assert!(parse_text("", "D").is_err());
/// ```
pub fn parse_text(text: &str, section: &str) -> Result<ParsedDocument> {
    let section: Section = section.parse()?;
    if is_binary_pdf(text.as_bytes()) {
        return Err(ParseError::BinaryFormatUnsupported { name: None });
    }
    match section {
        Section::A | Section::B => Ok(ParsedDocument::Bulletin(extract_bulletin(text, section))),
        Section::C => extract_section_c(text).map(ParsedDocument::SectionC),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_section() {
        assert!(matches!(
            parse_text("x", "Z"),
            Err(ParseError::UnsupportedSection(s)) if s == "Z"
        ));
    }

    #[test]
    fn test_sections_a_and_b_share_grammar() {
        let text = "Cabecera\n1 - ACME SL\n2 - OTRA SA\n";
        for tag in ["A", "B"] {
            let doc = parse_text(text, tag).unwrap();
            assert_eq!(doc.announcement_count(), 2);
        }
    }

    #[test]
    fn test_binary_pdf_text_rejected() {
        for tag in ["A", "B", "C"] {
            assert!(matches!(
                parse_text("%PDF-1.4\n1 0 obj\n", tag),
                Err(ParseError::BinaryFormatUnsupported { name: None })
            ));
        }
        assert!(matches!(
            parse_text("  \n%PDF-1.7", "A"),
            Err(ParseError::BinaryFormatUnsupported { .. })
        ));
    }

    #[test]
    fn test_section_c_dispatch() {
        let doc = parse_text("<html><body><h1>T</h1></body></html>", "c").unwrap();
        match doc {
            ParsedDocument::SectionC(records) => assert_eq!(records[0].title, "T"),
            other => panic!("expected section C records, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_document_from_buffer() {
        let source = Source::buffer(None, "Cabecera\n7 - ACME SL\n");
        let doc = parse_document(&source, Section::A).unwrap();
        let ParsedDocument::Bulletin(bulletin) = doc else {
            panic!("expected bulletin");
        };
        assert_eq!(bulletin.range, Some((1, 1)));
    }
}
