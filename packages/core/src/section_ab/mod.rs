//! Section A/B extraction.
//!
//! Both sections share one line-oriented grammar. Structure is inferred
//! from literal marker lines (`Cabecera`, `Texto`, `Fecha`, ...) and from
//! the font of each text span: `/F1` spans carry act names, `/F2` spans
//! carry their values.

mod extractor;
mod mode;

pub use extractor::BulletinExtractor;
pub use mode::{Event, Marker, Mode};

use tracing::debug;

use crate::error::Result;
use crate::source::Source;
use crate::types::{Bulletin, Section};

/// Extract a bulletin from already-decoded text.
pub fn extract_bulletin(text: &str, section: Section) -> Bulletin {
    let mut extractor = BulletinExtractor::new(section);
    for line in text.lines() {
        extractor.feed_line(line);
    }
    extractor.finish()
}

/// Read a source and extract its bulletin.
///
/// # Errors
/// Returns [`crate::ParseError::UnreadableSource`] or
/// [`crate::ParseError::BinaryFormatUnsupported`] from reading the source.
pub fn parse_bulletin(source: &Source, section: Section) -> Result<Bulletin> {
    let text = source.read_text()?;
    debug!(source = ?source.name(), section = %section, "Extracting bulletin");

    let mut bulletin = extract_bulletin(&text, section);
    bulletin.filename = source.name();
    Ok(bulletin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn test_parse_bulletin_records_filename() {
        let source = Source::buffer(
            Some("BORME-A-2015-204-28.txt".to_string()),
            "Cabecera\n1 - ACME SL\n",
        );
        let bulletin = parse_bulletin(&source, Section::A).unwrap();
        assert_eq!(bulletin.filename.as_deref(), Some("BORME-A-2015-204-28.txt"));
        assert_eq!(bulletin.announcements.len(), 1);
    }

    #[test]
    fn test_parse_bulletin_rejects_pdf() {
        let source = Source::buffer(None, b"%PDF-1.5 binary".to_vec());
        assert!(matches!(
            parse_bulletin(&source, Section::B),
            Err(ParseError::BinaryFormatUnsupported { .. })
        ));
    }

    #[test]
    fn test_extract_bulletin_keeps_section() {
        let bulletin = extract_bulletin("", Section::B);
        assert_eq!(bulletin.section, Section::B);
    }
}
