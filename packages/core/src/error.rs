//! Error types for the extraction core.
//!
//! Only five conditions ever escalate to the caller. Everything else the
//! extractors run into (unmatched patterns, unknown provinces, missing
//! optional fields) is absorbed locally as an empty or default value.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Markup flavour a Section C document was parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupFormat {
    Xml,
    Html,
}

impl fmt::Display for MarkupFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml => f.write_str("XML"),
            Self::Html => f.write_str("HTML"),
        }
    }
}

/// Main error type for the extraction core.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Section tag other than A, B or C.
    #[error("Unsupported section: '{0}'. Expected A, B or C")]
    UnsupportedSection(String),

    /// The document could not be opened or read.
    #[error("Cannot read source {}: {source}", .path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raw PDF bytes were supplied instead of decoded text.
    #[error("Binary PDF content is not supported; supply the decoded text{}", .name.as_ref().map(|n| format!(" for {n}")).unwrap_or_default())]
    BinaryFormatUnsupported { name: Option<String> },

    /// File name does not follow `<prefix>-<section>-<year>-<month>-<day>`.
    #[error("Invalid filename: '{0}'. Expected BORME-<section>-<year>-<month>-<day>[.pdf]")]
    InvalidFilename(String),

    /// XML/HTML tree could not be built.
    #[error("{format} parsing failed: {source}")]
    MalformedMarkup {
        format: MarkupFormat,
        #[source]
        source: roxmltree::Error,
    },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ParseError>;
