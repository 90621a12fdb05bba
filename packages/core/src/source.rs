//! Byte sources for the extractors.
//!
//! The core never fetches anything itself: a document is either a local
//! file or a buffer somebody else already downloaded.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{ParseError, Result};

const PDF_MAGIC: &[u8] = b"%PDF";

/// Where a document's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Buffer { name: Option<String>, bytes: Vec<u8> },
}

impl Source {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub fn buffer(name: Option<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::Buffer {
            name,
            bytes: bytes.into(),
        }
    }

    /// Identifier recorded as the `filename` of produced records.
    pub fn name(&self) -> Option<String> {
        match self {
            Self::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            Self::Buffer { name, .. } => name.clone(),
        }
    }

    /// Read the raw bytes.
    ///
    /// # Errors
    /// Returns [`ParseError::UnreadableSource`] if the file cannot be read.
    pub fn bytes(&self) -> Result<Cow<'_, [u8]>> {
        match self {
            Self::File(path) => std::fs::read(path)
                .map(Cow::Owned)
                .map_err(|source| ParseError::UnreadableSource {
                    path: path.clone(),
                    source,
                }),
            Self::Buffer { bytes, .. } => Ok(Cow::Borrowed(bytes)),
        }
    }

    /// Read the content as decoded text.
    ///
    /// Invalid UTF-8 is replaced lossily and logged.
    ///
    /// # Errors
    /// Returns [`ParseError::UnreadableSource`] if the file cannot be read and
    /// [`ParseError::BinaryFormatUnsupported`] if the bytes are an undecoded
    /// PDF stream.
    pub fn read_text(&self) -> Result<String> {
        let bytes = self.bytes()?;
        if is_binary_pdf(&bytes) {
            return Err(ParseError::BinaryFormatUnsupported { name: self.name() });
        }

        match String::from_utf8_lossy(&bytes) {
            Cow::Borrowed(text) => Ok(text.to_string()),
            Cow::Owned(text) => {
                warn!(
                    source = self.name().as_deref().unwrap_or("<buffer>"),
                    "Content is not valid UTF-8, decoded lossily"
                );
                Ok(text)
            }
        }
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

/// Whether the first non-blank bytes are the PDF magic number.
pub fn is_binary_pdf(bytes: &[u8]) -> bool {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    bytes[start..].starts_with(PDF_MAGIC)
}
