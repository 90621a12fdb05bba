//! Error types for the harvester.
//!
//! Uses the dual-error pattern: `HarvesterError` for everything the CLI and
//! batch layer can run into, wrapping `borme_core::ParseError` for failures
//! inside the extraction core.

use borme_core::ParseError;
use thiserror::Error;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvesterError {
    /// Invalid date format.
    #[error("Invalid date format: '{0}'. Expected YYYY-MM-DD (e.g., 2015-10-27)")]
    InvalidDate(String),

    /// Start date after end date.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: String, end: String },

    /// Province argument matched neither a code nor a name.
    #[error("Unknown province: '{0}'. Expected an INE code (e.g., 28) or a name (e.g., Madrid)")]
    UnknownProvince(String),

    /// The BOE has no document at this URL (no gazette that day).
    #[error("Not published: {url}")]
    NotFound { url: String },

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// All retry attempts failed.
    #[error("Download failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// Daily summary XML could not be parsed.
    #[error("Summary XML parsing failed: {0}")]
    SummaryParse(#[from] roxmltree::Error),

    /// Extraction core error.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Worker pool could not be built.
    #[error("Worker pool setup failed: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvesterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HarvesterError::InvalidDate("2015/10/27".to_string());
        assert!(err.to_string().contains("2015/10/27"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_retries_exhausted_display() {
        let err = HarvesterError::RetriesExhausted {
            attempts: 3,
            message: "Server error: 503 Service Unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Download failed after 3 attempts: Server error: 503 Service Unavailable"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = HarvesterError::NotFound {
            url: "https://www.boe.es/diario_borme/xml.php?id=BORME-S-20151025".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Not published: https://www.boe.es/diario_borme/xml.php?id=BORME-S-20151025"
        );
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let err = HarvesterError::from(ParseError::InvalidFilename("x.pdf".to_string()));
        assert_eq!(
            err.to_string(),
            ParseError::InvalidFilename("x.pdf".to_string()).to_string()
        );
    }
}
