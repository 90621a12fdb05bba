//! Configuration constants and validation functions for the harvester.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

use borme_core::{Province, Section};

use crate::error::{HarvesterError, Result};

/// Base URL of the BOE site.
pub const BOE_BASE_URL: &str = "https://www.boe.es";

/// Host serving bulletin PDFs and Section C documents.
pub const BOE_FILES_URL: &str = "https://boe.es";

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Maximum number of attempts for one download.
pub const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
pub const RETRY_BASE_DELAY_MS: u64 = 500;

/// Default number of parse workers.
pub const DEFAULT_WORKERS: usize = 4;

/// Default directory for downloaded bulletins.
pub const DEFAULT_DOWNLOAD_DIR: &str = "./downloads";

/// File extensions picked up by directory batches.
pub const BATCH_EXTENSIONS: &[&str] = &["pdf", "txt", "xml", "html", "htm"];

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Validate and parse a date (YYYY-MM-DD).
///
/// # Arguments
/// * `date_str` - Date string to validate
///
/// # Returns
/// * `Ok(NaiveDate)` if the format is right and the date exists
/// * `Err(HarvesterError::InvalidDate)` otherwise
///
/// # Examples
/// ```
/// use borme_harvester::config::validate_date;
///
/// assert!(validate_date("2015-10-27").is_ok());
/// assert!(validate_date("invalid").is_err());
/// assert!(validate_date("2015-13-01").is_err()); // Invalid month
/// ```
pub fn validate_date(date_str: &str) -> Result<NaiveDate> {
    if !DATE_PATTERN.is_match(date_str) {
        return Err(HarvesterError::InvalidDate(date_str.to_string()));
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| HarvesterError::InvalidDate(date_str.to_string()))
}

/// Validate an inclusive date range and list its days.
///
/// # Errors
/// Returns `InvalidDate` for a malformed bound and `InvalidDateRange` when
/// `start` is after `end`.
pub fn date_range(start: &str, end: &str) -> Result<Vec<NaiveDate>> {
    let first = validate_date(start)?;
    let last = validate_date(end)?;
    if first > last {
        return Err(HarvesterError::InvalidDateRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(first.iter_days().take_while(|d| *d <= last).collect())
}

/// Resolve a `--province` argument.
///
/// # Errors
/// Returns `UnknownProvince` when the argument is neither a known INE code
/// nor a province name.
pub fn resolve_province(query: &str) -> Result<Province> {
    Province::lookup(query).ok_or_else(|| HarvesterError::UnknownProvince(query.to_string()))
}

/// Hosts the harvester talks to.
///
/// Defaults to the public BOE servers; tests and mirrors point both hosts
/// at another base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Host of the daily summary.
    pub boe: String,
    /// Host of bulletin PDFs and Section C documents.
    pub files: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            boe: BOE_BASE_URL.to_string(),
            files: BOE_FILES_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Serve everything from one base URL.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Self {
            boe: base.clone(),
            files: base,
        }
    }

    /// URL of the daily summary XML.
    pub fn summary_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/diario_borme/xml.php?id=BORME-S-{}",
            self.boe,
            date.format("%Y%m%d")
        )
    }

    /// URL of a Section A/B bulletin PDF.
    pub fn bulletin_pdf_url(
        &self,
        date: NaiveDate,
        section: Section,
        number: u32,
        province: &Province,
    ) -> String {
        format!(
            "{}/borme/dias/{}/pdfs/{}",
            self.files,
            date.format("%Y/%m/%d"),
            bulletin_filename(date, section, number, province)
        )
    }

    /// HTML/text URL of a Section C announcement.
    pub fn section_c_text_url(&self, year: i32, announcement: &str) -> String {
        format!(
            "{}/diario_borme/txt.php?id=BORME-C-{year}-{announcement}",
            self.files
        )
    }

    /// XML URL of a Section C announcement.
    pub fn section_c_xml_url(&self, year: i32, announcement: &str) -> String {
        format!(
            "{}/diario_borme/xml.php?id=BORME-C-{year}-{announcement}",
            self.files
        )
    }

    /// PDF URL of a Section C announcement.
    pub fn section_c_pdf_url(&self, date: NaiveDate, announcement: &str) -> String {
        format!(
            "{}/borme/dias/{}/pdfs/BORME-C-{}-{announcement}.pdf",
            self.files,
            date.format("%Y/%m/%d"),
            date.year()
        )
    }
}

/// Build the URL of a Section A/B bulletin PDF on the public BOE host.
///
/// # Arguments
/// * `date` - Publication date
/// * `section` - Bulletin section
/// * `number` - Bulletin number (`nbo`)
/// * `province` - Province edition
///
/// # Examples
/// ```
/// use borme_core::{Province, Section};
/// use borme_harvester::config::bulletin_pdf_url;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2015, 10, 27).unwrap();
/// let madrid = Province::lookup("Madrid").unwrap();
/// assert_eq!(
///     bulletin_pdf_url(date, Section::A, 204, &madrid),
///     "https://boe.es/borme/dias/2015/10/27/pdfs/BORME-A-2015-204-28.pdf"
/// );
/// ```
pub fn bulletin_pdf_url(
    date: NaiveDate,
    section: Section,
    number: u32,
    province: &Province,
) -> String {
    Endpoints::default().bulletin_pdf_url(date, section, number, province)
}

/// File name of a Section A/B bulletin PDF.
pub fn bulletin_filename(
    date: NaiveDate,
    section: Section,
    number: u32,
    province: &Province,
) -> String {
    format!(
        "BORME-{section}-{}-{number}-{}.pdf",
        date.year(),
        province.code_str()
    )
}

/// Build the URL of the daily summary XML.
pub fn summary_url(date: NaiveDate) -> String {
    Endpoints::default().summary_url(date)
}

/// Build the HTML/text URL of a Section C announcement.
pub fn section_c_text_url(year: i32, announcement: &str) -> String {
    Endpoints::default().section_c_text_url(year, announcement)
}

/// Build the XML URL of a Section C announcement.
pub fn section_c_xml_url(year: i32, announcement: &str) -> String {
    Endpoints::default().section_c_xml_url(year, announcement)
}

/// Build the PDF URL of a Section C announcement.
pub fn section_c_pdf_url(date: NaiveDate, announcement: &str) -> String {
    Endpoints::default().section_c_pdf_url(date, announcement)
}
