//! Filename grammar: `<prefix>-<section>-<year>-<month>-<day>[.pdf]`.

use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::error::{ParseError, Result};

/// Metadata derived from a bulletin file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameInfo {
    pub date: NaiveDate,
    /// Section letter as written in the name.
    pub section: String,
    /// Day of the year of `date`, used as the bulletin number.
    pub number: u32,
}

/// Parse a bulletin file name.
///
/// Directory components and the extension are ignored. The bulletin
/// number is derived from the date, not read from content.
///
/// # Errors
/// Returns [`ParseError::InvalidFilename`] when fewer than five dash
/// separated components exist or the date parts are not a valid date.
///
/// # Examples
/// ```
/// use borme_core::parse_filename;
/// use chrono::NaiveDate;
///
/// let info = parse_filename("BORME-A-2015-10-27.pdf").unwrap();
/// assert_eq!(info.date, NaiveDate::from_ymd_opt(2015, 10, 27).unwrap());
/// assert_eq!(info.section, "A");
/// assert_eq!(info.number, 300);
///
/// assert!(parse_filename("invalid.pdf").is_err());
/// ```
pub fn parse_filename(name: &str) -> Result<FilenameInfo> {
    let invalid = || ParseError::InvalidFilename(name.to_string());

    let stem = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(invalid)?;

    let parts: Vec<&str> = stem.split('-').collect();
    if parts.len() < 5 {
        return Err(invalid());
    }

    let year: i32 = parts[2].parse().map_err(|_| invalid())?;
    let month: u32 = parts[3].parse().map_err(|_| invalid())?;
    let day: u32 = parts[4].parse().map_err(|_| invalid())?;
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;

    Ok(FilenameInfo {
        date,
        section: parts[1].to_string(),
        number: date.ordinal(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_filename() {
        let info = parse_filename("BORME-A-2015-10-27.pdf").unwrap();
        assert_eq!(
            info,
            FilenameInfo {
                date: NaiveDate::from_ymd_opt(2015, 10, 27).unwrap(),
                section: "A".to_string(),
                number: 300,
            }
        );
    }

    #[test]
    fn test_parse_filename_without_extension_and_with_dir() {
        let info = parse_filename("downloads/BORME-B-2016-01-01").unwrap();
        assert_eq!(info.section, "B");
        assert_eq!(info.number, 1);
    }

    #[test]
    fn test_leap_year_day_of_year() {
        let info = parse_filename("BORME-A-2016-12-31.pdf").unwrap();
        assert_eq!(info.number, 366);
    }

    #[test]
    fn test_invalid_filenames() {
        for name in [
            "invalid.pdf",
            "BORME-A-2015-10.pdf",
            "BORME-A-2015-xx-27.pdf",
            "BORME-A-2015-02-30.pdf",
            "",
        ] {
            assert!(
                matches!(parse_filename(name), Err(ParseError::InvalidFilename(_))),
                "{name} should be rejected"
            );
        }
    }
}
