//! Compare two bulletin JSON results.
//!
//! Used to check a new extraction against a known-good one. Differences are
//! graded: a missing announcement, a changed company name or section is
//! critical; everything else is a warning or informational.

use std::fmt;
use std::fs;
use std::path::Path;

use borme_core::{Announcement, Bulletin};
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        })
    }
}

/// One field that differs between the two results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Difference {
    /// Announcement id; unset for bulletin-level fields.
    pub id: Option<u32>,
    pub field: String,
    pub severity: Severity,
    pub message: String,
    pub expected: String,
    pub actual: String,
}

/// Outcome of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Comparison {
    pub expected_count: usize,
    pub actual_count: usize,
    /// Announcements present on both sides.
    pub matched: usize,
    pub differences: Vec<Difference>,
}

impl Comparison {
    pub fn has_critical(&self) -> bool {
        self.differences
            .iter()
            .any(|d| d.severity == Severity::Critical)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.differences
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    fn push(
        &mut self,
        id: Option<u32>,
        field: impl Into<String>,
        severity: Severity,
        message: &str,
        expected: impl fmt::Debug,
        actual: impl fmt::Debug,
    ) {
        self.differences.push(Difference {
            id,
            field: field.into(),
            severity,
            message: message.to_string(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        });
    }
}

/// Compare two parsed bulletins.
///
/// Announcements are matched by id. Differences are listed per
/// announcement in ascending id order, then the bulletin-level fields.
pub fn compare_bulletins(expected: &Bulletin, actual: &Bulletin) -> Comparison {
    let mut result = Comparison {
        expected_count: expected.announcements.len(),
        actual_count: actual.announcements.len(),
        ..Comparison::default()
    };

    for (id, want) in &expected.announcements {
        match actual.announcements.get(id) {
            Some(got) => {
                result.matched += 1;
                compare_announcement(&mut result, *id, want, got);
            }
            None => result.push(
                Some(*id),
                "exists",
                Severity::Critical,
                "Announcement missing from actual result",
                true,
                false,
            ),
        }
    }

    for id in actual.announcements.keys() {
        if !expected.announcements.contains_key(id) {
            result.push(
                Some(*id),
                "exists",
                Severity::Critical,
                "Announcement not present in expected result",
                false,
                true,
            );
        }
    }

    if expected.section != actual.section {
        result.push(
            None,
            "seccion",
            Severity::Critical,
            "Section mismatch",
            expected.section,
            actual.section,
        );
    }
    if expected.number != actual.number {
        result.push(
            None,
            "num",
            Severity::Warning,
            "Bulletin number differs",
            expected.number,
            actual.number,
        );
    }
    if expected.cve != actual.cve {
        result.push(None, "cve", Severity::Info, "CVE differs", &expected.cve, &actual.cve);
    }

    result
}

fn compare_announcement(result: &mut Comparison, id: u32, want: &Announcement, got: &Announcement) {
    let id = Some(id);
    if want.company != got.company {
        result.push(id, "empresa", Severity::Critical, "Company name mismatch", &want.company, &got.company);
    }
    if want.registry != got.registry {
        result.push(id, "registro", Severity::Warning, "Registry differs", &want.registry, &got.registry);
    }
    if want.branch != got.branch {
        result.push(id, "sucursal", Severity::Warning, "Branch flag differs", want.branch, got.branch);
    }
    if want.liquidation != got.liquidation {
        result.push(
            id,
            "liquidacion",
            Severity::Warning,
            "Liquidation flag differs",
            want.liquidation,
            got.liquidation,
        );
    }
    if want.registral_data != got.registral_data {
        result.push(
            id,
            "datos_registrales",
            Severity::Info,
            "Registral data differs",
            &want.registral_data,
            &got.registral_data,
        );
    }
    if want.acts.len() != got.acts.len() {
        result.push(
            id,
            "actos_count",
            Severity::Warning,
            "Number of acts differs",
            want.acts.len(),
            got.acts.len(),
        );
    }
    for (i, (a, b)) in want.acts.iter().zip(&got.acts).enumerate() {
        if a.name() != b.name() {
            result.push(
                id,
                format!("actos[{i}].name"),
                Severity::Warning,
                "Act name differs",
                a.name(),
                b.name(),
            );
        }
    }
}

/// Read and compare two bulletin JSON files.
///
/// # Errors
/// Returns `Io` when a file cannot be read and `Json` when it is not a
/// bulletin document.
pub fn compare_files(expected: &Path, actual: &Path) -> Result<Comparison> {
    let expected: Bulletin = serde_json::from_str(&fs::read_to_string(expected)?)?;
    let actual: Bulletin = serde_json::from_str(&fs::read_to_string(actual)?)?;
    Ok(compare_bulletins(&expected, &actual))
}
