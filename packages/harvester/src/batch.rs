//! Batch orchestration: parse many documents, or download and parse a date
//! range, on a bounded worker pool.
//!
//! Every document yields an [`Outcome`]. A failing document is recorded and
//! the rest of the batch carries on.

use std::fs;
use std::path::{Path, PathBuf};

use borme_core::{parse_document, ParsedDocument, Province, Section, Source};
use chrono::{Datelike, NaiveDate};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use reqwest::blocking::Client;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{bulletin_filename, Endpoints, BATCH_EXTENSIONS};
use crate::error::{HarvesterError, Result};
use crate::http::{download_bytes, download_file};
use crate::output::save_json;
use crate::summary::{parse_summary, DailySummary};

/// Options shared by every document of a batch.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Section to parse as; inferred per file when unset.
    pub section: Option<Section>,
    /// Directory for JSON results; nothing is written when unset.
    pub output_dir: Option<PathBuf>,
    pub pretty: bool,
    /// Worker threads (at least one is used).
    pub workers: usize,
}

/// Result of processing one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Source identifier: a file path, a date or a document id.
    pub input: String,
    pub announcements: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Outcome {
    fn success(input: impl Into<String>, announcements: usize, output: Option<PathBuf>) -> Self {
        Self {
            input: input.into(),
            announcements,
            output,
            error: None,
        }
    }

    fn failure(input: impl Into<String>, error: impl ToString) -> Self {
        Self {
            input: input.into(),
            announcements: 0,
            output: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Counts over a finished batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub announcements: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
            announcements: outcomes.iter().map(|o| o.announcements).sum(),
        }
    }
}

/// List the parseable files of a directory, sorted by path.
///
/// Only direct children with one of the batch extensions are kept; the
/// extension check ignores case.
pub fn collect_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_batch_extension(&path) {
            inputs.push(path);
        }
    }
    inputs.sort();
    debug!(dir = %dir.display(), count = inputs.len(), "Collected batch inputs");
    Ok(inputs)
}

fn has_batch_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            BATCH_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// Guess the section of a file.
///
/// Markup files are Section C. Otherwise the second dash-separated part of
/// the file name is used (`BORME-B-...`), falling back to Section A.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use borme_core::Section;
/// use borme_harvester::batch::infer_section;
///
/// assert_eq!(infer_section(Path::new("BORME-B-2015-204-28.txt")), Section::B);
/// assert_eq!(infer_section(Path::new("anuncio.xml")), Section::C);
/// assert_eq!(infer_section(Path::new("notes.txt")), Section::A);
/// ```
pub fn infer_section(path: &Path) -> Section {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    if matches!(ext.as_deref(), Some("xml" | "html" | "htm")) {
        return Section::C;
    }

    path.file_stem()
        .and_then(|s| s.to_str())
        .and_then(|stem| stem.split('-').nth(1))
        .and_then(|tag| tag.parse().ok())
        .unwrap_or(Section::A)
}

/// Parse one file and optionally write its JSON.
pub fn process_file(path: &Path, options: &BatchOptions) -> Outcome {
    let input = path.display().to_string();
    let section = options.section.unwrap_or_else(|| infer_section(path));

    let document = match parse_document(&Source::file(path), section) {
        Ok(document) => document,
        Err(e) => {
            warn!(%input, error = %e, "Document failed");
            return Outcome::failure(input, e);
        }
    };

    finish(input, path, &document, options)
}

fn finish(
    input: String,
    path: &Path,
    document: &ParsedDocument,
    options: &BatchOptions,
) -> Outcome {
    let count = document.announcement_count();
    let Some(output_dir) = &options.output_dir else {
        return Outcome::success(input, count, None);
    };
    match save_json(document, path, output_dir, options.pretty) {
        Ok(written) => Outcome::success(input, count, Some(written)),
        Err(e) => {
            warn!(%input, error = %e, "Could not write output");
            Outcome::failure(input, e)
        }
    }
}

/// Run `job` over `items` on a pool of `workers` threads.
///
/// Results keep the order of `items`. `on_done` is called from the worker
/// threads as each item finishes.
fn run_on_pool<T, F, G>(items: &[T], workers: usize, job: F, on_done: G) -> Result<Vec<Outcome>>
where
    T: Sync,
    F: Fn(&T) -> Vec<Outcome> + Sync,
    G: Fn(&Outcome) + Sync,
{
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .build()?;

    let outcomes = pool.install(|| {
        items
            .par_iter()
            .flat_map_iter(|item| {
                let outcomes = job(item);
                outcomes.iter().for_each(&on_done);
                outcomes
            })
            .collect()
    });
    Ok(outcomes)
}

/// Parse a list of files in parallel.
///
/// # Errors
/// Only fails when the worker pool cannot be built; per-file failures are
/// reported in the outcomes.
pub fn run_batch<G>(
    inputs: &[PathBuf],
    options: &BatchOptions,
    on_done: G,
) -> Result<Vec<Outcome>>
where
    G: Fn(&Outcome) + Sync,
{
    info!(files = inputs.len(), workers = options.workers, "Starting batch");
    run_on_pool(
        inputs,
        options.workers,
        |path| vec![process_file(path, options)],
        on_done,
    )
}

/// What to download for a date range.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub section: Section,
    /// Province edition for Sections A and B.
    pub province: Province,
    pub download_dir: PathBuf,
    pub endpoints: Endpoints,
    pub batch: BatchOptions,
}

/// Download and parse every bulletin of a date range.
///
/// Each date resolves its bulletin number from the daily summary and falls
/// back to the day of the year when the summary is unavailable. Section C
/// downloads the XML of every announcement the summary lists.
///
/// # Errors
/// Only fails when the worker pool cannot be built.
pub fn run_fetch<G>(
    client: &Client,
    dates: &[NaiveDate],
    options: &FetchOptions,
    on_done: G,
) -> Result<Vec<Outcome>>
where
    G: Fn(&Outcome) + Sync,
{
    info!(
        days = dates.len(),
        section = %options.section,
        province = %options.province.name,
        "Starting fetch"
    );
    run_on_pool(
        dates,
        options.batch.workers,
        |date| fetch_date(client, *date, options),
        on_done,
    )
}

fn fetch_date(client: &Client, date: NaiveDate, options: &FetchOptions) -> Vec<Outcome> {
    let summary = fetch_summary(client, date, &options.endpoints);
    match options.section {
        Section::A | Section::B => vec![fetch_bulletin(client, date, summary.as_ref(), options)],
        Section::C => match summary {
            Some(summary) => fetch_section_c(client, date, &summary, options),
            None => vec![Outcome::failure(
                date.to_string(),
                "daily summary unavailable; Section C ids cannot be listed",
            )],
        },
    }
}

fn fetch_summary(client: &Client, date: NaiveDate, endpoints: &Endpoints) -> Option<DailySummary> {
    let url = endpoints.summary_url(date);
    let parsed = download_bytes(client, &url)
        .and_then(|bytes| parse_summary(&String::from_utf8_lossy(&bytes)));
    match parsed {
        Ok(summary) => Some(summary),
        Err(HarvesterError::NotFound { .. }) => {
            info!(%date, "No daily summary published");
            None
        }
        Err(e) => {
            warn!(%date, error = %e, "Daily summary unavailable");
            None
        }
    }
}

fn fetch_bulletin(
    client: &Client,
    date: NaiveDate,
    summary: Option<&DailySummary>,
    options: &FetchOptions,
) -> Outcome {
    let input = date.to_string();
    let number = summary
        .and_then(|s| s.number)
        .unwrap_or_else(|| date.ordinal());
    let url = summary
        .and_then(|s| s.find_item(options.section, &options.province))
        .and_then(|item| item.pdf_url.clone())
        .unwrap_or_else(|| {
            options
                .endpoints
                .bulletin_pdf_url(date, options.section, number, &options.province)
        });

    let dest = options.download_dir.join(bulletin_filename(
        date,
        options.section,
        number,
        &options.province,
    ));
    match download_file(client, &url, &dest) {
        Ok(()) => {}
        Err(e @ HarvesterError::NotFound { .. }) => {
            info!(%date, %url, "No bulletin published");
            return Outcome::failure(input, e);
        }
        Err(e) => {
            warn!(%date, %url, error = %e, "Bulletin download failed");
            return Outcome::failure(input, e);
        }
    }

    let batch = BatchOptions {
        section: Some(options.section),
        ..options.batch.clone()
    };
    match parse_document(&Source::file(&dest), options.section) {
        Ok(document) => finish(input, &dest, &document, &batch),
        Err(e) => {
            warn!(%date, error = %e, "Downloaded bulletin could not be parsed");
            Outcome::failure(input, e)
        }
    }
}

fn fetch_section_c(
    client: &Client,
    date: NaiveDate,
    summary: &DailySummary,
    options: &FetchOptions,
) -> Vec<Outcome> {
    let prefix = format!("BORME-C-{}-", date.year());
    let ids: Vec<&str> = summary
        .items
        .iter()
        .filter_map(|item| item.id.strip_prefix(&prefix))
        .collect();
    debug!(%date, count = ids.len(), "Section C announcements listed");

    ids.into_iter()
        .map(|announcement| {
            let input = format!("{prefix}{announcement}");
            let url = options.endpoints.section_c_xml_url(date.year(), announcement);
            let dest = options.download_dir.join(format!("{input}.xml"));
            if let Err(e) = download_file(client, &url, &dest) {
                warn!(%input, error = %e, "Announcement download failed");
                return Outcome::failure(input, e);
            }
            match parse_document(&Source::file(&dest), Section::C) {
                Ok(document) => finish(input, &dest, &document, &options.batch),
                Err(e) => Outcome::failure(input, e),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    #[test]
    fn test_infer_section() {
        assert_eq!(infer_section(Path::new("dir/BORME-A-2015-204-28.pdf")), Section::A);
        assert_eq!(infer_section(Path::new("BORME-B-2015-204-28.txt")), Section::B);
        assert_eq!(infer_section(Path::new("BORME-C-2015-10446.XML")), Section::C);
        assert_eq!(infer_section(Path::new("page.html")), Section::C);
        assert_eq!(infer_section(Path::new("plain.txt")), Section::A);
    }

    #[test]
    fn test_collect_inputs_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        for name in ["b.txt", "a.XML", "c.pdf", "notes.md", "d.html"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let names: Vec<String> = collect_inputs(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.XML", "b.txt", "c.pdf", "d.html"]);
    }

    #[test]
    fn test_summary_counts() {
        let outcomes = vec![
            Outcome::success("a", 3, None),
            Outcome::failure("b", "boom"),
            Outcome::success("c", 2, None),
        ];
        assert_eq!(
            BatchSummary::from_outcomes(&outcomes),
            BatchSummary {
                total: 3,
                succeeded: 2,
                failed: 1,
                announcements: 5,
            }
        );
    }

    #[test]
    fn test_batch_continues_past_failures() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("BORME-A-1.txt"), "Cabecera\n1 - ACME SL\n2 - OTRA SA\n").unwrap();
        fs::write(dir.path().join("BORME-A-2.pdf"), "%PDF-1.4 binary").unwrap();
        fs::write(dir.path().join("broken.xml"), "<?xml version=\"1.0\"?><a><b></a>").unwrap();

        let out = dir.path().join("out");
        let options = BatchOptions {
            output_dir: Some(out.clone()),
            workers: 2,
            ..BatchOptions::default()
        };
        let inputs = collect_inputs(dir.path()).unwrap();
        let done = AtomicUsize::new(0);
        let outcomes = run_batch(&inputs, &options, |_| {
            done.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        assert_eq!(done.load(Ordering::SeqCst), 3);
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_success());
        assert_eq!(outcomes[0].announcements, 2);
        assert_eq!(outcomes[0].output, Some(out.join("BORME-A-1.json")));
        assert!(out.join("BORME-A-1.json").exists());

        assert!(!outcomes[1].is_success());
        assert!(outcomes[1].error.as_deref().unwrap().contains("PDF"));
        assert!(!outcomes[2].is_success());
        assert!(!out.join("BORME-A-2.json").exists());
    }

    #[test]
    fn test_process_file_without_output_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.txt");
        fs::write(&path, "Cabecera\n1 - ACME SL\n").unwrap();

        let outcome = process_file(&path, &BatchOptions::default());
        assert!(outcome.is_success());
        assert_eq!(outcome.output, None);
        assert_eq!(outcome.announcements, 1);
    }
}
