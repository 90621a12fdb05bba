//! Command-line interface for the harvester.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use borme_core::{parse_document, Section, Source};
use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::batch::{
    collect_inputs, infer_section, run_batch, run_fetch, BatchOptions, BatchSummary,
    FetchOptions, Outcome,
};
use crate::compare::{compare_files, Severity};
use crate::config::{
    date_range, resolve_province, Endpoints, BOE_BASE_URL, DEFAULT_DOWNLOAD_DIR, DEFAULT_WORKERS,
};
use crate::error::{HarvesterError, Result};
use crate::http::create_client;
use crate::output::{document_json, save_json};

/// BORME Harvester - Download and parse Spanish commercial registry gazettes.
#[derive(Parser)]
#[command(name = "borme-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a decoded bulletin file or every file in a directory.
    Parse {
        /// File or directory to parse
        path: PathBuf,

        /// Section (A, B or C); inferred from the file name when omitted
        #[arg(short, long, value_parser = parse_section)]
        section: Option<Section>,

        /// Output directory for JSON files (default: print to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Indent JSON output
        #[arg(long)]
        pretty: bool,

        /// Number of parallel workers for directories
        #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
        workers: usize,
    },

    /// Download and parse the bulletins of a date range.
    Fetch {
        /// First date (YYYY-MM-DD)
        #[arg(long)]
        start_date: String,

        /// Last date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end_date: String,

        /// Province as INE code or name
        #[arg(short, long, default_value = "28")]
        province: String,

        /// Section (A, B or C)
        #[arg(short, long, default_value = "A", value_parser = parse_section)]
        section: Section,

        /// Directory for downloaded files
        #[arg(long, default_value = DEFAULT_DOWNLOAD_DIR)]
        download_dir: PathBuf,

        /// Output directory for JSON files (default: the download directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Indent JSON output
        #[arg(long)]
        pretty: bool,

        /// Number of parallel workers
        #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
        workers: usize,

        /// Base URL of the BOE server
        #[arg(long, default_value = BOE_BASE_URL, hide = true)]
        base_url: String,
    },

    /// Compare two bulletin JSON results.
    Compare {
        /// Known-good JSON result
        expected: PathBuf,

        /// JSON result to check
        actual: PathBuf,

        /// Show the differing values
        #[arg(short, long)]
        verbose: bool,
    },
}

fn parse_section(value: &str) -> std::result::Result<Section, String> {
    value.parse().map_err(|e: borme_core::ParseError| e.to_string())
}

/// Run the CLI.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            path,
            section,
            output,
            pretty,
            workers,
        } => {
            let options = BatchOptions {
                section,
                output_dir: output,
                pretty,
                workers,
            };
            if path.is_dir() {
                parse_directory(&path, &options)
            } else {
                parse_single(&path, &options)
            }
        }
        Commands::Fetch {
            start_date,
            end_date,
            province,
            section,
            download_dir,
            output,
            pretty,
            workers,
            base_url,
        } => {
            let endpoints = if base_url == BOE_BASE_URL {
                Endpoints::default()
            } else {
                Endpoints::with_base(&base_url)
            };
            let options = FetchOptions {
                section,
                province: resolve_province(&province)?,
                batch: BatchOptions {
                    section: Some(section),
                    output_dir: Some(output.unwrap_or_else(|| download_dir.clone())),
                    pretty,
                    workers,
                },
                download_dir,
                endpoints,
            };
            fetch_command(&start_date, &end_date, &options)
        }
        Commands::Compare {
            expected,
            actual,
            verbose,
        } => compare_command(&expected, &actual, verbose),
    }
}

/// Parse one file: print JSON to stdout, or write it under `--output`.
fn parse_single(path: &Path, options: &BatchOptions) -> Result<ExitCode> {
    let section = options.section.unwrap_or_else(|| infer_section(path));
    let document = parse_document(&Source::file(path), section)?;

    match &options.output_dir {
        Some(output_dir) => {
            let written = save_json(&document, path, output_dir, options.pretty)?;
            println!(
                "{} {} announcements from {}",
                style("Parsed").green().bold(),
                document.announcement_count(),
                style(path.display()).cyan()
            );
            println!("{} {}", style("Saved to:").green().bold(), written.display());
        }
        None => print!("{}", document_json(&document, options.pretty)?),
    }
    Ok(ExitCode::SUCCESS)
}

fn parse_directory(dir: &Path, options: &BatchOptions) -> Result<ExitCode> {
    let inputs = collect_inputs(dir)?;
    println!(
        "{} {} files from {} with {} workers",
        style("Parsing").bold(),
        style(inputs.len()).cyan(),
        style(dir.display()).cyan(),
        options.workers
    );

    let pb = progress_bar(inputs.len());
    let outcomes = run_batch(&inputs, options, |_| pb.inc(1));
    pb.finish_and_clear();

    report(&outcomes?)
}

fn fetch_command(start: &str, end: &str, options: &FetchOptions) -> Result<ExitCode> {
    let dates = date_range(start, end)?;
    let client = create_client()?;

    println!(
        "{} section {} for {} ({} days)",
        style("Fetching").bold(),
        style(options.section).cyan(),
        style(&options.province.name).cyan(),
        dates.len()
    );

    let pb = progress_bar(dates.len());
    pb.set_message("Downloading bulletins...");
    let outcomes = run_fetch(&client, &dates, options, |outcome| {
        pb.set_message(outcome.input.clone());
        pb.inc(1);
    });
    pb.finish_and_clear();

    report(&outcomes?)
}

fn compare_command(expected: &Path, actual: &Path, verbose: bool) -> Result<ExitCode> {
    let result = compare_files(expected, actual)?;

    println!("{}", style("Comparison").bold());
    println!("  Expected announcements: {}", result.expected_count);
    println!("  Actual announcements: {}", result.actual_count);
    println!("  Matching: {}", result.matched);
    println!("  Differences: {}", result.differences.len());

    if !result.differences.is_empty() {
        println!();
    }
    for diff in &result.differences {
        let label = match diff.severity {
            Severity::Critical => style("CRITICAL").red().bold(),
            Severity::Warning => style("WARNING").yellow().bold(),
            Severity::Info => style("INFO").dim(),
        };
        let id = diff.id.map(|id| format!("[id={id}] ")).unwrap_or_default();
        println!("{label} {id}{}: {}", diff.field, diff.message);
        if verbose {
            println!("    expected: {}", diff.expected);
            println!("    actual:   {}", diff.actual);
        }
    }

    println!();
    if result.has_critical() {
        println!("{}", style("Critical differences found").red().bold());
        return Ok(ExitCode::FAILURE);
    }
    if result.differences.is_empty() {
        println!("{}", style("Results match").green().bold());
    } else {
        println!(
            "{}",
            style("Only non-critical differences found").yellow()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print failures and counts; non-zero exit when anything failed.
fn report(outcomes: &[Outcome]) -> Result<ExitCode> {
    for outcome in outcomes.iter().filter(|o| !o.is_success()) {
        println!(
            "  {} {}: {}",
            style("Failed").red().bold(),
            outcome.input,
            outcome.error.as_deref().unwrap_or_default()
        );
    }

    let summary = BatchSummary::from_outcomes(outcomes);
    println!();
    println!(
        "{} {} documents, {} succeeded, {} failed, {} announcements",
        style("Done:").green().bold(),
        summary.total,
        style(summary.succeeded).green(),
        if summary.failed > 0 {
            style(summary.failed).red().bold()
        } else {
            style(summary.failed).dim()
        },
        summary.announcements
    );

    if summary.total == 0 {
        return Err(HarvesterError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "No documents to process",
        )));
    }
    Ok(if summary.failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
