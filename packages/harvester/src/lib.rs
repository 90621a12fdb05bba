//! BORME Harvester - Download and parse Spanish commercial registry gazettes.
//!
//! This crate wraps [`borme_core`] with everything needed to run it over
//! real data: downloading bulletins from the BOE, parsing whole directories
//! on a worker pool, writing JSON and comparing results.
//!
//! # Example
//!
//! ```
//! use borme_harvester::config;
//!
//! // Validate a date and a province argument
//! assert!(config::validate_date("2015-10-27").is_ok());
//! assert_eq!(config::resolve_province("28").unwrap().name, "Madrid");
//! ```
//!
//! # Architecture
//!
//! The harvester is organized into several modules:
//!
//! - [`config`]: Configuration constants, URL builders and validation
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client with retry
//! - [`summary`]: Daily summary parsing
//! - [`batch`]: Parallel parsing and date-range fetching
//! - [`output`]: JSON output
//! - [`compare`]: Result comparison
//! - [`cli`]: Command-line interface

pub mod batch;
pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod http;
pub mod output;
pub mod summary;

// Re-export commonly used items
pub use batch::{run_batch, run_fetch, BatchOptions, BatchSummary, FetchOptions, Outcome};
pub use compare::{compare_bulletins, compare_files, Comparison, Difference, Severity};
pub use config::{validate_date, Endpoints};
pub use error::{HarvesterError, Result};
pub use summary::{parse_summary, DailySummary, SummaryItem};
