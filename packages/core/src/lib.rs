//! BORME core - Extract structured records from Spanish commercial-registry
//! gazette documents.
//!
//! This crate turns already-decoded bulletin text into typed records. It
//! never touches the network: callers hand it a file or a byte buffer.
//!
//! # Example
//!
//! ```
//! use borme_core::{extract_bulletin, Act, Section};
//!
//! let text = "\
//! Cabecera
//! 57344 - ALDARA CATERING SL(R.M. Madrid)
//! Texto
//! /F1 Nombramientos. Tj
//! /F2 Adm. Unico: PEREZ GARCIA JUAN. Tj
//! ";
//! let bulletin = extract_bulletin(text, Section::A);
//! let announcement = &bulletin.announcements[&1];
//! assert_eq!(announcement.company, "ALDARA CATERING SL");
//! assert!(matches!(announcement.acts[0], Act::Cargo { .. }));
//! ```
//!
//! # Architecture
//!
//! - [`patterns`]: Act-name sets and string grammars
//! - [`acts`]: Act classifier
//! - [`province`]: Province table
//! - [`section_ab`]: Line-driven Section A/B extractor
//! - [`section_c`]: XML/HTML field extractor for Section C
//! - [`classifier`]: Dispatch by section tag
//! - [`filename`]: Bulletin file-name grammar
//! - [`source`]: File or buffer input
//! - [`xml`]: Tree-query primitives
//! - [`types`]: Record types
//! - [`error`]: Error types and Result alias

pub mod acts;
pub mod classifier;
pub mod error;
pub mod filename;
pub mod patterns;
pub mod province;
pub mod section_ab;
pub mod section_c;
pub mod source;
pub mod types;
pub mod xml;

pub use classifier::{parse_document, parse_text, ParsedDocument};
pub use error::{MarkupFormat, ParseError, Result};
pub use filename::{parse_filename, FilenameInfo};
pub use province::Province;
pub use section_ab::{extract_bulletin, parse_bulletin, BulletinExtractor};
pub use section_c::{extract_section_c, parse_announcement, parse_announcements, parse_section_c};
pub use source::Source;
pub use types::{Act, ActValue, Announcement, Bulletin, Section, SectionCAnnouncement};
