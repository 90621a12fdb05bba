//! JSON writer for extracted records.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use borme_core::ParsedDocument;
use serde::Serialize;

use crate::error::Result;

/// Encode a value as JSON.
///
/// Pretty mode indents two spaces and ends with a newline; compact mode
/// emits a single line with no trailing newline.
///
/// # Examples
/// ```
/// use borme_harvester::output::to_json;
///
/// assert_eq!(to_json(&vec![1, 2], false).unwrap(), "[1,2]");
/// assert_eq!(to_json(&vec![1], true).unwrap(), "[\n  1\n]\n");
/// ```
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    if pretty {
        let mut content = serde_json::to_string_pretty(value)?;
        content.push('\n');
        Ok(content)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

/// Encode a parsed document: a bulletin becomes an object, Section C
/// records an array.
pub fn document_json(document: &ParsedDocument, pretty: bool) -> Result<String> {
    match document {
        ParsedDocument::Bulletin(bulletin) => to_json(bulletin, pretty),
        ParsedDocument::SectionC(records) => to_json(records, pretty),
    }
}

/// `<output_dir>/<input stem>.json`
pub fn output_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output_dir.join(format!("{stem}.json"))
}

/// Write a parsed document next to its siblings in `output_dir`.
///
/// Writes to a temp file, syncs, then renames so a crash never leaves a
/// truncated JSON file behind.
///
/// # Returns
/// Path of the written file
pub fn save_json(
    document: &ParsedDocument,
    input: &Path,
    output_dir: &Path,
    pretty: bool,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let output_file = output_path(output_dir, input);
    let temp_file = output_file.with_extension("json.tmp");

    let content = document_json(document, pretty)?;
    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(&output_file)?;
    }

    fs::rename(&temp_file, &output_file)?;
    tracing::debug!(path = %output_file.display(), "Wrote JSON");

    Ok(output_file)
}
