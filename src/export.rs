//! Export of the last fetched payload
//!
//! Reproduces the payload exactly as received, pretty-printed, under a
//! date-stamped filename. The sink side just delivers bytes under a name.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("nothing to export - run a search first")]
    NothingFetched,
    #[error("could not write export file: {0}")]
    Io(String),
}

/// Date-stamped export filename
pub fn export_filename(date: NaiveDate) -> String {
    format!("gearbox-search-results-{}.json", date.format("%Y-%m-%d"))
}

/// Serialize the last raw payload for download. `None` means no fetch has
/// happened yet; that is reported, not papered over with an empty file.
pub fn export_payload(
    last_payload: Option<&Value>,
    date: NaiveDate,
) -> Result<(String, String), ExportError> {
    let payload = last_payload.ok_or(ExportError::NothingFetched)?;
    let body = serde_json::to_string_pretty(payload).map_err(|e| ExportError::Io(e.to_string()))?;
    Ok((export_filename(date), body))
}

/// Where downloads land: the platform download directory, or the working
/// directory when the platform has none.
pub fn download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Deliver the serialized artifact under its name; returns the full path
/// for the status line.
pub fn write_download(dir: &Path, filename: &str, body: &str) -> Result<PathBuf, ExportError> {
    let path = dir.join(filename);
    std::fs::write(&path, body).map_err(|e| ExportError::Io(e.to_string()))?;
    tracing::info!("exported results to {}", path.display());
    Ok(path)
}
