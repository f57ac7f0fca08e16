//! Export transcript segments to VTT, plain text, CSV and JSON.
//!
//! Every format has a writer over any [`Write`] sink plus a `*_file` variant
//! that derives the output path from a base path without extension.

mod csv;
mod json;
mod text;
pub mod timecode;
mod vtt;

pub use self::csv::{write_csv, write_csv_file, CsvOptions};
pub use json::{write_json, write_json_file};
pub use text::{write_text, write_text_file};
pub use vtt::{write_vtt, write_vtt_file};

use crate::transcription::Segment;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Segment {index} has no sentence")]
    MissingSentence { index: usize },
    #[error("Timestamp cannot be formatted: {0}")]
    InvalidTimestamp(f64),
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// WebVTT subtitle format
    #[serde(alias = "webvtt")]
    Vtt,
    /// One sentence per line
    #[serde(alias = "txt")]
    Text,
    /// Delimited timecode/transcript rows
    Csv,
    /// Indented JSON
    Json,
}

impl ExportFormat {
    /// Get file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Vtt => "vtt",
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "vtt" | "webvtt" => Ok(ExportFormat::Vtt),
            "txt" | "text" => Ok(ExportFormat::Text),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Which formats [`export_segments`] writes, and how
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub formats: Vec<ExportFormat>,
    pub csv: CsvOptions,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            formats: vec![ExportFormat::Vtt, ExportFormat::Text],
            csv: CsvOptions::default(),
        }
    }
}

impl ExportConfig {
    pub fn with_formats(mut self, formats: impl IntoIterator<Item = ExportFormat>) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    pub fn with_csv(mut self, csv: CsvOptions) -> Self {
        self.csv = csv;
        self
    }
}

/// Write `segments` once per configured format.
///
/// Returns the written paths in the order of `config.formats`. The first
/// failure aborts the run; files written before it are left in place.
pub fn export_segments(
    base: impl AsRef<Path>,
    segments: &[Segment],
    config: &ExportConfig,
) -> Result<Vec<PathBuf>> {
    let base = base.as_ref();
    debug!("Exporting {} segments to {:?} as {:?}", segments.len(), base, config.formats);

    config
        .formats
        .iter()
        .map(|format| match format {
            ExportFormat::Vtt => write_vtt_file(base, segments),
            ExportFormat::Text => write_text_file(base, segments),
            ExportFormat::Csv => write_csv_file(base, segments, &config.csv),
            ExportFormat::Json => write_json_file(base, segments),
        })
        .collect()
}

/// Append `suffix` to `base` verbatim, so an existing dot in the
/// file name is kept rather than replaced.
pub fn output_path(base: impl AsRef<Path>, suffix: &str) -> PathBuf {
    let mut path = OsString::from(base.as_ref().as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

/// Create (or truncate) `path` and run `write` against a buffered handle,
/// flushing before returning so late write errors are not lost.
fn write_output<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let mut file = BufWriter::new(File::create(path)?);
    write(&mut file)?;
    file.flush()?;
    info!("Wrote {:?}", path);
    Ok(())
}
