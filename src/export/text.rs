//! Plain text writer: one sentence per line.

use super::{output_path, write_output, Result};
use crate::transcription::Segment;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write each sentence on its own line. Segments without a sentence are
/// skipped without leaving a blank line.
pub fn write_text<W: Write + ?Sized>(out: &mut W, segments: &[Segment]) -> Result<()> {
    let mut skipped = 0;

    for seg in segments {
        match seg.sentence.as_deref() {
            Some(text) => writeln!(out, "{}", text)?,
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {} segments without text", skipped);
    }

    Ok(())
}

/// Write `<base>.txt`, replacing any existing file.
pub fn write_text_file(base: impl AsRef<Path>, segments: &[Segment]) -> Result<PathBuf> {
    let path = output_path(base, ".txt");
    write_output(&path, |file| write_text(file, segments))?;
    Ok(path)
}
