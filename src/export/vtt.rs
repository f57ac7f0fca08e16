//! VTT (WebVTT) subtitle format writer.

use super::timecode::format_clock_time;
use super::{output_path, write_output, ExportError, Result};
use crate::transcription::Segment;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write the `WEBVTT` header and one numbered cue per segment.
pub fn write_vtt<W: Write + ?Sized>(out: &mut W, segments: &[Segment]) -> Result<()> {
    writeln!(out, "WEBVTT")?;
    writeln!(out)?;

    for (i, seg) in segments.iter().enumerate() {
        let text = seg
            .sentence
            .as_deref()
            .ok_or(ExportError::MissingSentence { index: i })?;
        let start = format_clock_time(seg.start)?;
        let end = format_clock_time(seg.end)?;

        writeln!(out, "{}", i + 1)?;
        writeln!(out, "{} --> {}", start, end)?;
        writeln!(out, "{}", text)?;
        writeln!(out)?;
    }

    Ok(())
}

/// Write `<base>.vtt`, replacing any existing file.
pub fn write_vtt_file(base: impl AsRef<Path>, segments: &[Segment]) -> Result<PathBuf> {
    let path = output_path(base, ".vtt");
    debug!("Writing {} cues to {:?}", segments.len(), path);

    write_output(&path, |file| write_vtt(file, segments))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(segments: &[Segment]) -> String {
        let mut out = Vec::new();
        write_vtt(&mut out, segments).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_has_header_only() {
        assert_eq!(render(&[]), "WEBVTT\n\n");
    }

    #[test]
    fn test_cues_are_numbered_in_order() {
        let vtt = render(&[
            Segment::new(0.0, 2.5, "Hello world"),
            Segment::new(3661.25, 3665.0, "hello"),
        ]);

        assert_eq!(
            vtt,
            "WEBVTT\n\n\
             1\n00:00:00.000 --> 00:00:02.500\nHello world\n\n\
             2\n01:01:01.250 --> 01:01:05.000\nhello\n\n"
        );
    }

    #[test]
    fn test_timing_wraps_after_a_day() {
        let vtt = render(&[Segment::new(86401.0, 86402.5, "late")]);
        assert!(vtt.contains("00:00:01.000 --> 00:00:02.500"));
    }

    #[test]
    fn test_missing_sentence_is_an_error() {
        let mut out = Vec::new();
        let err = write_vtt(
            &mut out,
            &[Segment::new(0.0, 1.0, "ok"), Segment::untranscribed(1.0, 2.0)],
        )
        .unwrap_err();

        assert!(matches!(err, ExportError::MissingSentence { index: 1 }));
    }
}
