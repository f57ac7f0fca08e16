//! Delimited CSV writer.
//!
//! Rows hold the segment's start timecode, an optional empty speaker column
//! for later annotation, and the transcript text. Fields are quoted only when
//! they contain the delimiter, a quote or a line break.

use super::timecode::format_timecode;
use super::{output_path, write_output, ExportError, Result};
use crate::transcription::Segment;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

const QUOTE: char = '"';
const LINE_TERMINATOR: &str = "\r\n";

/// CSV output options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field separator (default: ',')
    pub delimiter: char,
    /// Add an empty SPEAKER column and write to `<base>_speaker.csv`
    pub speaker_column: bool,
    /// Write the column names as the first row
    pub write_header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            speaker_column: false,
            write_header: false,
        }
    }
}

impl CsvOptions {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_speaker_column(mut self) -> Self {
        self.speaker_column = true;
        self
    }

    pub fn with_header(mut self) -> Self {
        self.write_header = true;
        self
    }

    /// File name suffix for these options
    pub fn suffix(&self) -> &'static str {
        if self.speaker_column {
            "_speaker.csv"
        } else {
            ".csv"
        }
    }

    fn columns(&self) -> &'static [&'static str] {
        if self.speaker_column {
            &["IN", "SPEAKER", "TRANSCRIPT"]
        } else {
            &["IN", "TRANSCRIPT"]
        }
    }
}

/// Write one row per segment, preceded by a header row if requested.
pub fn write_csv<W: Write + ?Sized>(
    out: &mut W,
    segments: &[Segment],
    options: &CsvOptions,
) -> Result<()> {
    if options.write_header {
        write_row(out, options.columns(), options.delimiter)?;
    }

    for (i, seg) in segments.iter().enumerate() {
        let text = seg
            .sentence
            .as_deref()
            .ok_or(ExportError::MissingSentence { index: i })?;
        let timecode = format_timecode(seg.start)?;

        if options.speaker_column {
            write_row(out, &[timecode.as_str(), "", text], options.delimiter)?;
        } else {
            write_row(out, &[timecode.as_str(), text], options.delimiter)?;
        }
    }

    Ok(())
}

/// Write `<base>.csv` (or `<base>_speaker.csv`), replacing any existing file.
pub fn write_csv_file(
    base: impl AsRef<Path>,
    segments: &[Segment],
    options: &CsvOptions,
) -> Result<PathBuf> {
    let path = output_path(base, options.suffix());
    debug!("Writing {} CSV rows to {:?} ({:?})", segments.len(), path, options);

    write_output(&path, |file| write_csv(file, segments, options))?;
    Ok(path)
}

fn write_row<W: Write + ?Sized>(out: &mut W, fields: &[&str], delimiter: char) -> Result<()> {
    let mut sep = [0u8; 4];
    let sep = delimiter.encode_utf8(&mut sep);

    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.write_all(sep.as_bytes())?;
        }
        out.write_all(quote_field(field, delimiter).as_bytes())?;
    }
    out.write_all(LINE_TERMINATOR.as_bytes())?;

    Ok(())
}

/// Quote `field` if it would otherwise break the row, doubling inner quotes.
fn quote_field(field: &str, delimiter: char) -> Cow<'_, str> {
    let needs_quotes = field
        .chars()
        .any(|c| c == delimiter || c == QUOTE || c == '\n' || c == '\r');

    if !needs_quotes {
        return Cow::Borrowed(field);
    }

    let mut quoted = String::with_capacity(field.len() + 2);
    quoted.push(QUOTE);
    for c in field.chars() {
        if c == QUOTE {
            quoted.push(QUOTE);
        }
        quoted.push(c);
    }
    quoted.push(QUOTE);

    Cow::Owned(quoted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(segments: &[Segment], options: &CsvOptions) -> String {
        let mut out = Vec::new();
        write_csv(&mut out, segments, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn read_back(input: &str, delimiter: char) -> Vec<Vec<String>> {
        let mut reader = ::csv::ReaderBuilder::new()
            .delimiter(delimiter as u8)
            .has_headers(false)
            .from_reader(input.as_bytes());

        reader
            .records()
            .map(|record| {
                record
                    .unwrap()
                    .iter()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    #[test]
    fn test_basic_rows() {
        let csv = render(
            &[
                Segment::new(0.0, 1.0, "hi"),
                Segment::new(3661.25, 3665.0, "hello"),
            ],
            &CsvOptions::default(),
        );
        assert_eq!(csv, "00:00:00.000,hi\r\n01:01:01.250,hello\r\n");
    }

    #[test]
    fn test_header_and_speaker_column() {
        let options = CsvOptions::default().with_header().with_speaker_column();
        let csv = render(&[Segment::new(5.0, 6.0, "x")], &options);
        assert_eq!(csv, "IN,SPEAKER,TRANSCRIPT\r\n00:00:05.000,,x\r\n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(&[], &CsvOptions::default()), "");
        assert_eq!(
            render(&[], &CsvOptions::default().with_header()),
            "IN,TRANSCRIPT\r\n"
        );
    }

    #[test]
    fn test_suffix() {
        assert_eq!(CsvOptions::default().suffix(), ".csv");
        assert_eq!(
            CsvOptions::default().with_speaker_column().suffix(),
            "_speaker.csv"
        );
    }

    #[test]
    fn test_quote_field() {
        assert_eq!(quote_field("plain", ','), "plain");
        assert_eq!(quote_field("a,b", ','), "\"a,b\"");
        assert_eq!(quote_field("a,b", ';'), "a,b");
        assert_eq!(quote_field("say \"hi\"", ','), "\"say \"\"hi\"\"\"");
        assert_eq!(quote_field("two\nlines", ','), "\"two\nlines\"");
    }

    #[test]
    fn test_hours_do_not_wrap() {
        let csv = render(&[Segment::new(90061.5, 90062.0, "late")], &CsvOptions::default());
        assert_eq!(csv, "25:01:01.500,late\r\n");
    }

    #[test]
    fn test_round_trip_with_awkward_text() {
        let segments = vec![
            Segment::new(0.0, 1.0, "commas, and \"quotes\""),
            Segment::new(1.0, 2.0, "semi;colon"),
            Segment::new(2.0, 3.0, "line\nbreak"),
            Segment::new(3.0, 4.0, "carriage\r\nreturn"),
            Segment::new(4.0, 5.0, "tab\tinside"),
            Segment::new(5.0, 6.0, ""),
        ];

        for delimiter in [',', ';', '\t'] {
            let options = CsvOptions::default()
                .with_delimiter(delimiter)
                .with_header()
                .with_speaker_column();
            let rows = read_back(&render(&segments, &options), delimiter);

            assert_eq!(rows.len(), segments.len() + 1);
            assert_eq!(rows[0], vec!["IN", "SPEAKER", "TRANSCRIPT"]);
            for (row, seg) in rows[1..].iter().zip(&segments) {
                assert_eq!(row.len(), 3);
                assert_eq!(row[1], "");
                assert_eq!(Some(row[2].as_str()), seg.sentence.as_deref());
            }
        }
    }

    #[test]
    fn test_missing_sentence_is_an_error() {
        let mut out = Vec::new();
        let err = write_csv(
            &mut out,
            &[Segment::untranscribed(0.0, 1.0)],
            &CsvOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ExportError::MissingSentence { index: 0 }));
    }
}
