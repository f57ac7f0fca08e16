//! Transcript exporters.
//!
//! Turns an ordered list of transcribed [`Segment`]s into WebVTT subtitles,
//! plain text, delimited CSV or indented JSON files.

pub mod export;
pub mod transcription;

pub use export::{
    export_segments, output_path, write_csv, write_csv_file, write_json, write_json_file,
    write_text, write_text_file, write_vtt, write_vtt_file, CsvOptions, ExportConfig,
    ExportError, ExportFormat, Result,
};
pub use transcription::Segment;
