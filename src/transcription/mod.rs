//! Transcription data handed to the exporters.

pub mod segment;

pub use segment::Segment;
