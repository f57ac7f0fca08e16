//! Transcribed segment records.

use serde::{Deserialize, Serialize};

/// A segment of transcribed speech
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
    /// Transcribed text, absent when the segment produced no transcription
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence: Option<String>,
}

impl Segment {
    /// A transcribed segment
    pub fn new(start: f64, end: f64, sentence: impl Into<String>) -> Self {
        Self {
            start,
            end,
            sentence: Some(sentence.into()),
        }
    }

    /// A segment with timing but no text
    pub fn untranscribed(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            sentence: None,
        }
    }

    /// Duration of the segment in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
