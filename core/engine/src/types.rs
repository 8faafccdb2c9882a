use serde::{Deserialize, Serialize};

/// One diarizer turn: a time span of the recording attributed to a speaker.
///
/// Turns arrive sorted by `start` and non-overlapping (diarizer contract);
/// `speaker_id` is absent when the diarizer could not attribute the span.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerTurn {
    pub start: f64,
    pub end: f64,
    pub speaker_id: Option<String>,
}

/// One transcribed, time-aligned utterance in the source language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utterance {
    pub start: f64,
    pub end: f64,
    pub text: String,
}
