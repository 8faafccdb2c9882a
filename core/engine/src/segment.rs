use std::collections::HashMap;

use crate::clip::AudioClip;
use crate::error::{EngineError, EngineResult};

/// One diarized, time-bounded speaker utterance.
///
/// `start`/`end` are seconds in the *original* recording's timeline. The
/// reference voice slice is resolved eagerly at construction: a segment with
/// a speaker id draws from that speaker's merged voice buffer, an
/// unattributed segment slices the mixed voice track directly. Translation
/// and cloned audio are attached once each via the consuming setters; after
/// that the segment is read-only until the stitcher consumes it.
#[derive(Debug, Clone)]
pub struct Segment {
    index: usize,
    start: f64,
    end: f64,
    speaker_id: Option<String>,
    source_text: String,
    reference_voice: AudioClip,
    translated_text: Option<String>,
    cloned_audio: Option<AudioClip>,
}

impl Segment {
    pub fn from_parts(
        index: usize,
        start: f64,
        end: f64,
        speaker_id: Option<String>,
        source_text: String,
        merged_voices: &HashMap<String, AudioClip>,
        mixed_voice: &AudioClip,
    ) -> EngineResult<Self> {
        if !start.is_finite() || !end.is_finite() || start < 0.0 || end <= start {
            return Err(EngineError::invalid_timeline(format!(
                "segment {}: span {}..{} violates 0 <= start < end",
                index, start, end
            )));
        }

        let reference_voice = match &speaker_id {
            Some(id) => merged_voices
                .get(id)
                .cloned()
                .ok_or_else(|| EngineError::MissingSpeakerTrack {
                    speaker_id: id.clone(),
                })?,
            None => mixed_voice.slice(start, end),
        };

        Ok(Self {
            index,
            start,
            end,
            speaker_id,
            source_text,
            reference_voice,
            translated_text: None,
            cloned_audio: None,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Original span length; independent of the cloned rendition's length.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub fn speaker_id(&self) -> Option<&str> {
        self.speaker_id.as_deref()
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn translated_text(&self) -> Option<&str> {
        self.translated_text.as_deref()
    }

    /// The voice audio handed to the cloner as this segment's reference.
    pub fn reference_voice(&self) -> &AudioClip {
        &self.reference_voice
    }

    pub fn cloned_audio(&self) -> Option<&AudioClip> {
        self.cloned_audio.as_ref()
    }

    pub fn with_translation(mut self, text: String) -> Self {
        self.translated_text = Some(text);
        self
    }

    pub fn with_cloned_audio(mut self, clip: AudioClip) -> Self {
        self.cloned_audio = Some(clip);
        self
    }
}
