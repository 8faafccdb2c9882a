//! External collaborator contracts.
//!
//! Transcription, diarization, translation and voice cloning are black boxes
//! behind these traits; the pipeline only composes their outputs into one
//! consistent timeline. Implementations return `anyhow::Result` so their own
//! error types stay opaque; the pipeline wraps failures into
//! `EngineError::Collaborator` with the stage and segment index attached.
//! Retry and timeout policy belong to the implementations' callers, never to
//! the stitching core.

mod stub;

pub use stub::{DiarizerStub, TranscriberStub, TranslatorStub, VoiceClonerStub};

use async_trait::async_trait;

use crate::clip::AudioClip;
use crate::types::{SpeakerTurn, Utterance};

/// Everything the voice cloner needs for one segment.
#[derive(Debug, Clone)]
pub struct CloneRequest {
    /// Reference audio for the target voice: the segment's own (or merged
    /// per-speaker) voice first, the full voice track second.
    pub references: Vec<AudioClip>,
    /// Text to speak, already translated.
    pub text: String,
    pub language: String,
}

#[async_trait]
pub trait Diarizer: Send + Sync {
    /// Speaker turns, non-overlapping and ascending by start.
    async fn diarize(&self, audio: &AudioClip) -> anyhow::Result<Vec<SpeakerTurn>>;
}

#[async_trait]
pub trait TranscriberAligner: Send + Sync {
    /// Time-aligned utterances plus the detected source language.
    async fn transcribe_and_align(
        &self,
        audio: &AudioClip,
    ) -> anyhow::Result<(Vec<Utterance>, String)>;
}

#[async_trait]
pub trait Translator: Send + Sync {
    /// Pure text-to-text translation; no side effects assumed.
    async fn translate(&self, text: &str, src_lang: &str, dst_lang: &str)
        -> anyhow::Result<String>;
}

#[async_trait]
pub trait VoiceCloner: Send + Sync {
    /// Synthesizes `request.text` in the reference voice. The duration of
    /// the result is opaque and unconstrained by the original span.
    async fn clone_voice(&self, request: CloneRequest) -> anyhow::Result<AudioClip>;
}
