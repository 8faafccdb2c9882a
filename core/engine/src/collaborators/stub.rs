use async_trait::async_trait;

use crate::clip::AudioClip;
use crate::types::{SpeakerTurn, Utterance};

use super::{CloneRequest, Diarizer, TranscriberAligner, Translator, VoiceCloner};

/// Diarizer stub returning a canned turn list (for tests and development).
pub struct DiarizerStub {
    turns: Vec<SpeakerTurn>,
}

impl DiarizerStub {
    pub fn new(turns: Vec<SpeakerTurn>) -> Self {
        Self { turns }
    }
}

#[async_trait]
impl Diarizer for DiarizerStub {
    async fn diarize(&self, _audio: &AudioClip) -> anyhow::Result<Vec<SpeakerTurn>> {
        Ok(self.turns.clone())
    }
}

/// Transcriber stub returning canned utterances and a fixed language.
pub struct TranscriberStub {
    utterances: Vec<Utterance>,
    language: String,
}

impl TranscriberStub {
    pub fn new(utterances: Vec<Utterance>, language: &str) -> Self {
        Self {
            utterances,
            language: language.to_string(),
        }
    }
}

#[async_trait]
impl TranscriberAligner for TranscriberStub {
    async fn transcribe_and_align(
        &self,
        _audio: &AudioClip,
    ) -> anyhow::Result<(Vec<Utterance>, String)> {
        Ok((self.utterances.clone(), self.language.clone()))
    }
}

/// Translator stub that tags the text with the destination language.
pub struct TranslatorStub;

impl TranslatorStub {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TranslatorStub {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for TranslatorStub {
    async fn translate(
        &self,
        text: &str,
        _src_lang: &str,
        dst_lang: &str,
    ) -> anyhow::Result<String> {
        Ok(format!("[{}] {}", dst_lang, text))
    }
}

/// Voice cloner stub producing silence whose duration scales with the text
/// length, so duration-dependent behavior stays observable in tests.
pub struct VoiceClonerStub {
    sample_rate: u32,
    secs_per_char: f64,
}

impl VoiceClonerStub {
    pub fn new(sample_rate: u32, secs_per_char: f64) -> Self {
        Self {
            sample_rate,
            secs_per_char,
        }
    }
}

#[async_trait]
impl VoiceCloner for VoiceClonerStub {
    async fn clone_voice(&self, request: CloneRequest) -> anyhow::Result<AudioClip> {
        let secs = request.text.chars().count() as f64 * self.secs_per_char;
        Ok(AudioClip::silence(self.sample_rate, secs.max(0.05)))
    }
}
