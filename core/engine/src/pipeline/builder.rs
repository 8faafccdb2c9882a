use std::sync::Arc;

use crate::collaborators::{Diarizer, TranscriberAligner, Translator, VoiceCloner};
use crate::config_manager::EngineConfig;
use crate::error::{EngineError, EngineResult};

use super::core::DubbingEngine;

pub struct DubbingEngineBuilder {
    diarizer: Option<Arc<dyn Diarizer>>,
    transcriber: Option<Arc<dyn TranscriberAligner>>,
    translator: Option<Arc<dyn Translator>>,
    cloner: Option<Arc<dyn VoiceCloner>>,
    config: EngineConfig,
}

impl DubbingEngineBuilder {
    pub fn new() -> Self {
        Self {
            diarizer: None,
            transcriber: None,
            translator: None,
            cloner: None,
            config: EngineConfig::default(),
        }
    }

    pub fn diarizer(mut self, diarizer: Arc<dyn Diarizer>) -> Self {
        self.diarizer = Some(diarizer);
        self
    }

    pub fn transcriber(mut self, transcriber: Arc<dyn TranscriberAligner>) -> Self {
        self.transcriber = Some(transcriber);
        self
    }

    pub fn translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn cloner(mut self, cloner: Arc<dyn VoiceCloner>) -> Self {
        self.cloner = Some(cloner);
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> EngineResult<DubbingEngine> {
        Ok(DubbingEngine {
            diarizer: self
                .diarizer
                .ok_or(EngineError::MissingCollaborator { name: "diarizer" })?,
            transcriber: self
                .transcriber
                .ok_or(EngineError::MissingCollaborator { name: "transcriber" })?,
            translator: self
                .translator
                .ok_or(EngineError::MissingCollaborator { name: "translator" })?,
            cloner: self
                .cloner
                .ok_or(EngineError::MissingCollaborator { name: "cloner" })?,
            config: self.config,
        })
    }
}

impl Default for DubbingEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
