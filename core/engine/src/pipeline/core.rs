use std::sync::Arc;

use crate::collaborators::{Diarizer, TranscriberAligner, Translator, VoiceCloner};
use crate::config_manager::EngineConfig;

/// The dubbing pipeline with its external collaborators.
///
/// One `run` owns all of its intermediate buffers; nothing is shared across
/// concurrent runs and no state persists between invocations.
pub struct DubbingEngine {
    pub(crate) diarizer: Arc<dyn Diarizer>,
    pub(crate) transcriber: Arc<dyn TranscriberAligner>,
    pub(crate) translator: Arc<dyn Translator>,
    pub(crate) cloner: Arc<dyn VoiceCloner>,
    pub(crate) config: EngineConfig,
}

impl DubbingEngine {
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl std::fmt::Debug for DubbingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DubbingEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Clone for DubbingEngine {
    fn clone(&self) -> Self {
        Self {
            diarizer: Arc::clone(&self.diarizer),
            transcriber: Arc::clone(&self.transcriber),
            translator: Arc::clone(&self.translator),
            cloner: Arc::clone(&self.cloner),
            config: self.config.clone(),
        }
    }
}
