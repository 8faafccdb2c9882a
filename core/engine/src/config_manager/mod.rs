use serde::{Deserialize, Serialize};

/// Run configuration for one dubbing invocation.
///
/// `keep_voice_tail` controls what happens to the original voice audio after
/// the last segment: the background tail is always kept, but the voice tail
/// is discarded unless this flag is set. Kept as an explicit policy toggle
/// rather than hard-coded either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub target_language: String,
    /// Skip video retiming even when a video timeline is supplied.
    #[serde(default)]
    pub voice_only: bool,
    #[serde(default)]
    pub keep_voice_tail: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_language: "en".to_string(),
            voice_only: false,
            keep_voice_tail: false,
        }
    }
}
