use crate::clip::AudioClip;
use crate::perf::PipelineTiming;
use crate::retiming::RetimedVideo;
use crate::transcript::TranscriptLog;

/// Everything one dubbing run produces.
#[derive(Debug, Clone)]
pub struct DubbingOutput {
    pub run_id: String,
    /// Source language detected by the transcriber.
    pub language: String,
    /// Speech overlaid on the reconciled background track.
    pub combined_audio: AudioClip,
    /// Background-only track (the reconciled noise track).
    pub background_audio: AudioClip,
    /// Present when a video timeline was supplied and `voice_only` is off.
    pub retimed_video: Option<RetimedVideo>,
    pub transcript: TranscriptLog,
    pub timing: PipelineTiming,
}
