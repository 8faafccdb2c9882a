pub mod clip;
pub mod collaborators;
pub mod config_manager;
pub mod error;
pub mod mixer;
pub mod perf;
pub mod pipeline;
pub mod reconciler;
pub mod retiming;
pub mod segment;
pub mod stitcher;
pub mod transcript;
pub mod types;
pub mod voice_merge;
pub mod wav;

pub use clip::AudioClip;
pub use collaborators::{
    CloneRequest, Diarizer, DiarizerStub, TranscriberAligner, TranscriberStub, Translator,
    TranslatorStub, VoiceCloner, VoiceClonerStub,
};
pub use config_manager::EngineConfig;
pub use error::{EngineError, EngineResult, Stage};
pub use mixer::mix_tracks;
pub use perf::PipelineTiming;
pub use pipeline::{DubbingEngine, DubbingEngineBuilder, DubbingOutput};
pub use reconciler::reconcile;
pub use retiming::{map_timestamp, RetimedVideo, VideoTimeline};
pub use segment::Segment;
pub use stitcher::{StitchedTracks, TimelineStitcher};
pub use transcript::{TranscriptLine, TranscriptLog};
pub use types::{SpeakerTurn, Utterance};
pub use voice_merge::merge_voices;
pub use wav::{encode_wav, write_wav};
