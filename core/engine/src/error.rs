use std::error::Error;
use std::fmt::{Display, Formatter};

/// Pipeline stage an external collaborator failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Diarization,
    Transcription,
    Translation,
    VoiceCloning,
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Diarization => "diarization",
            Stage::Transcription => "transcription",
            Stage::Translation => "translation",
            Stage::VoiceCloning => "voice cloning",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug)]
pub enum EngineError {
    /// A segment carries a speaker id that has no merged voice buffer.
    MissingSpeakerTrack { speaker_id: String },
    /// A segment's cloned audio is absent or zero-length; skipping it would
    /// desynchronize every later gap insertion, so the run aborts.
    EmptySynthesis { segment: usize },
    /// The reconciler was asked to produce a non-positive or non-finite duration.
    InvalidDurationRatio { target_secs: f64 },
    /// A timeline quantity (segment span, track rate, video/audio duration)
    /// is outside its valid domain.
    InvalidTimeline { detail: String },
    /// The engine builder was finalized without a required collaborator.
    MissingCollaborator { name: &'static str },
    /// An external collaborator call failed.
    Collaborator {
        stage: Stage,
        segment: Option<usize>,
        source: anyhow::Error,
    },
}

impl EngineError {
    pub fn collaborator(stage: Stage, segment: Option<usize>, source: anyhow::Error) -> Self {
        Self::Collaborator {
            stage,
            segment,
            source,
        }
    }

    pub fn invalid_timeline<T: Into<String>>(detail: T) -> Self {
        Self::InvalidTimeline {
            detail: detail.into(),
        }
    }
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::MissingSpeakerTrack { speaker_id } => {
                write!(f, "no merged voice track for speaker '{}'", speaker_id)
            }
            EngineError::EmptySynthesis { segment } => {
                write!(f, "segment {}: cloned audio is missing or empty", segment)
            }
            EngineError::InvalidDurationRatio { target_secs } => {
                write!(
                    f,
                    "cannot reconcile noise slice to {} seconds (duration must be finite and positive)",
                    target_secs
                )
            }
            EngineError::InvalidTimeline { detail } => {
                write!(f, "invalid timeline: {}", detail)
            }
            EngineError::MissingCollaborator { name } => {
                write!(f, "{} is missing", name)
            }
            EngineError::Collaborator {
                stage,
                segment,
                source,
            } => match segment {
                Some(index) => write!(f, "{} failed at segment {}: {}", stage, index, source),
                None => write!(f, "{} failed: {}", stage, source),
            },
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EngineError::Collaborator { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
