use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Duration and frame rate of the source video, the only metadata the core
/// needs; decoding the container is an external concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VideoTimeline {
    pub duration_secs: f64,
    pub fps: f64,
}

/// A uniform linear time warp of the source video onto the new audio
/// duration. Every original frame survives; none are dropped or duplicated.
/// `ratio > 1` plays faster than real time, `ratio < 1` is slow motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetimedVideo {
    pub ratio: f64,
    pub duration_secs: f64,
    pub fps: f64,
}

impl RetimedVideo {
    /// Plans the warp for a video that must end exactly when `audio_secs` of
    /// combined audio ends: `ratio = V / A`, new duration `A`, frame rate
    /// rescaled by `1 / ratio`.
    pub fn plan(video: VideoTimeline, audio_secs: f64) -> EngineResult<RetimedVideo> {
        if !video.duration_secs.is_finite() || video.duration_secs <= 0.0 {
            return Err(EngineError::invalid_timeline(format!(
                "video duration must be positive, got {}",
                video.duration_secs
            )));
        }
        if !audio_secs.is_finite() || audio_secs <= 0.0 {
            return Err(EngineError::invalid_timeline(format!(
                "audio duration must be positive, got {}",
                audio_secs
            )));
        }
        if !video.fps.is_finite() || video.fps <= 0.0 {
            return Err(EngineError::invalid_timeline(format!(
                "frame rate must be positive, got {}",
                video.fps
            )));
        }

        let ratio = video.duration_secs / audio_secs;
        Ok(RetimedVideo {
            ratio,
            duration_secs: audio_secs,
            fps: video.fps / ratio,
        })
    }
}

/// Maps a retimed-timeline timestamp back onto the original timeline.
/// Applies to visual and mask channels alike.
pub fn map_timestamp(ratio: f64, t: f64) -> f64 {
    ratio * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIDEO: VideoTimeline = VideoTimeline {
        duration_secs: 10.0,
        fps: 30.0,
    };

    #[test]
    fn matching_durations_are_a_no_op() {
        let plan = RetimedVideo::plan(VIDEO, 10.0).unwrap();
        assert!((plan.ratio - 1.0).abs() < 1e-12);
        assert!((plan.duration_secs - 10.0).abs() < 1e-12);
        assert!((plan.fps - 30.0).abs() < 1e-12);
    }

    #[test]
    fn longer_audio_slows_playback() {
        let plan = RetimedVideo::plan(VIDEO, 20.0).unwrap();
        assert!((plan.ratio - 0.5).abs() < 1e-12);
        assert!((plan.duration_secs - 20.0).abs() < 1e-12);
        assert!((plan.fps - 60.0).abs() < 1e-12);
        // a timestamp halfway through the new timeline reads the original at 5s
        assert!((map_timestamp(plan.ratio, 10.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn shorter_audio_speeds_playback() {
        let plan = RetimedVideo::plan(VIDEO, 5.0).unwrap();
        assert!((plan.ratio - 2.0).abs() < 1e-12);
        assert!((plan.fps - 15.0).abs() < 1e-12);
    }

    #[test]
    fn non_positive_durations_are_rejected() {
        for bad in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                RetimedVideo::plan(VIDEO, bad).unwrap_err(),
                EngineError::InvalidTimeline { .. }
            ));
            assert!(matches!(
                RetimedVideo::plan(
                    VideoTimeline {
                        duration_secs: bad,
                        fps: 30.0
                    },
                    5.0
                )
                .unwrap_err(),
                EngineError::InvalidTimeline { .. }
            ));
        }
    }
}
