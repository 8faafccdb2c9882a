use crate::clip::AudioClip;
use crate::error::{EngineError, EngineResult};
use crate::reconciler::reconcile;
use crate::segment::Segment;

/// The two parallel output tracks, advanced in lockstep over the original
/// timeline during stitching.
#[derive(Debug, Clone)]
pub struct StitchedTracks {
    pub speech: AudioClip,
    pub noise: AudioClip,
}

/// Walks the ordered segment sequence once, replacing each segment's
/// original span with its cloned rendition and preserving everything outside
/// segment spans unchanged.
///
/// Per segment the speech track grows by exactly the cloned audio's length
/// and the noise track by the reconciled length of the same span's noise
/// slice, so at every gap boundary both tracks sit at the same cumulative
/// offset into the processed original timeline.
pub struct TimelineStitcher {
    keep_voice_tail: bool,
}

impl TimelineStitcher {
    pub fn new() -> Self {
        Self {
            keep_voice_tail: false,
        }
    }

    /// After the last segment the background tail is always kept; the
    /// original voice tail is appended to the speech track only when `keep`
    /// is set.
    pub fn with_voice_tail(keep: bool) -> Self {
        Self {
            keep_voice_tail: keep,
        }
    }

    pub fn stitch(
        &self,
        segments: &[Segment],
        voice: &AudioClip,
        noise: &AudioClip,
    ) -> EngineResult<StitchedTracks> {
        let rate = noise.sample_rate();
        let recording_end = noise.duration_seconds();

        let mut speech_track = AudioClip::empty(rate);
        let mut noise_track = AudioClip::empty(rate);
        let mut prev_end = 0.0f64;

        for (i, segment) in segments.iter().enumerate() {
            let cloned = segment
                .cloned_audio()
                .filter(|clip| !clip.is_empty())
                .ok_or(EngineError::EmptySynthesis {
                    segment: segment.index(),
                })?;
            let cloned = cloned.resample(rate);

            // unattributed span before this segment: silence under ambient sound
            if segment.start() > prev_end {
                speech_track.append(&AudioClip::silence(rate, segment.start() - prev_end));
                noise_track.append(&noise.slice(prev_end, segment.start()));
            }

            speech_track.append(&cloned);

            let noise_slice = noise.slice(segment.start(), segment.end());
            noise_track.append(&reconcile(&noise_slice, cloned.duration_seconds())?);

            if i + 1 == segments.len() && segment.end() < recording_end {
                if self.keep_voice_tail {
                    speech_track.append(&voice.tail(segment.end()).resample(rate));
                }
                noise_track.append(&noise.tail(segment.end()));
            }

            prev_end = segment.end();
        }

        Ok(StitchedTracks {
            speech: speech_track,
            noise: noise_track,
        })
    }
}

impl Default for TimelineStitcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const RATE: u32 = 1000;
    const EPS: f64 = 1.0 / RATE as f64;

    fn segment(index: usize, start: f64, end: f64, cloned_secs: f64) -> Segment {
        let voice = AudioClip::silence(RATE, 100.0);
        Segment::from_parts(index, start, end, None, format!("seg {}", index), &HashMap::new(), &voice)
            .unwrap()
            .with_cloned_audio(AudioClip::new(
                RATE,
                vec![0.5; (cloned_secs * RATE as f64).round() as usize],
            ))
    }

    fn segment_without_clone(index: usize, start: f64, end: f64) -> Segment {
        let voice = AudioClip::silence(RATE, 100.0);
        Segment::from_parts(index, start, end, None, String::new(), &HashMap::new(), &voice)
            .unwrap()
    }

    #[test]
    fn gap_and_tail_scenario() {
        // segments [0,1) cloned 0.5s and [2,3) cloned 2.0s over a 4.0s recording:
        // speech = 0.5 + 1.0 silence + 2.0 = 3.5s (tail discarded)
        // noise  = 0.5 + 1.0 raw gap + 2.0 + 1.0 raw tail = 4.5s
        let voice = AudioClip::silence(RATE, 4.0);
        let noise = AudioClip::silence(RATE, 4.0);
        let segments = vec![segment(0, 0.0, 1.0, 0.5), segment(1, 2.0, 3.0, 2.0)];

        let tracks = TimelineStitcher::new()
            .stitch(&segments, &voice, &noise)
            .unwrap();
        assert!((tracks.speech.duration_seconds() - 3.5).abs() <= EPS);
        assert!((tracks.noise.duration_seconds() - 4.5).abs() <= EPS);
    }

    #[test]
    fn speech_duration_is_sum_of_clones_and_gaps() {
        let voice = AudioClip::silence(RATE, 10.0);
        let noise = AudioClip::silence(RATE, 10.0);
        let segments = vec![
            segment(0, 0.5, 1.5, 0.7),
            segment(1, 1.5, 3.0, 2.2), // adjacent: no gap inserted
            segment(2, 5.0, 6.0, 0.3),
        ];

        let tracks = TimelineStitcher::new()
            .stitch(&segments, &voice, &noise)
            .unwrap();
        // 0.5 lead-in + 0.7 + 2.2 + 2.0 gap + 0.3
        assert!((tracks.speech.duration_seconds() - 5.7).abs() <= 3.0 * EPS);
    }

    #[test]
    fn noise_track_matches_speech_per_segment() {
        let voice = AudioClip::silence(RATE, 10.0);
        let noise = AudioClip::silence(RATE, 10.0);
        let segments = vec![segment(0, 1.0, 4.0, 0.25), segment(1, 4.0, 9.0, 6.5)];

        let tracks = TimelineStitcher::new()
            .stitch(&segments, &voice, &noise)
            .unwrap();
        // both tracks carry: 1.0 pre-gap, 0.25 + 6.5 of segment material;
        // noise additionally carries the 1.0s tail
        assert!(
            (tracks.noise.duration_seconds() - tracks.speech.duration_seconds() - 1.0).abs()
                <= 4.0 * EPS
        );
    }

    #[test]
    fn single_segment_spanning_recording_has_no_padding() {
        let voice = AudioClip::silence(RATE, 4.0);
        let noise = AudioClip::silence(RATE, 4.0);
        let segments = vec![segment(0, 0.0, 4.0, 1.5)];

        let tracks = TimelineStitcher::new()
            .stitch(&segments, &voice, &noise)
            .unwrap();
        assert!((tracks.speech.duration_seconds() - 1.5).abs() <= EPS);
        assert!((tracks.noise.duration_seconds() - 1.5).abs() <= EPS);
    }

    #[test]
    fn voice_tail_policy_keeps_original_voice() {
        let voice = AudioClip::new(RATE, vec![0.25; 4000]);
        let noise = AudioClip::silence(RATE, 4.0);
        let segments = vec![segment(0, 0.0, 3.0, 1.0)];

        let tracks = TimelineStitcher::with_voice_tail(true)
            .stitch(&segments, &voice, &noise)
            .unwrap();
        // 1.0 cloned + 1.0 voice tail
        assert!((tracks.speech.duration_seconds() - 2.0).abs() <= EPS);
        assert_eq!(*tracks.speech.samples().last().unwrap(), 0.25);
    }

    #[test]
    fn missing_clone_aborts_with_empty_synthesis() {
        let voice = AudioClip::silence(RATE, 4.0);
        let noise = AudioClip::silence(RATE, 4.0);
        let segments = vec![segment(0, 0.0, 1.0, 0.5), segment_without_clone(1, 2.0, 3.0)];

        let err = TimelineStitcher::new()
            .stitch(&segments, &voice, &noise)
            .unwrap_err();
        assert!(matches!(err, EngineError::EmptySynthesis { segment: 1 }));
    }

    #[test]
    fn zero_length_clone_aborts_too() {
        let voice = AudioClip::silence(RATE, 4.0);
        let noise = AudioClip::silence(RATE, 4.0);
        let segments =
            vec![segment_without_clone(0, 0.0, 1.0).with_cloned_audio(AudioClip::empty(RATE))];

        let err = TimelineStitcher::new()
            .stitch(&segments, &voice, &noise)
            .unwrap_err();
        assert!(matches!(err, EngineError::EmptySynthesis { segment: 0 }));
    }

    #[test]
    fn overlapping_start_clamps_to_no_gap() {
        let voice = AudioClip::silence(RATE, 6.0);
        let noise = AudioClip::silence(RATE, 6.0);
        // second segment starts 0.2s before the first one ends
        let segments = vec![segment(0, 0.0, 2.0, 1.0), segment(1, 1.8, 3.0, 1.0)];

        let tracks = TimelineStitcher::new()
            .stitch(&segments, &voice, &noise)
            .unwrap();
        // no negative-length silence: 1.0 + 1.0 cloned, plus 3.0 noise tail
        assert!((tracks.speech.duration_seconds() - 2.0).abs() <= EPS);
    }
}
