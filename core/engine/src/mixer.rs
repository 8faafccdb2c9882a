use crate::clip::AudioClip;
use crate::error::{EngineError, EngineResult};

/// Overlays the speech track on the background track sample-for-sample.
///
/// The two tracks are built segment-by-segment to matching lengths, but
/// float rounding can leave them a few samples apart after many segments.
/// The shorter track is padded with trailing silence rather than truncating
/// the longer one, so no audio is lost; the combined duration is the longer
/// track's duration.
pub fn mix_tracks(speech: &AudioClip, noise: &AudioClip) -> EngineResult<AudioClip> {
    if speech.sample_rate() != noise.sample_rate() {
        return Err(EngineError::invalid_timeline(format!(
            "cannot mix tracks at different sample rates ({} vs {})",
            speech.sample_rate(),
            noise.sample_rate()
        )));
    }

    let len = speech.len().max(noise.len());
    let mut mixed = vec![0.0f32; len];
    for (out, sample) in mixed.iter_mut().zip(speech.samples()) {
        *out += sample;
    }
    for (out, sample) in mixed.iter_mut().zip(noise.samples()) {
        *out += sample;
    }
    Ok(AudioClip::new(speech.sample_rate(), mixed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_additively() {
        let speech = AudioClip::new(4, vec![0.1, 0.2]);
        let noise = AudioClip::new(4, vec![0.3, 0.3]);
        let mixed = mix_tracks(&speech, &noise).unwrap();
        assert!((mixed.samples()[0] - 0.4).abs() < 1e-6);
        assert!((mixed.samples()[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn shorter_track_is_padded_not_longer_truncated() {
        let speech = AudioClip::new(4, vec![0.5; 4]);
        let noise = AudioClip::new(4, vec![0.25; 6]);
        let mixed = mix_tracks(&speech, &noise).unwrap();
        assert_eq!(mixed.len(), 6);
        assert!((mixed.samples()[5] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn rate_mismatch_is_rejected() {
        let err = mix_tracks(&AudioClip::empty(8000), &AudioClip::empty(16000)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidTimeline { .. }));
    }
}
