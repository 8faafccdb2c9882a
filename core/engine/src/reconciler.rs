use crate::clip::{lerp_resample, seconds_to_samples, AudioClip};
use crate::error::{EngineError, EngineResult};

/// Stretches or compresses a background-noise slice so its playback duration
/// equals `target_secs`, the duration of the cloned speech it underlies.
///
/// This is a plain linear resample: the slice's samples are reinterpolated
/// onto `round(target_secs * rate)` positions, which shifts pitch along with
/// tempo. That tradeoff is accepted for synchronization; a phase-vocoder
/// time-stretch could be substituted without changing this contract.
///
/// An empty slice (zero original duration) cannot define a stretch ratio and
/// becomes pure silence of the target length.
pub fn reconcile(noise: &AudioClip, target_secs: f64) -> EngineResult<AudioClip> {
    if !target_secs.is_finite() || target_secs <= 0.0 {
        return Err(EngineError::InvalidDurationRatio { target_secs });
    }

    let rate = noise.sample_rate();
    if noise.is_empty() {
        return Ok(AudioClip::silence(rate, target_secs));
    }

    let target_len = seconds_to_samples(rate, target_secs);
    Ok(AudioClip::new(rate, lerp_resample(noise.samples(), target_len)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: u32 = 16000;

    #[test]
    fn round_trip_duration_within_one_sample() {
        let noise = AudioClip::silence(RATE, 1.0);
        for target in [0.25, 0.5, 1.0, 2.0, 3.7, 10.0] {
            let out = reconcile(&noise, target).expect("reconcile");
            assert!(
                (out.duration_seconds() - target).abs() <= 1.0 / RATE as f64,
                "target {} produced {}",
                target,
                out.duration_seconds()
            );
            assert_eq!(out.sample_rate(), RATE);
        }
    }

    #[test]
    fn extreme_ratios_still_hit_target() {
        let short = AudioClip::silence(RATE, 0.01);
        let out = reconcile(&short, 8.0).unwrap();
        assert!((out.duration_seconds() - 8.0).abs() <= 1.0 / RATE as f64);

        let long = AudioClip::silence(RATE, 30.0);
        let out = reconcile(&long, 0.05).unwrap();
        assert!((out.duration_seconds() - 0.05).abs() <= 1.0 / RATE as f64);
    }

    #[test]
    fn empty_slice_becomes_silence() {
        let out = reconcile(&AudioClip::empty(RATE), 1.5).unwrap();
        assert!(out.samples().iter().all(|s| *s == 0.0));
        assert!((out.duration_seconds() - 1.5).abs() <= 1.0 / RATE as f64);
    }

    #[test]
    fn invalid_targets_are_rejected() {
        let noise = AudioClip::silence(RATE, 1.0);
        for target in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = reconcile(&noise, target).unwrap_err();
            assert!(matches!(err, EngineError::InvalidDurationRatio { .. }));
        }
    }

    #[test]
    fn content_is_interpolated_not_truncated() {
        let noise = AudioClip::new(4, vec![0.0, 1.0, 2.0, 3.0]);
        let out = reconcile(&noise, 2.0).unwrap();
        assert_eq!(out.len(), 8);
        // first and last samples stay anchored to the slice's endpoints
        assert_eq!(out.samples()[0], 0.0);
        assert_eq!(*out.samples().last().unwrap(), 3.0);
    }
}
