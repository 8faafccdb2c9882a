use serde::{Deserialize, Serialize};

/// A mono audio buffer tagged with its sample rate.
///
/// Tracks, slices and cloned renditions all share this representation; the
/// stitcher builds both output tracks by appending clips end to end, so the
/// only operations needed are slicing, appending and duration queries.
/// Timestamps are seconds and are rounded to the nearest sample, never to a
/// coarser unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioClip {
    sample_rate: u32,
    samples: Vec<f32>,
}

impl AudioClip {
    pub fn new(sample_rate: u32, samples: Vec<f32>) -> Self {
        Self {
            sample_rate,
            samples,
        }
    }

    pub fn empty(sample_rate: u32) -> Self {
        Self::new(sample_rate, Vec::new())
    }

    /// A clip of zeros lasting `duration_secs` (clamped at zero).
    pub fn silence(sample_rate: u32, duration_secs: f64) -> Self {
        let len = seconds_to_samples(sample_rate, duration_secs);
        Self::new(sample_rate, vec![0.0; len])
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// The half-open span `[start_secs, end_secs)`, clamped to the clip.
    /// An inverted or fully out-of-range span yields an empty clip.
    pub fn slice(&self, start_secs: f64, end_secs: f64) -> AudioClip {
        let start = seconds_to_samples(self.sample_rate, start_secs).min(self.samples.len());
        let end = seconds_to_samples(self.sample_rate, end_secs).min(self.samples.len());
        if start >= end {
            return AudioClip::empty(self.sample_rate);
        }
        AudioClip::new(self.sample_rate, self.samples[start..end].to_vec())
    }

    /// Everything from `start_secs` to the end of the clip.
    pub fn tail(&self, start_secs: f64) -> AudioClip {
        self.slice(start_secs, self.duration_seconds())
    }

    /// Appends `other`'s samples. Both clips must carry the same rate; the
    /// stitcher normalizes rates before it appends.
    pub fn append(&mut self, other: &AudioClip) {
        debug_assert_eq!(self.sample_rate, other.sample_rate);
        self.samples.extend_from_slice(&other.samples);
    }

    /// Reinterpolates the clip at `sample_rate`, preserving its duration to
    /// within half a sample period.
    pub fn resample(&self, sample_rate: u32) -> AudioClip {
        if sample_rate == self.sample_rate {
            return self.clone();
        }
        let target_len = seconds_to_samples(sample_rate, self.duration_seconds());
        AudioClip::new(sample_rate, lerp_resample(&self.samples, target_len))
    }
}

/// Seconds to a sample count at `rate`, rounded to the nearest sample.
pub(crate) fn seconds_to_samples(rate: u32, secs: f64) -> usize {
    let samples = (secs * rate as f64).round();
    if samples.is_finite() && samples > 0.0 {
        samples as usize
    } else {
        0
    }
}

/// Linear-interpolation resample of `src` onto exactly `target_len` samples.
pub(crate) fn lerp_resample(src: &[f32], target_len: usize) -> Vec<f32> {
    if target_len == 0 || src.is_empty() {
        return vec![0.0; target_len];
    }
    let step = src.len() as f64 / target_len as f64;
    let mut out = Vec::with_capacity(target_len);
    for i in 0..target_len {
        let pos = i as f64 * step;
        let idx = (pos.floor() as usize).min(src.len() - 1);
        let next = (idx + 1).min(src.len() - 1);
        let frac = (pos - idx as f64) as f32;
        out.push(src[idx] + (src[next] - src[idx]) * frac);
    }
    out
}
