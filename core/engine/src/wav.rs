use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::clip::AudioClip;

/// Encodes a clip as a mono PCM 16-bit WAV byte stream (little endian).
///
/// The combined-audio and background-only artifacts leave the pipeline in
/// this format; everything else about container handling is the caller's
/// concern.
pub fn encode_wav(clip: &AudioClip) -> Vec<u8> {
    let pcm = to_pcm_s16le(clip.samples());
    let channels: u16 = 1;
    let sample_rate = clip.sample_rate();

    let mut out = Vec::with_capacity(44 + pcm.len());

    // RIFF header
    out.extend_from_slice(b"RIFF");
    let file_size = 36 + pcm.len() as u32;
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    let byte_rate = sample_rate * channels as u32 * 2;
    out.extend_from_slice(&byte_rate.to_le_bytes());
    let block_align = channels * 2;
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());

    // data chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&(pcm.len() as u32).to_le_bytes());
    out.extend_from_slice(&pcm);

    out
}

pub fn write_wav(clip: &AudioClip, output_path: &Path) -> Result<()> {
    let mut file = File::create(output_path)?;
    file.write_all(&encode_wav(clip))?;
    Ok(())
}

fn to_pcm_s16le(samples: &[f32]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        let clamped = sample.clamp(-1.0, 1.0);
        let value = (clamped * i16::MAX as f32) as i16;
        pcm.extend_from_slice(&value.to_le_bytes());
    }
    pcm
}
