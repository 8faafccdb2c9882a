use serde::{Deserialize, Serialize};

/// Per-run stage timing summary, emitted as a single JSON line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineTiming {
    /// Run id (uuid v4).
    pub id: String,
    /// Detected source language.
    pub src_lang: String,
    pub tgt_lang: String,
    pub segments: usize,
    pub diarize_ms: u64,
    pub transcribe_ms: u64,
    /// Translation + cloning for all segments (dispatched concurrently).
    pub synthesis_ms: u64,
    /// Stitch + reconcile + mix.
    pub stitch_ms: u64,
    pub total_ms: u64,
    pub ok: bool,
}

impl PipelineTiming {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn log(&self) {
        println!("[PERF] {}", self.to_json());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_every_stage() {
        let timing = PipelineTiming {
            id: "run".to_string(),
            src_lang: "fr".to_string(),
            tgt_lang: "en".to_string(),
            segments: 2,
            diarize_ms: 10,
            transcribe_ms: 20,
            synthesis_ms: 30,
            stitch_ms: 5,
            total_ms: 65,
            ok: true,
        };
        let json = timing.to_json();
        for key in ["diarize_ms", "transcribe_ms", "synthesis_ms", "stitch_ms", "total_ms"] {
            assert!(json.contains(key), "missing {}", key);
        }
    }
}
