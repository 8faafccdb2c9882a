use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One entry of the human-readable transcript/translation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub index: usize,
    pub source: String,
    pub translated: String,
}

/// Transcript log collected in segment order: one source line plus one
/// translated line per segment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptLog {
    lines: Vec<TranscriptLine>,
}

impl TranscriptLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, index: usize, source: &str, translated: &str) {
        self.lines.push(TranscriptLine {
            index,
            source: source.to_string(),
            translated: translated.to_string(),
        });
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Source line, translated line, blank separator, per segment in order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push('\n');
            out.push_str(&line.source);
            out.push('\n');
            out.push_str(&line.translated);
            out.push('\n');
        }
        out
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render())?;
        Ok(())
    }
}
