use std::time::Instant;

use futures::future::join_all;
use uuid::Uuid;

use crate::clip::AudioClip;
use crate::collaborators::CloneRequest;
use crate::error::{EngineError, EngineResult, Stage};
use crate::mixer::mix_tracks;
use crate::perf::PipelineTiming;
use crate::retiming::{RetimedVideo, VideoTimeline};
use crate::segment::Segment;
use crate::stitcher::TimelineStitcher;
use crate::transcript::TranscriptLog;
use crate::voice_merge::merge_voices;

use super::core::DubbingEngine;
use super::output::DubbingOutput;
use super::speaker_assign::assign_speakers;

impl DubbingEngine {
    /// Runs the full resynthesis pass over one recording.
    ///
    /// `voice` and `noise` are the vocal/background split of the original
    /// audio (the split itself happens upstream); `video`, when present, is
    /// retimed to the new combined-audio duration.
    ///
    /// Any failure aborts the run: the tracks are built incrementally under
    /// a hard lockstep assumption, so a partial result is not usable. The
    /// error names the failing stage and segment so the caller can fix that
    /// segment and reattempt.
    pub async fn run(
        &self,
        voice: &AudioClip,
        noise: &AudioClip,
        video: Option<VideoTimeline>,
    ) -> EngineResult<DubbingOutput> {
        let total_start = Instant::now();
        let run_id = Uuid::new_v4().to_string();

        eprintln!("[Step 1] transcribing and diarizing the voice track");
        let diarize_start = Instant::now();
        let turns = self
            .diarizer
            .diarize(voice)
            .await
            .map_err(|e| EngineError::collaborator(Stage::Diarization, None, e))?;
        let diarize_ms = diarize_start.elapsed().as_millis() as u64;

        let transcribe_start = Instant::now();
        let (utterances, language) = self
            .transcriber
            .transcribe_and_align(voice)
            .await
            .map_err(|e| EngineError::collaborator(Stage::Transcription, None, e))?;
        let transcribe_ms = transcribe_start.elapsed().as_millis() as u64;

        eprintln!(
            "[Step 2] merging voices, translating and cloning {} segments ({} -> {})",
            utterances.len(),
            language,
            self.config.target_language
        );
        let speakers = assign_speakers(&utterances, &turns);
        let merged_voices = merge_voices(&turns, voice);

        let mut segments = Vec::with_capacity(utterances.len());
        for (i, (utterance, speaker_id)) in utterances.iter().zip(speakers).enumerate() {
            segments.push(Segment::from_parts(
                i,
                utterance.start,
                utterance.end,
                speaker_id,
                utterance.text.clone(),
                &merged_voices,
                voice,
            )?);
        }

        // translation and cloning for all segments are in flight at once;
        // the stitch pass below stays strictly sequential because each step
        // depends on the previous segment's end
        let synthesis_start = Instant::now();
        let jobs = segments
            .iter()
            .map(|segment| self.synthesize_segment(segment, &language, voice));
        let results = join_all(jobs).await;
        let synthesis_ms = synthesis_start.elapsed().as_millis() as u64;

        let mut transcript = TranscriptLog::new();
        let mut ready = Vec::with_capacity(segments.len());
        for (segment, result) in segments.into_iter().zip(results) {
            let (translated, cloned) = result?;
            transcript.push(segment.index(), segment.source_text(), &translated);
            ready.push(segment.with_translation(translated).with_cloned_audio(cloned));
        }

        eprintln!("[Step 3] stitching speech and background tracks");
        let stitch_start = Instant::now();
        let stitcher = TimelineStitcher::with_voice_tail(self.config.keep_voice_tail);
        let tracks = stitcher.stitch(&ready, voice, noise)?;
        let combined_audio = mix_tracks(&tracks.speech, &tracks.noise)?;
        let stitch_ms = stitch_start.elapsed().as_millis() as u64;

        let retimed_video = match video {
            Some(timeline) if !self.config.voice_only => {
                eprintln!("[Step 4] retiming video to the new audio duration");
                Some(RetimedVideo::plan(
                    timeline,
                    combined_audio.duration_seconds(),
                )?)
            }
            _ => None,
        };

        let timing = PipelineTiming {
            id: run_id.clone(),
            src_lang: language.clone(),
            tgt_lang: self.config.target_language.clone(),
            segments: transcript.len(),
            diarize_ms,
            transcribe_ms,
            synthesis_ms,
            stitch_ms,
            total_ms: total_start.elapsed().as_millis() as u64,
            ok: true,
        };
        timing.log();

        Ok(DubbingOutput {
            run_id,
            language,
            combined_audio,
            background_audio: tracks.noise,
            retimed_video,
            transcript,
            timing,
        })
    }

    /// Translate one segment, then clone its voice speaking the translation.
    async fn synthesize_segment(
        &self,
        segment: &Segment,
        language: &str,
        voice: &AudioClip,
    ) -> EngineResult<(String, AudioClip)> {
        let translated = self
            .translator
            .translate(segment.source_text(), language, &self.config.target_language)
            .await
            .map_err(|e| {
                EngineError::collaborator(Stage::Translation, Some(segment.index()), e)
            })?;

        let request = CloneRequest {
            references: vec![segment.reference_voice().clone(), voice.clone()],
            text: translated.clone(),
            language: self.config.target_language.clone(),
        };
        let cloned = self.cloner.clone_voice(request).await.map_err(|e| {
            EngineError::collaborator(Stage::VoiceCloning, Some(segment.index()), e)
        })?;

        Ok((translated, cloned))
    }
}
