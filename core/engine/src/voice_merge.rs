use std::collections::HashMap;

use crate::clip::AudioClip;
use crate::types::SpeakerTurn;

/// Concatenates each speaker's attributed spans of the voice track into one
/// reference buffer per speaker.
///
/// Cloning from all of a speaker's audio gives the cloner more voice to work
/// with than any single segment would. Unattributed turns contribute to no
/// buffer; segments without a speaker id fall back to slicing the mixed
/// voice track directly.
pub fn merge_voices(turns: &[SpeakerTurn], voice: &AudioClip) -> HashMap<String, AudioClip> {
    let mut merged: HashMap<String, AudioClip> = HashMap::new();
    for turn in turns {
        let Some(id) = &turn.speaker_id else {
            continue;
        };
        let slice = voice.slice(turn.start, turn.end);
        if slice.is_empty() {
            continue;
        }
        match merged.get_mut(id) {
            Some(buffer) => buffer.append(&slice),
            None => {
                merged.insert(id.clone(), slice);
            }
        }
    }
    merged
}
