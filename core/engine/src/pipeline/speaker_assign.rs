use crate::types::{SpeakerTurn, Utterance};

/// Attributes each utterance to the diarizer turn it overlaps most.
///
/// Returns one speaker id (or `None`) per utterance, in order. A turn with
/// no speaker id can still win the overlap vote; the utterance then stays
/// unattributed and later draws its reference voice from the mixed track.
pub(crate) fn assign_speakers(
    utterances: &[Utterance],
    turns: &[SpeakerTurn],
) -> Vec<Option<String>> {
    utterances
        .iter()
        .map(|utterance| best_overlap(utterance, turns))
        .collect()
}

fn best_overlap(utterance: &Utterance, turns: &[SpeakerTurn]) -> Option<String> {
    let mut best: Option<(&SpeakerTurn, f64)> = None;
    for turn in turns {
        let overlap = utterance.end.min(turn.end) - utterance.start.max(turn.start);
        if overlap <= 0.0 {
            continue;
        }
        if best.map(|(_, prev)| overlap > prev).unwrap_or(true) {
            best = Some((turn, overlap));
        }
    }
    best.and_then(|(turn, _)| turn.speaker_id.clone())
}
