use crate::phases::PhaseIndex;
use crate::startgg::value_to_string;
use crate::types::*;
use std::collections::BTreeSet;

/// Entrant name and first participant's gamer tag for every slot that has both.
fn resolve_tagged_entrants(set: &StartggSetNode) -> Vec<(String, String)> {
    set.slots
        .iter()
        .flatten()
        .filter_map(|slot| {
            let entrant = slot.entrant.as_ref()?;
            let tag = entrant
                .participants
                .as_ref()?
                .first()?
                .player
                .as_ref()?
                .gamer_tag
                .clone()?;
            let name = entrant.name.clone()?;
            Some((name, tag))
        })
        .collect()
}

/// Builds a match record for a streamed set with two tagged entrants.
/// Anything else is skipped by returning `None`.
pub fn extract_match_record(set: &StartggSetNode, phases: &PhaseIndex) -> Option<MatchRecord> {
    set.stream.as_ref()?;

    let entrants = resolve_tagged_entrants(set);
    let [(p1_name, p1_tag), (p2_name, p2_tag), ..] = entrants.as_slice() else {
        return None;
    };

    let round = set
        .full_round_text
        .clone()
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
    let phase = set.phase_group.as_ref().and_then(|group| group.phase.as_ref());
    let phase_name = phase
        .and_then(|phase| phase.name.as_deref())
        .unwrap_or(UNKNOWN_LABEL);
    let phase_id = phase
        .and_then(|phase| phase.id.as_ref())
        .and_then(value_to_string)
        .unwrap_or_default();

    Some(MatchRecord {
        round,
        player1_tag: p1_tag.clone(),
        player2_tag: p2_tag.clone(),
        player1_characters: aggregate_characters(set, p1_name),
        player2_characters: aggregate_characters(set, p2_name),
        has_multiple_phases: phases.has_multiple_phases(),
        phase_entrant_count: phases.seed_count(phase_name),
        is_first_phase: phases.is_first_phase(&phase_id),
    })
}

/// Every distinct character id the entrant picked across all games of the set.
pub fn aggregate_characters(set: &StartggSetNode, entrant_name: &str) -> BTreeSet<String> {
    set.games
        .iter()
        .flatten()
        .flat_map(|game| game.selections.iter().flatten())
        .filter(|sel| sel.selection_type.as_deref() == Some(CHARACTER_SELECTION_TYPE))
        .filter(|sel| {
            sel.entrant
                .as_ref()
                .and_then(|entrant| entrant.name.as_deref())
                == Some(entrant_name)
        })
        .filter_map(|sel| sel.selection_value.as_ref().and_then(value_to_string))
        .collect()
}
