use crate::characters::character_name;
use crate::types::MatchRecord;
use std::{collections::BTreeSet, fmt};

/// Smallest power of two that is at least `entrants`, never below 2.
/// Counts above 2^31 are capped at 2^31.
pub fn top_cut(entrants: u32) -> u32 {
    const MAX_TOP_CUT: u32 = 1 << 31;
    let mut top = 2u32;
    while top < entrants && top < MAX_TOP_CUT {
        top *= 2;
    }
    top
}

/// "Pools", "Top N" or nothing, depending on where the set sits in the event.
pub fn phase_prefix(has_multiple_phases: bool, is_first_phase: bool, entrant_count: u32) -> String {
    if !has_multiple_phases {
        return String::new();
    }
    if is_first_phase {
        return "Pools".to_string();
    }
    if entrant_count > 0 {
        return format!("Top {}", top_cut(entrant_count));
    }
    String::new()
}

fn character_names(ids: &BTreeSet<String>) -> String {
    ids.iter()
        .map(|id| character_name(id))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_match_label(record: &MatchRecord) -> String {
    let prefix = phase_prefix(
        record.has_multiple_phases,
        record.is_first_phase,
        record.phase_entrant_count,
    );
    let prefix = if prefix.is_empty() { prefix } else { format!("{prefix} ") };
    format!(
        "{prefix}{} - {} ({}) VS {} ({})",
        record.round,
        record.player1_tag,
        character_names(&record.player1_characters),
        record.player2_tag,
        character_names(&record.player2_characters),
    )
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_match_label(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn record() -> MatchRecord {
        MatchRecord {
            round: "Grand Final".to_string(),
            player1_tag: "AL".to_string(),
            player2_tag: "BO".to_string(),
            player1_characters: chars(&["1302"]),
            player2_characters: chars(&["1286"]),
            has_multiple_phases: true,
            phase_entrant_count: 8,
            is_first_phase: false,
        }
    }

    #[test]
    fn test_top_cut_rounds_up_to_power_of_two() {
        assert_eq!(top_cut(0), 2);
        assert_eq!(top_cut(1), 2);
        assert_eq!(top_cut(2), 2);
        assert_eq!(top_cut(3), 4);
        assert_eq!(top_cut(9), 16);
        assert_eq!(top_cut(16), 16);
        assert_eq!(top_cut(17), 32);
    }

    #[test]
    fn test_top_cut_caps_at_largest_power_of_two() {
        assert_eq!(top_cut(1 << 31), 1 << 31);
        assert_eq!(top_cut((1 << 31) + 1), 1 << 31);
        assert_eq!(top_cut(u32::MAX), 1 << 31);
        assert!(top_cut(u32::MAX).is_power_of_two());
    }

    #[test]
    fn test_single_phase_has_no_prefix() {
        assert_eq!(phase_prefix(false, true, 8), "");
        assert_eq!(phase_prefix(false, false, 8), "");
        assert_eq!(phase_prefix(false, false, 0), "");
    }

    #[test]
    fn test_first_phase_is_pools() {
        assert_eq!(phase_prefix(true, true, 0), "Pools");
        assert_eq!(phase_prefix(true, true, 128), "Pools");
    }

    #[test]
    fn test_later_phase_is_top_cut() {
        assert_eq!(phase_prefix(true, false, 8), "Top 8");
        assert_eq!(phase_prefix(true, false, 12), "Top 16");
        assert_eq!(phase_prefix(true, false, 0), "");
    }

    #[test]
    fn test_format_top_cut_label() {
        assert_eq!(
            format_match_label(&record()),
            "Top 8 Grand Final - AL (Mario) VS BO (Fox)"
        );
    }

    #[test]
    fn test_format_pools_label() {
        let mut rec = record();
        rec.is_first_phase = true;
        rec.round = "Winners Round 1".to_string();
        assert_eq!(
            rec.to_string(),
            "Pools Winners Round 1 - AL (Mario) VS BO (Fox)"
        );
    }

    #[test]
    fn test_format_without_prefix() {
        let mut rec = record();
        rec.has_multiple_phases = false;
        assert_eq!(format_match_label(&rec), "Grand Final - AL (Mario) VS BO (Fox)");
    }

    #[test]
    fn test_format_unknown_and_multiple_characters() {
        let mut rec = record();
        rec.player1_characters = chars(&["1302", "1304"]);
        rec.player2_characters = chars(&["9999"]);
        assert_eq!(
            format_match_label(&rec),
            "Top 8 Grand Final - AL (Mario, Marth) VS BO (Unknown)"
        );
    }

    #[test]
    fn test_format_no_characters() {
        let mut rec = record();
        rec.player1_characters.clear();
        rec.player2_characters.clear();
        assert_eq!(format_match_label(&rec), "Top 8 Grand Final - AL () VS BO ()");
    }
}
