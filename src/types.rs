use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

// ── Constants ──────────────────────────────────────────────────────────

pub const STARTGG_API_URL: &str = "https://api.start.gg/gql/alpha";
pub const STARTGG_SETS_PER_PAGE: i32 = 30;
pub const STARTGG_USER_AGENT: &str = "vod-titles";
pub const DEFAULT_OUTPUT_PATH: &str = "sets.txt";
pub const UNKNOWN_LABEL: &str = "Unknown";
pub const CHARACTER_SELECTION_TYPE: &str = "CHARACTER";

// ── App config ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub startgg_token: String,
    pub event_slug: String,
    pub event_name: String,
    pub output_path: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartggLinkInfo {
    pub tournament_slug: Option<String>,
    pub event_slug: Option<String>,
}

// ── Core records ───────────────────────────────────────────────────────

/// One phase of an event as reported on the first page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub id: String,
    pub name: String,
    pub seed_count: u32,
}

/// Everything the label pipeline needs from a single page of sets.
#[derive(Debug, Clone, Default)]
pub struct PageResult {
    pub total_pages: u32,
    pub phases: Vec<Phase>,
    pub sets: Vec<StartggSetNode>,
}

/// A streamed set that passed validation, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub round: String,
    pub player1_tag: String,
    pub player2_tag: String,
    pub player1_characters: BTreeSet<String>,
    pub player2_characters: BTreeSet<String>,
    pub has_multiple_phases: bool,
    pub phase_entrant_count: u32,
    pub is_first_phase: bool,
}

// ── Start.gg GraphQL types ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct StartggGraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<StartggGraphqlError>>,
}

#[derive(Deserialize)]
pub struct StartggGraphqlError {
    pub message: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartggSetsData {
    pub event: Option<StartggSetsEvent>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartggSetsEvent {
    pub phases: Option<Vec<StartggPhaseNode>>,
    pub sets: Option<StartggSetConnection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartggPhaseNode {
    pub id: Option<Value>,
    pub name: Option<String>,
    pub num_seeds: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartggSetConnection {
    pub nodes: Option<Vec<StartggSetNode>>,
    pub page_info: Option<StartggPageInfo>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartggPageInfo {
    pub total_pages: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartggSetNode {
    pub id: Option<Value>,
    pub full_round_text: Option<String>,
    pub stream: Option<StartggStreamNode>,
    pub phase_group: Option<StartggPhaseGroupNode>,
    pub slots: Option<Vec<StartggSetSlotNode>>,
    pub games: Option<Vec<StartggGameNode>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartggStreamNode {
    pub stream_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartggPhaseGroupNode {
    pub phase: Option<StartggPhaseNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartggSetSlotNode {
    pub entrant: Option<StartggSlotEntrant>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartggSlotEntrant {
    pub name: Option<String>,
    pub participants: Option<Vec<StartggParticipantNode>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartggParticipantNode {
    pub player: Option<StartggPlayerNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartggPlayerNode {
    pub gamer_tag: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartggGameNode {
    pub selections: Option<Vec<StartggSelectionNode>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartggSelectionNode {
    pub selection_type: Option<String>,
    pub selection_value: Option<Value>,
    pub entrant: Option<StartggEntrantStub>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartggEntrantStub {
    pub name: Option<String>,
}
