use crate::config::append_startgg_log;
use crate::pipeline::PageFetcher;
use crate::types::*;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

// ── GraphQL query constants ────────────────────────────────────────────

pub const STARTGG_STREAMED_SETS_QUERY: &str = r#"
query StreamedSets($slug: String!, $page: Int!, $perPage: Int!) {
  event(slug: $slug) {
    phases {
      id
      numSeeds
      name
    }
    sets(page: $page, perPage: $perPage) {
      pageInfo {
        totalPages
      }
      nodes {
        id
        fullRoundText
        stream {
          streamName
        }
        phaseGroup {
          phase { id name }
        }
        slots {
          entrant {
            name
            participants {
              player { gamerTag }
            }
          }
        }
        games {
          selections {
            selectionType
            selectionValue
            entrant { name }
          }
        }
      }
    }
  }
}
"#;

// ── Client ─────────────────────────────────────────────────────────────

/// Blocking start.gg GraphQL client that serves pages of an event's sets.
pub struct StartggClient {
  token: String,
  client: reqwest::blocking::Client,
}

impl StartggClient {
  pub fn new(token: &str) -> Result<Self, String> {
    let token = token.trim();
    if token.is_empty() {
      return Err("Start.gg API token is not set (config or STARTGG_TOKEN).".to_string());
    }
    Ok(StartggClient {
      token: token.to_string(),
      client: reqwest::blocking::Client::new(),
    })
  }

  pub fn graphql_request<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T, String> {
    let request_log = {
      let vars = serde_json::to_string_pretty(&variables).unwrap_or_else(|_| variables.to_string());
      format!(
        "url: {STARTGG_API_URL}\nAuthorization: Bearer [redacted]\nUser-Agent: {STARTGG_USER_AGENT}\nvariables:\n{vars}"
      )
    };
    append_startgg_log("Start.gg request", &request_log);
    let body_json = json!({ "query": query, "variables": variables });
    let resp = self
      .client
      .post(STARTGG_API_URL)
      .header("Authorization", format!("Bearer {}", self.token))
      .header("User-Agent", STARTGG_USER_AGENT)
      .json(&body_json)
      .send()
      .map_err(|e| {
        append_startgg_log("Start.gg error", &format!("send failed: {e}"));
        format!("Start.gg request failed: {e}")
      })?;
    let status = resp.status();
    let body = resp.text().map_err(|e| {
      append_startgg_log("Start.gg error", &format!("read failed: {e}"));
      format!("Start.gg read failed: {e}")
    })?;
    append_startgg_log("Start.gg response", &format!("status: {status}\nbody:\n{body}"));
    if !status.is_success() {
      return Err(format!("Start.gg error {status}: {body}"));
    }
    parse_graphql_body(&body)
  }
}

impl PageFetcher for StartggClient {
  fn fetch_page(&self, event_slug: &str, page: u32) -> Result<PageResult, String> {
    let data: StartggSetsData = self.graphql_request(
      STARTGG_STREAMED_SETS_QUERY,
      json!({ "slug": event_slug, "page": page, "perPage": STARTGG_SETS_PER_PAGE }),
    )?;
    page_result_from_data(data)
  }
}

pub fn parse_graphql_body<T: DeserializeOwned>(body: &str) -> Result<T, String> {
  let parsed: StartggGraphqlResponse<T> = serde_json::from_str(body).map_err(|e| {
    append_startgg_log("Start.gg error", &format!("parse failed: {e}"));
    format!("Start.gg parse failed: {e}")
  })?;
  if let Some(errors) = parsed.errors {
    let message = errors
      .into_iter()
      .filter_map(|err| err.message)
      .collect::<Vec<_>>()
      .join(", ");
    if !message.is_empty() {
      append_startgg_log("Start.gg error", &format!("graphql error: {message}"));
      return Err(format!("Start.gg error: {message}"));
    }
  }
  parsed
    .data
    .ok_or_else(|| "Start.gg response missing data.".to_string())
}

pub fn page_result_from_data(data: StartggSetsData) -> Result<PageResult, String> {
  let event = data
    .event
    .ok_or_else(|| "Start.gg event not found.".to_string())?;

  let phases = event
    .phases
    .unwrap_or_default()
    .into_iter()
    .map(|phase| Phase {
      id: phase.id.as_ref().and_then(value_to_string).unwrap_or_default(),
      name: phase.name.unwrap_or_default(),
      seed_count: phase
        .num_seeds
        .and_then(|num| u32::try_from(num).ok())
        .unwrap_or(0),
    })
    .collect();

  let (sets, total_pages) = match event.sets {
    Some(sets) => {
      let total_pages = sets
        .page_info
        .and_then(|info| info.total_pages)
        .and_then(|num| u32::try_from(num).ok())
        .unwrap_or(1);
      (sets.nodes.unwrap_or_default(), total_pages)
    }
    None => (Vec::new(), 1),
  };

  Ok(PageResult { total_pages, phases, sets })
}

// ── Link handling ──────────────────────────────────────────────────────

pub fn parse_startgg_link_info(link: &str) -> StartggLinkInfo {
  let trimmed = link.trim();
  if trimmed.is_empty() {
    return StartggLinkInfo::default();
  }
  let without_hash = trimmed.split('#').next().unwrap_or(trimmed);
  let without_query = without_hash.split('?').next().unwrap_or(without_hash);
  let mut path = without_query;
  if let Some(idx) = path.find("start.gg") {
    path = &path[idx + "start.gg".len()..];
  }
  let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
  if segments.is_empty() {
    return StartggLinkInfo::default();
  }

  let tournament_slug = segments
    .iter()
    .position(|s| *s == "tournament")
    .and_then(|idx| segments.get(idx + 1))
    .map(|slug| slug.to_string());

  let event_slug = match (
    tournament_slug.as_ref(),
    segments.iter().position(|s| *s == "event"),
  ) {
    (Some(tournament_slug), Some(idx)) => segments
      .get(idx + 1)
      .map(|event| format!("tournament/{tournament_slug}/event/{event}")),
    _ => None,
  };

  StartggLinkInfo {
    tournament_slug,
    event_slug,
  }
}

/// Accepts an event slug or a full start.gg event URL and returns the slug.
pub fn resolve_event_slug(input: &str) -> Result<String, String> {
  if input.trim().is_empty() {
    return Err("Event slug is empty.".to_string());
  }
  let info = parse_startgg_link_info(input);
  if let Some(event_slug) = info.event_slug {
    return Ok(event_slug);
  }
  match info.tournament_slug {
    Some(tournament_slug) => Err(format!(
      "Start.gg link for tournament {tournament_slug} must include an event."
    )),
    None => Err(format!(
      "Start.gg link must look like tournament/<tournament>/event/<event>: {}",
      input.trim()
    )),
  }
}

// ── Value helpers ──────────────────────────────────────────────────────

pub fn value_to_string(value: &Value) -> Option<String> {
  match value {
    Value::String(raw) => Some(raw.clone()),
    Value::Number(num) => Some(num.to_string()),
    _ => None,
  }
}
