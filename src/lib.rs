pub mod types;
pub mod config;
pub mod characters;
pub mod phases;
pub mod sets;
pub mod labels;
pub mod pipeline;
pub mod startgg;
pub mod output;
pub mod cli;

use config::*;
use pipeline::{collect_stream_labels, PageFetcher, Progress};
use std::{fs, path::PathBuf};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use types::AppConfig;

pub use labels::{format_match_label, phase_prefix, top_cut};
pub use sets::{aggregate_characters, extract_match_record};
pub use startgg::StartggClient;

// ── Logging ────────────────────────────────────────────────────────────

/// Daily rolling file log under `logs/`. Keep the guard alive until exit.
pub fn init_tracing() -> WorkerGuard {
    let logs_dir = logs_dir();
    fs::create_dir_all(&logs_dir).ok();
    let file_appender = tracing_appender::rolling::daily(&logs_dir, "vod-titles.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    guard
}

// ── Entry point ────────────────────────────────────────────────────────

/// Fetches every streamed set for the configured event and writes the titles file.
/// Returns the output path and the number of titles written.
pub fn generate_titles<P: PageFetcher + ?Sized>(
    config: &AppConfig,
    fetcher: &P,
    progress: Option<&mut dyn Progress>,
) -> Result<(PathBuf, usize), String> {
    validate_run_config(config)?;
    let event_slug = startgg::resolve_event_slug(&config.event_slug)?;
    info!("Generating titles for {event_slug} ({})", config.event_name.trim());

    let labels = collect_stream_labels(fetcher, &event_slug, progress).map_err(|err| {
        error!("title generation failed for {event_slug}: {err}");
        err
    })?;

    let path = output_path(config);
    output::write_labels(&path, &config.event_name, &labels)?;
    info!("Wrote {} titles to {}", labels.len(), path.display());
    Ok((path, labels.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PageResult, Phase};
    use serde_json::json;

    struct OnePage(PageResult);

    impl PageFetcher for OnePage {
        fn fetch_page(&self, event_slug: &str, page: u32) -> Result<PageResult, String> {
            assert_eq!(event_slug, "tournament/kgb-13/event/ultimate-singles");
            assert_eq!(page, 1);
            Ok(self.0.clone())
        }
    }

    struct Failing;

    impl PageFetcher for Failing {
        fn fetch_page(&self, _event_slug: &str, _page: u32) -> Result<PageResult, String> {
            Err("Start.gg error 401 Unauthorized: bad token".to_string())
        }
    }

    fn set(phase_id: &str, phase_name: &str, p2_char: serde_json::Value) -> crate::types::StartggSetNode {
        serde_json::from_value(json!({
            "fullRoundText": "Grand Final",
            "stream": { "streamName": "main" },
            "phaseGroup": { "phase": { "id": phase_id, "name": phase_name } },
            "slots": [
                { "entrant": { "name": "Alice", "participants": [{ "player": { "gamerTag": "AL" } }] } },
                { "entrant": { "name": "Bob", "participants": [{ "player": { "gamerTag": "BO" } }] } }
            ],
            "games": [
                { "selections": [
                    { "selectionType": "CHARACTER", "selectionValue": 1302, "entrant": { "name": "Alice" } },
                    { "selectionType": "CHARACTER", "selectionValue": p2_char, "entrant": { "name": "Bob" } }
                ]},
                { "selections": [
                    { "selectionType": "CHARACTER", "selectionValue": 1302, "entrant": { "name": "Alice" } }
                ]}
            ]
        }))
        .unwrap()
    }

    fn config(output: &std::path::Path) -> AppConfig {
        AppConfig {
            startgg_token: "token".to_string(),
            event_slug: "https://www.start.gg/tournament/kgb-13/event/ultimate-singles".to_string(),
            event_name: "KGB13".to_string(),
            output_path: output.to_string_lossy().to_string(),
        }
    }

    fn two_phase_page() -> PageResult {
        PageResult {
            total_pages: 1,
            phases: vec![
                Phase { id: "P1".to_string(), name: "Pools".to_string(), seed_count: 32 },
                Phase { id: "P2".to_string(), name: "Top 8".to_string(), seed_count: 8 },
            ],
            sets: vec![
                set("P2", "Top 8", json!(1286)),
                set("P1", "Pools", json!(9999)),
            ],
        }
    }

    #[test]
    fn test_generate_titles_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sets.txt");

        let (path, count) = generate_titles(&config(&out), &OnePage(two_phase_page()), None).unwrap();

        assert_eq!(path, out);
        assert_eq!(count, 2);
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "KGB13 - Top 8 Grand Final - AL (Mario) VS BO (Fox)\n\
             KGB13 - Pools Grand Final - AL (Mario) VS BO (Unknown)\n"
        );
    }

    #[test]
    fn test_transport_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sets.txt");

        let err = generate_titles(&config(&out), &Failing, None).unwrap_err();
        assert!(err.contains("401"));
        assert!(!out.exists());
    }

    #[test]
    fn test_invalid_config_rejected_before_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(&dir.path().join("sets.txt"));
        cfg.event_name = " ".to_string();
        assert_eq!(
            generate_titles(&cfg, &Failing, None).unwrap_err(),
            "Event name cannot be empty."
        );
    }
}
