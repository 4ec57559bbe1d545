use crate::types::AppConfig;
use clap::Parser;

/// Writes a YouTube-ready title for every streamed set of a start.gg event.
#[derive(Parser, Debug)]
#[command(name = "vod-titles", version, about)]
pub struct Cli {
    /// Event slug (tournament/<t>/event/<e>) or a start.gg event URL
    #[arg(short, long)]
    pub slug: Option<String>,

    /// Short event name prepended to every title
    #[arg(short, long)]
    pub event_name: Option<String>,

    /// Output file (defaults to sets.txt)
    #[arg(short, long)]
    pub output: Option<String>,

    /// start.gg API token
    #[arg(short, long)]
    pub token: Option<String>,

    /// Store the token in the config file for later runs
    #[arg(long)]
    pub save_token: bool,
}

/// Flags win over config values; absent flags leave the config untouched.
pub fn apply_cli_overrides(mut config: AppConfig, cli: &Cli) -> AppConfig {
    if let Some(token) = &cli.token {
        config.startgg_token = token.trim().to_string();
    }
    if let Some(slug) = &cli.slug {
        config.event_slug = slug.clone();
    }
    if let Some(event_name) = &cli.event_name {
        config.event_name = event_name.clone();
    }
    if let Some(output) = &cli.output {
        config.output_path = output.clone();
    }
    config
}

/// Token a `--save-token` run should persist.
pub fn token_to_save(cli: &Cli) -> Result<&str, String> {
    cli.token
        .as_deref()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| "No token to save; pass --token.".to_string())
}
