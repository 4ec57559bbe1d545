use clap::Parser;
use std::process::ExitCode;
use vod_titles_lib::{
    cli::{apply_cli_overrides, token_to_save, Cli},
    config::{load_config_inner, load_env_file, save_token},
    generate_titles, init_tracing,
    pipeline::Progress,
    StartggClient,
};

fn run(cli: Cli) -> Result<(), String> {
    if cli.save_token {
        save_token(token_to_save(&cli)?)?;
        eprintln!("Token saved.");
        if cli.slug.is_none() {
            return Ok(());
        }
    }

    let config = apply_cli_overrides(load_config_inner()?, &cli);
    let client = StartggClient::new(&config.startgg_token)?;
    let progress: &mut dyn Progress = &mut |current: u32, total: u32, slug: &str| {
        eprintln!("Fetching page {current}/{total} of sets for event: {slug}");
    };
    let (path, count) = generate_titles(&config, &client, Some(progress))?;
    println!("{count} titles written to {}", path.display());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    load_env_file();
    let _guard = init_tracing();
    tracing::info!("vod-titles starting");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("Error : {err}");
            ExitCode::FAILURE
        }
    }
}
