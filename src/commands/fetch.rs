use crate::catalog;
use crate::cli::{Cli, Commands, FetchArgs};
use crate::config::{FetchMode, Settings};
use crate::domain::models::RunMode;
use crate::services::materializer::materialize;
use crate::services::output::print_value;

fn apply_overrides(mut settings: Settings, args: &FetchArgs) -> Settings {
    if let Some(dir) = &args.images_dir {
        settings.images_dir = dir.clone();
    }
    if let Some(path) = &args.mapping {
        settings.mapping_path = path.clone();
    }
    if let Some(ms) = args.delay_ms {
        settings.delay_ms = ms;
    }
    settings
}

/// Handles `fetch`, which is also the default when no subcommand is given.
pub fn handle_fetch(cli: &Cli, settings: Settings) -> anyhow::Result<bool> {
    let args = match &cli.command {
        None => FetchArgs::default(),
        Some(Commands::Fetch(args)) => args.clone(),
        Some(_) => return Ok(false),
    };
    let settings = apply_overrides(settings, &args);
    let mode = FetchMode::from_env();

    let summary = materialize(catalog::all(), &mode, &settings);
    print_value(cli.json, summary, |s| match s.mode {
        RunMode::Placeholder if s.failed > 0 => {
            format!("could not write placeholder mapping to {}", s.mapping_path)
        }
        RunMode::Placeholder => format!(
            "wrote {} placeholder image URLs to {}",
            s.downloaded, s.mapping_path
        ),
        RunMode::Live => format!(
            "done: {} downloaded, {} already present, {} failed; images in {}",
            s.downloaded, s.skipped, s.failed, s.images_dir
        ),
    })?;
    Ok(true)
}
