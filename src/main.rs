use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod catalog;
mod cli;
mod commands;
mod config;
mod domain;
mod queries;
mod services;

use cli::Cli;
use commands::{handle_catalog_commands, handle_fetch};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if handle_catalog_commands(&cli)? {
        return Ok(());
    }

    let settings = config::load_settings(cli.config.as_deref())?;
    if !handle_fetch(&cli, settings)? {
        anyhow::bail!("unhandled command");
    }
    Ok(())
}
