//! Command-line front end for the cleaning business record stores.
//!
//! Stores live in memory only: every invocation starts from the configured
//! seed data. Use `session` to run several commands against the same stores.

mod commands;
mod render;
mod session;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use cleaning_store_core::config::StoreConfig;
use tracing_subscriber::EnvFilter;

use crate::commands::{App, Command};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = StoreConfig::load(args.config.as_deref())?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");
    let mut app = App::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.command {
        Command::Session => {
            let stdin = io::stdin();
            let ran = session::run(&mut app, stdin.lock(), &mut out)?;
            tracing::info!(commands = ran, "session finished");
        }
        command => app.execute(command, &mut out)?,
    }
    Ok(())
}
