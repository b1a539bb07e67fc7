mod cli;
mod editor_utils;

use anyhow::Result;
use cli::Cli;
use day_core::{OsFs, Vault};
use editor_utils::TerminalEditor;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("day: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let _cli = Cli::new()?;
    let vault = Vault::new()?;
    let opened = vault.open_today(&OsFs, &TerminalEditor)?;
    tracing::debug!(
        path = %opened.path.display(),
        created = opened.created,
        inferred = opened.inferred,
        "editor closed"
    );
    Ok(())
}

/// Logs go to stderr so they never land in the editor's screen. `RUST_LOG` overrides the level.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
