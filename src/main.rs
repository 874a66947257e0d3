//! stickclip: a clipboard history daemon with sticky entries.

mod bootstrap;
mod cli;

use anyhow::Result;
use clap::Parser;
use sc_core::ports::AppDirsPort;
use sc_platform::DirsAppDirsAdapter;

use crate::bootstrap::{init_tracing_subscriber, list_history, resolve_config, run_daemon};
use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs()?;
    let resolved = resolve_config(&app_dirs, cli.config, cli.interval_ms)?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            init_tracing_subscriber(Some(&app_dirs.logs_dir()))?;
            run_daemon(resolved).await
        }
        Command::List => list_history(&resolved),
    }
}
