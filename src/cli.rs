use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for stickclip.
#[derive(Debug, Parser)]
#[command(
    name = "stickclip",
    version,
    about = "Clipboard history with sticky entries"
)]
pub struct Cli {
    /// Configuration file (defaults to `<config_dir>/stickclip/config.toml`)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Clipboard poll period in milliseconds, overriding the config file
    #[arg(long, global = true)]
    pub interval_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Watch the clipboard and record history until Ctrl-C (default)
    Run,
    /// Print the saved history
    List,
}
