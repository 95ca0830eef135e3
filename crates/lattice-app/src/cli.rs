use std::path::PathBuf;

use clap::Parser;

/// Lattice: a recursive split-pane workspace driven from the terminal.
#[derive(Parser, Debug)]
#[command(name = "lattice", version, about)]
pub struct Args {
    /// Config file path. Defaults to $LATTICE_CONFIG, then the platform
    /// config directory.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error, or a full
    /// EnvFilter directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Read shell commands from a file instead of stdin.
    #[arg(short = 's', long)]
    pub script: Option<PathBuf>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
