mod canvas;
mod cli;
mod keybinds;
mod shell;

use std::io::{self, BufReader};
use std::process::ExitCode;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "lattice=info";

/// A bare level applies to the lattice crates; anything else is passed
/// through as an EnvFilter directive.
fn log_directive(level: &str) -> String {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => format!("lattice={level}"),
        other => other.to_string(),
    }
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(e) => {
            eprintln!("invalid log directive '{directive}' ({e}), using {DEFAULT_DIRECTIVE}");
            filter.add_directive(LevelFilter::INFO.into())
        }
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    let config = lattice_config::load_config(args.config.as_deref());
    let level = args.log_level.clone().or_else(|| {
        config
            .as_ref()
            .ok()
            .map(|c| c.logging.level.as_directive().to_string())
    });
    init_logging(&level.map_or_else(|| DEFAULT_DIRECTIVE.to_string(), |l| log_directive(&l)));

    tracing::info!("Lattice v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = config.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        lattice_config::LatticeConfig::default()
    });

    if args.print_config {
        println!("{}", lattice_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let mut shell = match shell::Shell::new(&config) {
        Ok(shell) => shell,
        Err(e) => {
            tracing::error!("failed to create workspace: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    let result = match &args.script {
        Some(path) => match std::fs::File::open(path) {
            Ok(file) => shell.run(BufReader::new(file), &mut stdout),
            Err(e) => Err(e.into()),
        },
        None => shell.run(io::stdin().lock(), &mut stdout),
    };

    match result {
        Ok(()) => {
            tracing::info!(panes = shell.workspace().leaf_count(), "Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("shell error: {e}");
            ExitCode::FAILURE
        }
    }
}
