//! CLI frontend for the Grid Skirmish battle engine.

mod commands;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gs",
    about = "Grid Skirmish: a 5x5 tactical battle",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Let a scripted player fight a battle and report the outcome
    Auto {
        /// Battle config file (JSON); defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// RNG seed for deterministic battles
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Give up after this many player turns
        #[arg(short, long, default_value = "50")]
        max_turns: u32,

        /// Print the battle log as it happens
        #[arg(short, long)]
        verbose: bool,

        /// Also print the final battle snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default battle config as JSON
    Config {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a battle config file
    Check {
        /// Config file to validate
        file: PathBuf,
    },

    /// Play a battle in the terminal
    Play {
        /// Battle config file (JSON); defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// RNG seed for deterministic battles
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Auto {
            config,
            seed,
            max_turns,
            verbose,
            json,
        } => commands::auto::run(config.as_deref(), seed, max_turns, verbose, json),
        Commands::Config { output } => commands::config::run(output.as_deref()),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Play { config, seed } => commands::play::run(config.as_deref(), seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout and the terminal UI stay clean.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();
}
