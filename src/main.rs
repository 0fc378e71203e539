#![forbid(unsafe_code)]
//! Prime Finder Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use primes::commands::{execute_find, execute_init, execute_modes, FindOptions, InitOptions};
use primes::config::DEFAULT_OPTIONS_FILE;

#[derive(Parser)]
#[command(name = "primes")]
#[command(about = "Find primes in a bounded range")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Options file path
    #[arg(short, long, global = true, env = "PRIMES_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for primes
    Find {
        /// Selection mode (find_x, all, first, last)
        #[arg(short, long)]
        mode: Option<String>,

        /// How many primes find_x returns
        #[arg(short, long)]
        quantity: Option<usize>,

        /// Inclusive lower bound
        #[arg(long, allow_hyphen_values = true)]
        from: Option<i64>,

        /// Inclusive upper bound
        #[arg(long, allow_hyphen_values = true)]
        to: Option<i64>,

        /// Output as JSON (default: plain text)
        #[arg(long)]
        json: bool,
    },

    /// List the available selection modes
    Modes,

    /// Write a default options file
    Init {
        /// Force overwrite existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Find { mode, quantity, from, to, json } => {
            let options = FindOptions {
                config: cli.config,
                mode,
                quantity,
                from,
                to,
                json,
            };
            execute_find(options)?;
        }

        Commands::Modes => {
            execute_modes()?;
        }

        Commands::Init { force } => {
            let options = InitOptions {
                path: cli.config.unwrap_or_else(|| PathBuf::from(DEFAULT_OPTIONS_FILE)),
                force,
            };
            execute_init(options)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("✗").red(), e);
        std::process::exit(1);
    }
}
