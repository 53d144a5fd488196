use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod json;
mod summary;

pub use config::Config;

/// isatab - ISA-Tab experiment metadata parser
#[derive(Parser)]
#[command(name = "isatab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// TOML configuration file (isatab.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Requested verbosity
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the parsed investigation as an indented tree
    Summary {
        /// ISA-Tab directory or investigation file
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Write the parsed investigation as JSON
    Json {
        /// ISA-Tab directory or investigation file
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Summary { path } => summary::run(path, &config.parser),
        Commands::Json { path, output } => json::run(path, output, &config.parser),
    }
}
