//! # isatab
//!
//! Command-line front end for the `isatab` parser.
//!
//! ## Usage
//!
//! ```bash
//! # Print the parsed record tree
//! isatab summary path/to/isatab_dir
//!
//! # Write the record graph as JSON
//! isatab json path/to/i_investigation.txt -o record.json
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
