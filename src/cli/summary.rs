use anyhow::{Context, Result};
use isatab::ParserConfig;
use log::info;
use std::path::PathBuf;

#[cfg(feature = "colorized_output")]
use console::style;

/// Parse an ISA-Tab investigation and print its record tree
pub fn run(path: PathBuf, config: &ParserConfig) -> Result<()> {
    info!("Reading {}", path.display());

    let record = isatab::parse_with_config(&path, config)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let heading = format!(
        "{}: {} studies, {} nodes, {} process nodes",
        path.display(),
        record.studies.len(),
        record.node_count(),
        record.process_count()
    );

    #[cfg(feature = "colorized_output")]
    {
        println!("{}", style(heading).bold().cyan());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", heading);
    }

    println!();
    print!("{}", record);
    Ok(())
}
