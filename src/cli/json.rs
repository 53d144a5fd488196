use anyhow::{Context, Result};
use isatab::ParserConfig;
use log::info;
use std::path::PathBuf;

/// Parse an ISA-Tab investigation and write it as JSON
pub fn run(path: PathBuf, output: Option<PathBuf>, config: &ParserConfig) -> Result<()> {
    let record = isatab::parse_with_config(&path, config)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    let json = record.to_json().context("Failed to serialize record")?;

    match output {
        Some(output) => {
            std::fs::write(&output, json)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!("Wrote {}", output.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
