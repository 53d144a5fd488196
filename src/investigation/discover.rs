use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::InvestigationError;

/// Whether a file name looks like an investigation file (`i_*.txt` or `*.idf.txt`)
pub fn is_investigation_file_name(name: &str) -> bool {
    (name.starts_with("i_") && name.ends_with(".txt")) || name.ends_with(".idf.txt")
}

/// Resolve `path` to an investigation file.
///
/// A directory must contain exactly one investigation file; any other
/// existing path is returned unchanged.
pub fn locate_investigation(path: &Path) -> Result<PathBuf, InvestigationError> {
    if !path.exists() {
        return Err(InvestigationError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Ok(path.to_path_buf());
    }

    let mut candidates = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if is_investigation_file_name(&entry.file_name().to_string_lossy()) {
            candidates.push(entry.path());
        }
    }
    candidates.sort();

    match candidates.len() {
        0 => Err(InvestigationError::NoInvestigationFile(path.to_path_buf())),
        1 => {
            let found = candidates.remove(0);
            debug!("Found investigation file {}", found.display());
            Ok(found)
        }
        _ => Err(InvestigationError::AmbiguousInvestigation {
            dir: path.to_path_buf(),
            candidates,
        }),
    }
}
