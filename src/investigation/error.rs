use std::path::PathBuf;

/// Errors that can occur while locating or reading an investigation file
#[derive(Debug, thiserror::Error)]
pub enum InvestigationError {
    /// I/O error reading the investigation file or its directory
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// TSV parsing error
    #[error("TSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// The given path does not exist
    #[error("Did not find investigation file: {}", .0.display())]
    NotFound(PathBuf),

    /// Directory contains no `i_*.txt` or `*.idf.txt` file
    #[error("No investigation file in directory: {}", .0.display())]
    NoInvestigationFile(PathBuf),

    /// Directory contains more than one candidate investigation file
    #[error("Multiple investigation files in {}: {candidates:?}", dir.display())]
    AmbiguousInvestigation {
        /// Directory that was searched
        dir: PathBuf,
        /// Every matching file
        candidates: Vec<PathBuf>,
    },
}
