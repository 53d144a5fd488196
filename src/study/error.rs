use std::path::PathBuf;

/// Errors that can occur while reading a study or assay file.
///
/// Format variance (missing files, unknown columns, short rows, unlinkable
/// processing columns) is not an error; only failures to read the file are.
#[derive(Debug, thiserror::Error)]
pub enum StudyError {
    /// I/O error other than the file being absent
    #[error("Failed to read {}: {source}", path.display())]
    IoError {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// TSV parsing error
    #[error("TSV parsing error: {0}")]
    CsvError(#[from] csv::Error),
}
