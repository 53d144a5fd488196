use crate::investigation::InvestigationError;
use crate::study::StudyError;

/// Errors that can occur while parsing an ISA-Tab investigation
#[derive(Debug, thiserror::Error)]
pub enum IsaTabError {
    /// Error locating or reading the investigation file
    #[error("Investigation error: {0}")]
    InvestigationError(#[from] InvestigationError),

    /// Error reading a study or assay file
    #[error("Study/assay error: {0}")]
    StudyError(#[from] StudyError),

    /// Error serializing/deserializing JSON
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}
