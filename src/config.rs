//! Parser configuration: header classification tables and anchor columns.

use serde::{Deserialize, Serialize};

use crate::header::HeaderConfig;

/// Identity columns keyed into entity nodes for study files
pub const STUDY_ANCHORS: &[&str] = &["Source Name", "Sample Name", "Comment[ENA_SAMPLE]"];

/// Identity columns keyed into entity nodes for assay files
pub const ASSAY_ANCHORS: &[&str] = &[
    "Sample Name",
    "Extract Name",
    "Raw Data File",
    "Derived Data File",
    "Image File",
    "Acquisition Parameter Data File",
    "Free Induction Decay Data File",
];

/// Configuration for [`StudyAssayParser`](crate::study::StudyAssayParser)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Header classification tables
    pub header: HeaderConfig,
    /// Anchor columns of study files, in scan order
    pub study_anchors: Vec<String>,
    /// Anchor columns of assay files, in scan order
    pub assay_anchors: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            header: HeaderConfig::default(),
            study_anchors: STUDY_ANCHORS.iter().map(|s| s.to_string()).collect(),
            assay_anchors: ASSAY_ANCHORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
