use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::node::{NodeMap, ProcessMap};
use crate::IsaTabError;

/// Ordered key/value metadata from one investigation section column
pub type Metadata = IndexMap<String, String>;

/// Study metadata key naming the study's row-oriented file
pub const STUDY_FILE_NAME: &str = "Study File Name";

/// Assay metadata key naming the assay's row-oriented file
pub const ASSAY_FILE_NAME: &str = "Study Assay File Name";

/// Investigation metadata key naming a MAGE-TAB SDRF file
pub const SDRF_FILE: &str = "SDRF File";

/// A parsed ISA-Tab investigation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestigationRecord {
    /// INVESTIGATION section key/values
    pub metadata: Metadata,
    /// ONTOLOGY SOURCE REFERENCE entries
    pub ontology_refs: Vec<Metadata>,
    /// INVESTIGATION PUBLICATIONS entries
    pub publications: Vec<Metadata>,
    /// INVESTIGATION CONTACTS entries
    pub contacts: Vec<Metadata>,
    /// Studies that yielded entity nodes
    pub studies: Vec<StudyRecord>,
}

impl InvestigationRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of entity nodes across all studies and assays
    pub fn node_count(&self) -> usize {
        self.studies.iter().map(StudyRecord::node_count).sum()
    }

    /// Total number of process nodes across all studies and assays
    pub fn process_count(&self) -> usize {
        self.studies.iter().map(StudyRecord::process_count).sum()
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, IsaTabError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, IsaTabError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A study: investigation-file metadata plus its parsed study file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyRecord {
    /// STUDY section key/values, including [`STUDY_FILE_NAME`]
    pub metadata: Metadata,
    /// STUDY DESIGN DESCRIPTORS entries
    pub design_descriptors: Vec<Metadata>,
    /// STUDY PUBLICATIONS entries
    pub publications: Vec<Metadata>,
    /// STUDY FACTORS entries
    pub factors: Vec<Metadata>,
    /// STUDY PROTOCOLS entries
    pub protocols: Vec<Metadata>,
    /// STUDY CONTACTS entries
    pub contacts: Vec<Metadata>,
    /// Entity nodes of the study file, keyed by node identity
    pub nodes: NodeMap,
    /// Process nodes of the study file, keyed by unique process name
    pub process_nodes: ProcessMap,
    /// Assays declared in STUDY ASSAYS
    pub assays: Vec<AssayRecord>,
}

impl StudyRecord {
    /// Create a study whose row file is `file_name`
    pub fn with_file_name(file_name: impl Into<String>) -> Self {
        let mut study = Self::default();
        study.metadata.insert(STUDY_FILE_NAME.to_string(), file_name.into());
        study
    }

    /// Name of the study's row-oriented file
    pub fn file_name(&self) -> Option<&str> {
        self.metadata.get(STUDY_FILE_NAME).map(String::as_str)
    }

    /// Entity nodes of the study and all of its assays
    pub fn node_count(&self) -> usize {
        self.nodes.len() + self.assays.iter().map(|a| a.nodes.len()).sum::<usize>()
    }

    /// Process nodes of the study and all of its assays
    pub fn process_count(&self) -> usize {
        self.process_nodes.len()
            + self.assays.iter().map(|a| a.process_nodes.len()).sum::<usize>()
    }
}

/// An assay: STUDY ASSAYS metadata plus its parsed assay file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssayRecord {
    /// STUDY ASSAYS key/values, including [`ASSAY_FILE_NAME`]
    pub metadata: Metadata,
    /// Entity nodes of the assay file, keyed by node identity
    pub nodes: NodeMap,
    /// Process nodes of the assay file, keyed by unique process name
    pub process_nodes: ProcessMap,
}

impl AssayRecord {
    /// Create an assay from its STUDY ASSAYS metadata
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            ..Default::default()
        }
    }

    /// Name of the assay's row-oriented file
    pub fn file_name(&self) -> Option<&str> {
        self.metadata.get(ASSAY_FILE_NAME).map(String::as_str)
    }
}
