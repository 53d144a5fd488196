use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::nodes::build_nodes;
use super::process::build_process_nodes;
use super::table::RowTable;
use super::StudyError;
use crate::config::ParserConfig;
use crate::header::HeaderClassifier;
use crate::records::{AssayRecord, InvestigationRecord, NodeMap, ProcessMap, StudyRecord};

/// Parses the row-oriented study and assay files of an investigation.
///
/// File names are resolved relative to the directory of the investigation
/// file. Files are processed one at a time in declaration order.
#[derive(Debug, Clone)]
pub struct StudyAssayParser {
    dir: PathBuf,
    classifier: HeaderClassifier,
    study_anchors: Vec<String>,
    assay_anchors: Vec<String>,
}

impl StudyAssayParser {
    /// Create a parser for the investigation file at `investigation_file`
    pub fn new(investigation_file: &Path) -> Self {
        Self::with_config(investigation_file, &ParserConfig::default())
    }

    /// Create a parser with custom classification tables and anchors
    pub fn with_config(investigation_file: &Path, config: &ParserConfig) -> Self {
        let dir = investigation_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self {
            dir,
            classifier: HeaderClassifier::new(config.header.clone()),
            study_anchors: config.study_anchors.clone(),
            assay_anchors: config.assay_anchors.clone(),
        }
    }

    /// Directory file names are resolved against
    pub fn base_dir(&self) -> &Path {
        &self.dir
    }

    /// Fill in nodes, process nodes and assays of every study.
    ///
    /// Studies and assays whose file is missing, or names no entities, are
    /// dropped from the returned record.
    pub fn parse(&self, mut record: InvestigationRecord) -> Result<InvestigationRecord, StudyError> {
        let studies = std::mem::take(&mut record.studies);
        for study in studies {
            if let Some(study) = self.parse_study(study)? {
                record.studies.push(study);
            }
        }
        Ok(record)
    }

    /// Entity nodes of a file, or `None` if the file does not exist
    pub fn parse_nodes<S: AsRef<str>>(
        &self,
        file_name: &str,
        anchors: &[S],
    ) -> Result<Option<NodeMap>, StudyError> {
        let table = self.read_table(file_name)?;
        Ok(table.map(|t| build_nodes(&t, anchors)))
    }

    /// Process nodes of a file, or `None` if the file does not exist or its
    /// processing columns cannot be linked
    pub fn parse_process_nodes(&self, file_name: &str) -> Result<Option<ProcessMap>, StudyError> {
        let table = self.read_table(file_name)?;
        Ok(table.and_then(|t| build_process_nodes(&t)))
    }

    fn read_table(&self, file_name: &str) -> Result<Option<RowTable>, StudyError> {
        let path = self.dir.join(file_name);
        let table = RowTable::open(&path, &self.classifier)?;
        if table.is_none() {
            debug!("{} does not exist", path.display());
        }
        Ok(table)
    }

    fn parse_study(&self, mut study: StudyRecord) -> Result<Option<StudyRecord>, StudyError> {
        let Some(file_name) = declared_file(study.file_name()) else {
            warn!("Dropping study without a study file name");
            return Ok(None);
        };

        let nodes = match self.parse_nodes(&file_name, &self.study_anchors)? {
            Some(nodes) if !nodes.is_empty() => nodes,
            _ => {
                warn!("Dropping study {}: no nodes found", file_name);
                return Ok(None);
            }
        };
        study.nodes = nodes;
        study.process_nodes = self.parse_process_nodes(&file_name)?.unwrap_or_default();

        let assays = std::mem::take(&mut study.assays);
        for assay in assays {
            if let Some(assay) = self.parse_assay(assay)? {
                study.assays.push(assay);
            }
        }

        info!(
            "Study {}: {} nodes, {} process nodes, {} assays",
            file_name,
            study.nodes.len(),
            study.process_nodes.len(),
            study.assays.len()
        );
        Ok(Some(study))
    }

    fn parse_assay(&self, mut assay: AssayRecord) -> Result<Option<AssayRecord>, StudyError> {
        let Some(file_name) = declared_file(assay.file_name()) else {
            warn!("Dropping assay without an assay file name");
            return Ok(None);
        };

        let nodes = match self.parse_nodes(&file_name, &self.assay_anchors)? {
            Some(nodes) if !nodes.is_empty() => nodes,
            _ => {
                warn!("Dropping assay {}: no nodes found", file_name);
                return Ok(None);
            }
        };
        assay.nodes = nodes;
        assay.process_nodes = self.parse_process_nodes(&file_name)?.unwrap_or_default();

        info!(
            "Assay {}: {} nodes, {} process nodes",
            file_name,
            assay.nodes.len(),
            assay.process_nodes.len()
        );
        Ok(Some(assay))
    }
}

/// A declared file name, or `None` when the key is absent or blank
fn declared_file(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
