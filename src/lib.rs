//! # isatab - ISA-Tab Experiment Metadata Parser
//!
//! `isatab` reads ISA-Tab, the tab-delimited multi-file format describing
//! scientific investigations, their studies and assays, the samples and data
//! files involved, and the processing steps connecting them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! let record = isatab::parse("data/BII-I-1")?;
//!
//! for study in &record.studies {
//!     println!("{} nodes, {} processes", study.nodes.len(), study.process_nodes.len());
//!     for assay in &study.assays {
//!         println!("  assay with {} nodes", assay.nodes.len());
//!     }
//! }
//! # Ok::<(), isatab::IsaTabError>(())
//! ```
//!
//! ## Record Graph
//!
//! Study and assay files have no fixed schema. Their header rows are
//! classified by column name ([`header`]), entities named in identity columns
//! such as `Sample Name` or `Raw Data File` are deduplicated into
//! [`EntityNode`](records::EntityNode)s, and `Protocol REF` columns are turned
//! into [`ProcessNode`](records::ProcessNode)s linking input entities to
//! output entities ([`study`]).
//!
//! ```text
//! Source Name  Protocol REF  Sample Name        Source Name-S1 ─┐
//! S1           growth        X1          ==>                    ├─ growth1 ─> Sample Name-X1
//! S2           growth        X1                 Source Name-S2 ─┘
//! ```
//!
//! ## Architecture
//!
//! - [`investigation`]: section reader for the `i_*.txt` investigation file
//! - [`header`]: synonym normalization, column grouping and typing
//! - [`study`]: entity node table, process graph builder and orchestration
//! - [`records`]: the resulting record tree, serializable with serde
//! - [`config`]: classification tables and anchor columns

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod header;
pub mod investigation;
pub mod records;
pub mod study;

mod error;

use std::path::Path;

use log::info;

pub use config::ParserConfig;
pub use error::IsaTabError;

use investigation::{locate_investigation, InvestigationParser};
use records::InvestigationRecord;
use study::StudyAssayParser;

/// Parse an ISA-Tab directory or investigation file with the default configuration.
///
/// A directory must contain exactly one `i_*.txt` or `*.idf.txt` file.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<InvestigationRecord, IsaTabError> {
    parse_with_config(path, &ParserConfig::default())
}

/// Parse an ISA-Tab directory or investigation file
pub fn parse_with_config<P: AsRef<Path>>(
    path: P,
    config: &ParserConfig,
) -> Result<InvestigationRecord, IsaTabError> {
    let investigation_file = locate_investigation(path.as_ref())?;
    info!("Parsing investigation {}", investigation_file.display());

    let record = InvestigationParser::new().parse_file(&investigation_file)?;
    let record = StudyAssayParser::with_config(&investigation_file, config).parse(record)?;

    info!(
        "Parsed {} studies, {} nodes, {} process nodes",
        record.studies.len(),
        record.node_count(),
        record.process_count()
    );
    Ok(record)
}

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::config::ParserConfig;
    pub use crate::header::{ClassifiedHeader, ColumnType, HeaderClassifier, HeaderConfig};
    pub use crate::investigation::InvestigationParser;
    pub use crate::records::{
        AssayRecord, AttributeValue, EntityNode, InvestigationRecord, ProcessNode, StudyRecord,
    };
    pub use crate::study::{RowTable, StudyAssayParser};
    pub use crate::{parse, parse_with_config, IsaTabError};
}
