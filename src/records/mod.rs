//! # ISA-Tab Records
//!
//! In-memory representation of a parsed ISA-Tab investigation:
//!
//! - [`InvestigationRecord`]: top-level metadata and its studies
//! - [`StudyRecord`] / [`AssayRecord`]: section metadata plus the entity
//!   nodes and process nodes parsed from their row-oriented files
//! - [`EntityNode`]: a deduplicated sample, source, extract or data file
//! - [`ProcessNode`]: one protocol application linking input identities to
//!   output identities
//!
//! All maps and sets preserve insertion order, so records serialize to JSON
//! in file order.

mod display;
mod investigation;
mod node;

#[cfg(test)]
mod tests;

pub use investigation::{
    AssayRecord, InvestigationRecord, Metadata, StudyRecord, ASSAY_FILE_NAME, SDRF_FILE,
    STUDY_FILE_NAME,
};
pub use node::{
    node_identity, AttributeField, AttributeValue, EntityNode, NodeMap, NodeMetadata, ProcessMap,
    ProcessNode,
};
