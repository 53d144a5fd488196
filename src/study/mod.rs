//! # Study and Assay Files
//!
//! Row-oriented parsing of the files named by `Study File Name` and
//! `Study Assay File Name`. Each file is read twice:
//!
//! 1. [`build_nodes`] deduplicates the entities named in the anchor columns
//!    into [`EntityNode`](crate::records::EntityNode)s keyed by
//!    `type-name` identity, collecting the attributes of the row each entity
//!    is first seen on.
//! 2. [`build_process_nodes`] links entities through the processing columns:
//!    every `Protocol REF` group is paired with the nearest identity groups
//!    on its left (inputs) and right (outputs), and rows sharing an input or
//!    an output are merged into one [`ProcessNode`](crate::records::ProcessNode).
//!
//! [`StudyAssayParser`] runs both passes for every study and assay of an
//! [`InvestigationRecord`](crate::records::InvestigationRecord), dropping
//! those whose files are missing or name no entities.

mod error;
mod nodes;
mod parser;
mod process;
mod table;

#[cfg(test)]
mod tests;

pub use error::StudyError;
pub use nodes::build_nodes;
pub use parser::StudyAssayParser;
pub use process::{build_process_nodes, nearest_after, nearest_before, ProcessLink};
pub use table::{Row, RowTable};
