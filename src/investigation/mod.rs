//! # Investigation Files
//!
//! Reader for the top-level `i_*.txt` investigation file. The file is a
//! sequence of upper-case section labels, each followed by `key<TAB>value...`
//! lines where every value column describes one entry:
//!
//! ```text
//! ONTOLOGY SOURCE REFERENCE
//! Term Source Name        OBI      NCBITAXON
//! INVESTIGATION
//! Investigation Title     Growth study
//! STUDY
//! Study File Name         s_study.txt
//! STUDY ASSAYS
//! Study Assay File Name   a_assay.txt
//! ```
//!
//! Section labels are mapped onto record fields through a fixed table
//! ([`SectionField`]); `STUDY` opens a new [`StudyRecord`](crate::records::StudyRecord).

mod discover;
mod error;
mod parser;


pub use discover::{is_investigation_file_name, locate_investigation};
pub use error::InvestigationError;
pub use parser::{section_field, InvestigationParser, SectionField, SECTION_FIELDS, STUDY_SECTION};
