//! # Header Classification
//!
//! Study and assay files carry no fixed schema: their structure is inferred
//! from column names. This module turns a raw header row into a
//! [`ClassifiedHeader`] in three steps:
//!
//! 1. **Synonyms**: legacy MAGE-TAB and technology-specific names are
//!    rewritten to their canonical ISA-Tab form
//!    (e.g. `Array Data File` becomes `Raw Data File`).
//! 2. **Grouping**: qualifier columns (`Unit`, `Term Source REF`, ...) are
//!    folded into the preceding column, producing one [`HeaderGroup`] per
//!    logical attribute.
//! 3. **Typing**: every group is assigned a [`ColumnType`] from the prefix of
//!    its representative header, or none if nothing matches.
//!
//! The lookup tables live in an immutable [`HeaderConfig`] owned by the
//! [`HeaderClassifier`].

mod classifier;
mod config;


pub use classifier::{attribute_field_name, clean_header, ClassifiedHeader, HeaderClassifier, HeaderGroup};
pub use config::{ColumnType, HeaderConfig};
