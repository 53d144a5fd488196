use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Header prefixes of columns that qualify the column before them
pub const QUALIFIER_PREFIXES: &[&str] = &[
    "Performer",
    "Date",
    "Unit",
    "Term Accession Number",
    "Term Source REF",
];

/// Header prefixes of descriptive attribute columns
pub const ATTRIBUTE_PREFIXES: &[&str] = &[
    "Characteristics",
    "Factor Type",
    "Comment",
    "Label",
    "Material Type",
    "Factor Value",
    "Assay Name",
    "Parameter Value[Trait Definition File]",
];

/// Header prefixes of study-level identity columns
pub const NODE_PREFIXES: &[&str] = &[
    "Sample Name",
    "Source Name",
    "Image File",
    "Raw Data File",
    "Derived Data File",
    "Acquisition Parameter Data File",
];

/// Header prefixes of assay-level identity columns
pub const NODE_ASSAY_PREFIXES: &[&str] = &[
    "Extract Name",
    "Labeled Extract Name",
    "Assay Name",
    "Data Transformation Name",
    "Normalization Name",
];

/// Header prefixes of processing step columns
pub const PROCESSING_PREFIXES: &[&str] = &["Protocol REF"];

/// Non-canonical header names and their canonical replacement
pub const SYNONYMS: &[(&str, &str)] = &[
    ("Array Data File", "Raw Data File"),
    ("Free Induction Decay Data File", "Raw Data File"),
    ("Derived Array Data File", "Derived Data File"),
    ("Hybridization Assay Name", "Assay Name"),
    ("Derived Array Data Matrix File", "Derived Data File"),
    ("Raw Spectral Data File", "Raw Data File"),
    ("Derived Spectral Data File", "Derived Data File"),
];

/// Semantic category of a header group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Descriptive attribute (Characteristics, Comment, Factor Value, ...)
    Attribute,
    /// Study-level entity identity (Sample Name, Raw Data File, ...)
    Node,
    /// Assay-level entity identity (Extract Name, Normalization Name, ...)
    NodeAssay,
    /// Processing step (Protocol REF)
    Processing,
}

impl ColumnType {
    /// Order in which categories are tried; the first matching prefix set wins.
    pub const MATCH_ORDER: [ColumnType; 4] = [
        ColumnType::Attribute,
        ColumnType::Node,
        ColumnType::NodeAssay,
        ColumnType::Processing,
    ];

    /// True for categories that identify an entity node.
    pub fn is_node(self) -> bool {
        matches!(self, ColumnType::Node | ColumnType::NodeAssay)
    }

    /// True for categories whose qualifier columns are collapsed into one value.
    pub fn is_collapsed(self) -> bool {
        matches!(self, ColumnType::Attribute | ColumnType::Processing)
    }
}

/// Immutable lookup tables driving header classification.
///
/// Deserializes from a partial table: fields that are absent keep their
/// ISA-Tab defaults, and `synonyms` entries are merged over the default
/// synonyms rather than replacing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Prefixes marking a qualifier column
    pub qualifier_prefixes: Vec<String>,
    /// Prefixes of [`ColumnType::Attribute`] groups
    pub attribute_prefixes: Vec<String>,
    /// Prefixes of [`ColumnType::Node`] groups
    pub node_prefixes: Vec<String>,
    /// Prefixes of [`ColumnType::NodeAssay`] groups
    pub node_assay_prefixes: Vec<String>,
    /// Prefixes of [`ColumnType::Processing`] groups
    pub processing_prefixes: Vec<String>,
    /// Exact header name to canonical header name
    #[serde(deserialize_with = "extend_default_synonyms")]
    pub synonyms: IndexMap<String, String>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            qualifier_prefixes: to_owned(QUALIFIER_PREFIXES),
            attribute_prefixes: to_owned(ATTRIBUTE_PREFIXES),
            node_prefixes: to_owned(NODE_PREFIXES),
            node_assay_prefixes: to_owned(NODE_ASSAY_PREFIXES),
            processing_prefixes: to_owned(PROCESSING_PREFIXES),
            synonyms: default_synonyms(),
        }
    }
}

impl HeaderConfig {
    /// Prefix set of the given category
    pub fn prefixes(&self, column_type: ColumnType) -> &[String] {
        match column_type {
            ColumnType::Attribute => &self.attribute_prefixes,
            ColumnType::Node => &self.node_prefixes,
            ColumnType::NodeAssay => &self.node_assay_prefixes,
            ColumnType::Processing => &self.processing_prefixes,
        }
    }

    /// Whether `header` qualifies the column preceding it
    pub fn is_qualifier(&self, header: &str) -> bool {
        starts_with_any(header, &self.qualifier_prefixes)
    }

    /// Category of a representative header, checked in [`ColumnType::MATCH_ORDER`]
    pub fn column_type(&self, header: &str) -> Option<ColumnType> {
        ColumnType::MATCH_ORDER
            .into_iter()
            .find(|&column_type| starts_with_any(header, self.prefixes(column_type)))
    }

    /// Canonical form of `header`, or `header` itself if it has no synonym
    pub fn canonical<'a>(&'a self, header: &'a str) -> &'a str {
        self.synonyms.get(header).map(String::as_str).unwrap_or(header)
    }
}

fn starts_with_any(header: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| header.starts_with(prefix.as_str()))
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn default_synonyms() -> IndexMap<String, String> {
    SYNONYMS
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

fn extend_default_synonyms<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let extra = IndexMap::<String, String>::deserialize(deserializer)?;
    let mut synonyms = default_synonyms();
    synonyms.extend(extra);
    Ok(synonyms)
}
