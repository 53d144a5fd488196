use log::debug;

use super::config::{ColumnType, HeaderConfig};

/// Marker prepended to cleaned names that start with a digit
pub const DIGIT_PREFIX: &str = "isa_";

/// A logical column: one representative column followed by its qualifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderGroup {
    columns: Vec<usize>,
    /// Category of the representative column, `None` if unrecognized
    pub column_type: Option<ColumnType>,
}

impl HeaderGroup {
    /// Column indices of this group, representative first
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Column index of the representative column
    pub fn representative(&self) -> usize {
        self.columns[0]
    }

    /// Whether the group carries qualifier sub-columns
    pub fn is_qualified(&self) -> bool {
        self.columns.len() > 1
    }
}

/// Normalized header row together with its grouping and typing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassifiedHeader {
    names: Vec<String>,
    groups: Vec<HeaderGroup>,
}

impl ClassifiedHeader {
    /// Normalized column names
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Header name of a column
    pub fn name(&self, column: usize) -> &str {
        self.names.get(column).map(String::as_str).unwrap_or("")
    }

    /// Groups in column order
    pub fn groups(&self) -> &[HeaderGroup] {
        &self.groups
    }

    /// Group by index
    pub fn group(&self, index: usize) -> Option<&HeaderGroup> {
        self.groups.get(index)
    }

    /// Header name of a group's representative column; empty if out of range
    pub fn group_name(&self, index: usize) -> &str {
        self.group(index)
            .map(|g| self.name(g.representative()))
            .unwrap_or("")
    }

    /// First column whose normalized name is exactly `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|h| h == name)
    }

    /// Whether any column is literally named `value`
    pub fn contains(&self, value: &str) -> bool {
        self.names.iter().any(|h| h == value)
    }

    /// Ascending indices of the groups whose type satisfies `predicate`
    pub fn group_indices<F>(&self, predicate: F) -> Vec<usize>
    where
        F: Fn(ColumnType) -> bool,
    {
        self.groups
            .iter()
            .enumerate()
            .filter(|(_, g)| g.column_type.is_some_and(&predicate))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Groups and types the header row of a study or assay file
#[derive(Debug, Clone, Default)]
pub struct HeaderClassifier {
    config: HeaderConfig,
}

impl HeaderClassifier {
    /// Create a classifier over the given tables
    pub fn new(config: HeaderConfig) -> Self {
        Self { config }
    }

    /// Classification tables in use
    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    /// Replace every header that has a known synonym with its canonical name.
    pub fn normalize<S: AsRef<str>>(&self, raw: &[S]) -> Vec<String> {
        raw.iter()
            .map(|h| self.config.canonical(h.as_ref()).to_string())
            .collect()
    }

    /// Fold qualifier columns into the group opened by the closest
    /// non-qualifier column on their left.
    ///
    /// A qualifier with nothing to its left opens its own group.
    pub fn group(&self, names: &[String]) -> Vec<Vec<usize>> {
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for (i, name) in names.iter().enumerate() {
            match groups.last_mut() {
                Some(open) if self.config.is_qualifier(name) => open.push(i),
                _ => groups.push(vec![i]),
            }
        }
        groups
    }

    /// Type of each group, from the header of its representative column.
    pub fn characterize(&self, names: &[String], groups: &[Vec<usize>]) -> Vec<Option<ColumnType>> {
        groups
            .iter()
            .map(|g| self.config.column_type(&names[g[0]]))
            .collect()
    }

    /// Normalize, group and type a raw header row
    pub fn classify<S: AsRef<str>>(&self, raw: &[S]) -> ClassifiedHeader {
        let names = self.normalize(raw);
        let columns = self.group(&names);
        let types = self.characterize(&names, &columns);

        let groups: Vec<HeaderGroup> = columns
            .into_iter()
            .zip(types)
            .map(|(columns, column_type)| HeaderGroup {
                columns,
                column_type,
            })
            .collect();

        debug!(
            "Classified {} columns into {} groups ({} typed)",
            names.len(),
            groups.len(),
            groups.iter().filter(|g| g.column_type.is_some()).count()
        );

        ClassifiedHeader { names, groups }
    }
}

/// Reduce `Name[Real Attribute]` to `Real Attribute`.
///
/// Names starting with a digit get [`DIGIT_PREFIX`] so they stay usable as
/// identifiers.
pub fn clean_header(header: &str) -> String {
    let name = match header.rfind('[') {
        Some(open) => header[open + 1..].replace(']', ""),
        None => header.to_string(),
    };
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{DIGIT_PREFIX}{name}")
    } else {
        name
    }
}

/// Cleaned header with every run of non-word characters replaced by `_`
pub fn attribute_field_name(header: &str) -> String {
    let mut out = String::with_capacity(header.len());
    let mut in_run = false;
    for c in clean_header(header).chars() {
        if c.is_alphanumeric() || c == '_' {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}
