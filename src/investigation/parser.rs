use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, warn};

use super::InvestigationError;
use crate::records::{AssayRecord, InvestigationRecord, Metadata, StudyRecord, SDRF_FILE};

/// Section label opening a new study
pub const STUDY_SECTION: &str = "STUDY";

/// Record field a section body is stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionField {
    /// Key/values of the record itself (first entry only)
    Metadata,
    /// Ontology source references
    OntologyRefs,
    /// Publications
    Publications,
    /// Contacts
    Contacts,
    /// Study design descriptors
    DesignDescriptors,
    /// Study factors
    Factors,
    /// Declared assays
    Assays,
    /// Study protocols
    Protocols,
}

/// Section label to record field
pub const SECTION_FIELDS: &[(&str, SectionField)] = &[
    ("ONTOLOGY SOURCE REFERENCE", SectionField::OntologyRefs),
    ("INVESTIGATION", SectionField::Metadata),
    ("INVESTIGATION PUBLICATIONS", SectionField::Publications),
    ("INVESTIGATION CONTACTS", SectionField::Contacts),
    ("STUDY DESIGN DESCRIPTORS", SectionField::DesignDescriptors),
    ("STUDY PUBLICATIONS", SectionField::Publications),
    ("STUDY FACTORS", SectionField::Factors),
    ("STUDY ASSAYS", SectionField::Assays),
    ("STUDY PROTOCOLS", SectionField::Protocols),
    ("STUDY CONTACTS", SectionField::Contacts),
];

/// Look up the record field of a section label
pub fn section_field(label: &str) -> Option<SectionField> {
    SECTION_FIELDS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, field)| *field)
}

/// A record that section bodies can be assigned to
trait SectionTarget {
    fn assign(&mut self, label: &str, field: SectionField, entries: Vec<Metadata>);
}

impl SectionTarget for InvestigationRecord {
    fn assign(&mut self, label: &str, field: SectionField, entries: Vec<Metadata>) {
        match field {
            SectionField::Metadata => self.metadata = first_entry(entries),
            SectionField::OntologyRefs => self.ontology_refs = entries,
            SectionField::Publications => self.publications = entries,
            SectionField::Contacts => self.contacts = entries,
            _ => warn!("Ignoring study-level section {} outside of a study", label),
        }
    }
}

impl SectionTarget for StudyRecord {
    fn assign(&mut self, label: &str, field: SectionField, entries: Vec<Metadata>) {
        match field {
            SectionField::Metadata => self.metadata = first_entry(entries),
            SectionField::Publications => self.publications = entries,
            SectionField::Contacts => self.contacts = entries,
            SectionField::DesignDescriptors => self.design_descriptors = entries,
            SectionField::Factors => self.factors = entries,
            SectionField::Protocols => self.protocols = entries,
            SectionField::Assays => {
                self.assays = entries.into_iter().map(AssayRecord::new).collect();
            }
            SectionField::OntologyRefs => {
                warn!("Ignoring investigation-level section {} inside a study", label)
            }
        }
    }
}

fn first_entry(entries: Vec<Metadata>) -> Metadata {
    entries.into_iter().next().unwrap_or_default()
}

/// One meaningful line of the investigation file
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    /// An upper-case label alone on its line
    Section(String),
    /// `key<TAB>value...`
    Entry(Vec<String>),
}

impl Line {
    /// Classify a row of cells; rows with an empty first cell carry nothing.
    fn from_cells(cells: Vec<String>) -> Option<Self> {
        let first = cells.first()?;
        if first.is_empty() {
            return None;
        }
        let rest_empty = cells[1..].iter().all(|c| c.is_empty());
        if rest_empty && first.to_uppercase() == *first {
            Some(Line::Section(first.clone()))
        } else {
            Some(Line::Entry(cells))
        }
    }
}

/// Section body: one metadata map per value column, plus the label that ended it
struct SectionBody {
    entries: Option<Vec<Metadata>>,
    next_section: Option<String>,
}

/// Parser for investigation files
#[derive(Debug, Clone, Default)]
pub struct InvestigationParser;

impl InvestigationParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse an investigation file from disk
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<InvestigationRecord, InvestigationError> {
        let file = File::open(path.as_ref())?;
        self.parse_reader(BufReader::new(file))
    }

    /// Parse investigation content from any reader
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<InvestigationRecord, InvestigationError> {
        let lines = read_lines(reader)?;
        let mut lines = lines.into_iter();

        let mut record = InvestigationRecord::new();
        parse_region(&mut record, &mut lines);

        loop {
            let mut study = StudyRecord::default();
            if !parse_region(&mut study, &mut lines) {
                break;
            }
            record.studies.push(study);
        }

        // MAGE-TAB IDF files point at a single SDRF instead of declaring studies
        if let Some(sdrf) = record.metadata.get(SDRF_FILE) {
            debug!("Adding study for SDRF file {}", sdrf);
            record.studies.push(StudyRecord::with_file_name(sdrf.clone()));
        }

        debug!("Parsed investigation with {} studies", record.studies.len());
        Ok(record)
    }
}

fn read_lines<R: Read>(reader: R) -> Result<Vec<Line>, InvestigationError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut lines = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let cells = record.iter().map(str::to_string).collect();
        if let Some(line) = Line::from_cells(cells) {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Read entry lines up to the next section label.
///
/// The first entry line fixes the number of value columns (trailing empty
/// cells trimmed); shorter lines are padded with empty values.
fn read_body<I: Iterator<Item = Line>>(lines: &mut I) -> SectionBody {
    let mut entries: Option<Vec<Metadata>> = None;

    for line in lines.by_ref() {
        let mut cells = match line {
            Line::Section(label) => {
                return SectionBody {
                    entries,
                    next_section: Some(label),
                }
            }
            Line::Entry(cells) => cells,
        };

        let entries = entries.get_or_insert_with(|| {
            while cells.len() > 1 && cells.last().is_some_and(|c| c.is_empty()) {
                cells.pop();
            }
            vec![Metadata::new(); cells.len() - 1]
        });

        let key = &cells[0];
        for (i, entry) in entries.iter_mut().enumerate() {
            let value = cells.get(i + 1).map(|v| v.trim()).unwrap_or("");
            entry.insert(key.clone(), value.to_string());
        }
    }

    SectionBody {
        entries,
        next_section: None,
    }
}

/// Parse a record's own body and the sections that follow it, stopping at
/// the next `STUDY` label or the end of input.
///
/// Returns whether any section followed the body.
fn parse_region<T, I>(target: &mut T, lines: &mut I) -> bool
where
    T: SectionTarget,
    I: Iterator<Item = Line>,
{
    let body = read_body(lines);
    if let Some(first) = body.entries.and_then(|e| e.into_iter().next()) {
        target.assign("", SectionField::Metadata, vec![first]);
    }

    let mut had_info = false;
    let mut section = body.next_section;
    loop {
        let label = match section {
            Some(label) if label != STUDY_SECTION => label,
            _ => break,
        };
        had_info = true;

        let body = read_body(lines);
        match section_field(&label) {
            Some(field) => target.assign(&label, field, body.entries.unwrap_or_default()),
            None => warn!("Skipping unknown investigation section {}", label),
        }
        section = body.next_section;
    }
    had_info
}
