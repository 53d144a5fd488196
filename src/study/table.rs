use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use csv::StringRecord;

use super::StudyError;
use crate::header::{ClassifiedHeader, HeaderClassifier};

/// One data row of a study or assay file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row(StringRecord);

impl Row {
    /// Cell at `column`; cells past the end of a short row are empty
    pub fn cell(&self, column: usize) -> &str {
        self.0.get(column).unwrap_or("")
    }

    /// Number of cells actually present
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no cells
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> From<&[S]> for Row {
    fn from(cells: &[S]) -> Self {
        Row(cells.iter().map(|c| c.as_ref()).collect())
    }
}

/// Header cells up to the last non-blank one
fn trim_blank_tail<S: AsRef<str>>(raw: &[S]) -> &[S] {
    let width = raw
        .iter()
        .rposition(|h| !h.as_ref().trim().is_empty())
        .map_or(0, |last| last + 1);
    &raw[..width]
}

/// A study or assay file read in full: classified header plus data rows
#[derive(Debug, Clone, Default)]
pub struct RowTable {
    header: ClassifiedHeader,
    rows: Vec<Row>,
}

impl RowTable {
    /// Read and classify a file from disk.
    ///
    /// Returns `Ok(None)` if the file does not exist. Failures to open or read
    /// an existing path are reported as [`StudyError::IoError`] with the path.
    pub fn open(path: &Path, classifier: &HeaderClassifier) -> Result<Option<Self>, StudyError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StudyError::IoError {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_reader(BufReader::new(file), classifier)
            .map(Some)
            .map_err(|e| match e {
                StudyError::CsvError(csv_err) if csv_err.is_io_error() => StudyError::IoError {
                    path: path.to_path_buf(),
                    source: io::Error::from(csv_err),
                },
                other => other,
            })
    }

    /// Read and classify tab-separated content from any reader
    pub fn from_reader<R: Read>(reader: R, classifier: &HeaderClassifier) -> Result<Self, StudyError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let raw: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        let header = classifier.classify(trim_blank_tail(&raw));

        let rows = csv_reader
            .into_records()
            .map(|record| record.map(Row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { header, rows })
    }

    /// Build a table from an already split header and rows
    pub fn from_cells<S: AsRef<str>>(raw_header: &[S], rows: &[Vec<S>], classifier: &HeaderClassifier) -> Self {
        Self {
            header: classifier.classify(trim_blank_tail(raw_header)),
            rows: rows.iter().map(|r| Row::from(r.as_slice())).collect(),
        }
    }

    /// Classified header
    pub fn header(&self) -> &ClassifiedHeader {
        &self.header
    }

    /// Data rows in file order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}
