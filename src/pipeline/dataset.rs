//! Categorical dataset model
//!
//! The core operates on an immutable, column-major table of categorical
//! string values. The loader builds a [`Dataset`] once; every metric and
//! search afterwards only borrows it read-only.

use thiserror::Error;

/// Errors raised by the selection core.
///
/// Degenerate denominators in symmetric uncertainty and merit are *not*
/// errors - they resolve to a defined score of 0.0 at the call site.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// A metric was asked to estimate probabilities over zero records.
    #[error("dataset contains no records")]
    EmptyDataset,

    /// An empty candidate subset was passed to the merit evaluator.
    #[error("candidate feature subset is empty")]
    EmptySubset,

    /// An attribute name was referenced that the schema does not define.
    #[error("attribute '{0}' is not part of the schema")]
    UnknownAttribute(String),

    /// The same attribute name appears twice in the schema.
    #[error("duplicate attribute '{0}' in schema")]
    DuplicateAttribute(String),

    /// A record does not cover every schema attribute.
    #[error("record {row} has {found} values but the schema defines {expected} attributes")]
    RaggedRecord {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Pre-assembled columns disagree on length.
    #[error("column {column} has {found} values but the dataset has {expected} records")]
    ColumnLengthMismatch {
        column: usize,
        expected: usize,
        found: usize,
    },

    /// The number of pre-assembled columns does not match the schema.
    #[error("{found} columns supplied but the schema defines {expected} attributes")]
    SchemaWidthMismatch { expected: usize, found: usize },
}

/// An immutable table of categorical records.
///
/// Values are stored column-major: one `Vec<String>` per attribute, all of
/// equal length. A record is the i-th value of every column. Missing values
/// are represented by whatever token the loader chose (`"?"`) and are treated
/// as an ordinary category.
#[derive(Debug, Clone)]
pub struct Dataset {
    attributes: Vec<String>,
    columns: Vec<Vec<String>>,
    rows: usize,
}

impl Dataset {
    /// Build a dataset from row-major records.
    ///
    /// Every record must supply exactly one value per schema attribute;
    /// attribute names must be distinct.
    pub fn from_rows(
        attributes: Vec<String>,
        records: Vec<Vec<String>>,
    ) -> Result<Self, SelectionError> {
        check_distinct(&attributes)?;

        let expected = attributes.len();
        let mut columns: Vec<Vec<String>> = vec![Vec::with_capacity(records.len()); expected];

        for (row, record) in records.into_iter().enumerate() {
            if record.len() != expected {
                return Err(SelectionError::RaggedRecord {
                    row,
                    expected,
                    found: record.len(),
                });
            }
            for (column, value) in columns.iter_mut().zip(record) {
                column.push(value);
            }
        }

        let rows = columns.first().map_or(0, Vec::len);
        Ok(Self {
            attributes,
            columns,
            rows,
        })
    }

    /// Build a dataset from pre-assembled columns.
    pub fn from_columns(
        attributes: Vec<String>,
        columns: Vec<Vec<String>>,
    ) -> Result<Self, SelectionError> {
        check_distinct(&attributes)?;

        if attributes.len() != columns.len() {
            return Err(SelectionError::SchemaWidthMismatch {
                expected: attributes.len(),
                found: columns.len(),
            });
        }

        let rows = columns.first().map_or(0, Vec::len);
        for (idx, column) in columns.iter().enumerate() {
            if column.len() != rows {
                return Err(SelectionError::ColumnLengthMismatch {
                    column: idx,
                    expected: rows,
                    found: column.len(),
                });
            }
        }

        Ok(Self {
            attributes,
            columns,
            rows,
        })
    }

    /// Attribute names in schema order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// All values of one attribute, in record order.
    pub fn column(&self, attribute: &str) -> Result<&[String], SelectionError> {
        self.attributes
            .iter()
            .position(|a| a == attribute)
            .map(|idx| self.columns[idx].as_slice())
            .ok_or_else(|| SelectionError::UnknownAttribute(attribute.to_string()))
    }

    /// Schema attributes minus the target, in schema order.
    ///
    /// The returned list is the candidate feature pool for the searches.
    pub fn feature_names(&self, target: &str) -> Result<Vec<String>, SelectionError> {
        if !self.attributes.iter().any(|a| a == target) {
            return Err(SelectionError::UnknownAttribute(target.to_string()));
        }
        Ok(self
            .attributes
            .iter()
            .filter(|a| a.as_str() != target)
            .cloned()
            .collect())
    }
}

fn check_distinct(attributes: &[String]) -> Result<(), SelectionError> {
    for (idx, name) in attributes.iter().enumerate() {
        if attributes[..idx].contains(name) {
            return Err(SelectionError::DuplicateAttribute(name.clone()));
        }
    }
    Ok(())
}
