//! Parsed worksheet and survey table structures.

use std::collections::{BTreeMap, HashMap};

/// One worksheet row as parsed: a sparse, index-ordered mapping from
/// zero-based column index to trimmed cell value.
///
/// Rows are collected into a `Vec` by the worksheet parser; the position in
/// that sequence is the row index the metadata convention operates on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: BTreeMap<usize, String>,
}

impl RawRow {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value at a column index.
    pub fn insert(&mut self, col: usize, value: String) {
        self.cells.insert(col, value);
    }

    /// Get the value at a column index, if the cell was present.
    pub fn get(&self, col: usize) -> Option<&str> {
        self.cells.get(&col).map(String::as_str)
    }

    /// Highest column index present in this row, or `None` when empty.
    pub fn max_col(&self) -> Option<usize> {
        self.cells.keys().next_back().copied()
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no populated cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over `(column index, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.cells.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// One data row with every declared column present.
///
/// Columns absent from the underlying [`RawRow`] hold the empty string.
#[derive(Debug, Clone, Default)]
pub struct Record {
    values: HashMap<String, String>,
}

impl Record {
    /// Build a record from a raw row and the ordered column names.
    pub fn from_raw(raw: &RawRow, columns: &[String]) -> Self {
        let values = columns
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let value = raw.get(idx).unwrap_or("").to_string();
                (name.clone(), value)
            })
            .collect();
        Self { values }
    }

    /// Get a column's value; the empty string when the column is unknown.
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the record holds no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Fully assembled survey table: ordered column schema, per-column question
/// text, and the data records.
#[derive(Debug, Clone, Default)]
pub struct SurveyTable {
    /// Column names, in worksheet order. Every index in range has a name;
    /// headers missing from row 0 get a synthetic `COL_{index}` name.
    pub columns: Vec<String>,

    /// Question text per column name, from row 1.
    pub questions: HashMap<String, String>,

    /// Data records (worksheet rows 3 onward).
    pub records: Vec<Record>,
}

impl SurveyTable {
    /// Question text for a column; the empty string when unset.
    pub fn question(&self, column: &str) -> &str {
        self.questions.get(column).map(String::as_str).unwrap_or("")
    }

    /// Columns (in schema order) whose name starts with the given prefix.
    pub fn columns_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }
}
