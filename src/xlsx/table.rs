//! Table assembly from parsed worksheet rows.
//!
//! The survey export follows a fixed metadata convention: row 0 holds the
//! column names, row 1 the question text, row 2 is a blank separator, and
//! data starts at row 3. Anything shorter cannot be a valid export.

use crate::error::{Error, Result};
use crate::model::{RawRow, Record, SurveyTable};

/// Worksheet rows required before any data can exist.
const METADATA_ROWS: usize = 3;

/// Synthetic name for a column whose header cell is missing.
fn synthetic_name(index: usize) -> String {
    format!("COL_{}", index)
}

/// Assemble parsed rows into a [`SurveyTable`].
pub fn assemble(rows: &[RawRow]) -> Result<SurveyTable> {
    if rows.len() < METADATA_ROWS + 1 {
        return Err(Error::Layout(format!(
            "expected two header rows, a separator, and data; got {} rows",
            rows.len()
        )));
    }

    let max_col = rows
        .iter()
        .map(|row| row.max_col().unwrap_or(0))
        .max()
        .unwrap_or(0);

    let header_row = &rows[0];
    let question_row = &rows[1];

    let mut columns = Vec::with_capacity(max_col + 1);
    let mut questions = std::collections::HashMap::with_capacity(max_col + 1);
    for idx in 0..=max_col {
        let name = header_row
            .get(idx)
            .map(str::to_string)
            .unwrap_or_else(|| synthetic_name(idx));
        let question = question_row.get(idx).unwrap_or("").to_string();
        questions.insert(name.clone(), question);
        columns.push(name);
    }

    // Row 2 is the separator; it never contributes a record.
    let records = rows[METADATA_ROWS..]
        .iter()
        .map(|raw| Record::from_raw(raw, &columns))
        .collect();

    Ok(SurveyTable {
        columns,
        questions,
        records,
    })
}
