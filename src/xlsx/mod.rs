//! XLSX survey extraction.
//!
//! A minimal, first-principles reader for the SpreadsheetML subset a survey
//! export actually uses: one worksheet, optional shared strings, plain
//! values. No formulas, merged cells, styles, or number formats.
//!
//! # Example
//!
//! ```no_run
//! use courserank::xlsx::XlsxParser;
//!
//! let parser = XlsxParser::open("survey.xlsx")?;
//! let table = parser.parse()?;
//!
//! println!("{} columns, {} records", table.columns.len(), table.records.len());
//! # Ok::<(), courserank::Error>(())
//! ```

mod cellref;
mod shared_strings;
mod table;
mod worksheet;

mod parser;

pub use cellref::{column_index, split_cell_ref};
pub use parser::XlsxParser;
pub use shared_strings::SharedStrings;
pub use table::assemble;
pub use worksheet::parse_worksheet;
