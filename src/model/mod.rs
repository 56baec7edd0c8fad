//! Data model for parsed survey workbooks and their analysis.
//!
//! The extraction layer produces [`RawRow`]s and assembles them into a
//! [`SurveyTable`]; the analysis layer consumes records and produces the
//! long-format dataset and the course ranking.

mod ranking;
mod table;

pub use ranking::*;
pub use table::*;
