//! # courserank
//!
//! Survey spreadsheet extraction and course ranking.
//!
//! This library ingests a single XLSX export of a course survey, reshapes
//! the wide-format responses into a normalized long-format dataset, computes
//! a per-course 0-100 ranking score, and renders tabular and visual reports.
//! The spreadsheet reader is built from first principles on `zip` and
//! `quick-xml` for the small SpreadsheetML subset a survey export uses:
//! one worksheet, optional shared strings, plain values.
//!
//! ## Quick Start
//!
//! ```no_run
//! use courserank::{analyze_file, report};
//!
//! // Parse, score, and rank in one call
//! let analysis = analyze_file("survey.xlsx")?;
//! for row in &analysis.ranking {
//!     println!("#{} {} ({:.1})", row.rank, row.course, row.overall_score);
//! }
//!
//! // Write the full report set
//! report::write_reports(
//!     &analysis,
//!     "outputs",
//!     &report::ReportOptions::default(),
//!     &courserank::AnalyzeOptions::default(),
//! )?;
//! # Ok::<(), courserank::Error>(())
//! ```
//!
//! ## Layered APIs
//!
//! ```no_run
//! use courserank::analyze::{analyze, AnalyzeOptions};
//! use courserank::xlsx::XlsxParser;
//!
//! // Extraction only
//! let table = XlsxParser::open("survey.xlsx")?.parse()?;
//! println!("{} columns, {} records", table.columns.len(), table.records.len());
//!
//! // Custom survey layout
//! let options = AnalyzeOptions::new().with_core_prefix("Q10_");
//! let analysis = analyze(&table, &options);
//! # Ok::<(), courserank::Error>(())
//! ```

pub mod analyze;
pub mod container;
pub mod error;
pub mod model;
pub mod report;
pub mod xlsx;

// Re-exports
pub use analyze::AnalyzeOptions;
pub use container::XlsxContainer;
pub use error::{Error, Result};
pub use model::{
    Analysis, CourseScores, LongRecord, RankedCourse, RawRow, Record, SourceType, SurveyTable,
};
pub use xlsx::XlsxParser;

use std::path::Path;

/// Parse a survey workbook into its assembled table.
///
/// # Example
///
/// ```no_run
/// use courserank::parse_file;
///
/// let table = parse_file("survey.xlsx")?;
/// println!("{} records", table.records.len());
/// # Ok::<(), courserank::Error>(())
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<SurveyTable> {
    XlsxParser::open(path)?.parse()
}

/// Parse a survey workbook from bytes.
pub fn parse_bytes(data: Vec<u8>) -> Result<SurveyTable> {
    XlsxParser::from_bytes(data)?.parse()
}

/// Parse and analyze a survey workbook with the default survey layout.
pub fn analyze_file(path: impl AsRef<Path>) -> Result<Analysis> {
    analyze_file_with_options(path, &AnalyzeOptions::default())
}

/// Parse and analyze a survey workbook with a custom survey layout.
pub fn analyze_file_with_options(
    path: impl AsRef<Path>,
    options: &AnalyzeOptions,
) -> Result<Analysis> {
    let table = parse_file(path)?;
    Ok(analyze::analyze(&table, options))
}
