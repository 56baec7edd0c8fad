//! Survey response normalization and course ranking.
//!
//! Takes the assembled [`SurveyTable`](crate::model::SurveyTable), rescales
//! raw ranks/ratings to 0-100 scores, reshapes responses into a long-format
//! dataset, and produces a deterministic course ranking.
//!
//! # Example
//!
//! ```no_run
//! use courserank::analyze::{analyze, AnalyzeOptions};
//! use courserank::xlsx::XlsxParser;
//!
//! let table = XlsxParser::open("survey.xlsx")?.parse()?;
//! let analysis = analyze(&table, &AnalyzeOptions::default());
//!
//! for row in &analysis.ranking {
//!     println!("#{} {} ({:.1})", row.rank, row.course, row.overall_score);
//! }
//! # Ok::<(), courserank::Error>(())
//! ```

mod aggregate;
mod options;
mod score;

pub use aggregate::analyze;
pub use options::AnalyzeOptions;
pub use score::{
    clean_numeric, course_name, normalize_core_rank, normalize_elective_rating, UNKNOWN_COURSE,
};
