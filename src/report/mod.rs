//! Report emission.
//!
//! Renders the analysis into its four fixed-name artifacts — long-format
//! CSV, ranking CSV, SVG bar chart, Markdown summary — and writes them into
//! an output directory, creating it if absent. All content is rendered
//! before the first file is touched, so a rendering failure produces no
//! partial report set.
//!
//! # Example
//!
//! ```no_run
//! use courserank::analyze::{analyze, AnalyzeOptions};
//! use courserank::report::{write_reports, ReportOptions};
//! use courserank::xlsx::XlsxParser;
//!
//! let table = XlsxParser::open("survey.xlsx")?.parse()?;
//! let analysis = analyze(&table, &AnalyzeOptions::default());
//! let written = write_reports(&analysis, "outputs", &ReportOptions::default(), &AnalyzeOptions::default())?;
//! println!("wrote {} artifacts", written.len());
//! # Ok::<(), courserank::Error>(())
//! ```

mod csv;
mod json;
mod markdown;
mod options;
mod svg;

pub use self::csv::{long_csv, ranking_csv};
pub use json::{to_json, JsonFormat};
pub use markdown::render_summary;
pub use options::ReportOptions;
pub use svg::render_chart;

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::analyze::AnalyzeOptions;
use crate::error::Result;
use crate::model::Analysis;

/// Long-format response table artifact.
pub const LONG_CSV_NAME: &str = "cleaned_responses_long.csv";

/// Ranked-course table artifact.
pub const RANKING_CSV_NAME: &str = "course_ranking.csv";

/// Bar-chart artifact.
pub const CHART_SVG_NAME: &str = "course_ranking.svg";

/// Narrative summary artifact.
pub const SUMMARY_MD_NAME: &str = "summary.md";

/// Render and write the full report set into `output_dir`.
///
/// Returns the written paths in emission order.
pub fn write_reports(
    analysis: &Analysis,
    output_dir: impl AsRef<Path>,
    report: &ReportOptions,
    analyze: &AnalyzeOptions,
) -> Result<Vec<PathBuf>> {
    let output_dir = output_dir.as_ref();

    let artifacts = [
        (LONG_CSV_NAME, long_csv(&analysis.long_records)?),
        (RANKING_CSV_NAME, ranking_csv(&analysis.ranking)?),
        (CHART_SVG_NAME, render_chart(&analysis.ranking, &report.chart_title())),
        (SUMMARY_MD_NAME, render_summary(&analysis.ranking, report, analyze)),
    ];

    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(artifacts.len());
    for (name, content) in artifacts {
        let path = output_dir.join(name);
        fs::write(&path, content)?;
        debug!("wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
