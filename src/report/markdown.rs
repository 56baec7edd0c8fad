//! Markdown summary rendering.

use std::fmt::Write;

use crate::analyze::AnalyzeOptions;
use crate::model::RankedCourse;

use super::options::ReportOptions;
use super::LONG_CSV_NAME;

/// Render the narrative summary: method notes plus a top-N table.
pub fn render_summary(
    ranking: &[RankedCourse],
    report: &ReportOptions,
    analyze: &AnalyzeOptions,
) -> String {
    let elective_example = analyze
        .elective_fields
        .first()
        .map(String::as_str)
        .unwrap_or("elective");

    let mut md = String::new();
    let _ = writeln!(md, "# {}\n", report.summary_title());
    md.push_str("## Method\n");
    let _ = writeln!(
        md,
        "- Included only completed responses (`{} = 1`).",
        analyze.finished_column
    );
    let _ = writeln!(
        md,
        "- Reshaped wide survey columns to long format in `{}`.",
        LONG_CSV_NAME
    );
    md.push_str("- Normalized scores to a 0-100 scale for comparability:\n");
    let _ = writeln!(
        md,
        "  - Core ranked courses (`{}*`): `((9 - rank) / 8) * 100` (rank 1 is best).",
        analyze.core_prefix
    );
    let _ = writeln!(
        md,
        "  - Elective ratings (`{}` etc.): `((rating - 1) / 4) * 100` (rating 5 is best).",
        elective_example
    );
    md.push_str("- Overall course score is the mean of all normalized scores for that course.\n\n");

    let _ = writeln!(md, "## Top {} Courses\n", report.top_n);
    md.push_str("| Rank | Course | Overall Score | N |\n");
    md.push_str("|---:|---|---:|---:|\n");
    for row in ranking.iter().take(report.top_n) {
        let _ = writeln!(
            md,
            "| {} | {} | {:.2} | {} |",
            row.rank,
            row.course.replace('|', "\\|"),
            row.overall_score,
            row.num_responses
        );
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(rank: usize, course: &str, score: f64) -> RankedCourse {
        RankedCourse {
            rank,
            course: course.to_string(),
            overall_score: score,
            num_responses: rank * 2,
            core_pref_score: None,
            core_n: 0,
            elective_rating_score: Some(score),
            elective_n: rank * 2,
        }
    }

    #[test]
    fn test_summary_structure() {
        let ranking: Vec<RankedCourse> = (1..=7)
            .map(|i| ranked(i, &format!("Course {}", i), 90.0 - i as f64))
            .collect();
        let md = render_summary(&ranking, &ReportOptions::default(), &AnalyzeOptions::default());

        assert!(md.starts_with("# MAcc Exit Survey 2024 Course Ranking\n"));
        assert!(md.contains("`Finished = 1`"));
        assert!(md.contains("`Q35_*`"));
        assert!(md.contains("`Q76_1` etc."));
        assert!(md.contains("## Top 5 Courses"));

        // Only the first five make the table.
        assert!(md.contains("| 5 | Course 5 | 85.00 | 10 |"));
        assert!(!md.contains("Course 6"));
    }

    #[test]
    fn test_summary_uses_configured_fields() {
        let analyze = AnalyzeOptions::new()
            .with_finished_column("Complete")
            .with_core_prefix("R1_")
            .with_elective_fields(["E9"]);
        let md = render_summary(&[], &ReportOptions::default(), &analyze);

        assert!(md.contains("`Complete = 1`"));
        assert!(md.contains("`R1_*`"));
        assert!(md.contains("`E9` etc."));
    }
}
