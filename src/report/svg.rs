//! SVG bar-chart rendering.

use std::fmt::Write;

use crate::model::RankedCourse;

/// Total image width in pixels.
const WIDTH: usize = 1100;

/// Vertical space per course row.
const ROW_HEIGHT: usize = 42;

/// Left edge of the bar track.
const MARGIN: usize = 170;

/// Vertical offset of the first row.
const FIRST_ROW_Y: usize = 62;

/// Width of the bar track; the remainder holds the score annotation.
const BAR_TRACK: usize = WIDTH - MARGIN - 220;

/// Escape text for use in SVG content.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Bar length for an overall score, proportional to `score / 100` of the
/// track and clamped to `[0, track]`.
fn bar_width(score: f64) -> usize {
    let width = (BAR_TRACK as f64 * (score / 100.0)) as i64;
    width.clamp(0, BAR_TRACK as i64) as usize
}

/// Render the ranking as a horizontal bar chart.
pub fn render_chart(ranking: &[RankedCourse], title: &str) -> String {
    let height = 90 + ROW_HEIGHT * ranking.len();

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        WIDTH, height, WIDTH, height
    );
    svg.push_str(
        "<style>text { font-family: Arial, sans-serif; fill: #1f2937; } \
         .title { font-size: 20px; font-weight: 700; } \
         .label { font-size: 13px; } \
         .score { font-size: 12px; }</style>\n",
    );
    svg.push_str("<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");
    let _ = writeln!(svg, r#"<text x="24" y="34" class="title">{}</text>"#, escape(title));

    for (i, row) in ranking.iter().enumerate() {
        let y = FIRST_ROW_Y + i * ROW_HEIGHT;
        let bar = bar_width(row.overall_score);
        let label = escape(&row.course);

        let _ = writeln!(
            svg,
            r#"<text x="24" y="{}" class="label">#{}</text>"#,
            y + 19,
            row.rank
        );
        let _ = writeln!(
            svg,
            r#"<text x="56" y="{}" class="label">{}</text>"#,
            y + 19,
            label
        );
        let _ = writeln!(
            svg,
            r##"<rect x="{}" y="{}" width="{}" height="20" fill="#e5e7eb" rx="3"/>"##,
            MARGIN, y, BAR_TRACK
        );
        let _ = writeln!(
            svg,
            r##"<rect x="{}" y="{}" width="{}" height="20" fill="#2563eb" rx="3"/>"##,
            MARGIN, y, bar
        );
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{}" class="score">{:.1} (n={})</text>"#,
            MARGIN + BAR_TRACK + 10,
            y + 15,
            row.overall_score,
            row.num_responses
        );
    }

    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(course: &str, score: f64) -> RankedCourse {
        RankedCourse {
            rank: 1,
            course: course.to_string(),
            overall_score: score,
            num_responses: 3,
            core_pref_score: Some(score),
            core_n: 3,
            elective_rating_score: None,
            elective_n: 0,
        }
    }

    #[test]
    fn test_bar_width_proportional_and_clamped() {
        assert_eq!(bar_width(100.0), BAR_TRACK);
        assert_eq!(bar_width(0.0), 0);
        assert_eq!(bar_width(50.0), BAR_TRACK / 2);
        assert_eq!(bar_width(150.0), BAR_TRACK);
        assert_eq!(bar_width(-10.0), 0);
    }

    #[test]
    fn test_chart_dimensions_scale_with_rows() {
        let rows = vec![ranked("A", 80.0), ranked("B", 60.0)];
        let svg = render_chart(&rows, "Title");
        assert!(svg.contains(r#"height="174""#));
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_labels_escaped() {
        let rows = vec![ranked("M&A <Advanced>", 70.0)];
        let svg = render_chart(&rows, "Q&A");
        assert!(svg.contains("M&amp;A &lt;Advanced&gt;"));
        assert!(svg.contains("Q&amp;A"));
        assert!(!svg.contains("<Advanced>"));
    }
}
