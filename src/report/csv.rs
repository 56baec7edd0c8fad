//! CSV report rendering.

use crate::error::{Error, Result};
use crate::model::{LongRecord, RankedCourse};

fn into_csv_string(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Csv(e.to_string()))
}

/// Render the long-format response table.
///
/// One row per accepted (respondent, question) response, scores with six
/// decimal places.
pub fn long_csv(records: &[LongRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "response_id",
        "course",
        "source_type",
        "response_value",
        "normalized_score",
    ])?;

    for record in records {
        let score = format!("{:.6}", record.normalized_score);
        writer.write_record([
            record.response_id.as_str(),
            record.course.as_str(),
            record.source_type.as_str(),
            record.response_value.as_str(),
            score.as_str(),
        ])?;
    }

    into_csv_string(writer)
}

fn optional_mean(value: Option<f64>) -> String {
    value.map(|v| format!("{:.6}", v)).unwrap_or_default()
}

/// Render the ranked-course table.
pub fn ranking_csv(ranking: &[RankedCourse]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "rank",
        "course",
        "overall_score",
        "num_responses",
        "core_pref_score",
        "core_n",
        "elective_rating_score",
        "elective_n",
    ])?;

    for row in ranking {
        writer.write_record([
            row.rank.to_string(),
            row.course.clone(),
            format!("{:.6}", row.overall_score),
            row.num_responses.to_string(),
            optional_mean(row.core_pref_score),
            row.core_n.to_string(),
            optional_mean(row.elective_rating_score),
            row.elective_n.to_string(),
        ])?;
    }

    into_csv_string(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceType;

    fn ranked(course: &str) -> RankedCourse {
        RankedCourse {
            rank: 1,
            course: course.to_string(),
            overall_score: 62.5,
            num_responses: 4,
            core_pref_score: Some(75.0),
            core_n: 2,
            elective_rating_score: None,
            elective_n: 0,
        }
    }

    #[test]
    fn test_long_csv_header_and_formatting() {
        let records = vec![LongRecord {
            response_id: "R_1".to_string(),
            course: "Tax Law".to_string(),
            source_type: SourceType::CoreRank,
            response_value: "2".to_string(),
            normalized_score: 87.5,
        }];

        let csv = long_csv(&records).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("response_id,course,source_type,response_value,normalized_score")
        );
        assert_eq!(lines.next(), Some("R_1,Tax Law,core_rank,2,87.500000"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_ranking_csv_empty_means() {
        let csv = ranking_csv(&[ranked("Audit")]).unwrap();
        let data_line = csv.lines().nth(1).unwrap();
        assert_eq!(data_line, "1,Audit,62.500000,4,75.000000,2,,0");
    }

    #[test]
    fn test_course_names_with_commas_quoted() {
        let csv = ranking_csv(&[ranked("Mergers, Acquisitions")]).unwrap();
        assert!(csv.contains("\"Mergers, Acquisitions\""));
    }
}
