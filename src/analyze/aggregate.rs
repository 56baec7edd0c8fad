//! Record aggregation and course ranking.

use std::collections::HashMap;

use log::debug;

use crate::model::{
    Analysis, CourseScores, LongRecord, RankedCourse, Record, SourceType, SurveyTable,
};

use super::options::AnalyzeOptions;
use super::score::{
    clean_numeric, course_name, normalize_core_rank, normalize_elective_rating,
};

/// `Finished` values that mark a response as complete.
const FINISHED_VALUES: [&str; 4] = ["1", "true", "TRUE", "True"];

fn is_finished(record: &Record, options: &AnalyzeOptions) -> bool {
    let value = record.get(&options.finished_column).trim();
    FINISHED_VALUES.contains(&value)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Analyze a survey table: reshape to long format and rank courses.
///
/// Incomplete responses are skipped whole; malformed or out-of-range field
/// values are discarded per-field without comment. Courses that end up with
/// no contributing scores do not appear in the ranking.
pub fn analyze(table: &SurveyTable, options: &AnalyzeOptions) -> Analysis {
    let core_fields = table.columns_with_prefix(&options.core_prefix);

    let mut long_records = Vec::new();
    // Accumulators keyed by course name; ordering is imposed by the final
    // sort, not by map iteration.
    let mut courses: HashMap<String, CourseScores> = HashMap::new();

    for record in &table.records {
        if !is_finished(record, options) {
            continue;
        }
        let response_id = record.get(&options.response_id_column).to_string();

        for field in &core_fields {
            let Some(rank) = clean_numeric(record.get(field)) else {
                continue;
            };
            let Some(score) = normalize_core_rank(rank) else {
                continue;
            };
            let course = course_name(table.question(field));
            courses
                .entry(course.clone())
                .or_default()
                .push(SourceType::CoreRank, score);
            long_records.push(LongRecord {
                response_id: response_id.clone(),
                course,
                source_type: SourceType::CoreRank,
                response_value: rank.to_string(),
                normalized_score: score,
            });
        }

        for field in &options.elective_fields {
            let Some(rating) = clean_numeric(record.get(field)) else {
                continue;
            };
            let Some(score) = normalize_elective_rating(rating) else {
                continue;
            };
            let course = course_name(table.question(field));
            courses
                .entry(course.clone())
                .or_default()
                .push(SourceType::ElectiveRating, score);
            long_records.push(LongRecord {
                response_id: response_id.clone(),
                course,
                source_type: SourceType::ElectiveRating,
                response_value: rating.to_string(),
                normalized_score: score,
            });
        }
    }

    debug!(
        "accumulated {} scores across {} courses",
        long_records.len(),
        courses.len()
    );

    let ranking = rank_courses(courses);

    Analysis {
        long_records,
        ranking,
    }
}

/// Finalize accumulators into a ranked course list.
///
/// Order: overall score descending, response count descending, course name
/// ascending. The three keys make the order total for distinct names, so the
/// output is deterministic regardless of accumulator map iteration order.
fn rank_courses(courses: HashMap<String, CourseScores>) -> Vec<RankedCourse> {
    let mut ranking: Vec<RankedCourse> = courses
        .into_iter()
        .filter(|(_, scores)| scores.total() > 0)
        .map(|(course, scores)| {
            let all: Vec<f64> = scores
                .core
                .iter()
                .chain(scores.elective.iter())
                .copied()
                .collect();
            RankedCourse {
                rank: 0,
                course,
                overall_score: mean(&all),
                num_responses: all.len(),
                core_pref_score: (!scores.core.is_empty()).then(|| mean(&scores.core)),
                core_n: scores.core.len(),
                elective_rating_score: (!scores.elective.is_empty())
                    .then(|| mean(&scores.elective)),
                elective_n: scores.elective.len(),
            }
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.overall_score
            .total_cmp(&a.overall_score)
            .then_with(|| b.num_responses.cmp(&a.num_responses))
            .then_with(|| a.course.cmp(&b.course))
    });

    for (idx, row) in ranking.iter_mut().enumerate() {
        row.rank = idx + 1;
    }

    ranking
}
