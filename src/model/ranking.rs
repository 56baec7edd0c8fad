//! Scoring and ranking structures.

use serde::Serialize;

/// Which kind of survey question a normalized score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// A 1-8 ranking question (1 = most preferred).
    CoreRank,
    /// A 1-5 rating question (5 = best).
    ElectiveRating,
}

impl SourceType {
    /// Stable identifier used in the long-format export.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::CoreRank => "core_rank",
            SourceType::ElectiveRating => "elective_rating",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized response in the long-format dataset.
#[derive(Debug, Clone, Serialize)]
pub struct LongRecord {
    /// Respondent identifier.
    pub response_id: String,
    /// Derived course name.
    pub course: String,
    /// Question kind the score came from.
    pub source_type: SourceType,
    /// Raw response value as it appeared in the sheet.
    pub response_value: String,
    /// 0-100 normalized score.
    pub normalized_score: f64,
}

/// Growable per-course score accumulator, one per course, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct CourseScores {
    /// Normalized scores from core ranking questions.
    pub core: Vec<f64>,
    /// Normalized scores from elective rating questions.
    pub elective: Vec<f64>,
}

impl CourseScores {
    /// Append a score under its source type.
    pub fn push(&mut self, source: SourceType, score: f64) {
        match source {
            SourceType::CoreRank => self.core.push(score),
            SourceType::ElectiveRating => self.elective.push(score),
        }
    }

    /// Total number of contributing scores.
    pub fn total(&self) -> usize {
        self.core.len() + self.elective.len()
    }
}

/// A course's final position in the ranking.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCourse {
    /// 1-based rank after sorting.
    pub rank: usize,
    /// Course name.
    pub course: String,
    /// Mean of all normalized scores, core and elective pooled.
    pub overall_score: f64,
    /// Number of contributing scores.
    pub num_responses: usize,
    /// Mean of core scores, when any exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_pref_score: Option<f64>,
    /// Number of core scores.
    pub core_n: usize,
    /// Mean of elective scores, when any exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elective_rating_score: Option<f64>,
    /// Number of elective scores.
    pub elective_n: usize,
}

/// The complete analysis output: the long-format dataset and the ranking.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Analysis {
    /// One entry per accepted (respondent, question) response.
    pub long_records: Vec<LongRecord>,
    /// Courses in rank order.
    pub ranking: Vec<RankedCourse>,
}
