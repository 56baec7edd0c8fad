//! JSON ranking export.

use crate::error::{Error, Result};
use crate::model::Analysis;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Serialize an analysis (long records and ranking) to JSON.
pub fn to_json(analysis: &Analysis, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Compact => serde_json::to_string(analysis),
        JsonFormat::Pretty => serde_json::to_string_pretty(analysis),
    };
    result.map_err(|e| Error::InvalidData(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RankedCourse;

    fn analysis() -> Analysis {
        Analysis {
            long_records: Vec::new(),
            ranking: vec![RankedCourse {
                rank: 1,
                course: "Tax Law".to_string(),
                overall_score: 75.0,
                num_responses: 4,
                core_pref_score: Some(75.0),
                core_n: 4,
                elective_rating_score: None,
                elective_n: 0,
            }],
        }
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&analysis(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"course\": \"Tax Law\""));
        // Absent per-source means are omitted, not null.
        assert!(!json.contains("elective_rating_score"));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&analysis(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"rank\":1"));
    }
}
