//! Response value cleaning, score normalization, and course-name mapping.

/// Course name used when a question has no usable text at all.
pub const UNKNOWN_COURSE: &str = "Unknown Course";

/// Highest accepted core rank (1 = most preferred).
pub const MAX_CORE_RANK: u32 = 8;

/// Highest accepted elective rating (5 = best).
pub const MAX_ELECTIVE_RATING: u32 = 5;

/// Parse a response value as a whole number.
///
/// Survey exports store integers either bare (`"3"`) or with a decimal zero
/// tail (`"3.0"`, `"3.00"`). Anything else — empty, fractional, trailing
/// dot, non-numeric — is rejected and the response is discarded upstream.
pub fn clean_numeric(value: &str) -> Option<u32> {
    let value = value.trim();
    let (digits, tail) = match value.split_once('.') {
        Some((digits, tail)) => (digits, Some(tail)),
        None => (value, None),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(tail) = tail {
        if tail.is_empty() || !tail.bytes().all(|b| b == b'0') {
            return None;
        }
    }

    digits.parse().ok()
}

/// Normalize a core rank (1-8, 1 best) to a 0-100 score.
///
/// Returns `None` for out-of-range ranks; rank 1 maps to 100.0 and rank 8
/// to 0.0.
pub fn normalize_core_rank(rank: u32) -> Option<f64> {
    if !(1..=MAX_CORE_RANK).contains(&rank) {
        return None;
    }
    Some(((9 - rank) as f64 / 8.0) * 100.0)
}

/// Normalize an elective rating (1-5, 5 best) to a 0-100 score.
///
/// Returns `None` for out-of-range ratings; rating 5 maps to 100.0 and
/// rating 1 to 0.0.
pub fn normalize_elective_rating(rating: u32) -> Option<f64> {
    if !(1..=MAX_ELECTIVE_RATING).contains(&rating) {
        return None;
    }
    Some(((rating - 1) as f64 / 4.0) * 100.0)
}

/// Derive a course name from a question's text.
///
/// Question text follows the pattern `"<preamble> - <course>"`; the segment
/// after the last `" - "` is the course. Text without the separator is used
/// whole, and blank separator-free text falls back to [`UNKNOWN_COURSE`].
pub fn course_name(question_text: &str) -> String {
    if let Some((_, last)) = question_text.rsplit_once(" - ") {
        return last.trim().to_string();
    }
    let name = question_text.trim();
    if name.is_empty() {
        UNKNOWN_COURSE.to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_numeric_accepts_whole_numbers() {
        assert_eq!(clean_numeric("3"), Some(3));
        assert_eq!(clean_numeric(" 8 "), Some(8));
        assert_eq!(clean_numeric("3.0"), Some(3));
        assert_eq!(clean_numeric("12.000"), Some(12));
    }

    #[test]
    fn test_clean_numeric_rejects_everything_else() {
        assert_eq!(clean_numeric(""), None);
        assert_eq!(clean_numeric("  "), None);
        assert_eq!(clean_numeric("3.5"), None);
        assert_eq!(clean_numeric("3."), None);
        assert_eq!(clean_numeric("-3"), None);
        assert_eq!(clean_numeric("abc"), None);
        assert_eq!(clean_numeric("3a"), None);
        assert_eq!(clean_numeric(".0"), None);
    }

    #[test]
    fn test_core_rank_boundaries() {
        assert_eq!(normalize_core_rank(1), Some(100.0));
        assert_eq!(normalize_core_rank(8), Some(0.0));
        assert_eq!(normalize_core_rank(5), Some(50.0));
        assert_eq!(normalize_core_rank(0), None);
        assert_eq!(normalize_core_rank(9), None);
    }

    #[test]
    fn test_elective_rating_boundaries() {
        assert_eq!(normalize_elective_rating(5), Some(100.0));
        assert_eq!(normalize_elective_rating(1), Some(0.0));
        assert_eq!(normalize_elective_rating(3), Some(50.0));
        assert_eq!(normalize_elective_rating(0), None);
        assert_eq!(normalize_elective_rating(6), None);
    }

    #[test]
    fn test_course_name_takes_last_segment() {
        assert_eq!(course_name("Some Prefix - Tax Law"), "Tax Law");
        assert_eq!(course_name("A - B - Advanced Audit"), "Advanced Audit");
        assert_eq!(course_name("Rank the courses - Tax Law  "), "Tax Law");
    }

    #[test]
    fn test_course_name_without_separator() {
        assert_eq!(course_name("  Financial Reporting  "), "Financial Reporting");
        // A hyphen without surrounding spaces is not a separator.
        assert_eq!(course_name("Cost-Accounting"), "Cost-Accounting");
    }

    #[test]
    fn test_course_name_blank_falls_back() {
        assert_eq!(course_name(""), UNKNOWN_COURSE);
        assert_eq!(course_name("   "), UNKNOWN_COURSE);
    }
}
