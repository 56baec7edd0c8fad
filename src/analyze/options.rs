//! Analysis options configuration.

/// Which survey columns feed the analysis, and how completion is detected.
///
/// Defaults mirror the grad-program exit survey export this tool was built
/// for; every knob is overridable for other exports with the same layout.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Column that marks a completed response.
    pub finished_column: String,

    /// Column holding the respondent identifier.
    pub response_id_column: String,

    /// Core ranking questions are the schema columns starting with this
    /// prefix, in schema order.
    pub core_prefix: String,

    /// Elective rating question columns, in scoring order.
    pub elective_fields: Vec<String>,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            finished_column: "Finished".to_string(),
            response_id_column: "ResponseId".to_string(),
            core_prefix: "Q35_".to_string(),
            elective_fields: [
                "Q76_1", "Q77_2", "Q78_3", "Q83_4", "Q82_5", "Q80_6", "Q81_9", "Q79_7",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl AnalyzeOptions {
    /// Create options with the default survey layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the completion-marker column.
    pub fn with_finished_column(mut self, column: impl Into<String>) -> Self {
        self.finished_column = column.into();
        self
    }

    /// Set the respondent identifier column.
    pub fn with_response_id_column(mut self, column: impl Into<String>) -> Self {
        self.response_id_column = column.into();
        self
    }

    /// Set the core-question column prefix.
    pub fn with_core_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.core_prefix = prefix.into();
        self
    }

    /// Set the elective rating columns.
    pub fn with_elective_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elective_fields = fields.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AnalyzeOptions::default();
        assert_eq!(options.finished_column, "Finished");
        assert_eq!(options.response_id_column, "ResponseId");
        assert_eq!(options.core_prefix, "Q35_");
        assert_eq!(options.elective_fields.len(), 8);
        assert_eq!(options.elective_fields[0], "Q76_1");
    }

    #[test]
    fn test_builder() {
        let options = AnalyzeOptions::new()
            .with_core_prefix("Q1_")
            .with_finished_column("Complete")
            .with_elective_fields(["E1", "E2"]);

        assert_eq!(options.core_prefix, "Q1_");
        assert_eq!(options.finished_column, "Complete");
        assert_eq!(options.elective_fields, vec!["E1", "E2"]);
    }
}
