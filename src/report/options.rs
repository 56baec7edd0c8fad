//! Report rendering options.

/// Options shared by the report emitters.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Report title stem; the chart and summary derive their headings from
    /// it.
    pub title: String,

    /// Number of leading courses shown in the summary table.
    pub top_n: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "MAcc Exit Survey 2024".to_string(),
            top_n: 5,
        }
    }
}

impl ReportOptions {
    /// Create options with default title and summary depth.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the report title stem.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the number of courses in the summary table.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Heading used by the bar-chart export.
    pub fn chart_title(&self) -> String {
        format!("{}: Course Ranking (Higher = Better)", self.title)
    }

    /// Heading used by the Markdown summary.
    pub fn summary_title(&self) -> String {
        format!("{} Course Ranking", self.title)
    }
}
