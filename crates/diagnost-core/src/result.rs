//! The diagnostic result value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::area::{AreaScore, PerformanceBand};

/// Scored outcome of one diagnostic submission.
///
/// Built once at the end of scoring and never mutated afterwards; the
/// caller owns persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticResult {
    /// Quiz that was scored.
    pub quiz_id: String,
    pub course: String,
    pub section: String,
    /// Raw number of correct answers.
    pub score: usize,
    pub total_questions: usize,
    /// Number of questions that had any selection.
    pub answered_count: usize,
    /// `round(100 * score / total_questions)`, or 0 for an empty quiz.
    pub percentage: u32,
    pub passed: bool,
    /// One entry per distinct area, in first-occurrence order.
    pub area_scores: Vec<AreaScore>,
    /// Areas below 70%.
    pub weak_areas: Vec<AreaScore>,
    /// Areas at or above 80%.
    pub strong_areas: Vec<AreaScore>,
    pub recommendations: Vec<String>,
    pub completed_at: DateTime<Utc>,
    pub time_spent_seconds: u64,
}

impl DiagnosticResult {
    /// Display band for the overall percentage.
    pub fn band(&self) -> PerformanceBand {
        PerformanceBand::overall(self.percentage)
    }

    /// Look up the score for an area key.
    pub fn area(&self, area: &str) -> Option<&AreaScore> {
        self.area_scores.iter().find(|a| a.area == area)
    }

    /// Time spent formatted as `"{m}m {s}s"`.
    pub fn time_spent_display(&self) -> String {
        format!(
            "{}m {}s",
            self.time_spent_seconds / 60,
            self.time_spent_seconds % 60
        )
    }
}
