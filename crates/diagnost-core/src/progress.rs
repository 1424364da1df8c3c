//! Retake comparison.
//!
//! Compares a new result for a quiz against an earlier one, area by area.

use serde::{Deserialize, Serialize};

use crate::result::DiagnosticResult;

/// How a result moved relative to a baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub quiz_id: String,
    pub baseline_percentage: u32,
    pub current_percentage: u32,
    /// `current - baseline`, in percentage points.
    pub delta: i64,
    /// Whether the pass/fail outcome changed.
    pub passed_before: bool,
    pub passed_now: bool,
    /// Areas present in both results, in the current result's order.
    pub area_changes: Vec<AreaChange>,
    /// Display names of areas that became weak.
    pub newly_weak: Vec<String>,
    /// Display names of areas that are no longer weak.
    pub resolved_weak: Vec<String>,
    /// Areas in current but not baseline.
    pub new_areas: usize,
    /// Areas in baseline but not current.
    pub removed_areas: usize,
}

/// Change in one area between two results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaChange {
    pub area: String,
    pub area_name: String,
    pub baseline_percentage: u32,
    pub current_percentage: u32,
    pub delta: i64,
}

/// Compare `current` against `baseline`.
pub fn compare(baseline: &DiagnosticResult, current: &DiagnosticResult) -> ProgressReport {
    if baseline.quiz_id != current.quiz_id {
        tracing::warn!(
            baseline = %baseline.quiz_id,
            current = %current.quiz_id,
            "comparing results from different quizzes"
        );
    }

    let was_weak = |area: &str| baseline.weak_areas.iter().any(|a| a.area == area);
    let is_weak = |area: &str| current.weak_areas.iter().any(|a| a.area == area);

    let mut area_changes = Vec::new();
    let mut newly_weak = Vec::new();
    let mut resolved_weak = Vec::new();
    let mut new_areas = 0usize;

    for area in &current.area_scores {
        let Some(before) = baseline.area(&area.area) else {
            new_areas += 1;
            continue;
        };

        area_changes.push(AreaChange {
            area: area.area.clone(),
            area_name: area.area_name.clone(),
            baseline_percentage: before.percentage,
            current_percentage: area.percentage,
            delta: i64::from(area.percentage) - i64::from(before.percentage),
        });

        match (was_weak(&area.area), is_weak(&area.area)) {
            (false, true) => newly_weak.push(area.area_name.clone()),
            (true, false) => resolved_weak.push(area.area_name.clone()),
            _ => {}
        }
    }

    let removed_areas = baseline
        .area_scores
        .iter()
        .filter(|a| current.area(&a.area).is_none())
        .count();

    ProgressReport {
        quiz_id: current.quiz_id.clone(),
        baseline_percentage: baseline.percentage,
        current_percentage: current.percentage,
        delta: i64::from(current.percentage) - i64::from(baseline.percentage),
        passed_before: baseline.passed,
        passed_now: current.passed,
        area_changes,
        newly_weak,
        resolved_weak,
        new_areas,
        removed_areas,
    }
}

impl ProgressReport {
    /// Areas whose percentage went down.
    pub fn regressions(&self) -> impl Iterator<Item = &AreaChange> {
        self.area_changes.iter().filter(|c| c.delta < 0)
    }

    /// Areas whose percentage went up.
    pub fn improvements(&self) -> impl Iterator<Item = &AreaChange> {
        self.area_changes.iter().filter(|c| c.delta > 0)
    }

    /// Returns true if the overall score dropped or an area became weak.
    pub fn has_regressions(&self) -> bool {
        self.delta < 0 || !self.newly_weak.is_empty()
    }

    /// Format the progress report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Overall:** {}% -> {}% ({:+} points)\n\n",
            self.baseline_percentage, self.current_percentage, self.delta
        ));

        if self.passed_before != self.passed_now {
            md.push_str(if self.passed_now {
                "Now passing.\n\n"
            } else {
                "No longer passing.\n\n"
            });
        }

        if !self.area_changes.is_empty() {
            md.push_str("### Areas\n\n");
            md.push_str("| Area | Baseline | Current | Delta |\n");
            md.push_str("|------|----------|---------|-------|\n");
            for c in &self.area_changes {
                md.push_str(&format!(
                    "| {} | {}% | {}% | {:+} |\n",
                    c.area_name, c.baseline_percentage, c.current_percentage, c.delta
                ));
            }
            md.push('\n');
        }

        if !self.newly_weak.is_empty() {
            md.push_str(&format!("**Newly weak:** {}\n\n", self.newly_weak.join(", ")));
        }
        if !self.resolved_weak.is_empty() {
            md.push_str(&format!(
                "**No longer weak:** {}\n\n",
                self.resolved_weak.join(", ")
            ));
        }

        md
    }
}
