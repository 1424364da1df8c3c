//! Study recommendations derived from a scored diagnostic.

use crate::area::AreaScore;

/// First recommendation for a failed diagnostic.
pub const FUNDAMENTALS_MESSAGE: &str = "Focus on fundamentals before attempting practice exams.";

/// Sole recommendation for a pass with no weak areas.
pub const READY_MESSAGE: &str = "Strong foundation! Proceed to mock exams and timed practice.";

/// Build the ordered recommendation list.
///
/// A pass with weak areas only lists the weak areas; the congratulatory
/// line is reserved for a pass with no gaps.
pub fn recommend(passed: bool, weak_areas: &[AreaScore]) -> Vec<String> {
    let mut recommendations = Vec::with_capacity(weak_areas.len() + 1);

    if !passed {
        recommendations.push(FUNDAMENTALS_MESSAGE.to_string());
    }

    recommendations.extend(weak_areas.iter().map(|area| {
        format!(
            "Review {}: scored {}/{} ({}%)",
            area.area_name, area.correct, area.total, area.percentage
        )
    }));

    if passed && weak_areas.is_empty() {
        recommendations.push(READY_MESSAGE.to_string());
    }

    recommendations
}
