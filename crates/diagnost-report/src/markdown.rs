//! Markdown summary of a diagnostic result.

use diagnost_core::result::DiagnosticResult;

/// Escape characters that would end a table cell early.
fn escape_cell(s: &str) -> String {
    s.replace('\\', "\\\\").replace('|', "\\|")
}

/// Format a result as markdown.
pub fn generate_markdown(result: &DiagnosticResult) -> String {
    let mut md = String::new();

    md.push_str(&format!(
        "## {} {} diagnostic\n\n",
        result.course.to_uppercase(),
        result.section
    ));
    md.push_str(&format!(
        "**Score:** {}/{} ({}%) — {}\n\n",
        result.score,
        result.total_questions,
        result.percentage,
        if result.passed { "passed" } else { "not passed" }
    ));
    md.push_str(&format!(
        "{} of {} questions answered in {}.\n\n",
        result.answered_count,
        result.total_questions,
        result.time_spent_display()
    ));

    if !result.area_scores.is_empty() {
        md.push_str("### Performance by Area\n\n");
        md.push_str("| Area | Score | Percent | Band |\n");
        md.push_str("|------|-------|---------|------|\n");
        for a in &result.area_scores {
            md.push_str(&format!(
                "| {} | {}/{} | {}% | {} |\n",
                escape_cell(&a.area_name),
                a.correct,
                a.total,
                a.percentage,
                a.band()
            ));
        }
        md.push('\n');
    }

    if !result.weak_areas.is_empty() {
        let names: Vec<&str> = result.weak_areas.iter().map(|a| a.area_name.as_str()).collect();
        md.push_str(&format!("**Focus areas:** {}\n\n", names.join(", ")));
    }
    if !result.strong_areas.is_empty() {
        let names: Vec<&str> = result
            .strong_areas
            .iter()
            .map(|a| a.area_name.as_str())
            .collect();
        md.push_str(&format!("**Strengths:** {}\n\n", names.join(", ")));
    }

    if !result.recommendations.is_empty() {
        md.push_str("### Recommendations\n\n");
        for r in &result.recommendations {
            md.push_str(&format!("- {r}\n"));
        }
    }

    md
}
