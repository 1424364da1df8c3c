//! diagnost-report — Report generation for diagnostic results.
//!
//! Supports JSON persistence, Markdown summaries, and self-contained HTML.

pub mod html;
pub mod json;
pub mod markdown;

#[cfg(test)]
pub(crate) mod fixtures {
    use diagnost_core::area::AreaNames;
    use diagnost_core::model::{AnswerSet, Difficulty, Question, Quiz};
    use diagnost_core::result::DiagnosticResult;
    use diagnost_core::scoring::score_at;

    /// A scored 4-question quiz: area A half right, area B all right.
    pub fn sample_result() -> DiagnosticResult {
        let q = |id: &str, area: &str, correct_answer: usize| Question {
            id: id.into(),
            prompt: "?".into(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer,
            area: area.into(),
            topic: None,
            difficulty: Difficulty::Medium,
            explanation: String::new(),
        };
        let quiz = Quiz {
            id: "ea-see1".into(),
            course: "ea".into(),
            section: "SEE1".into(),
            title: "Individuals Diagnostic Assessment".into(),
            description: String::new(),
            time_limit_minutes: 35,
            passing_score: 70,
            questions: vec![q("1", "A", 1), q("2", "A", 2), q("3", "B", 0), q("4", "B", 3)],
        };
        let names: AreaNames = [("B", "Business & Ethics")].into_iter().collect();
        score_at(
            &quiz,
            &AnswerSet::from(vec![1, 0, 0, 3]),
            125,
            &names,
            "2025-03-01T12:00:00Z".parse().unwrap(),
        )
    }
}
