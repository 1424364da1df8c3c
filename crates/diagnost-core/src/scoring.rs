//! Diagnostic scoring.
//!
//! A single in-order pass over the quiz tallies the overall correct count
//! and a `(correct, total)` pair per area. Classification and
//! recommendations are derived from the tallies, and the result is
//! assembled once at the end.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::area::{classify, AreaNames, AreaScore};
use crate::model::{AnswerSet, Quiz};
use crate::recommend::recommend;
use crate::result::DiagnosticResult;

/// `round(100 * correct / total)` with halves rounded up, or 0 when
/// `total` is 0.
pub fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * correct + total) / (2 * total)) as u32
}

/// Score an answer set against a quiz, stamping the current time.
pub fn score(
    quiz: &Quiz,
    answers: &AnswerSet,
    elapsed_seconds: u64,
    area_names: &AreaNames,
) -> DiagnosticResult {
    score_at(quiz, answers, elapsed_seconds, area_names, Utc::now())
}

/// Score an answer set against a quiz with an explicit completion time.
///
/// Missing trailing answers count as unanswered and extra answers are
/// ignored. Calling this twice with the same arguments yields equal
/// results.
pub fn score_at(
    quiz: &Quiz,
    answers: &AnswerSet,
    elapsed_seconds: u64,
    area_names: &AreaNames,
    completed_at: DateTime<Utc>,
) -> DiagnosticResult {
    let mut correct = 0usize;
    // (area key, correct, total) in first-occurrence order
    let mut tallies: Vec<(&str, usize, usize)> = Vec::new();
    let mut index_of: HashMap<&str, usize> = HashMap::new();

    for (i, question) in quiz.questions.iter().enumerate() {
        let is_correct = question.is_correct(answers.get(i));
        if is_correct {
            correct += 1;
        }

        let slot = *index_of.entry(question.area.as_str()).or_insert_with(|| {
            tallies.push((question.area.as_str(), 0, 0));
            tallies.len() - 1
        });
        let tally = &mut tallies[slot];
        tally.2 += 1;
        if is_correct {
            tally.1 += 1;
        }
    }

    let total = quiz.questions.len();
    let overall = percentage(correct, total);
    let passed = total > 0 && overall >= quiz.passing_score;

    let area_scores: Vec<AreaScore> = tallies
        .into_iter()
        .map(|(area, area_correct, area_total)| AreaScore {
            area: area.to_string(),
            area_name: area_names.display_name(area).to_string(),
            correct: area_correct,
            total: area_total,
            percentage: percentage(area_correct, area_total),
        })
        .collect();

    let classification = classify(&area_scores);
    let recommendations = recommend(passed, &classification.weak);

    tracing::debug!(
        quiz = %quiz.id,
        score = correct,
        total,
        percentage = overall,
        passed,
        weak = classification.weak.len(),
        "scored diagnostic"
    );

    DiagnosticResult {
        quiz_id: quiz.id.clone(),
        course: quiz.course.clone(),
        section: quiz.section.clone(),
        score: correct,
        total_questions: total,
        answered_count: answers
            .as_slice()
            .iter()
            .take(total)
            .filter(|a| a.is_some())
            .count(),
        percentage: overall,
        passed,
        area_scores,
        weak_areas: classification.weak,
        strong_areas: classification.strong,
        recommendations,
        completed_at,
        time_spent_seconds: elapsed_seconds,
    }
}
