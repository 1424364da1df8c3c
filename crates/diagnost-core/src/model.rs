//! Core data model types for diagnost.
//!
//! Questions and quizzes are authored elsewhere and treated as read-only
//! input; answer sets are supplied once per scoring call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within its quiz.
    pub id: String,
    /// The question text shown to the learner.
    pub prompt: String,
    /// Answer options, addressed by zero-based index.
    pub options: Vec<String>,
    /// Zero-based index of the correct option.
    pub correct_answer: usize,
    /// Subject/blueprint area key used for grouping.
    pub area: String,
    /// Finer-grained topic within the area.
    #[serde(default)]
    pub topic: Option<String>,
    /// Authored difficulty label.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Explanation shown after answering.
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    /// Returns `true` if `answer` selects the correct option.
    ///
    /// An unanswered entry never matches, not even when the correct
    /// option is index 0.
    pub fn is_correct(&self, answer: Option<usize>) -> bool {
        answer == Some(self.correct_answer)
    }
}

/// Authored question difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// A fixed diagnostic quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Unique identifier.
    pub id: String,
    /// Course/domain tag (e.g. "ea").
    pub course: String,
    /// Section tag within the course (e.g. "SEE1").
    pub section: String,
    /// Human-readable title.
    pub title: String,
    /// Short description shown on the intro screen.
    #[serde(default)]
    pub description: String,
    /// Informational time limit in minutes. Not enforced by the engine.
    pub time_limit_minutes: u32,
    /// Minimum overall percentage needed to pass.
    pub passing_score: u32,
    /// The questions, in presentation order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A learner's answers, parallel to a quiz's questions.
///
/// `None` marks an unanswered question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(Vec<Option<usize>>);

impl AnswerSet {
    pub fn new(answers: Vec<Option<usize>>) -> Self {
        Self(answers)
    }

    /// An answer set of `len` unanswered entries.
    pub fn unanswered(len: usize) -> Self {
        Self(vec![None; len])
    }

    /// The answer at `index`; positions past the end are unanswered.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.0.get(index).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries that hold a selection.
    pub fn answered_count(&self) -> usize {
        self.0.iter().filter(|a| a.is_some()).count()
    }

    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.0
    }

    pub(crate) fn set(&mut self, index: usize, answer: Option<usize>) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = answer;
        }
    }
}

impl From<Vec<Option<usize>>> for AnswerSet {
    fn from(answers: Vec<Option<usize>>) -> Self {
        Self(answers)
    }
}

impl From<Vec<usize>> for AnswerSet {
    fn from(answers: Vec<usize>) -> Self {
        Self(answers.into_iter().map(Some).collect())
    }
}

impl FromIterator<Option<usize>> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Option<usize>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse a single answer entry: an index, an option letter, or a blank.
pub fn parse_answer(entry: &str) -> Result<Option<usize>, String> {
    let entry = entry.trim();
    if entry.is_empty() || entry == "-" || entry == "_" {
        return Ok(None);
    }
    if let Ok(index) = entry.parse::<usize>() {
        return Ok(Some(index));
    }
    let mut chars = entry.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            Ok(Some((c.to_ascii_uppercase() as u8 - b'A') as usize))
        }
        _ => Err(format!("invalid answer: '{entry}'")),
    }
}

impl FromStr for AnswerSet {
    type Err = String;

    /// Parses comma-separated entries, e.g. `"1,0,-,D"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        s.split(',').map(parse_answer).collect()
    }
}

/// Display letter for a zero-based option index (`0` → `A`).
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .filter(u8::is_ascii_uppercase)
        .map(char::from)
        .unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_display_and_parse() {
        assert_eq!(Difficulty::Hard.to_string(), "hard");
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn unanswered_never_matches_index_zero() {
        let q = Question {
            id: "q1".into(),
            prompt: "Pick A".into(),
            options: vec!["A".into(), "B".into()],
            correct_answer: 0,
            area: "area".into(),
            topic: None,
            difficulty: Difficulty::Easy,
            explanation: String::new(),
        };
        assert!(q.is_correct(Some(0)));
        assert!(!q.is_correct(None));
        assert!(!q.is_correct(Some(1)));
    }

    #[test]
    fn answer_set_get_past_end_is_unanswered() {
        let answers = AnswerSet::from(vec![2, 1]);
        assert_eq!(answers.get(0), Some(2));
        assert_eq!(answers.get(5), None);
        assert_eq!(answers.answered_count(), 2);
    }

    #[test]
    fn parse_answer_text() {
        let answers: AnswerSet = "1, b,-,,_,D".parse().unwrap();
        assert_eq!(
            answers.as_slice(),
            &[Some(1), Some(1), None, None, None, Some(3)]
        );
        assert!("".parse::<AnswerSet>().unwrap().is_empty());
        assert!("1,xyz".parse::<AnswerSet>().is_err());
    }

    #[test]
    fn answer_set_json_uses_nulls() {
        let answers = AnswerSet::new(vec![Some(1), None]);
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, "[1,null]");
        let back: AnswerSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, answers);
    }

    #[test]
    fn option_letters() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
        assert_eq!(option_letter(40), '?');
    }
}
