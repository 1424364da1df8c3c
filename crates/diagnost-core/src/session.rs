//! Diagnostic session lifecycle.
//!
//! `Intro → InProgress → Results`. Submitting is one-way: a submitted
//! session can only be replaced by [`DiagnosticSession::retake`]. There is
//! no timer here; the host measures elapsed time and passes it in.

use uuid::Uuid;

use crate::area::AreaNames;
use crate::error::SessionError;
use crate::model::{AnswerSet, Question, Quiz};
use crate::result::DiagnosticResult;
use crate::scoring::score;

/// Where a session currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// Not started; no answers yet.
    Intro,
    /// Collecting answers.
    InProgress { answers: AnswerSet },
    /// Submitted and scored.
    Results(DiagnosticResult),
}

/// One learner's pass through a quiz.
#[derive(Debug, Clone)]
pub struct DiagnosticSession<'q> {
    id: Uuid,
    quiz: &'q Quiz,
    area_names: &'q AreaNames,
    phase: SessionPhase,
}

impl<'q> DiagnosticSession<'q> {
    /// Create a session in the intro phase.
    pub fn new(quiz: &'q Quiz, area_names: &'q AreaNames) -> Self {
        Self {
            id: Uuid::new_v4(),
            quiz,
            area_names,
            phase: SessionPhase::Intro,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn quiz(&self) -> &'q Quiz {
        self.quiz
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Leave the intro and start collecting answers.
    pub fn begin(&mut self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Intro => {
                self.phase = SessionPhase::InProgress {
                    answers: AnswerSet::unanswered(self.quiz.questions.len()),
                };
                tracing::debug!(session = %self.id, quiz = %self.quiz.id, "session started");
                Ok(())
            }
            SessionPhase::InProgress { .. } => Err(SessionError::AlreadyStarted),
            SessionPhase::Results(_) => Err(SessionError::AlreadySubmitted),
        }
    }

    /// Record `option` as the answer to `question`, replacing any earlier
    /// selection.
    pub fn select(&mut self, question: usize, option: usize) -> Result<(), SessionError> {
        self.answers()?;
        let len = self.question(question)?.options.len();
        if option >= len {
            return Err(SessionError::OptionOutOfRange {
                question,
                option,
                len,
            });
        }
        self.answers_mut()?.set(question, Some(option));
        Ok(())
    }

    /// Mark `question` as unanswered again.
    pub fn clear(&mut self, question: usize) -> Result<(), SessionError> {
        self.answers()?;
        self.question(question)?;
        self.answers_mut()?.set(question, None);
        Ok(())
    }

    /// Answers collected so far.
    pub fn answers(&self) -> Result<&AnswerSet, SessionError> {
        match &self.phase {
            SessionPhase::Intro => Err(SessionError::NotStarted),
            SessionPhase::InProgress { answers } => Ok(answers),
            SessionPhase::Results(_) => Err(SessionError::AlreadySubmitted),
        }
    }

    pub fn answered_count(&self) -> usize {
        self.answers().map(AnswerSet::answered_count).unwrap_or(0)
    }

    /// Score the collected answers and move to the results phase.
    ///
    /// The returned result is the caller's to persist; the session keeps a
    /// copy for [`DiagnosticSession::result`].
    pub fn submit(&mut self, elapsed_seconds: u64) -> Result<DiagnosticResult, SessionError> {
        let answers = self.answers()?.clone();
        self.finish(&answers, elapsed_seconds)
    }

    /// Score an answer set the host kept itself and move to the results
    /// phase.
    pub fn submit_answers(
        &mut self,
        answers: &AnswerSet,
        elapsed_seconds: u64,
    ) -> Result<DiagnosticResult, SessionError> {
        self.answers()?;
        self.finish(answers, elapsed_seconds)
    }

    /// The result, once submitted.
    pub fn result(&self) -> Option<&DiagnosticResult> {
        match &self.phase {
            SessionPhase::Results(result) => Some(result),
            _ => None,
        }
    }

    /// A brand-new session over the same quiz.
    pub fn retake(&self) -> DiagnosticSession<'q> {
        DiagnosticSession::new(self.quiz, self.area_names)
    }

    fn finish(
        &mut self,
        answers: &AnswerSet,
        elapsed_seconds: u64,
    ) -> Result<DiagnosticResult, SessionError> {
        let result = score(self.quiz, answers, elapsed_seconds, self.area_names);
        tracing::info!(
            session = %self.id,
            quiz = %self.quiz.id,
            percentage = result.percentage,
            passed = result.passed,
            "session submitted"
        );
        self.phase = SessionPhase::Results(result.clone());
        Ok(result)
    }

    fn question(&self, index: usize) -> Result<&'q Question, SessionError> {
        let quiz: &'q Quiz = self.quiz;
        quiz.questions
            .get(index)
            .ok_or(SessionError::QuestionOutOfRange {
                index,
                len: quiz.questions.len(),
            })
    }

    fn answers_mut(&mut self) -> Result<&mut AnswerSet, SessionError> {
        match &mut self.phase {
            SessionPhase::Intro => Err(SessionError::NotStarted),
            SessionPhase::InProgress { answers } => Ok(answers),
            SessionPhase::Results(_) => Err(SessionError::AlreadySubmitted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn sample_quiz() -> Quiz {
        let q = |id: &str, area: &str, correct_answer: usize| Question {
            id: id.into(),
            prompt: format!("Prompt {id}"),
            options: vec!["w".into(), "x".into(), "y".into()],
            correct_answer,
            area: area.into(),
            topic: None,
            difficulty: Difficulty::Easy,
            explanation: String::new(),
        };
        Quiz {
            id: "sample".into(),
            course: "cfp".into(),
            section: "CFP".into(),
            title: "Sample".into(),
            description: String::new(),
            time_limit_minutes: 10,
            passing_score: 70,
            questions: vec![q("1", "A", 0), q("2", "A", 1), q("3", "B", 2)],
        }
    }

    #[test]
    fn full_lifecycle() {
        let quiz = sample_quiz();
        let names = AreaNames::new();
        let mut session = DiagnosticSession::new(&quiz, &names);
        assert_eq!(session.phase(), &SessionPhase::Intro);

        session.begin().unwrap();
        assert_eq!(session.answers().unwrap().len(), 3);
        assert_eq!(session.answered_count(), 0);

        session.select(0, 0).unwrap();
        session.select(1, 2).unwrap();
        session.select(1, 1).unwrap();
        session.select(2, 0).unwrap();
        session.clear(2).unwrap();
        assert_eq!(session.answered_count(), 2);

        let result = session.submit(95).unwrap();
        assert_eq!(result.score, 2);
        assert_eq!(result.time_spent_seconds, 95);
        assert!(session.result().is_some());
    }

    #[test]
    fn wrong_phase_errors() {
        let quiz = sample_quiz();
        let names = AreaNames::new();
        let mut session = DiagnosticSession::new(&quiz, &names);

        assert_eq!(session.select(0, 0), Err(SessionError::NotStarted));
        assert_eq!(session.submit(0).unwrap_err(), SessionError::NotStarted);

        session.begin().unwrap();
        assert_eq!(session.begin(), Err(SessionError::AlreadyStarted));

        session.submit(0).unwrap();
        assert_eq!(session.begin(), Err(SessionError::AlreadySubmitted));
        assert_eq!(session.select(0, 0), Err(SessionError::AlreadySubmitted));
        assert_eq!(
            session.submit(0).unwrap_err(),
            SessionError::AlreadySubmitted
        );
    }

    #[test]
    fn phase_errors_win_over_range_errors() {
        let quiz = sample_quiz();
        let names = AreaNames::new();
        let mut session = DiagnosticSession::new(&quiz, &names);

        assert_eq!(session.select(99, 0), Err(SessionError::NotStarted));
        assert_eq!(session.clear(99), Err(SessionError::NotStarted));

        session.begin().unwrap();
        session.submit(0).unwrap();
        assert_eq!(session.select(99, 0), Err(SessionError::AlreadySubmitted));
        assert_eq!(session.select(0, 99), Err(SessionError::AlreadySubmitted));
        assert_eq!(session.clear(99), Err(SessionError::AlreadySubmitted));
    }

    #[test]
    fn out_of_range_selections() {
        let quiz = sample_quiz();
        let names = AreaNames::new();
        let mut session = DiagnosticSession::new(&quiz, &names);
        session.begin().unwrap();

        assert_eq!(
            session.select(3, 0),
            Err(SessionError::QuestionOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            session.select(0, 3),
            Err(SessionError::OptionOutOfRange {
                question: 0,
                option: 3,
                len: 3
            })
        );
    }

    #[test]
    fn submit_host_answers() {
        let quiz = sample_quiz();
        let names = AreaNames::new();
        let mut session = DiagnosticSession::new(&quiz, &names);
        session.begin().unwrap();

        let answers = AnswerSet::from(vec![0, 1, 2]);
        let result = session.submit_answers(&answers, 10).unwrap();
        assert_eq!(result.score, 3);
        assert!(result.passed);
    }

    #[test]
    fn retake_is_a_fresh_session() {
        let quiz = sample_quiz();
        let names = AreaNames::new();
        let mut session = DiagnosticSession::new(&quiz, &names);
        session.begin().unwrap();
        session.submit(0).unwrap();

        let retake = session.retake();
        assert_ne!(retake.id(), session.id());
        assert_eq!(retake.phase(), &SessionPhase::Intro);
        assert!(session.result().is_some());
    }
}
