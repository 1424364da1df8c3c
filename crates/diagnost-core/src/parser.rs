//! TOML quiz parser.
//!
//! Loads quiz definitions (questions plus area display names) from TOML
//! files and directories, and validates them.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::area::AreaNames;
use crate::model::{Difficulty, Question, Quiz};

/// A quiz together with the display names for its areas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDefinition {
    pub quiz: Quiz,
    pub area_names: AreaNames,
}

/// Intermediate TOML structure for parsing quiz files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    area_names: HashMap<String, String>,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    id: String,
    course: String,
    section: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_time_limit")]
    time_limit_minutes: u32,
    #[serde(default = "default_passing_score")]
    passing_score: u32,
}

fn default_time_limit() -> u32 {
    35
}

fn default_passing_score() -> u32 {
    70
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    prompt: String,
    options: Vec<String>,
    correct_answer: usize,
    area: String,
    #[serde(default)]
    topic: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    explanation: String,
}

/// Parse a single TOML file into a `QuizDefinition`.
pub fn parse_quiz(path: &Path) -> Result<QuizDefinition> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a `QuizDefinition` (useful for testing).
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<QuizDefinition> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let difficulty = q
                .difficulty
                .map(|d| {
                    d.parse::<Difficulty>()
                        .map_err(|e| anyhow::anyhow!("question {}: {}", q.id, e))
                })
                .transpose()?
                .unwrap_or_default();

            Ok(Question {
                id: q.id,
                prompt: q.prompt,
                options: q.options,
                correct_answer: q.correct_answer,
                area: q.area,
                topic: q.topic,
                difficulty,
                explanation: q.explanation,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuizDefinition {
        quiz: Quiz {
            id: parsed.quiz.id,
            course: parsed.quiz.course,
            section: parsed.quiz.section,
            title: parsed.quiz.title,
            description: parsed.quiz.description,
            time_limit_minutes: parsed.quiz.time_limit_minutes,
            passing_score: parsed.quiz.passing_score,
            questions,
        },
        area_names: AreaNames::from(parsed.area_names),
    })
}

/// Recursively load all `.toml` quiz files from a directory.
///
/// Files are visited in path order so catalogs built from the result are
/// stable across platforms.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<QuizDefinition>> {
    let mut definitions = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            definitions.extend(load_quiz_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_quiz(&path) {
                Ok(definition) => definitions.push(definition),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(definitions)
}

/// Load a single file or every quiz under a directory.
pub fn load_quizzes(path: &Path) -> Result<Vec<QuizDefinition>> {
    if path.is_dir() {
        load_quiz_directory(path)
    } else {
        Ok(vec![parse_quiz(path)?])
    }
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn quiz(message: impl Into<String>) -> Self {
        Self {
            question_id: None,
            message: message.into(),
        }
    }

    fn question(question: &Question, message: impl Into<String>) -> Self {
        Self {
            question_id: Some(question.id.clone()),
            message: message.into(),
        }
    }
}

/// Validate a quiz for authoring mistakes.
///
/// The scorer accepts every quiz; these are warnings for authors, not
/// rejections.
pub fn validate_quiz(quiz: &Quiz, area_names: &AreaNames) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if quiz.questions.is_empty() {
        warnings.push(ValidationWarning::quiz("quiz has no questions"));
    }
    if quiz.passing_score > 100 {
        warnings.push(ValidationWarning::quiz(format!(
            "passing_score {} is above 100 and can never be reached",
            quiz.passing_score
        )));
    }
    if quiz.time_limit_minutes == 0 {
        warnings.push(ValidationWarning::quiz("time_limit_minutes is 0"));
    }

    let mut seen_ids = HashSet::new();
    let mut unnamed_areas = Vec::new();
    for question in &quiz.questions {
        if !seen_ids.insert(&question.id) {
            warnings.push(ValidationWarning::question(
                question,
                format!("duplicate question ID: {}", question.id),
            ));
        }

        if question.prompt.trim().is_empty() {
            warnings.push(ValidationWarning::question(question, "prompt is empty"));
        }

        if question.options.len() < 2 {
            warnings.push(ValidationWarning::question(
                question,
                format!("only {} option(s); expected at least 2", question.options.len()),
            ));
        }

        if question.correct_answer >= question.options.len() {
            warnings.push(ValidationWarning::question(
                question,
                format!(
                    "correct_answer {} is out of range for {} options",
                    question.correct_answer,
                    question.options.len()
                ),
            ));
        }

        let mut seen_options = HashSet::new();
        if question
            .options
            .iter()
            .any(|o| !seen_options.insert(o.trim()))
        {
            warnings.push(ValidationWarning::question(question, "duplicate options"));
        }

        if !area_names.is_empty()
            && !area_names.contains(&question.area)
            && !unnamed_areas.contains(&question.area)
        {
            unnamed_areas.push(question.area.clone());
            warnings.push(ValidationWarning::question(
                question,
                format!("area '{}' has no display name", question.area),
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[quiz]
id = "ea-see1"
course = "ea"
section = "SEE1"
title = "Individuals Diagnostic Assessment"
description = "Assess your readiness for SEE Part 1"
time_limit_minutes = 35
passing_score = 70

[area_names]
"Preliminary Work" = "Preliminary Work & Taxpayer Data"

[[questions]]
id = "SEE1-D01"
prompt = "Which filing status provides the LARGEST standard deduction?"
options = ["Single", "Married Filing Jointly", "Head of Household", "Married Filing Separately"]
correct_answer = 1
area = "Preliminary Work"
topic = "Filing Status"
difficulty = "easy"
explanation = "MFJ has the largest standard deduction."
"#;

    #[test]
    fn parse_valid_toml() {
        let def = parse_quiz_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(def.quiz.id, "ea-see1");
        assert_eq!(def.quiz.section, "SEE1");
        assert_eq!(def.quiz.questions.len(), 1);
        assert_eq!(def.quiz.questions[0].correct_answer, 1);
        assert_eq!(def.quiz.questions[0].difficulty, Difficulty::Easy);
        assert_eq!(
            def.area_names.display_name("Preliminary Work"),
            "Preliminary Work & Taxpayer Data"
        );
        assert!(validate_quiz(&def.quiz, &def.area_names).is_empty());
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[quiz]
id = "minimal"
course = "cfp"
section = "CFP"
title = "Minimal"

[[questions]]
id = "q1"
prompt = "Pick one"
options = ["a", "b"]
correct_answer = 0
area = "General"
"#;
        let def = parse_quiz_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(def.quiz.time_limit_minutes, 35);
        assert_eq!(def.quiz.passing_score, 70);
        assert_eq!(def.quiz.questions[0].difficulty, Difficulty::Medium);
        assert!(def.quiz.questions[0].topic.is_none());
        assert!(def.area_names.is_empty());
    }

    #[test]
    fn parse_unknown_difficulty() {
        let toml = r#"
[quiz]
id = "bad"
course = "cfp"
section = "CFP"
title = "Bad"

[[questions]]
id = "q1"
prompt = "Pick one"
options = ["a", "b"]
correct_answer = 0
area = "General"
difficulty = "impossible"
"#;
        let err = parse_quiz_str(toml, &PathBuf::from("test.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("unknown difficulty"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_quiz_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn validate_authoring_mistakes() {
        let toml = r#"
[quiz]
id = "messy"
course = "cia"
section = "CIA1"
title = "Messy"
passing_score = 120
time_limit_minutes = 0

[area_names]
"Known" = "Known Area"

[[questions]]
id = "dup"
prompt = "  "
options = ["same", "same"]
correct_answer = 2
area = "Known"

[[questions]]
id = "dup"
prompt = "Only one option"
options = ["lonely"]
correct_answer = 0
area = "Mystery"
"#;
        let def = parse_quiz_str(toml, &PathBuf::from("test.toml")).unwrap();
        let messages: Vec<String> = validate_quiz(&def.quiz, &def.area_names)
            .into_iter()
            .map(|w| w.message)
            .collect();
        let has = |needle: &str| messages.iter().any(|m| m.contains(needle));

        assert!(has("above 100"));
        assert!(has("time_limit_minutes is 0"));
        assert!(has("duplicate question ID"));
        assert!(has("prompt is empty"));
        assert!(has("duplicate options"));
        assert!(has("out of range"));
        assert!(has("expected at least 2"));
        assert!(has("'Mystery' has no display name"));
    }

    #[test]
    fn validate_empty_quiz() {
        let toml = r#"
[quiz]
id = "empty"
course = "cma"
section = "CMA1"
title = "Empty"
"#;
        let def = parse_quiz_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_quiz(&def.quiz, &def.area_names);
        assert!(warnings.iter().any(|w| w.message.contains("no questions")));
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("see1.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("broken.toml"), "not = [valid").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let defs = load_quiz_directory(dir.path()).unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].quiz.id, "ea-see1");

        let single = load_quizzes(&dir.path().join("see1.toml")).unwrap();
        assert_eq!(single.len(), 1);
    }
}
