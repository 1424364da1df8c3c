//! The `diagnost validate` command.

use std::path::PathBuf;

use anyhow::Result;

use diagnost_core::parser::{load_quizzes, validate_quiz};

pub fn execute(quiz_path: PathBuf) -> Result<()> {
    let definitions = load_quizzes(&quiz_path)?;

    let mut total_warnings = 0;

    for def in &definitions {
        println!(
            "Quiz: {} [{}/{}] ({} questions)",
            def.quiz.title,
            def.quiz.course,
            def.quiz.section,
            def.quiz.questions.len()
        );

        let warnings = validate_quiz(&def.quiz, &def.area_names);
        for w in &warnings {
            let prefix = w
                .question_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if definitions.is_empty() {
        println!("No quizzes found.");
    } else if total_warnings == 0 {
        println!("All quizzes valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
