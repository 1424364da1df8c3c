//! The `diagnost list` command.

use std::path::PathBuf;

use anyhow::Result;

use diagnost_core::catalog::Catalog;
use diagnost_core::parser::load_quiz_directory;

use crate::config::load_config_from;

pub fn execute(quiz_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let quiz_dir = match quiz_dir {
        Some(dir) => dir,
        None => load_config_from(config_path.as_deref())?.quiz_dir,
    };

    let catalog = Catalog::new(load_quiz_directory(&quiz_dir)?);
    if catalog.is_empty() {
        println!(
            "No quizzes found in {}. Run `diagnost init` to create an example.",
            quiz_dir.display()
        );
        return Ok(());
    }

    for course in catalog.courses() {
        let single = if catalog.is_single_exam(course) {
            " (single exam)"
        } else {
            ""
        };
        println!("Course: {}{single}", course.to_uppercase());
        for section in catalog.sections(course) {
            if let Some(def) = catalog.get(course, section) {
                println!(
                    "  {} — {} ({} questions, {} min, pass {}%)",
                    section,
                    def.quiz.title,
                    def.quiz.questions.len(),
                    def.quiz.time_limit_minutes,
                    def.quiz.passing_score
                );
            }
        }
        println!();
    }

    Ok(())
}
