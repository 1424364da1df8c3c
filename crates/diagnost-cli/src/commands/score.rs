//! The `diagnost score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use diagnost_core::model::AnswerSet;
use diagnost_core::scoring::score;

use crate::config::load_config_from;
use crate::QuizSelector;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    selector: QuizSelector,
    answers_str: Option<String>,
    answers_file: Option<PathBuf>,
    elapsed: u64,
    format: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let definition = super::resolve_quiz(&selector, &config)?;

    let answers: AnswerSet = match (answers_str, answers_file) {
        (Some(s), _) => s.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?,
        (None, Some(path)) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read answers from {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("failed to parse answers JSON: {}", path.display()))?
        }
        (None, None) => anyhow::bail!("either --answers or --answers-file is required"),
    };

    let question_count = definition.quiz.questions.len();
    if answers.len() != question_count {
        tracing::warn!(
            "{} answers for {} questions; missing answers count as unanswered, extras are ignored",
            answers.len(),
            question_count
        );
    }

    let result = score(&definition.quiz, &answers, elapsed, &definition.area_names);

    let format = format.unwrap_or(config.default_format);
    let output = output.unwrap_or(config.output_dir);
    super::emit_result(&result, &format, &output)
}
