//! The `diagnost take` command.
//!
//! Runs a diagnostic session over stdin/stdout. A blank line skips a
//! question, `q` submits early, and end of input submits whatever has been
//! answered.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use diagnost_core::model::{option_letter, parse_answer};
use diagnost_core::session::DiagnosticSession;

use crate::config::load_config_from;
use crate::QuizSelector;

enum Input {
    Answer(usize),
    Skip,
    Submit,
}

pub fn execute(
    selector: QuizSelector,
    format: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let definition = super::resolve_quiz(&selector, &config)?;
    let quiz = &definition.quiz;

    println!("{}", quiz.title);
    if !quiz.description.is_empty() {
        println!("{}", quiz.description);
    }
    println!(
        "{} multiple-choice questions, {} minute time limit.",
        quiz.questions.len(),
        quiz.time_limit_minutes
    );
    println!("Answer with a letter or number; blank to skip, 'q' to submit.\n");

    let mut session = DiagnosticSession::new(quiz, &definition.area_names);
    session.begin()?;
    let started = Instant::now();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    'questions: for (i, question) in quiz.questions.iter().enumerate() {
        println!("Question {} of {}", i + 1, quiz.questions.len());
        println!("{}", question.prompt);
        for (j, option) in question.options.iter().enumerate() {
            println!("  {}. {}", option_letter(j), option);
        }

        loop {
            print!("> ");
            io::stdout().flush()?;

            let Some(line) = lines.next().transpose()? else {
                println!();
                break 'questions;
            };

            match read_input(&line, question.options.len()) {
                Ok(Input::Answer(option)) => {
                    session.select(i, option)?;
                    break;
                }
                Ok(Input::Skip) => break,
                Ok(Input::Submit) => break 'questions,
                Err(message) => println!("{message}"),
            }
        }
        println!();
    }

    let answered = session.answered_count();
    let result = session.submit(started.elapsed().as_secs())?;
    tracing::debug!(answered, "interactive session finished");

    let format = format.unwrap_or(config.default_format);
    let output = output.unwrap_or(config.output_dir);
    super::emit_result(&result, &format, &output)
}

fn read_input(line: &str, option_count: usize) -> Result<Input, String> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Ok(Input::Submit);
    }
    match parse_answer(line)? {
        None => Ok(Input::Skip),
        Some(option) if option < option_count => Ok(Input::Answer(option)),
        Some(_) => Err(format!(
            "Choose {}-{}.",
            option_letter(0),
            option_letter(option_count.saturating_sub(1))
        )),
    }
}
