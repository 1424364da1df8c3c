//! diagnost CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "diagnost", version, about = "Diagnostic quiz scoring and study recommendations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// How to pick the quiz: an explicit file, or a course/section from the
/// configured quiz directory.
#[derive(Args, Clone)]
pub struct QuizSelector {
    /// Path to a quiz .toml file
    #[arg(long)]
    quiz: Option<PathBuf>,

    /// Course tag to look up in the quiz directory (e.g. "ea")
    #[arg(long)]
    course: Option<String>,

    /// Section within the course (optional for single-exam courses)
    #[arg(long)]
    section: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a completed answer set
    Score {
        #[command(flatten)]
        selector: QuizSelector,

        /// Comma-separated answers: indices, option letters, or "-" for unanswered
        #[arg(long, conflicts_with = "answers_file", allow_hyphen_values = true)]
        answers: Option<String>,

        /// JSON file holding an array of indices and nulls
        #[arg(long)]
        answers_file: Option<PathBuf>,

        /// Seconds the learner spent
        #[arg(long, default_value = "0")]
        elapsed: u64,

        /// Output format: text, json, markdown, html, all
        #[arg(long)]
        format: Option<String>,

        /// Output directory for written files
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Take a quiz interactively on the terminal
    Take {
        #[command(flatten)]
        selector: QuizSelector,

        /// Output format: text, json, markdown, html, all
        #[arg(long)]
        format: Option<String>,

        /// Output directory for written files
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compare a retake against an earlier result
    Compare {
        /// Baseline result JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current result JSON
        #[arg(long)]
        current: PathBuf,

        /// Exit code 1 if the score dropped or an area became weak
        #[arg(long)]
        fail_on_regression: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate quiz TOML files
    Validate {
        /// Path to quiz file or directory
        #[arg(long)]
        quiz: PathBuf,
    },

    /// List available diagnostic quizzes
    List {
        /// Directory to scan (defaults to the configured quiz_dir)
        #[arg(long)]
        quiz_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example quiz
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("diagnost=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            selector,
            answers,
            answers_file,
            elapsed,
            format,
            output,
            config,
        } => commands::score::execute(
            selector,
            answers,
            answers_file,
            elapsed,
            format,
            output,
            config,
        ),
        Commands::Take {
            selector,
            format,
            output,
            config,
        } => commands::take::execute(selector, format, output, config),
        Commands::Compare {
            baseline,
            current,
            fail_on_regression,
            format,
        } => commands::compare::execute(baseline, current, fail_on_regression, format),
        Commands::Validate { quiz } => commands::validate::execute(quiz),
        Commands::List { quiz_dir, config } => commands::list::execute(quiz_dir, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
