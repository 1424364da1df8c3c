//! The `diagnost init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    if Path::new("diagnost.toml").exists() {
        println!("diagnost.toml already exists, skipping.");
    } else {
        std::fs::write("diagnost.toml", SAMPLE_CONFIG)?;
        println!("Created diagnost.toml");
    }

    std::fs::create_dir_all("quizzes")?;
    let example_path = Path::new("quizzes/example.toml");
    if example_path.exists() {
        println!("quizzes/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ)?;
        println!("Created quizzes/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: diagnost validate --quiz quizzes/example.toml");
    println!("  2. Run: diagnost take --course demo");
    println!("  3. Run: diagnost score --course demo --answers 1,2,0 --format all");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# diagnost configuration

quiz_dir = "./quizzes"
output_dir = "./diagnost-results"
default_format = "text"
"#;

const EXAMPLE_QUIZ: &str = r#"[quiz]
id = "demo"
course = "demo"
section = "BASICS"
title = "Example Diagnostic Assessment"
description = "A short quiz to try out diagnost"
time_limit_minutes = 5
passing_score = 70

[area_names]
ARITH = "Arithmetic"
GEO = "Geography"

[[questions]]
id = "DEMO-01"
prompt = "What is 7 x 8?"
options = ["54", "56", "64", "48"]
correct_answer = 1
area = "ARITH"
difficulty = "easy"
explanation = "7 x 8 = 56."

[[questions]]
id = "DEMO-02"
prompt = "What is 15% of 200?"
options = ["15", "20", "30", "35"]
correct_answer = 2
area = "ARITH"
topic = "Percentages"
explanation = "0.15 x 200 = 30."

[[questions]]
id = "DEMO-03"
prompt = "Which river flows through Cairo?"
options = ["Nile", "Danube", "Amazon", "Ganges"]
correct_answer = 0
area = "GEO"
difficulty = "easy"
explanation = "Cairo sits on the Nile."
"#;
