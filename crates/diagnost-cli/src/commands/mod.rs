pub mod compare;
pub mod init;
pub mod list;
pub mod score;
pub mod take;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use diagnost_core::catalog::Catalog;
use diagnost_core::parser::{self, QuizDefinition};
use diagnost_core::result::DiagnosticResult;
use diagnost_report::html::write_html_report;
use diagnost_report::json::{result_file_name, write_json_result};
use diagnost_report::markdown::generate_markdown;

use crate::config::DiagnostConfig;
use crate::QuizSelector;

/// Load the quiz named by `--quiz`, or look it up by course/section.
pub(crate) fn resolve_quiz(
    selector: &QuizSelector,
    config: &DiagnostConfig,
) -> Result<QuizDefinition> {
    if let Some(path) = &selector.quiz {
        return parser::parse_quiz(path);
    }

    let course = selector
        .course
        .as_deref()
        .context("either --quiz or --course is required")?;
    let catalog = Catalog::new(parser::load_quiz_directory(&config.quiz_dir)?);

    let section = match &selector.section {
        Some(section) => section.clone(),
        None if catalog.is_single_exam(course) => catalog.sections(course)[0].to_string(),
        None => anyhow::bail!(
            "course '{}' has sections {:?}; pass --section",
            course,
            catalog.sections(course)
        ),
    };

    catalog
        .get(course, &section)
        .cloned()
        .with_context(|| format!("no diagnostic quiz for {course}/{section}"))
}

/// Print and/or write a result in the requested formats.
pub(crate) fn emit_result(result: &DiagnosticResult, format: &str, output: &Path) -> Result<()> {
    let formats: Vec<&str> = if format == "all" {
        vec!["text", "json", "markdown", "html"]
    } else {
        format.split(',').map(str::trim).collect()
    };
    let writes_files = format == "all";

    for fmt in &formats {
        match *fmt {
            "text" => print_summary(result),
            "json" => {
                let path = output.join(result_file_name(result));
                write_json_result(result, &path)?;
                eprintln!("Result saved to: {}", path.display());
            }
            "markdown" | "md" if writes_files => {
                let path = output.join(format!("{}-{}.md", result.course, result.section));
                std::fs::create_dir_all(output)?;
                std::fs::write(&path, generate_markdown(result))?;
                eprintln!("Markdown report: {}", path.display());
            }
            "markdown" | "md" => println!("{}", generate_markdown(result)),
            "html" => {
                let path = output.join(format!("{}-{}.html", result.course, result.section));
                write_html_report(result, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}

fn print_summary(result: &DiagnosticResult) {
    use comfy_table::{Cell, Table};

    println!(
        "{} {} diagnostic: {}/{} correct ({}%) — {}",
        result.course.to_uppercase(),
        result.section,
        result.score,
        result.total_questions,
        result.percentage,
        if result.passed { "PASSED" } else { "NOT PASSED" }
    );
    println!(
        "Answered {} of {} in {}",
        result.answered_count,
        result.total_questions,
        result.time_spent_display()
    );

    if !result.area_scores.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Area", "Score", "Percent", "Band"]);
        for area in &result.area_scores {
            table.add_row(vec![
                Cell::new(&area.area_name),
                Cell::new(format!("{}/{}", area.correct, area.total)),
                Cell::new(format!("{}%", area.percentage)),
                Cell::new(area.band()),
            ]);
        }
        println!("\n{table}");
    }

    if !result.weak_areas.is_empty() {
        let names: Vec<&str> = result.weak_areas.iter().map(|a| a.area_name.as_str()).collect();
        println!("\nFocus areas: {}", names.join(", "));
    }
    if !result.strong_areas.is_empty() {
        let names: Vec<&str> = result
            .strong_areas
            .iter()
            .map(|a| a.area_name.as_str())
            .collect();
        println!("Strengths: {}", names.join(", "));
    }

    if !result.recommendations.is_empty() {
        println!("\nRecommendations:");
        for r in &result.recommendations {
            println!("  - {r}");
        }
    }
}
