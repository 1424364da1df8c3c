//! The `diagnost compare` command.

use std::path::PathBuf;

use anyhow::Result;

use diagnost_core::progress::compare;
use diagnost_report::json::read_json_result;

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    fail_on_regression: bool,
    format: String,
) -> Result<()> {
    let baseline = read_json_result(&baseline_path)?;
    let current = read_json_result(&current_path)?;

    let report = compare(&baseline, &current);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", report.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            // text format
            println!(
                "Overall: {}% -> {}% ({:+} points)",
                report.baseline_percentage, report.current_percentage, report.delta
            );
            if report.passed_before != report.passed_now {
                println!(
                    "{}",
                    if report.passed_now {
                        "Now passing"
                    } else {
                        "No longer passing"
                    }
                );
            }

            let regressions: Vec<_> = report.regressions().collect();
            if !regressions.is_empty() {
                println!("\nRegressions:");
                for c in regressions {
                    println!(
                        "  {} {}% -> {}% ({:+})",
                        c.area_name, c.baseline_percentage, c.current_percentage, c.delta
                    );
                }
            }

            let improvements: Vec<_> = report.improvements().collect();
            if !improvements.is_empty() {
                println!("\nImprovements:");
                for c in improvements {
                    println!(
                        "  {} {}% -> {}% ({:+})",
                        c.area_name, c.baseline_percentage, c.current_percentage, c.delta
                    );
                }
            }

            if !report.newly_weak.is_empty() {
                println!("\nNewly weak: {}", report.newly_weak.join(", "));
            }
            if !report.resolved_weak.is_empty() {
                println!("No longer weak: {}", report.resolved_weak.join(", "));
            }
            if report.new_areas > 0 {
                println!("\n{} new area(s)", report.new_areas);
            }
            if report.removed_areas > 0 {
                println!("{} removed area(s)", report.removed_areas);
            }
        }
    }

    if fail_on_regression && report.has_regressions() {
        std::process::exit(1);
    }

    Ok(())
}
