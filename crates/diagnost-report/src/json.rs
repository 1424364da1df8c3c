//! JSON persistence for diagnostic results.

use std::path::Path;

use anyhow::{Context, Result};

use diagnost_core::result::DiagnosticResult;

/// Save a result as pretty-printed JSON.
pub fn write_json_result(result: &DiagnosticResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("failed to serialize result")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write result to {}", path.display()))?;
    Ok(())
}

/// Load a result from a JSON file.
pub fn read_json_result(path: &Path) -> Result<DiagnosticResult> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read result from {}", path.display()))?;
    let result: DiagnosticResult =
        serde_json::from_str(&content).context("failed to parse result JSON")?;
    Ok(result)
}

/// File name a result is stored under: one per course section, so a retake
/// replaces the previous attempt.
pub fn result_file_name(result: &DiagnosticResult) -> String {
    format!("{}-{}.json", result.course, result.section)
}
