//! HTML report generator.
//!
//! The report is a single file: styles and the table-sorting script are
//! inlined so it can be mailed or opened offline.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use diagnost_core::area::{AreaScore, PerformanceBand};
use diagnost_core::result::DiagnosticResult;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn band_class(band: PerformanceBand) -> &'static str {
    match band {
        PerformanceBand::Strong => "band-strong",
        PerformanceBand::Adequate => "band-adequate",
        PerformanceBand::Developing => "band-developing",
        PerformanceBand::NeedsWork => "band-needs-work",
    }
}

/// Generate an HTML report from a diagnostic result.
pub fn generate_html(result: &DiagnosticResult) -> String {
    let title = html_escape(&format!(
        "{} {} diagnostic",
        result.course.to_uppercase(),
        result.section
    ));

    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n"
    );

    let _ = writeln!(html, "<h1>{title}</h1>");
    let _ = writeln!(
        html,
        "<p class=\"meta\">{} &middot; {} of {} answered &middot; {} &middot; completed {}</p>",
        html_escape(&result.quiz_id),
        result.answered_count,
        result.total_questions,
        result.time_spent_display(),
        result.completed_at.format("%Y-%m-%d %H:%M UTC")
    );

    let _ = writeln!(
        html,
        "<div class=\"overall {}\"><span class=\"big\">{}%</span> {} of {} correct &middot; {}</div>",
        band_class(result.band()),
        result.percentage,
        result.score,
        result.total_questions,
        if result.passed { "passed" } else { "not passed" }
    );

    if !result.area_scores.is_empty() {
        html.push_str("<h2>Areas</h2>\n");
        push_area_table(&mut html, &result.area_scores);
    }

    push_area_list(&mut html, "Focus areas", &result.weak_areas);
    push_area_list(&mut html, "Strengths", &result.strong_areas);

    if !result.recommendations.is_empty() {
        html.push_str("<h2>Recommendations</h2>\n<ol class=\"recommendations\">\n");
        for r in &result.recommendations {
            let _ = writeln!(html, "<li>{}</li>", html_escape(r));
        }
        html.push_str("</ol>\n");
    }

    let _ = write!(html, "<script>{SCRIPT}</script>\n</body>\n</html>\n");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(result: &DiagnosticResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, generate_html(result))
        .with_context(|| format!("failed to write HTML report to {}", path.display()))
}

fn push_area_table(html: &mut String, areas: &[AreaScore]) {
    html.push_str(
        "<table id=\"areas\">\n<thead><tr>\
         <th data-col=\"0\">Area</th><th data-col=\"1\">Score</th>\
         <th data-col=\"2\">Percent</th><th>Progress</th></tr></thead>\n<tbody>\n",
    );
    for a in areas {
        let _ = writeln!(
            html,
            "<tr class=\"{}\"><td>{}</td><td data-sort=\"{}\">{}/{}</td><td data-sort=\"{}\">{}%</td>\
             <td><div class=\"bar\"><div class=\"fill\" style=\"width:{}%\"></div></div> {}</td></tr>",
            band_class(a.band()),
            html_escape(&a.area_name),
            a.correct,
            a.correct,
            a.total,
            a.percentage,
            a.percentage,
            a.percentage.min(100),
            a.band()
        );
    }
    html.push_str("</tbody>\n</table>\n");
}

fn push_area_list(html: &mut String, heading: &str, areas: &[AreaScore]) {
    if areas.is_empty() {
        return;
    }
    let names: Vec<String> = areas
        .iter()
        .map(|a| format!("{} ({}%)", html_escape(&a.area_name), a.percentage))
        .collect();
    let _ = writeln!(html, "<p><strong>{heading}:</strong> {}</p>", names.join(", "));
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; line-height: 1.5; }
.meta { color: #666; font-size: 0.9rem; }
.overall { padding: 1rem 1.25rem; border-left: 6px solid; margin: 1.5rem 0; }
.overall .big { font-size: 2.25rem; font-weight: 700; margin-right: 0.5rem; }
table { border-collapse: collapse; width: 100%; }
th, td { padding: 0.4rem 0.6rem; border-bottom: 1px solid #ddd; text-align: left; }
th[data-col] { cursor: pointer; user-select: none; }
.bar { display: inline-block; width: 8rem; height: 0.6rem; background: #eee; border-radius: 3px; vertical-align: middle; }
.fill { height: 100%; border-radius: 3px; background: currentColor; }
.band-strong { color: #15803d; border-color: #15803d; }
.band-adequate { color: #1d4ed8; border-color: #1d4ed8; }
.band-developing { color: #b45309; border-color: #b45309; }
.band-needs-work { color: #b91c1c; border-color: #b91c1c; }
td:first-child { color: initial; }
.recommendations li { margin: 0.25rem 0; }
"#;

const SCRIPT: &str = r#"
document.querySelectorAll('#areas th[data-col]').forEach(th => {
  th.addEventListener('click', () => {
    const col = Number(th.dataset.col);
    const body = th.closest('table').tBodies[0];
    const key = tr => tr.cells[col].dataset.sort ?? tr.cells[col].textContent;
    const dir = th.dataset.dir === 'asc' ? -1 : 1;
    th.dataset.dir = dir === 1 ? 'asc' : 'desc';
    [...body.rows]
      .sort((a, b) => dir * String(key(a)).localeCompare(String(key(b)), undefined, { numeric: true }))
      .forEach(tr => body.appendChild(tr));
  });
});
"#;
