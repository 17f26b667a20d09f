//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use gramdrill_core::engine::Tier;
use gramdrill_core::report::QuizReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from a quiz report.
pub fn generate_html(report: &QuizReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>gramdrill results — {}</title>\n",
        html_escape(&report.bank.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>gramdrill results</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Bank: <strong>{}</strong> | {} | {} questions | {}</p>\n",
        html_escape(&report.bank.name),
        report.bank.kind,
        report.bank.item_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Score summary
    let result = &report.result;
    html.push_str("<section class=\"score\">\n");
    html.push_str(&format!(
        "<h2>Score: {}/{} ({}%)</h2>\n",
        result.score, result.total, result.percentage
    ));
    html.push_str(&format!(
        "<p class=\"tier tier-{:?}\">{}</p>\n",
        result.tier,
        html_escape(result.tier.message())
    ));
    html.push_str(&score_bar(result.percentage));
    html.push_str("</section>\n");

    // Per-item verdicts
    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2>Answers</h2>\n");
    html.push_str("<table class=\"results-table\">\n");
    html.push_str("<thead><tr><th>#</th><th>Result</th><th>Remediation</th></tr></thead>\n");
    html.push_str("<tbody>\n");

    for v in &result.verdicts {
        let (class, text) = if v.is_correct {
            ("pass", "Correct")
        } else {
            ("fail", "Incorrect")
        };
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td class=\"{}\">{}</td><td>{}</td></tr>\n",
            class,
            v.index + 1,
            class,
            text,
            html_escape(&v.correct_display)
        ));
    }

    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &QuizReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn score_bar(percentage: u8) -> String {
    let max_width = 400;
    let bar_height = 30;
    let width = usize::from(percentage) * max_width / 100;

    let color = match Tier::for_percentage(percentage) {
        Tier::Excellent | Tier::Good => "#22c55e",
        Tier::Practice => "#eab308",
        Tier::Review => "#ef4444",
    };

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        max_width + 60,
        bar_height
    );
    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{max_width}\" height=\"{bar_height}\" fill=\"var(--border, #e5e7eb)\" rx=\"4\"/>\n"
    ));
    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{bar_height}\" fill=\"{color}\" rx=\"4\"/>\n"
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}%</text>\n",
        max_width + 8,
        bar_height / 2,
        percentage
    ));
    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.tier { font-size: 1.2rem; font-weight: bold; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.pass { background: var(--pass); }
.fail { background: var(--fail); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use gramdrill_core::banks;
    use gramdrill_core::engine::grade;
    use gramdrill_core::model::{ExerciseKind, UserResponse};
    use gramdrill_core::report::QuizReport;

    fn make_test_report() -> QuizReport {
        let bank = banks::builtin(ExerciseKind::FillBlank);
        let responses = vec![
            Some(UserResponse::Text("goes".into())),
            Some(UserResponse::Text("has".into())),
        ];
        let result = grade(bank, &responses).unwrap();
        QuizReport::new(bank, result)
    }

    #[test]
    fn html_contains_score_and_verdicts() {
        let report = make_test_report();
        let html = generate_html(&report);

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Score: 1/4 (25%)"));
        assert!(html.contains("Review the topics and try again!"));
        assert!(html.contains("Correct: have"));
        assert!(html.contains("class=\"pass\""));
        assert!(html.contains("class=\"fail\""));
    }

    #[test]
    fn html_escapes_bank_name() {
        let mut report = make_test_report();
        report.bank.name = "<script>alert(1)</script>".into();
        let html = generate_html(&report);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/results.html");
        write_html_report(&make_test_report(), &path).unwrap();
        assert!(path.exists());
    }
}
