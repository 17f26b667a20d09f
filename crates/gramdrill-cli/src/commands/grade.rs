//! The `gramdrill grade` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use gramdrill_core::engine::grade;
use gramdrill_core::model::ResponseSet;
use gramdrill_core::report::QuizReport;
use gramdrill_report::html::write_html_report;
use gramdrill_report::markdown::write_markdown_report;

pub fn execute(
    kind: Option<String>,
    bank_path: Option<PathBuf>,
    responses_path: PathBuf,
    output: PathBuf,
    format: String,
) -> Result<()> {
    let bank = super::resolve_bank(kind, bank_path)?;

    let content = std::fs::read_to_string(&responses_path).with_context(|| {
        format!("failed to read response file {}", responses_path.display())
    })?;
    let responses: ResponseSet = serde_json::from_str(&content).with_context(|| {
        format!("failed to parse response JSON {}", responses_path.display())
    })?;

    if responses.len() > bank.len() {
        tracing::warn!(
            given = responses.len(),
            expected = bank.len(),
            "more responses than questions, extras are ignored"
        );
    }

    let result = grade(&bank, &responses)?;
    let report = QuizReport::new(&bank, result);

    let formats: Vec<&str> = if format == "all" {
        vec!["text", "json", "html", "markdown"]
    } else {
        format.split(',').map(|s| s.trim()).collect()
    };

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

    for fmt in &formats {
        match *fmt {
            "text" => print_result(&report),
            "json" => {
                let path = output.join(format!("results-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Results saved to: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("results-{timestamp}.html"));
                write_html_report(&report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            "markdown" => {
                let path = output.join(format!("results-{timestamp}.md"));
                write_markdown_report(&report, &path)?;
                eprintln!("Markdown report: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}

fn print_result(report: &QuizReport) {
    let result = &report.result;

    let mut table = Table::new();
    table.set_header(vec!["#", "Result", "Remediation"]);

    for v in &result.verdicts {
        table.add_row(vec![
            Cell::new(v.index + 1),
            Cell::new(if v.is_correct { "correct" } else { "incorrect" }),
            Cell::new(&v.correct_display),
        ]);
    }

    println!("{table}");
    println!(
        "\nScore: {}/{} ({}%)",
        result.score, result.total, result.percentage
    );
    println!("{}", result.tier.message());
}
