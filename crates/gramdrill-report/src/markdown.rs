//! Markdown summary generator.

use anyhow::Result;
use std::fmt::Write as _;
use std::path::Path;

use gramdrill_core::report::QuizReport;

/// Generate a Markdown summary from a quiz report.
pub fn generate_markdown(report: &QuizReport) -> String {
    let mut md = String::new();
    let result = &report.result;

    let _ = writeln!(md, "# gramdrill results — {}", report.bank.name);
    let _ = writeln!(md);
    let _ = writeln!(
        md,
        "- **Kind**: {} | **Questions**: {}",
        report.bank.kind, report.bank.item_count
    );
    let _ = writeln!(
        md,
        "- **Score**: {}/{} ({}%)",
        result.score, result.total, result.percentage
    );
    let _ = writeln!(md, "- **Feedback**: {}", result.tier.message());
    let _ = writeln!(
        md,
        "- **Graded at**: {}",
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(md);
    let _ = writeln!(md, "| # | Result | Remediation |");
    let _ = writeln!(md, "|---|--------|-------------|");

    for v in &result.verdicts {
        let mark = if v.is_correct { "correct" } else { "incorrect" };
        let _ = writeln!(
            md,
            "| {} | {} | {} |",
            v.index + 1,
            mark,
            v.correct_display.replace('|', "\\|")
        );
    }

    md
}

/// Write a Markdown report to a file.
pub fn write_markdown_report(report: &QuizReport, path: &Path) -> Result<()> {
    let md = generate_markdown(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, md)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gramdrill_core::banks;
    use gramdrill_core::engine::grade;
    use gramdrill_core::model::{ExerciseKind, UserResponse};

    #[test]
    fn markdown_contains_score_table() {
        let bank = banks::builtin(ExerciseKind::Correction);
        let responses = vec![Some(UserResponse::Text(
            "my friend and i went to the movies".into(),
        ))];
        let result = grade(bank, &responses).unwrap();
        let report = QuizReport::new(bank, result);

        let md = generate_markdown(&report);
        assert!(md.starts_with("# gramdrill results"));
        assert!(md.contains("**Score**: 1/4 (25%)"));
        assert!(md.contains("| 1 | correct |"));
        assert!(md.contains("Suggested: she doesn't like chocolate."));
    }
}
