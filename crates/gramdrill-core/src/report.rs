//! Quiz report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::GradedResult;
use crate::model::{ExerciseKind, QuestionBank};

/// A complete record of one graded quiz submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the bank that was graded.
    pub bank: BankSummary,
    /// The graded result, including per-item verdicts.
    pub result: GradedResult,
}

/// Summary of a bank (without the full question definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankSummary {
    pub id: String,
    pub name: String,
    pub kind: ExerciseKind,
    pub item_count: usize,
}

impl QuizReport {
    /// Build a report for a freshly graded result.
    pub fn new(bank: &QuestionBank, result: GradedResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            bank: BankSummary {
                id: bank.id.clone(),
                name: bank.name.clone(),
                kind: bank.kind(),
                item_count: bank.len(),
            },
            result,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: QuizReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banks;
    use crate::engine::grade;
    use crate::model::{ExerciseKind, UserResponse};

    fn sample_report() -> QuizReport {
        let bank = banks::builtin(ExerciseKind::MultipleChoice);
        let responses = vec![Some(UserResponse::Choice(1))];
        let result = grade(bank, &responses).unwrap();
        QuizReport::new(bank, result)
    }

    #[test]
    fn report_carries_bank_summary() {
        let report = sample_report();
        assert_eq!(report.bank.kind, ExerciseKind::MultipleChoice);
        assert_eq!(report.bank.item_count, 4);
        assert_eq!(report.result.total, 4);
    }

    #[test]
    fn json_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/quiz.json");

        let report = sample_report();
        report.save_json(&path).unwrap();

        let loaded = QuizReport::load_json(&path).unwrap();
        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.bank.id, report.bank.id);
        assert_eq!(loaded.result.score, report.result.score);
        assert_eq!(loaded.result.tier, report.result.tier);
    }

    #[test]
    fn load_missing_file_fails_with_context() {
        let err = QuizReport::load_json(Path::new("does-not-exist.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read report"));
    }
}
