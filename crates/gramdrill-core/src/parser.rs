//! TOML question bank parser.
//!
//! Loads custom banks from TOML files and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{
    BankItems, CorrectionItem, ExerciseKind, FillBlankItem, MultipleChoiceItem, QuestionBank,
    BLANK_MARKER,
};

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    items: Vec<TomlItem>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
    kind: String,
}

/// One item with the fields of all three shapes optional; the declared kind
/// decides which ones are required.
#[derive(Debug, Deserialize)]
struct TomlItem {
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    options: Option<Vec<String>>,
    #[serde(default)]
    correct_index: Option<usize>,
    #[serde(default)]
    sentence: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    incorrect: Option<String>,
    #[serde(default)]
    correct: Option<String>,
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read bank file: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let kind: ExerciseKind = parsed
        .bank
        .kind
        .parse()
        .map_err(|e: crate::error::EngineError| anyhow::anyhow!("{e}"))?;

    let items = match kind {
        ExerciseKind::MultipleChoice => {
            let converted = parsed
                .items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    let prompt = item
                        .prompt
                        .with_context(|| format!("item {i}: missing prompt"))?;
                    let options = item
                        .options
                        .with_context(|| format!("item {i}: missing options"))?;
                    let correct_index = item
                        .correct_index
                        .with_context(|| format!("item {i}: missing correct_index"))?;
                    anyhow::ensure!(
                        options.len() >= 2,
                        "item {i}: needs at least 2 options, has {}",
                        options.len()
                    );
                    anyhow::ensure!(
                        correct_index < options.len(),
                        "item {i}: correct_index {correct_index} out of range for {} options",
                        options.len()
                    );
                    Ok(MultipleChoiceItem {
                        prompt,
                        options,
                        correct_index,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            BankItems::MultipleChoice(converted)
        }
        ExerciseKind::FillBlank => {
            let converted = parsed
                .items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    let sentence = item
                        .sentence
                        .with_context(|| format!("item {i}: missing sentence"))?;
                    let answer = item
                        .answer
                        .with_context(|| format!("item {i}: missing answer"))?;
                    Ok(FillBlankItem { sentence, answer })
                })
                .collect::<Result<Vec<_>>>()?;
            BankItems::FillBlank(converted)
        }
        ExerciseKind::Correction => {
            let converted = parsed
                .items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    let incorrect = item
                        .incorrect
                        .with_context(|| format!("item {i}: missing incorrect"))?;
                    let correct = item
                        .correct
                        .with_context(|| format!("item {i}: missing correct"))?;
                    Ok(CorrectionItem { incorrect, correct })
                })
                .collect::<Result<Vec<_>>>()?;
            BankItems::Correction(converted)
        }
    };

    Ok(QuestionBank {
        id: parsed.bank.id,
        name: parsed.bank.name,
        items,
    })
}

/// Recursively load all `.toml` bank files from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 0-based item index (if applicable).
    pub item_index: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a bank for common issues.
///
/// These are soft problems: the bank still grades, but the content is
/// probably not what the author intended.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if bank.is_empty() {
        warnings.push(ValidationWarning {
            item_index: None,
            message: "bank contains no questions".into(),
        });
    }

    match &bank.items {
        BankItems::MultipleChoice(items) => {
            for (i, item) in items.iter().enumerate() {
                if item.prompt.trim().is_empty() {
                    warnings.push(ValidationWarning {
                        item_index: Some(i),
                        message: "prompt is empty".into(),
                    });
                }
                if item.options.iter().any(|o| o.trim().is_empty()) {
                    warnings.push(ValidationWarning {
                        item_index: Some(i),
                        message: "option text is empty".into(),
                    });
                }
            }
        }
        BankItems::FillBlank(items) => {
            for (i, item) in items.iter().enumerate() {
                let markers = item.sentence.matches(BLANK_MARKER).count();
                if markers != 1 {
                    warnings.push(ValidationWarning {
                        item_index: Some(i),
                        message: format!(
                            "sentence has {markers} blank markers, expected exactly 1"
                        ),
                    });
                }
                if item.answer.trim().is_empty() {
                    warnings.push(ValidationWarning {
                        item_index: Some(i),
                        message: "answer is empty".into(),
                    });
                }
            }
        }
        BankItems::Correction(items) => {
            for (i, item) in items.iter().enumerate() {
                if item.incorrect.trim().is_empty() {
                    warnings.push(ValidationWarning {
                        item_index: Some(i),
                        message: "incorrect sentence is empty".into(),
                    });
                }
                if item.correct.trim().is_empty() {
                    warnings.push(ValidationWarning {
                        item_index: Some(i),
                        message: "correct sentence is empty, every answer will be accepted"
                            .into(),
                    });
                }
            }
        }
    }

    warnings
}
