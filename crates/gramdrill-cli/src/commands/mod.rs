pub mod grade;
pub mod init;
pub mod show;
pub mod topics;
pub mod validate;

use std::path::PathBuf;

use anyhow::{Context, Result};

use gramdrill_core::model::{ExerciseKind, QuestionBank};
use gramdrill_core::{banks, parser};

/// Resolve the active bank from `--kind` (built-in) or `--bank` (custom file).
///
/// Exactly one of the two must be given. A custom bank is returned owned; a
/// built-in bank is cloned so both paths hand back the same type.
pub fn resolve_bank(kind: Option<String>, bank_path: Option<PathBuf>) -> Result<QuestionBank> {
    match (kind, bank_path) {
        (Some(kind), None) => {
            let kind: ExerciseKind = kind.parse()?;
            Ok(banks::builtin(kind).clone())
        }
        (None, Some(path)) => parser::parse_bank(&path)
            .with_context(|| format!("failed to load bank {}", path.display())),
        (Some(_), Some(_)) => anyhow::bail!("--kind and --bank are mutually exclusive"),
        (None, None) => anyhow::bail!("one of --kind or --bank is required"),
    }
}
