//! Core data model types for gramdrill.
//!
//! These are the fundamental types the whole system uses to represent
//! question banks, exercise items, and user responses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// The marker inside a fill-in-the-blank sentence that the answer replaces.
pub const BLANK_MARKER: &str = "___";

/// The three exercise kinds. A closed set: anything else is a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseKind {
    MultipleChoice,
    FillBlank,
    Correction,
}

impl ExerciseKind {
    /// All kinds, in presentation order.
    pub const ALL: [ExerciseKind; 3] = [
        ExerciseKind::MultipleChoice,
        ExerciseKind::FillBlank,
        ExerciseKind::Correction,
    ];
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseKind::MultipleChoice => write!(f, "multiple-choice"),
            ExerciseKind::FillBlank => write!(f, "fill-blank"),
            ExerciseKind::Correction => write!(f, "correction"),
        }
    }
}

impl FromStr for ExerciseKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "multiple-choice" | "mc" => Ok(ExerciseKind::MultipleChoice),
            "fill-blank" | "fill-blanks" | "fb" => Ok(ExerciseKind::FillBlank),
            "correction" | "sentence-correction" => Ok(ExerciseKind::Correction),
            other => Err(EngineError::InvalidExerciseKind(other.to_string())),
        }
    }
}

/// A multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultipleChoiceItem {
    /// The question text.
    pub prompt: String,
    /// The answer options, at least two.
    pub options: Vec<String>,
    /// 0-based index of the correct option. Always in range.
    pub correct_index: usize,
}

/// A fill-in-the-blank sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillBlankItem {
    /// The sentence containing exactly one `___` marker.
    pub sentence: String,
    /// The accepted fill-in.
    pub answer: String,
}

/// A sentence-correction exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionItem {
    /// The sentence containing a grammar error.
    pub incorrect: String,
    /// The canonical corrected sentence.
    pub correct: String,
}

/// The items of a bank. Every item in a bank has the same shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BankItems {
    MultipleChoice(Vec<MultipleChoiceItem>),
    FillBlank(Vec<FillBlankItem>),
    Correction(Vec<CorrectionItem>),
}

impl BankItems {
    pub fn kind(&self) -> ExerciseKind {
        match self {
            BankItems::MultipleChoice(_) => ExerciseKind::MultipleChoice,
            BankItems::FillBlank(_) => ExerciseKind::FillBlank,
            BankItems::Correction(_) => ExerciseKind::Correction,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            BankItems::MultipleChoice(items) => items.len(),
            BankItems::FillBlank(items) => items.len(),
            BankItems::Correction(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A fixed, ordered collection of questions of one kind.
///
/// Banks are reference data: immutable once loaded, never mutated during a
/// session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    /// Unique identifier for this bank.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// The questions, all of one shape.
    pub items: BankItems,
}

impl QuestionBank {
    pub fn kind(&self) -> ExerciseKind {
        self.items.kind()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One user answer: a selected option index for multiple-choice, free text
/// for the other two kinds.
///
/// Serializes untagged, so a JSON response file is a flat array like
/// `[1, null, "goes"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserResponse {
    Choice(usize),
    Text(String),
}

/// Ordered user answers, index-aligned with the active bank's items.
///
/// May be shorter than the bank; items with no entry grade as incorrect.
/// `None` entries are explicit "no answer" markers.
pub type ResponseSet = Vec<Option<UserResponse>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display_and_parse() {
        assert_eq!(ExerciseKind::MultipleChoice.to_string(), "multiple-choice");
        assert_eq!(ExerciseKind::FillBlank.to_string(), "fill-blank");
        assert_eq!(ExerciseKind::Correction.to_string(), "correction");
        assert_eq!(
            "multiple-choice".parse::<ExerciseKind>().unwrap(),
            ExerciseKind::MultipleChoice
        );
        assert_eq!(
            "Fill-Blank".parse::<ExerciseKind>().unwrap(),
            ExerciseKind::FillBlank
        );
        assert_eq!(
            "sentence-correction".parse::<ExerciseKind>().unwrap(),
            ExerciseKind::Correction
        );
    }

    #[test]
    fn unknown_kind_is_invalid() {
        let err = "essay".parse::<ExerciseKind>().unwrap_err();
        assert!(err.to_string().contains("invalid exercise kind"));
    }

    #[test]
    fn response_set_deserializes_from_flat_json() {
        let set: ResponseSet = serde_json::from_str(r#"[1, null, "goes"]"#).unwrap();
        assert_eq!(set[0], Some(UserResponse::Choice(1)));
        assert_eq!(set[1], None);
        assert_eq!(set[2], Some(UserResponse::Text("goes".into())));
    }

    #[test]
    fn bank_len_matches_items() {
        let bank = QuestionBank {
            id: "t".into(),
            name: "T".into(),
            items: BankItems::FillBlank(vec![FillBlankItem {
                sentence: format!("She {BLANK_MARKER} home."),
                answer: "goes".into(),
            }]),
        };
        assert_eq!(bank.kind(), ExerciseKind::FillBlank);
        assert_eq!(bank.len(), 1);
        assert!(!bank.is_empty());
    }
}
