//! The grading engine.
//!
//! Pure, synchronous, stateless: callers select a bank, collect answers on
//! their side, and submit the whole response set in one call. Grading is
//! atomic and total across every item in the bank.

use serde::{Deserialize, Serialize};

use crate::banks;
use crate::error::EngineError;
use crate::model::{
    BankItems, CorrectionItem, ExerciseKind, FillBlankItem, MultipleChoiceItem, QuestionBank,
    ResponseSet, UserResponse,
};

/// Qualitative score band used for feedback messaging.
///
/// Four contiguous half-open intervals covering 0..=100: lower bounds are
/// inclusive, so 90 is excellent and 89 is good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Excellent,
    Good,
    Practice,
    Review,
}

impl Tier {
    /// Map a 0-100 percentage to its tier.
    pub fn for_percentage(percentage: u8) -> Tier {
        match percentage {
            90..=u8::MAX => Tier::Excellent,
            70..=89 => Tier::Good,
            50..=69 => Tier::Practice,
            _ => Tier::Review,
        }
    }

    /// The feedback message shown alongside the score.
    pub fn message(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent work!",
            Tier::Good => "Good job!",
            Tier::Practice => "Keep practicing!",
            Tier::Review => "Review the topics and try again!",
        }
    }
}

/// The verdict for a single item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemVerdict {
    /// 0-based index into the bank.
    pub index: usize,
    /// Whether the user's answer was accepted.
    pub is_correct: bool,
    /// Remediation text revealing the expected answer.
    pub correct_display: String,
}

/// The outcome of grading one response set against one bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradedResult {
    /// Per-item verdicts, one per bank item, in bank order.
    pub verdicts: Vec<ItemVerdict>,
    /// Count of correct items.
    pub score: u32,
    /// Count of items in the bank, independent of how many were answered.
    pub total: u32,
    /// `round(100 * score / total)`, round-half-up.
    pub percentage: u8,
    /// Score band for feedback messaging.
    pub tier: Tier,
}

/// Lowercase and trim surrounding whitespace before comparison.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// The first three whitespace-separated tokens of a normalized sentence,
/// rejoined with single spaces. Fewer than three tokens yield a shorter
/// prefix; an empty sentence yields an empty prefix.
fn answer_prefix(normalized: &str) -> String {
    normalized
        .split_whitespace()
        .take(3)
        .collect::<Vec<_>>()
        .join(" ")
}

fn grade_multiple_choice(
    item: &MultipleChoiceItem,
    response: Option<&UserResponse>,
) -> (bool, String) {
    let is_correct = matches!(response, Some(UserResponse::Choice(i)) if *i == item.correct_index);
    // The correct option text is always revealed, answered or not.
    (is_correct, item.options[item.correct_index].clone())
}

fn grade_fill_blank(
    item: &FillBlankItem,
    response: Option<&UserResponse>,
) -> (bool, String) {
    let expected = normalize(&item.answer);
    let is_correct = match response {
        Some(UserResponse::Text(text)) => {
            let given = normalize(text);
            !given.is_empty() && given == expected
        }
        _ => false,
    };
    (is_correct, format!("Correct: {expected}"))
}

fn grade_correction(
    item: &CorrectionItem,
    response: Option<&UserResponse>,
) -> (bool, String) {
    let expected = normalize(&item.correct);
    // Loose similarity: the user's sentence must contain the first three
    // tokens of the canonical correction. An empty canonical sentence has an
    // empty prefix and accepts anything.
    let prefix = answer_prefix(&expected);
    let is_correct = match response {
        Some(UserResponse::Text(text)) => normalize(text).contains(&prefix),
        _ => prefix.is_empty(),
    };
    (is_correct, format!("Suggested: {expected}"))
}

/// Grade a response set against a bank.
///
/// `responses` may be shorter than the bank; missing entries grade as
/// incorrect but still count toward `total`. An empty bank is a data
/// misconfiguration and fails with [`EngineError::NoQuestions`].
pub fn grade(bank: &QuestionBank, responses: &ResponseSet) -> Result<GradedResult, EngineError> {
    if bank.is_empty() {
        return Err(EngineError::NoQuestions(bank.id.clone()));
    }

    let answer_at = |index: usize| responses.get(index).and_then(|r| r.as_ref());

    let verdicts: Vec<ItemVerdict> = match &bank.items {
        BankItems::MultipleChoice(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let (is_correct, correct_display) =
                    grade_multiple_choice(item, answer_at(index));
                ItemVerdict {
                    index,
                    is_correct,
                    correct_display,
                }
            })
            .collect(),
        BankItems::FillBlank(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let (is_correct, correct_display) = grade_fill_blank(item, answer_at(index));
                ItemVerdict {
                    index,
                    is_correct,
                    correct_display,
                }
            })
            .collect(),
        BankItems::Correction(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let (is_correct, correct_display) = grade_correction(item, answer_at(index));
                ItemVerdict {
                    index,
                    is_correct,
                    correct_display,
                }
            })
            .collect(),
    };

    let score = verdicts.iter().filter(|v| v.is_correct).count() as u32;
    let total = verdicts.len() as u32;
    let percentage = (f64::from(score) / f64::from(total) * 100.0).round() as u8;
    let tier = Tier::for_percentage(percentage);

    tracing::debug!(
        bank = %bank.id,
        score,
        total,
        percentage,
        "graded response set"
    );

    Ok(GradedResult {
        verdicts,
        score,
        total,
        percentage,
        tier,
    })
}

/// A pure selection of one exercise kind against the built-in banks.
///
/// Holds no answer state: all in-progress state lives with the caller until
/// submission, and re-creating a session for the same kind sees the identical
/// bank.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseSession {
    kind: ExerciseKind,
}

impl ExerciseSession {
    pub fn new(kind: ExerciseKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    /// The ordered question set for this session's kind.
    pub fn questions(&self) -> &'static QuestionBank {
        banks::builtin(self.kind)
    }

    /// Grade a response set against this session's bank.
    pub fn grade(&self, responses: &ResponseSet) -> Result<GradedResult, EngineError> {
        grade(self.questions(), responses)
    }
}
