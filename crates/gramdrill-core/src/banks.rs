//! Built-in question banks.
//!
//! Loaded once, immutable for the process lifetime. Selecting the same kind
//! twice returns the identical bank instance.

use std::sync::OnceLock;

use crate::model::{
    BankItems, CorrectionItem, ExerciseKind, FillBlankItem, MultipleChoiceItem, QuestionBank,
};

/// The built-in bank for one exercise kind.
pub fn builtin(kind: ExerciseKind) -> &'static QuestionBank {
    static MULTIPLE_CHOICE: OnceLock<QuestionBank> = OnceLock::new();
    static FILL_BLANK: OnceLock<QuestionBank> = OnceLock::new();
    static CORRECTION: OnceLock<QuestionBank> = OnceLock::new();

    match kind {
        ExerciseKind::MultipleChoice => MULTIPLE_CHOICE.get_or_init(multiple_choice),
        ExerciseKind::FillBlank => FILL_BLANK.get_or_init(fill_blank),
        ExerciseKind::Correction => CORRECTION.get_or_init(correction),
    }
}

fn multiple_choice() -> QuestionBank {
    let items = vec![
        MultipleChoiceItem {
            prompt: "Which of the following is a proper noun?".into(),
            options: vec![
                "city".into(),
                "London".into(),
                "happiness".into(),
                "quickly".into(),
            ],
            correct_index: 1,
        },
        MultipleChoiceItem {
            prompt: "What type of verb is 'seem' in the sentence 'She seems happy'?".into(),
            options: vec![
                "Action verb".into(),
                "Helping verb".into(),
                "Linking verb".into(),
                "Modal verb".into(),
            ],
            correct_index: 2,
        },
        MultipleChoiceItem {
            prompt: "Which sentence is in the present perfect tense?".into(),
            options: vec![
                "I work every day".into(),
                "I am working now".into(),
                "I have worked here for 5 years".into(),
                "I will work tomorrow".into(),
            ],
            correct_index: 2,
        },
        MultipleChoiceItem {
            prompt: "What type of sentence is: 'Although it was raining, we went for a walk'?"
                .into(),
            options: vec![
                "Simple".into(),
                "Compound".into(),
                "Complex".into(),
                "Compound-complex".into(),
            ],
            correct_index: 2,
        },
    ];
    QuestionBank {
        id: "builtin-multiple-choice".into(),
        name: "Multiple Choice Questions".into(),
        items: BankItems::MultipleChoice(items),
    }
}

fn fill_blank() -> QuestionBank {
    let items = vec![
        FillBlankItem {
            sentence: "She ___ to the store every morning.".into(),
            answer: "goes".into(),
        },
        FillBlankItem {
            sentence: "They ___ been studying for three hours.".into(),
            answer: "have".into(),
        },
        FillBlankItem {
            sentence: "If I ___ rich, I would buy a mansion.".into(),
            answer: "were".into(),
        },
        FillBlankItem {
            sentence: "The book ___ written by Shakespeare.".into(),
            answer: "was".into(),
        },
    ];
    QuestionBank {
        id: "builtin-fill-blank".into(),
        name: "Fill in the Blanks".into(),
        items: BankItems::FillBlank(items),
    }
}

fn correction() -> QuestionBank {
    let items = vec![
        CorrectionItem {
            incorrect: "Me and my friend went to the movies.".into(),
            correct: "My friend and I went to the movies.".into(),
        },
        CorrectionItem {
            incorrect: "She don't like chocolate.".into(),
            correct: "She doesn't like chocolate.".into(),
        },
        CorrectionItem {
            incorrect: "I have went to the store.".into(),
            correct: "I have gone to the store.".into(),
        },
        CorrectionItem {
            incorrect: "There house is beautiful.".into(),
            correct: "Their house is beautiful.".into(),
        },
    ];
    QuestionBank {
        id: "builtin-correction".into(),
        name: "Sentence Correction".into(),
        items: BankItems::Correction(items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::validate_bank;

    #[test]
    fn builtin_banks_are_nonempty_and_well_formed() {
        for kind in ExerciseKind::ALL {
            let bank = builtin(kind);
            assert_eq!(bank.kind(), kind);
            assert!(!bank.is_empty());
            assert!(validate_bank(bank).is_empty(), "warnings for {kind}");
        }
    }

    #[test]
    fn repeated_selection_returns_the_same_instance() {
        for kind in ExerciseKind::ALL {
            assert!(std::ptr::eq(builtin(kind), builtin(kind)));
        }
    }

    #[test]
    fn multiple_choice_indices_are_in_range() {
        let bank = builtin(ExerciseKind::MultipleChoice);
        if let BankItems::MultipleChoice(items) = &bank.items {
            for item in items {
                assert!(item.correct_index < item.options.len());
                assert!(item.options.len() >= 2);
            }
        } else {
            panic!("wrong shape");
        }
    }
}
