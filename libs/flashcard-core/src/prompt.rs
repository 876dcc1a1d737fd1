//! Question and answer descriptors exchanged with a prompt driver.

use crate::error::ValidationError;
use crate::types::CardKind;
use serde::{Deserialize, Serialize};

pub const MAIN_MENU_MESSAGE: &str = "What do you want to do?";
pub const CARD_TYPE_MESSAGE: &str = "Which card do you want to create?";
pub const BASIC_FRONT_MESSAGE: &str = "What is the 'front' text of the Basic card?";
pub const BASIC_BACK_MESSAGE: &str = "What is the 'back' text of the Basic card?";
pub const CLOZE_FULL_MESSAGE: &str = "What is the 'full' text of the Cloze card?";
pub const CLOZE_TARGET_MESSAGE: &str = "What is the 'cloze' text of the Cloze card?";
pub const SELECT_CARD_MESSAGE: &str = "Select a card to answer";
pub const EMPTY_TEXT_MESSAGE: &str = "Please enter some text.";
pub const PLACEHOLDER_TARGET_MESSAGE: &str =
    "Invalid input! The cloze text must differ from the blank marker.";
pub const INVALID_CLOZE_MESSAGE: &str = "Invalid input! The cloze text must appear in the full text.";

pub const ACTION_CREATE: &str = "create";
pub const ACTION_DISPLAY: &str = "display";
pub const ACTION_QUIT: &str = "quit";

/// Identifies which dialogue step a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    MainMenu,
    ChooseCardType,
    BasicFront,
    BasicBack,
    ClozeFull,
    ClozeTarget,
    SelectCard,
    QuizAnswer,
}

/// How a driver should collect the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Any non-empty line of text.
    FreeText,
    /// Exactly one of the listed choices.
    SingleChoice,
    /// Non-empty text that must pass the question's validator.
    ValidatedText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Input check attached to a validated-text question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    /// Input must be a non-empty substring of the held text.
    SubstringOf(String),
}

impl Validator {
    pub fn check(&self, input: &str) -> Result<(), ValidationError> {
        match self {
            Self::SubstringOf(text) => {
                if !input.is_empty() && text.contains(input) {
                    Ok(())
                } else {
                    Err(ValidationError::new(INVALID_CLOZE_MESSAGE))
                }
            }
        }
    }
}

/// One prompt issued to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub message: String,
    pub kind: QuestionKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator: Option<Validator>,
}

impl Question {
    pub fn free_text(id: QuestionId, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
            kind: QuestionKind::FreeText,
            choices: Vec::new(),
            validator: None,
        }
    }

    pub fn single_choice(id: QuestionId, message: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            id,
            message: message.into(),
            kind: QuestionKind::SingleChoice,
            choices,
            validator: None,
        }
    }

    pub fn validated(id: QuestionId, message: impl Into<String>, validator: Validator) -> Self {
        Self {
            id,
            message: message.into(),
            kind: QuestionKind::ValidatedText,
            choices: Vec::new(),
            validator: Some(validator),
        }
    }

    /// Find the choice matching `input` by value, or by its 1-based position.
    pub fn resolve_choice(&self, input: &str) -> Option<&Choice> {
        if let Some(choice) = self.choices.iter().find(|c| c.value == input) {
            return Some(choice);
        }
        input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| self.choices.get(idx))
    }
}

/// The user's reply to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: QuestionId,
    pub value: String,
}

impl Answer {
    pub fn new(id: QuestionId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

/// Outcome message for the user after an answer was processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Feedback {
    CardCreated { kind: CardKind, index: usize },
    Evaluated { correct: bool, expected: String },
    Rejected { message: String },
    Goodbye,
}

impl Feedback {
    pub fn message(&self) -> String {
        match self {
            Self::CardCreated { kind, .. } => format!(" - {} Card was created!", kind.title()),
            Self::Evaluated { correct: true, .. } => " - Great job!".to_string(),
            Self::Evaluated {
                correct: false,
                expected,
            } => format!(" - ...not this time! The answer was: {expected}"),
            Self::Rejected { message } => format!(" - {message}"),
            Self::Goodbye => " - Bye!".to_string(),
        }
    }
}
