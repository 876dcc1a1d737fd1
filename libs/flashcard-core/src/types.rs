//! Card model shared by the session engine and its drivers.

use crate::error::CardError;
use serde::{Deserialize, Serialize};

/// Marker substituted for the cloze target in a cloze card's partial text.
pub const DEFAULT_PLACEHOLDER: &str = "...";

/// Card variant discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Basic,
    Cloze,
}

impl CardKind {
    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Cloze => "cloze",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(Self::Basic),
            "cloze" => Some(Self::Cloze),
            _ => None,
        }
    }

    /// Human-readable label used in feedback messages.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Cloze => "Cloze",
        }
    }
}

/// Literal front prompt with an expected back answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicCard {
    front: String,
    back: String,
}

impl BasicCard {
    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }
}

/// Sentence with one term blanked out; the blanked term is the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClozeCard {
    full_text: String,
    cloze_target: String,
    partial: String,
}

impl ClozeCard {
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn cloze_target(&self) -> &str {
        &self.cloze_target
    }

    /// Full text with every occurrence of the target replaced by the placeholder.
    pub fn partial(&self) -> &str {
        &self.partial
    }
}

/// Immutable flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Card {
    Basic(BasicCard),
    Cloze(ClozeCard),
}

impl Card {
    /// Build a basic card. Both sides must be non-empty.
    pub fn basic(front: impl Into<String>, back: impl Into<String>) -> Result<Self, CardError> {
        let front = front.into();
        let back = back.into();
        if front.is_empty() {
            return Err(CardError::EmptyField { field: "front" });
        }
        if back.is_empty() {
            return Err(CardError::EmptyField { field: "back" });
        }
        Ok(Self::Basic(BasicCard { front, back }))
    }

    /// Build a cloze card using [`DEFAULT_PLACEHOLDER`].
    pub fn cloze(
        full_text: impl Into<String>,
        cloze_target: impl Into<String>,
    ) -> Result<Self, CardError> {
        Self::cloze_with_placeholder(full_text, cloze_target, DEFAULT_PLACEHOLDER)
    }

    /// Build a cloze card, blanking every occurrence of `cloze_target` with `placeholder`.
    pub fn cloze_with_placeholder(
        full_text: impl Into<String>,
        cloze_target: impl Into<String>,
        placeholder: &str,
    ) -> Result<Self, CardError> {
        let full_text = full_text.into();
        let cloze_target = cloze_target.into();
        if full_text.is_empty() {
            return Err(CardError::EmptyField { field: "full text" });
        }
        if cloze_target.is_empty() {
            return Err(CardError::EmptyField {
                field: "cloze target",
            });
        }
        if !full_text.contains(&cloze_target) {
            return Err(CardError::TargetNotFound {
                target: cloze_target,
            });
        }

        let partial = full_text.replace(&cloze_target, placeholder);
        // Reachable when the placeholder equals the target.
        if partial == full_text {
            return Err(CardError::NothingReplaced);
        }

        Ok(Self::Cloze(ClozeCard {
            full_text,
            cloze_target,
            partial,
        }))
    }

    pub fn kind(&self) -> CardKind {
        match self {
            Self::Basic(_) => CardKind::Basic,
            Self::Cloze(_) => CardKind::Cloze,
        }
    }

    /// Text shown to the user when quizzing: the front or the partial text.
    pub fn prompt(&self) -> &str {
        match self {
            Self::Basic(card) => card.front(),
            Self::Cloze(card) => card.partial(),
        }
    }

    /// The answer a quiz on this card expects.
    pub fn expected_answer(&self) -> &str {
        match self {
            Self::Basic(card) => card.back(),
            Self::Cloze(card) => card.cloze_target(),
        }
    }
}

/// The two cards every session starts with.
pub fn default_cards(placeholder: &str) -> Result<Vec<Card>, CardError> {
    Ok(vec![
        Card::basic(
            "Who was the US president at the beginning of WW2?",
            "Franklin D. Roosevelt",
        )?,
        Card::cloze_with_placeholder(
            "Hitler was the leader of Nazi Germany.",
            "Hitler",
            placeholder,
        )?,
    ])
}
