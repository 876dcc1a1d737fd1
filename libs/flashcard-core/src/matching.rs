//! Answer checking for quiz rounds.

use crate::types::Card;
use serde::Serialize;

/// Result of checking a submitted answer against a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// The answer the card expects (for display).
    pub expected: String,
}

/// Whether `submitted` matches the card's expected answer.
///
/// Basic cards compare against the back, cloze cards against the cloze
/// target. Matching is whole-string and case-insensitive; there is no
/// partial credit.
pub fn evaluate(card: &Card, submitted: &str) -> bool {
    answers_match(submitted, card.expected_answer())
}

/// Like [`evaluate`], but also reports the expected answer.
pub fn compare_answer(card: &Card, submitted: &str) -> MatchResult {
    let expected = card.expected_answer();
    MatchResult {
        is_correct: answers_match(submitted, expected),
        expected: expected.to_string(),
    }
}

fn answers_match(typed: &str, correct: &str) -> bool {
    typed.to_lowercase() == correct.to_lowercase()
}
