//! Interactive flashcard session engine.
//!
//! Provides:
//! - Card model (basic and cloze cards)
//! - Append-only card store with append notifications
//! - Pairing of the two answers that make up a new card
//! - Case-insensitive quiz answer checking
//! - The dialogue state machine and the loop that drives it through a prompt driver

pub mod driver;
pub mod error;
pub mod matching;
pub mod pairing;
pub mod prompt;
pub mod session;
pub mod store;
pub mod types;

pub use driver::{run_session, PromptDriver, SessionSummary};
pub use error::{CardError, Result, SessionError, ValidationError};
pub use matching::{compare_answer, evaluate, MatchResult};
pub use pairing::{CardCreated, PendingPair};
pub use prompt::{Answer, Choice, Feedback, Question, QuestionId, QuestionKind, Validator};
pub use session::{Session, SessionConfig, SessionState, Step};
pub use store::{CardAdded, CardStore};
pub use types::{default_cards, BasicCard, Card, CardKind, ClozeCard, DEFAULT_PLACEHOLDER};
