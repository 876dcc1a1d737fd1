//! Dialogue state machine driving card creation and quizzing.
//!
//! The session issues one [`Question`] at a time and consumes exactly one
//! [`Answer`] per question. All side effects of an answer (stashing a pair
//! half, committing a card, evaluating a quiz) complete inside
//! [`Session::handle`] before the next question is built, so a freshly
//! committed card is always visible in the following card list.

use crate::error::{Result, SessionError};
use crate::matching::compare_answer;
use crate::pairing::PendingPair;
use crate::prompt::{
    Answer, Choice, Feedback, Question, QuestionId, Validator, ACTION_CREATE, ACTION_DISPLAY,
    ACTION_QUIT, BASIC_BACK_MESSAGE, BASIC_FRONT_MESSAGE, CARD_TYPE_MESSAGE, CLOZE_FULL_MESSAGE,
    CLOZE_TARGET_MESSAGE, EMPTY_TEXT_MESSAGE, MAIN_MENU_MESSAGE, PLACEHOLDER_TARGET_MESSAGE,
    SELECT_CARD_MESSAGE,
};
use crate::store::{CardAdded, CardStore};
use crate::types::{default_cards, Card, CardKind, DEFAULT_PLACEHOLDER};
use std::sync::mpsc::Receiver;

/// Session construction options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Marker that replaces the cloze target in partial text.
    pub placeholder: String,
    /// Start the store with the two default cards.
    pub seed_defaults: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            seed_defaults: true,
        }
    }
}

/// Current step of the dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    MainMenu,
    ChooseCardType,
    AwaitingBasicFront,
    AwaitingBasicBack,
    AwaitingClozeFull,
    AwaitingClozeTarget,
    SelectingCard,
    AwaitingQuizAnswer,
    /// Entered only through the explicit quit choice.
    Finished,
}

impl SessionState {
    /// Id of the question this state issues, `None` once finished.
    pub fn question_id(&self) -> Option<QuestionId> {
        match self {
            Self::MainMenu => Some(QuestionId::MainMenu),
            Self::ChooseCardType => Some(QuestionId::ChooseCardType),
            Self::AwaitingBasicFront => Some(QuestionId::BasicFront),
            Self::AwaitingBasicBack => Some(QuestionId::BasicBack),
            Self::AwaitingClozeFull => Some(QuestionId::ClozeFull),
            Self::AwaitingClozeTarget => Some(QuestionId::ClozeTarget),
            Self::SelectingCard => Some(QuestionId::SelectCard),
            Self::AwaitingQuizAnswer => Some(QuestionId::QuizAnswer),
            Self::Finished => None,
        }
    }
}

/// What handling one answer produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub feedback: Option<Feedback>,
    /// Next question to issue; `None` when the session has finished.
    pub next: Option<Question>,
}

/// One interactive flashcard session.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    store: CardStore,
    pending: PendingPair,
    /// Card picked for the current quiz round.
    selected: Option<usize>,
    /// Number of cards offered by the last card list.
    listed: usize,
}

impl Session {
    /// Start a session at the main menu, seeding the store if configured.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let store = if config.seed_defaults {
            CardStore::seeded(default_cards(&config.placeholder)?)
        } else {
            CardStore::new()
        };
        Ok(Self::with_store(store, &config.placeholder))
    }

    /// Start a session over an existing store.
    pub fn with_store(store: CardStore, placeholder: &str) -> Self {
        Self {
            state: SessionState::MainMenu,
            store,
            pending: PendingPair::new(placeholder),
            selected: None,
            listed: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// Observe cards committed during this session.
    pub fn subscribe(&mut self) -> Receiver<CardAdded> {
        self.store.subscribe()
    }

    /// Build the question for the current state.
    pub fn question(&self) -> Result<Option<Question>> {
        let question = match self.state {
            SessionState::MainMenu => Question::single_choice(
                QuestionId::MainMenu,
                MAIN_MENU_MESSAGE,
                vec![
                    Choice::new("Create a new card", ACTION_CREATE),
                    Choice::new("Display cards and answer one", ACTION_DISPLAY),
                    Choice::new("Quit", ACTION_QUIT),
                ],
            ),
            SessionState::ChooseCardType => Question::single_choice(
                QuestionId::ChooseCardType,
                CARD_TYPE_MESSAGE,
                vec![
                    Choice::new("Basic card", CardKind::Basic.as_str()),
                    Choice::new("Cloze card", CardKind::Cloze.as_str()),
                ],
            ),
            SessionState::AwaitingBasicFront => {
                Question::free_text(QuestionId::BasicFront, BASIC_FRONT_MESSAGE)
            }
            SessionState::AwaitingBasicBack => {
                Question::free_text(QuestionId::BasicBack, BASIC_BACK_MESSAGE)
            }
            SessionState::AwaitingClozeFull => {
                Question::free_text(QuestionId::ClozeFull, CLOZE_FULL_MESSAGE)
            }
            SessionState::AwaitingClozeTarget => Question::validated(
                QuestionId::ClozeTarget,
                CLOZE_TARGET_MESSAGE,
                Validator::SubstringOf(self.pending_full_text()?.to_string()),
            ),
            SessionState::SelectingCard => Question::single_choice(
                QuestionId::SelectCard,
                SELECT_CARD_MESSAGE,
                self.store
                    .iter()
                    .take(self.listed)
                    .enumerate()
                    .map(|(idx, card)| Choice::new(card_label(card), (idx + 1).to_string()))
                    .collect(),
            ),
            SessionState::AwaitingQuizAnswer => {
                let card = self.store.get(self.selected_index()?)?;
                Question::free_text(QuestionId::QuizAnswer, card.prompt())
            }
            SessionState::Finished => return Ok(None),
        };
        Ok(Some(question))
    }

    /// Consume the answer to the current question and advance.
    ///
    /// Validation failures are reported as [`Feedback::Rejected`] and leave
    /// the state unchanged. Every returned error is fatal to the session.
    pub fn handle(&mut self, answer: Answer) -> Result<Step> {
        let expected = self.state.question_id().ok_or_else(|| {
            SessionError::ProtocolViolation("answer received after session finished".to_string())
        })?;
        if answer.id != expected {
            return Err(SessionError::ProtocolViolation(format!(
                "answer for {:?} received while waiting for {:?}",
                answer.id, expected
            )));
        }

        let value = answer.value;
        let feedback = match self.state {
            SessionState::MainMenu => self.on_main_menu(&value)?,
            SessionState::ChooseCardType => {
                let kind = CardKind::from_str(&value).ok_or_else(|| unknown_choice(&value))?;
                self.state = match kind {
                    CardKind::Basic => SessionState::AwaitingBasicFront,
                    CardKind::Cloze => SessionState::AwaitingClozeFull,
                };
                None
            }
            SessionState::AwaitingBasicFront if value.is_empty() => Some(empty_text_rejected()),
            SessionState::AwaitingBasicFront => {
                self.pending.submit_first(CardKind::Basic, value)?;
                self.state = SessionState::AwaitingBasicBack;
                None
            }
            SessionState::AwaitingBasicBack => Some(self.commit(CardKind::Basic, value)?),
            SessionState::AwaitingClozeFull if value.is_empty() => Some(empty_text_rejected()),
            SessionState::AwaitingClozeFull => {
                self.pending.submit_first(CardKind::Cloze, value)?;
                self.state = SessionState::AwaitingClozeTarget;
                None
            }
            SessionState::AwaitingClozeTarget => {
                let validator = Validator::SubstringOf(self.pending_full_text()?.to_string());
                match validator.check(&value) {
                    // Blanking the placeholder with itself would leave the text unchanged.
                    Ok(()) if value == self.pending.placeholder() => {
                        tracing::info!(target_text = %value, "cloze target equals placeholder");
                        Some(Feedback::Rejected {
                            message: PLACEHOLDER_TARGET_MESSAGE.to_string(),
                        })
                    }
                    Ok(()) => Some(self.commit(CardKind::Cloze, value)?),
                    Err(err) => {
                        tracing::info!(target_text = %value, "cloze target rejected");
                        Some(Feedback::Rejected {
                            message: err.message,
                        })
                    }
                }
            }
            SessionState::SelectingCard => {
                self.selected = Some(self.resolve_selection(&value)?);
                self.state = SessionState::AwaitingQuizAnswer;
                None
            }
            SessionState::AwaitingQuizAnswer => {
                let index = self.selected_index()?;
                let result = compare_answer(self.store.get(index)?, &value);
                tracing::info!(index, correct = result.is_correct, "quiz answer evaluated");
                self.selected = None;
                self.state = SessionState::MainMenu;
                Some(Feedback::Evaluated {
                    correct: result.is_correct,
                    expected: result.expected,
                })
            }
            SessionState::Finished => {
                return Err(SessionError::ProtocolViolation(
                    "answer received after session finished".to_string(),
                ))
            }
        };

        Ok(Step {
            feedback,
            next: self.question()?,
        })
    }

    /// Abandon any half-entered card and finish the session.
    pub fn close(&mut self) {
        self.pending.abandon();
        self.selected = None;
        self.state = SessionState::Finished;
    }

    fn on_main_menu(&mut self, value: &str) -> Result<Option<Feedback>> {
        match value {
            ACTION_CREATE => {
                self.state = SessionState::ChooseCardType;
                Ok(None)
            }
            ACTION_DISPLAY if self.store.is_empty() => Ok(Some(Feedback::Rejected {
                message: "There are no cards yet. Create one first.".to_string(),
            })),
            ACTION_DISPLAY => {
                self.listed = self.store.len();
                self.state = SessionState::SelectingCard;
                Ok(None)
            }
            ACTION_QUIT => {
                self.close();
                Ok(Some(Feedback::Goodbye))
            }
            other => Err(unknown_choice(other)),
        }
    }

    fn commit(&mut self, kind: CardKind, value: String) -> Result<Feedback> {
        let created = self.pending.submit_second(kind, value, &mut self.store)?;
        tracing::info!(kind = kind.as_str(), index = created.index, "card created");
        self.state = SessionState::MainMenu;
        Ok(Feedback::CardCreated {
            kind: created.kind,
            index: created.index,
        })
    }

    /// Map a 1-based card position from the last list to a store index.
    fn resolve_selection(&self, value: &str) -> Result<usize> {
        let position = value
            .parse::<usize>()
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| unknown_choice(value))?;
        let index = position - 1;
        if index >= self.listed {
            return Err(SessionError::OutOfRange {
                index,
                len: self.listed,
            });
        }
        self.store.get(index)?;
        Ok(index)
    }

    fn pending_full_text(&self) -> Result<&str> {
        self.pending.first(CardKind::Cloze).ok_or_else(|| {
            SessionError::ProtocolViolation("cloze target requested without a full text".into())
        })
    }

    fn selected_index(&self) -> Result<usize> {
        self.selected.ok_or_else(|| {
            SessionError::ProtocolViolation("quiz answer requested without a selected card".into())
        })
    }
}

fn card_label(card: &Card) -> String {
    format!("[{}] {}", card.kind().title(), card.prompt())
}

fn empty_text_rejected() -> Feedback {
    Feedback::Rejected {
        message: EMPTY_TEXT_MESSAGE.to_string(),
    }
}

fn unknown_choice(value: &str) -> SessionError {
    SessionError::ProtocolViolation(format!("unknown choice {value:?}"))
}
