//! Correlates the two sequential answers that make up one new card.
//!
//! A basic card needs a front then a back; a cloze card needs a full text
//! then a cloze target. The first half is held until the second arrives,
//! at which point the card is built, appended to the store, and the slot
//! is cleared. At most one half-pair is in flight.

use crate::error::{Result, SessionError};
use crate::store::CardStore;
use crate::types::{Card, CardKind};

/// First half of a pair waiting for its second.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingFirst {
    kind: CardKind,
    value: String,
}

/// Report emitted once per completed pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardCreated {
    pub kind: CardKind,
    pub index: usize,
}

/// Two-slot correlator: empty, or holding the first half of one card.
#[derive(Debug)]
pub struct PendingPair {
    slot: Option<PendingFirst>,
    placeholder: String,
}

impl PendingPair {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            slot: None,
            placeholder: placeholder.into(),
        }
    }

    /// Hold the first half of a card of the given kind.
    pub fn submit_first(&mut self, kind: CardKind, value: impl Into<String>) -> Result<()> {
        if let Some(held) = &self.slot {
            return Err(SessionError::ProtocolViolation(format!(
                "{} pair already holds a first value",
                held.kind.as_str()
            )));
        }
        self.slot = Some(PendingFirst {
            kind,
            value: value.into(),
        });
        Ok(())
    }

    /// Complete the pair: build the card, append it to `store`, clear the slot.
    ///
    /// Fails with `ProtocolViolation` if no first half of the same kind is held,
    /// and with `InvariantViolation` if the card cannot be built. In both cases
    /// the slot is left empty.
    pub fn submit_second(
        &mut self,
        kind: CardKind,
        value: impl Into<String>,
        store: &mut CardStore,
    ) -> Result<CardCreated> {
        let first = match self.slot.take() {
            Some(first) if first.kind == kind => first,
            Some(first) => {
                return Err(SessionError::ProtocolViolation(format!(
                    "{} second value submitted while a {} pair is pending",
                    kind.as_str(),
                    first.kind.as_str()
                )))
            }
            None => {
                return Err(SessionError::ProtocolViolation(format!(
                    "{} second value submitted with no first value",
                    kind.as_str()
                )))
            }
        };

        let card = match kind {
            CardKind::Basic => Card::basic(first.value, value)?,
            CardKind::Cloze => {
                Card::cloze_with_placeholder(first.value, value, &self.placeholder)?
            }
        };
        let index = store.append(card);
        tracing::debug!(kind = kind.as_str(), index, "card committed");

        Ok(CardCreated { kind, index })
    }

    /// The held first value, if it belongs to a pair of `kind`.
    pub fn first(&self, kind: CardKind) -> Option<&str> {
        self.slot
            .as_ref()
            .filter(|held| held.kind == kind)
            .map(|held| held.value.as_str())
    }

    /// Marker used when blanking cloze targets.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }

    /// Drop a half-entered pair.
    pub fn abandon(&mut self) {
        if let Some(held) = self.slot.take() {
            tracing::debug!(kind = held.kind.as_str(), "pending pair discarded");
        }
    }
}
