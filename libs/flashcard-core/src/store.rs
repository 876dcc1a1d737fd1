//! Append-only, observable card collection.

use crate::error::{Result, SessionError};
use crate::types::{Card, CardKind};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Notification sent to subscribers after every append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAdded {
    /// Position of the new card in insertion order.
    pub index: usize,
    pub kind: CardKind,
}

/// Ordered card collection. Grows monotonically for the lifetime of a session.
#[derive(Debug, Default)]
pub struct CardStore {
    cards: Vec<Card>,
    subscribers: Vec<Sender<CardAdded>>,
}

impl CardStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `cards` in order. Seeding does not notify anyone.
    pub fn seeded(cards: Vec<Card>) -> Self {
        Self {
            cards,
            subscribers: Vec::new(),
        }
    }

    /// Append a card and notify live subscribers. Returns the card's index.
    pub fn append(&mut self, card: Card) -> usize {
        let index = self.cards.len();
        let event = CardAdded {
            index,
            kind: card.kind(),
        };
        self.cards.push(card);

        // Receivers that were dropped are forgotten.
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        index
    }

    /// Register a new observer of appends.
    pub fn subscribe(&mut self) -> Receiver<CardAdded> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Read-only copy of the cards in insertion order.
    pub fn snapshot(&self) -> Vec<Card> {
        self.cards.clone()
    }

    /// Look up a card by index.
    pub fn get(&self, index: usize) -> Result<&Card> {
        self.cards.get(index).ok_or(SessionError::OutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
