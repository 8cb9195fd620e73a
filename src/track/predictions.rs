//! Prediction ledger.
//!
//! Tracks cards whose identity is known before their deck position is
//! confirmed by a draw event. At most one live prediction exists per
//! distinct card. Predictions never influence the decklist-based
//! remaining counts; the card list builder surfaces them as an
//! independent addition.

use serde::{Deserialize, Serialize};

use crate::catalog::CardId;

/// A card known to exist in a deck before its draw is confirmed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedCard {
    pub card_id: CardId,
    /// Turn the prediction was recorded on.
    pub turn: u32,
    /// Whether the predicted card is a created one.
    pub is_created: bool,
}

/// Zero or more live predictions, at most one per distinct card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionLedger {
    entries: Vec<PredictedCard>,
}

impl PredictionLedger {
    /// Create a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a prediction unless one for this card already exists.
    ///
    /// Idempotent: calling twice for the same card yields one entry.
    pub fn predict_unique(&mut self, card_id: CardId, is_created: bool) {
        if self.entries.iter().all(|p| p.card_id != card_id) {
            self.entries.push(PredictedCard {
                card_id,
                turn: 0,
                is_created,
            });
        }
    }

    /// Record a peek-style reveal.
    ///
    /// Updates the recorded turn if a prediction for this card already
    /// exists, otherwise inserts a new one.
    pub fn joust_reveal(&mut self, card_id: CardId, turn: u32) {
        match self.entries.iter_mut().find(|p| p.card_id == card_id) {
            Some(existing) => existing.turn = turn,
            None => self.entries.push(PredictedCard {
                card_id,
                turn,
                is_created: false,
            }),
        }
    }

    /// Confirm a predicted card: remove the first entry matching the
    /// card whose recorded turn is at or before `turn_bound`.
    ///
    /// Invoked whenever a predicted card is actually drawn, played from
    /// deck, or discarded from deck. Pass `u32::MAX` for an unbounded
    /// confirmation.
    pub fn resolve(&mut self, card_id: &CardId, turn_bound: u32) {
        if let Some(pos) = self
            .entries
            .iter()
            .position(|p| p.card_id == *card_id && turn_bound >= p.turn)
        {
            self.entries.remove(pos);
        }
    }

    /// Whether a live prediction exists for a card.
    #[must_use]
    pub fn contains(&self, card_id: &CardId) -> bool {
        self.entries.iter().any(|p| p.card_id == *card_id)
    }

    /// Iterate over live predictions.
    pub fn iter(&self) -> impl Iterator<Item = &PredictedCard> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all predictions.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
