//! Per-player lifecycle tracking.
//!
//! `PlayerTracker` owns one seat's scalar counters and prediction
//! ledger, and applies lifecycle events as annotation transitions on
//! the entity store. Every transition is a total function: malformed
//! input (missing entity, absent card identity) degrades to skipping
//! the affected sub-step, never to an error.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{CardId, CardType};
use crate::core::{Entity, EntityStore, PlayerId};
use crate::track::event::LifecycleEvent;
use crate::track::predictions::PredictionLedger;

/// Lifecycle tracker for one seat.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerTracker {
    /// Seat this tracker belongs to.
    pub id: PlayerId,

    /// Whether this seat is the local player (fully known decklist).
    pub is_local: bool,

    /// Fatigue counter.
    pub fatigue: u32,

    /// Spells played over the whole game.
    pub spells_played_count: u32,

    /// Cards played since the current turn started.
    pub cards_played_this_turn: SmallVec<[CardId; 8]>,

    /// Identity of the most recently drawn card, if revealed.
    pub last_drawn_card_id: Option<CardId>,

    /// Identity of the most recently died minion.
    pub last_died_minion_card_id: Option<CardId>,

    predictions: PredictionLedger,
}

impl PlayerTracker {
    /// Create a tracker for a seat.
    #[must_use]
    pub fn new(id: PlayerId, is_local: bool) -> Self {
        Self {
            id,
            is_local,
            fatigue: 0,
            spells_played_count: 0,
            cards_played_this_turn: SmallVec::new(),
            last_drawn_card_id: None,
            last_died_minion_card_id: None,
            predictions: PredictionLedger::new(),
        }
    }

    /// The seat's live predictions.
    #[must_use]
    pub fn predictions(&self) -> &PredictionLedger {
        &self.predictions
    }

    /// Clear all scalar counters and the prediction ledger.
    ///
    /// The entity store is untouched; resetting it is the event
    /// source's responsibility.
    pub fn reset(&mut self) {
        self.fatigue = 0;
        self.spells_played_count = 0;
        self.cards_played_this_turn.clear();
        self.last_drawn_card_id = None;
        self.last_died_minion_card_id = None;
        self.predictions.clear();
    }

    /// Apply one lifecycle event.
    ///
    /// `mulligan_dealing` reflects whether the game is currently in the
    /// mulligan-dealing phase, which changes how opponent draws are
    /// classified.
    pub fn handle(
        &mut self,
        store: &mut EntityStore,
        event: LifecycleEvent,
        mulligan_dealing: bool,
    ) {
        use LifecycleEvent::*;
        match event {
            Draw { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                if self.is_local {
                    if let Some(card_id) = e.card_id.clone() {
                        self.predictions.resolve(&card_id, u32::MAX);
                        e.info.hidden = false;
                    }
                } else if mulligan_dealing {
                    e.info.mulliganed = true;
                } else {
                    e.info.hidden = true;
                }
                e.info.turn = turn;
                self.last_drawn_card_id = e.card_id.clone();
                self.log_event("draw", e);
            }
            Play { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                if !self.is_local {
                    if let Some(card_id) = e.card_id.clone() {
                        // Bounded by the turn the entity was last seen on,
                        // so a shuffled-back joust reveal is not consumed
                        // by an unrelated later play.
                        self.predictions.resolve(&card_id, e.info.turn);
                    }
                }
                match e.card_type {
                    Some(CardType::Token) => e.info.created = true,
                    Some(CardType::Spell) => self.spells_played_count += 1,
                    _ => {}
                }
                e.info.hidden = false;
                e.info.turn = turn;
                e.info.cost_reduction = 0;
                if let Some(card_id) = e.card_id.clone() {
                    self.cards_played_this_turn.push(card_id);
                }
                self.log_event("play", e);
            }
            DeckToPlay { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                if let Some(card_id) = e.card_id.clone() {
                    self.predictions.resolve(&card_id, u32::MAX);
                }
                e.info.turn = turn;
                self.log_event("deck_to_play", e);
            }
            Mulligan { entity } => {
                let Some(e) = store.get(entity) else { return };
                self.log_event("mulligan", e);
            }
            CreateInHand { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                e.info.created = true;
                e.info.created_in_hand = true;
                e.info.turn = turn;
                self.log_event("create_in_hand", e);
            }
            CreateInDeck { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                if e.info.discarded {
                    // The entity moved back into the deck after having been
                    // revealed for tracking; it did not come into existence.
                    e.info.discarded = false;
                    e.info.created = false;
                } else {
                    // Turn-1 deck fills are the initial deal.
                    e.info.created |= turn > 1;
                    e.info.created_in_deck = true;
                }
                e.info.turn = turn;
                self.log_event("create_in_deck", e);
            }
            CreateInPlay { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                e.info.created = true;
                e.info.turn = turn;
                self.log_event("create_in_play", e);
            }
            CreateInSecret { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                e.info.created = true;
                e.info.turn = turn;
                self.log_event("create_in_secret", e);
            }
            CreateInSetAside { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                e.info.created = true;
                e.info.turn = turn;
                self.log_event("create_in_set_aside", e);
            }
            RemoveFromDeck { entity, turn } => {
                // Predictions stay alive here: this is how jousted cards
                // get removed from the deck.
                let Some(e) = store.get_mut(entity) else { return };
                e.info.turn = turn;
                e.info.discarded = true;
                self.log_event("remove_from_deck", e);
            }
            HandDiscard { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                if !self.is_local {
                    if let Some(card_id) = e.card_id.clone() {
                        self.predictions.resolve(&card_id, e.info.turn);
                    }
                }
                e.info.turn = turn;
                e.info.discarded = true;
                self.log_event("hand_discard", e);
            }
            DeckDiscard { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                if let Some(card_id) = e.card_id.clone() {
                    self.predictions.resolve(&card_id, u32::MAX);
                }
                e.info.turn = turn;
                e.info.discarded = true;
                self.log_event("deck_discard", e);
            }
            HandToDeck { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                e.info.turn = turn;
                e.info.returned = true;
                self.log_event("hand_to_deck", e);
            }
            BoardToDeck { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                e.info.turn = turn;
                e.info.returned = true;
                self.log_event("board_to_deck", e);
            }
            BoardToHand { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                e.info.turn = turn;
                e.info.returned = true;
                self.log_event("board_to_hand", e);
            }
            JoustReveal { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                e.info.turn = turn;
                if let Some(card_id) = e.card_id.clone() {
                    self.predictions.joust_reveal(card_id, turn);
                }
                self.log_event("joust_reveal", e);
            }
            SecretPlayedFromDeck { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                if let Some(card_id) = e.card_id.clone() {
                    self.predictions.resolve(&card_id, u32::MAX);
                }
                e.info.turn = turn;
                self.log_event("secret_played_from_deck", e);
            }
            SecretPlayedFromHand { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                e.info.turn = turn;
                self.spells_played_count += 1;
                self.log_event("secret_played_from_hand", e);
            }
            QuestPlayedFromHand { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                e.info.turn = turn;
                self.spells_played_count += 1;
                self.log_event("quest_played_from_hand", e);
            }
            SecretTriggered { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                e.info.turn = turn;
                self.log_event("secret_triggered", e);
            }
            PlayToGraveyard { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                e.info.turn = turn;
                if e.is_minion() {
                    self.last_died_minion_card_id = e.card_id.clone();
                }
                self.log_event("play_to_graveyard", e);
            }
            RemoveFromPlay { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                e.info.turn = turn;
                self.log_event("remove_from_play", e);
            }
            StolenByOpponent { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                e.info.turn = turn;
                e.info.stolen = true;
                self.log_event("stolen_by_opponent", e);
            }
            StolenFromOpponent { entity, turn } => {
                let Some(e) = store.get_mut(entity) else { return };
                e.info.turn = turn;
                e.info.stolen = true;
                self.log_event("stolen_from_opponent", e);
            }
            TurnStart => {
                self.cards_played_this_turn.clear();
            }
            ShuffleDeck => {
                for e in store.iter_mut() {
                    if e.is_controlled_by(self.id) && e.is_in_deck() {
                        e.info.deck_index = 0;
                    }
                }
            }
            Fatigue { value } => {
                self.fatigue = value;
            }
            PredictUniqueCardInDeck {
                card_id,
                is_created,
            } => {
                self.predictions.predict_unique(card_id, is_created);
            }
        }
    }

    fn log_event(&self, action: &str, entity: &Entity) {
        let seat = if self.is_local { "player" } else { "opponent" };
        debug!("[{seat}] {action}: {entity}");
    }
}
