//! Whole-game coordination.
//!
//! `GameTracker` owns the entity store, one `PlayerTracker` per seat,
//! the known decklists, and the display options, and routes lifecycle
//! events to the right seat. It also carries the game-wide phase flags
//! that individual seats cannot decide on their own: the
//! mulligan-dealing window and the reset guard.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::catalog::CardCatalog;
use crate::core::{EntityStore, PlayerId, TrackerOptions};
use crate::deck::card::Card;
use crate::deck::decklist::Decklist;
use crate::deck::reconcile::{deck_state, opponent_deck_state, DeckState};
use crate::list;
use crate::track::event::LifecycleEvent;
use crate::track::player::PlayerTracker;

/// Tracker state for a full two-seat game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameTracker {
    store: EntityStore,
    local: PlayerTracker,
    opponent: PlayerTracker,
    local_deck: Option<Decklist>,
    opponent_deck: Option<Decklist>,
    options: TrackerOptions,
    mulligan_dealing: bool,
    resetting: bool,
}

impl GameTracker {
    /// Create a tracker for the given seats.
    #[must_use]
    pub fn new(local_seat: PlayerId, opponent_seat: PlayerId) -> Self {
        Self {
            store: EntityStore::new(),
            local: PlayerTracker::new(local_seat, true),
            opponent: PlayerTracker::new(opponent_seat, false),
            local_deck: None,
            opponent_deck: None,
            options: TrackerOptions::default(),
            mulligan_dealing: false,
            resetting: false,
        }
    }

    /// Replace the display options.
    #[must_use]
    pub fn with_options(mut self, options: TrackerOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    #[must_use]
    pub fn local(&self) -> &PlayerTracker {
        &self.local
    }

    #[must_use]
    pub fn opponent(&self) -> &PlayerTracker {
        &self.opponent
    }

    #[must_use]
    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    /// Set (or clear) the local player's decklist.
    pub fn set_local_deck(&mut self, decklist: Option<Decklist>) {
        self.local_deck = decklist;
    }

    /// Set (or clear) a known decklist for the opponent.
    pub fn set_opponent_deck(&mut self, decklist: Option<Decklist>) {
        self.opponent_deck = decklist;
    }

    /// Mark whether the game is currently dealing mulligan cards.
    ///
    /// While set, opponent draws are classified as mulligan returns
    /// rather than regular draws.
    pub fn set_mulligan_dealing(&mut self, dealing: bool) {
        self.mulligan_dealing = dealing;
    }

    #[must_use]
    pub fn is_mulligan_dealing(&self) -> bool {
        self.mulligan_dealing
    }

    /// Route one lifecycle event to the tracker for `seat`.
    ///
    /// Events for an unknown seat are dropped.
    pub fn apply(&mut self, seat: PlayerId, event: LifecycleEvent) {
        let mulligan_dealing = self.mulligan_dealing;
        if seat == self.local.id {
            self.local.handle(&mut self.store, event, mulligan_dealing);
        } else if seat == self.opponent.id {
            self.opponent
                .handle(&mut self.store, event, mulligan_dealing);
        } else {
            debug!("dropping event for unknown seat {seat}");
        }
    }

    /// Start a game reset.
    ///
    /// Clears both seats, the entity store, and the mulligan flag, and
    /// holds the reset guard until [`finish_reset`](Self::finish_reset).
    /// Returns `false` without touching anything if a reset is already
    /// in progress.
    pub fn begin_reset(&mut self) -> bool {
        if self.resetting {
            warn!("reset already in progress");
            return false;
        }
        self.resetting = true;
        self.store = EntityStore::new();
        self.local.reset();
        self.opponent.reset();
        self.mulligan_dealing = false;
        true
    }

    /// Release the reset guard.
    pub fn finish_reset(&mut self) {
        self.resetting = false;
    }

    #[must_use]
    pub fn is_resetting(&self) -> bool {
        self.resetting
    }

    /// The local player's reconciled deck state, if a decklist is set.
    #[must_use]
    pub fn player_deck_state(&self, catalog: &impl CardCatalog) -> Option<DeckState> {
        let decklist = self.local_deck.as_ref()?;
        Some(deck_state(&self.store, self.local.id, decklist, catalog))
    }

    /// The opponent's reconciled deck state, if a decklist is known.
    #[must_use]
    pub fn opponent_deck_state(&self, catalog: &impl CardCatalog) -> Option<DeckState> {
        let decklist = self.opponent_deck.as_ref()?;
        Some(opponent_deck_state(
            &self.store,
            self.opponent.id,
            decklist,
            catalog,
        ))
    }

    /// The local player's display-ready card list.
    #[must_use]
    pub fn player_card_list(&self, catalog: &impl CardCatalog) -> Vec<Card> {
        list::player_card_list(
            &self.store,
            self.local.id,
            self.local_deck.as_ref(),
            self.local.predictions(),
            catalog,
            &self.options,
        )
    }

    /// The opponent's display-ready card list.
    #[must_use]
    pub fn opponent_card_list(&self, catalog: &impl CardCatalog) -> Vec<Card> {
        list::opponent_card_list(
            &self.store,
            self.opponent.id,
            self.opponent_deck.as_ref(),
            self.opponent.predictions(),
            catalog,
            &self.options,
        )
    }

    /// Known top/bottom-of-deck cards for the local player.
    #[must_use]
    pub fn player_deck_top_bottom(&self, catalog: &impl CardCatalog) -> (Vec<Card>, Vec<Card>) {
        list::deck_top_bottom(&self.store, self.local.id, catalog)
    }
}
