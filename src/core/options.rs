//! Display options consumed by card-list queries.
//!
//! Options are read-only per query; nothing in the tracker persists
//! them. Each toggle maps onto one decision in the card list builder.

use serde::{Deserialize, Serialize};

/// Display toggles for card-list queries.
///
/// ## Example
///
/// ```
/// use deck_reckoner::core::TrackerOptions;
///
/// let options = TrackerOptions::default()
///     .remove_cards_from_deck(true)
///     .highlight_cards_in_hand(true);
///
/// assert!(options.remove_cards_from_deck);
/// assert!(!options.show_player_get);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerOptions {
    /// Suppress removed-from-deck cards from the output entirely.
    pub remove_cards_from_deck: bool,

    /// Emit decklist cards now in hand as zero-count highlight entries.
    pub highlight_cards_in_hand: bool,

    /// Include cards created directly into the hand.
    pub show_player_get: bool,

    /// Attribute opponent-created deck/hand cards to the opponent's
    /// original-controller list.
    pub opponent_include_created: bool,

    /// Flag discarded opponent cards in the output.
    pub highlight_discarded: bool,
}

impl TrackerOptions {
    #[must_use]
    pub fn remove_cards_from_deck(mut self, value: bool) -> Self {
        self.remove_cards_from_deck = value;
        self
    }

    #[must_use]
    pub fn highlight_cards_in_hand(mut self, value: bool) -> Self {
        self.highlight_cards_in_hand = value;
        self
    }

    #[must_use]
    pub fn show_player_get(mut self, value: bool) -> Self {
        self.show_player_get = value;
        self
    }

    #[must_use]
    pub fn opponent_include_created(mut self, value: bool) -> Self {
        self.opponent_include_created = value;
        self
    }

    #[must_use]
    pub fn highlight_discarded(mut self, value: bool) -> Self {
        self.highlight_discarded = value;
        self
    }
}
