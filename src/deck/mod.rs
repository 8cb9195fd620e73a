//! Decklists, display cards, and deck-state reconciliation.

pub mod card;
pub mod decklist;
pub mod reconcile;

pub use card::{sorted_card_list, Card};
pub use decklist::{Decklist, DecklistEntry, DECK_SIZE};
pub use reconcile::{deck_state, opponent_deck_state, DeckState};
