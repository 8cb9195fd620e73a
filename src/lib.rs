//! # deck-reckoner
//!
//! A deck-state inference engine for hidden-information card games.
//!
//! Given a stream of entity lifecycle events from a game log and an
//! optional known decklist, the crate maintains an annotated entity
//! store and answers the question "what is (probably) left in each
//! player's deck?" as display-ready card lists.
//!
//! ## Design Principles
//!
//! 1. **Events In, Lists Out**: The only mutation path is applying
//!    lifecycle events; every query is a pure function of the store.
//!
//! 2. **Total Transitions**: Malformed events (missing entities, absent
//!    card identities) degrade to skipping a sub-step, never to an
//!    error. The tracker must survive any log the game produces.
//!
//! 3. **Annotation Over Deletion**: Entities are never removed while a
//!    game runs; zone moves and flag changes record what happened so
//!    reconciliation can re-derive deck state from scratch at any time.
//!
//! ## Modules
//!
//! - `catalog`: Card identities, templates, and the lookup database
//! - `core`: Entities, zones, the entity store, display options
//! - `deck`: Decklists, display cards, and the deck-state reconciler
//! - `track`: Lifecycle events, per-seat trackers, game coordination
//! - `list`: Display list assembly from tracked state
//! - `refresh`: Redraw coalescing for bursty event streams

pub mod catalog;
pub mod core;
pub mod deck;
pub mod list;
pub mod refresh;
pub mod track;

mod error;

pub use crate::catalog::{CardCatalog, CardDatabase, CardId, CardTemplate, CardType};

pub use crate::core::{
    Entity, EntityId, EntityInfo, EntityStore, GuessedCardState, PlayerId, TrackerOptions, Zone,
};

pub use crate::deck::{
    deck_state, opponent_deck_state, sorted_card_list, Card, DeckState, Decklist, DecklistEntry,
    DECK_SIZE,
};

pub use crate::track::{
    GameTracker, LifecycleEvent, PlayerTracker, PredictedCard, PredictionLedger,
};

pub use crate::error::{Result, TrackerError};
pub use crate::refresh::UpdateCoalescer;
