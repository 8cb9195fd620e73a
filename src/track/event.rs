//! Lifecycle events.
//!
//! Events represent one entity zone transition (or per-player signal)
//! observed by the event source, delivered in true chronological order.
//! The closed enum makes the transition table exhaustively checkable:
//! every variant has exactly one arm in the player reducer.

use serde::{Deserialize, Serialize};

use crate::catalog::CardId;
use crate::core::EntityId;

/// One lifecycle event, applied to a single player's tracker.
///
/// Entity-bearing variants reference an entity already present in the
/// entity store; the event source updates the entity's zone and
/// identity before the event is applied, the tracker only annotates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    /// A card moved from deck to hand.
    Draw { entity: EntityId, turn: u32 },

    /// A card was played from hand.
    Play { entity: EntityId, turn: u32 },

    /// A card was played directly from the deck.
    DeckToPlay { entity: EntityId, turn: u32 },

    /// A card was tossed back during the mulligan.
    Mulligan { entity: EntityId },

    CreateInHand { entity: EntityId, turn: u32 },
    CreateInDeck { entity: EntityId, turn: u32 },
    CreateInPlay { entity: EntityId, turn: u32 },
    CreateInSecret { entity: EntityId, turn: u32 },
    CreateInSetAside { entity: EntityId, turn: u32 },

    /// A card left the deck without a draw (e.g. a jousted card being
    /// revealed out).
    RemoveFromDeck { entity: EntityId, turn: u32 },

    HandDiscard { entity: EntityId, turn: u32 },
    DeckDiscard { entity: EntityId, turn: u32 },

    HandToDeck { entity: EntityId, turn: u32 },
    BoardToDeck { entity: EntityId, turn: u32 },
    BoardToHand { entity: EntityId, turn: u32 },

    /// A peek-style reveal: the card's identity is now known before its
    /// deck position is confirmed.
    JoustReveal { entity: EntityId, turn: u32 },

    SecretPlayedFromDeck { entity: EntityId, turn: u32 },
    SecretPlayedFromHand { entity: EntityId, turn: u32 },
    QuestPlayedFromHand { entity: EntityId, turn: u32 },
    SecretTriggered { entity: EntityId, turn: u32 },

    /// A played card hit the graveyard.
    PlayToGraveyard { entity: EntityId, turn: u32 },

    RemoveFromPlay { entity: EntityId, turn: u32 },

    StolenByOpponent { entity: EntityId, turn: u32 },
    StolenFromOpponent { entity: EntityId, turn: u32 },

    /// The player's turn began; clears the per-turn play list.
    TurnStart,

    /// The player's deck was shuffled; deck order becomes unknown.
    ShuffleDeck,

    /// Fatigue counter update.
    Fatigue { value: u32 },

    /// An information-leak mechanic revealed that a unique card is in
    /// the deck.
    PredictUniqueCardInDeck { card_id: CardId, is_created: bool },
}

impl LifecycleEvent {
    /// The entity this event references, if any.
    #[must_use]
    pub fn entity(&self) -> Option<EntityId> {
        use LifecycleEvent::*;
        match self {
            Draw { entity, .. }
            | Play { entity, .. }
            | DeckToPlay { entity, .. }
            | Mulligan { entity }
            | CreateInHand { entity, .. }
            | CreateInDeck { entity, .. }
            | CreateInPlay { entity, .. }
            | CreateInSecret { entity, .. }
            | CreateInSetAside { entity, .. }
            | RemoveFromDeck { entity, .. }
            | HandDiscard { entity, .. }
            | DeckDiscard { entity, .. }
            | HandToDeck { entity, .. }
            | BoardToDeck { entity, .. }
            | BoardToHand { entity, .. }
            | JoustReveal { entity, .. }
            | SecretPlayedFromDeck { entity, .. }
            | SecretPlayedFromHand { entity, .. }
            | QuestPlayedFromHand { entity, .. }
            | SecretTriggered { entity, .. }
            | PlayToGraveyard { entity, .. }
            | RemoveFromPlay { entity, .. }
            | StolenByOpponent { entity, .. }
            | StolenFromOpponent { entity, .. } => Some(*entity),
            TurnStart | ShuffleDeck | Fatigue { .. } | PredictUniqueCardInDeck { .. } => None,
        }
    }
}
