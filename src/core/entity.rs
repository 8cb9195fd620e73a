//! Game entities and their tracking annotations.
//!
//! An `Entity` is a single in-game object with a stable identity across
//! zone changes. The event source creates entities and moves them
//! between zones; the tracker annotates them via `EntityInfo` as
//! lifecycle events arrive.
//!
//! ## Partial observability
//!
//! An entity's card identity is optional: hidden cards (the opponent's
//! deck, face-down draws) have `card_id = None` until a reveal. The
//! annotation flags record *how* identity was learned, which is what
//! the reconciler keys on.

use serde::{Deserialize, Serialize};

use crate::catalog::{CardId, CardType};
use crate::core::player::PlayerId;

/// Unique identifier for a game entity.
///
/// Stable for the duration of a game instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create a new entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// A zone an entity can occupy. An entity has exactly one current zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Hand,
    Play,
    Graveyard,
    Secret,
    SetAside,
    Removed,
}

/// How certain we are about a guessed card identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessedCardState {
    #[default]
    None,
    Guessed,
    Confirmed,
}

/// Tracking annotations for an entity.
///
/// All flags start false; the lifecycle reducer sets them as events
/// arrive. `hidden` is true only while the entity sits unrevealed in
/// deck or hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityInfo {
    /// Did not originate from the starting decklist (token, generated).
    pub created: bool,

    /// Controlled by a player other than its original controller.
    pub stolen: bool,

    /// Discarded, or otherwise known to have left the deck.
    pub discarded: bool,

    /// In deck or hand without a confirmed reveal.
    pub hidden: bool,

    /// Re-entered a zone without being newly created.
    pub returned: bool,

    /// Dealt back during the mulligan phase.
    pub mulliganed: bool,

    /// Created directly into the hand.
    pub created_in_hand: bool,

    /// Created directly into the deck.
    pub created_in_deck: bool,

    /// Created by the game itself rather than by another card. Set by
    /// the event source from the entity's creator reference.
    pub created_by_game: bool,

    /// Whether the entity this one was transformed from was created.
    /// `None` until a transformation is observed.
    pub original_entity_was_created: Option<bool>,

    /// Card identity before transformation, if any.
    pub original_card_id: Option<CardId>,

    /// Deck position order: positive counts from the top, negative from
    /// the bottom, 0 = unset (dredge-style peeks).
    pub deck_index: i32,

    /// Turn this entity was last touched by an event.
    pub turn: u32,

    /// Pending cost reduction; cleared when the entity is played.
    pub cost_reduction: i32,

    /// Certainty of a guessed identity.
    pub guessed_card_state: GuessedCardState,
}

/// A single in-game object instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique entity ID, stable for the game instance.
    pub id: EntityId,

    /// Card identity, absent until revealed.
    pub card_id: Option<CardId>,

    /// Card type, absent until revealed.
    pub card_type: Option<CardType>,

    /// Current zone.
    pub zone: Zone,

    /// Who currently controls this entity.
    pub controller: PlayerId,

    /// Who started with this entity.
    pub original_controller: PlayerId,

    /// Tracking annotations.
    pub info: EntityInfo,
}

impl Entity {
    /// Create a new unrevealed entity in a zone.
    pub fn new(id: EntityId, controller: PlayerId, zone: Zone) -> Self {
        Self {
            id,
            card_id: None,
            card_type: None,
            zone,
            controller,
            original_controller: controller,
            info: EntityInfo::default(),
        }
    }

    /// Set the card identity (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card_id: CardId, card_type: CardType) -> Self {
        self.card_id = Some(card_id);
        self.card_type = Some(card_type);
        self
    }

    /// Check whether the card identity is known.
    #[must_use]
    pub fn has_card_id(&self) -> bool {
        self.card_id.is_some()
    }

    /// Check the current controller.
    #[must_use]
    pub fn is_controlled_by(&self, player: PlayerId) -> bool {
        self.controller == player
    }

    #[must_use]
    pub fn is_in_deck(&self) -> bool {
        self.zone == Zone::Deck
    }

    #[must_use]
    pub fn is_in_hand(&self) -> bool {
        self.zone == Zone::Hand
    }

    #[must_use]
    pub fn is_in_play(&self) -> bool {
        self.zone == Zone::Play
    }

    #[must_use]
    pub fn is_in_graveyard(&self) -> bool {
        self.zone == Zone::Graveyard
    }

    #[must_use]
    pub fn is_in_secret(&self) -> bool {
        self.zone == Zone::Secret
    }

    #[must_use]
    pub fn is_in_set_aside(&self) -> bool {
        self.zone == Zone::SetAside
    }

    /// Whether this is a playable deck card (minion, spell, weapon, hero).
    #[must_use]
    pub fn is_playable_card(&self) -> bool {
        self.card_type.is_some_and(CardType::is_playable)
    }

    #[must_use]
    pub fn is_minion(&self) -> bool {
        self.card_type == Some(CardType::Minion)
    }

    /// Whether this entity was transformed into a different card.
    #[must_use]
    pub fn was_transformed(&self) -> bool {
        self.info.original_card_id.is_some()
    }

    /// Card identity used for tracking purposes.
    ///
    /// Transformed entities are tracked under their original card, not
    /// their current one.
    #[must_use]
    pub fn tracked_card_id(&self) -> Option<&CardId> {
        self.info.original_card_id.as_ref().or(self.card_id.as_ref())
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.card_id {
            Some(card) => write!(f, "{} [{}, {:?}]", self.id, card, self.zone),
            None => write!(f, "{} [?, {:?}]", self.id, self.zone),
        }
    }
}
