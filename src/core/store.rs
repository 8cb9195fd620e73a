//! Entity store and per-player views.
//!
//! The store is an append-only, mutate-in-place collection of entities.
//! The event source inserts entities and moves them between zones; the
//! tracker mutates annotation state and reads filtered views.
//!
//! All view methods return eagerly-materialized snapshots taken at call
//! time, so a reconciliation query sees one consistent state even if
//! the surrounding event source interleaves in a future design.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::CardId;
use crate::core::entity::{Entity, EntityId, Zone};
use crate::core::player::PlayerId;

/// Central storage for all game entities.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EntityStore {
    entities: FxHashMap<EntityId, Entity>,
}

impl EntityStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity.
    ///
    /// Panics if an entity with the same ID already exists.
    pub fn insert(&mut self, entity: Entity) {
        if self.entities.contains_key(&entity.id) {
            panic!("Entity {:?} already exists in store", entity.id);
        }
        self.entities.insert(entity.id, entity);
    }

    /// Get an entity by ID.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Get a mutable reference to an entity.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Check if an entity exists.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Get the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Iterate mutably over all entities.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.values_mut()
    }

    /// Snapshot of entities currently controlled by a player.
    #[must_use]
    pub fn controlled_by(&self, player: PlayerId) -> Vec<&Entity> {
        self.entities
            .values()
            .filter(|e| e.is_controlled_by(player))
            .collect()
    }

    /// Snapshot of revealed entities attributed to a player.
    ///
    /// An entity is attributed to a player if the player controls it now
    /// or controlled it originally; only entities with a known card
    /// identity are revealed.
    #[must_use]
    pub fn revealed_for(&self, player: PlayerId) -> Vec<&Entity> {
        self.entities
            .values()
            .filter(|e| e.is_controlled_by(player) || e.original_controller == player)
            .filter(|e| e.has_card_id())
            .collect()
    }

    /// Snapshot of a player's controlled entities in one zone.
    #[must_use]
    pub fn in_zone(&self, player: PlayerId, zone: Zone) -> Vec<&Entity> {
        self.entities
            .values()
            .filter(|e| e.is_controlled_by(player) && e.zone == zone)
            .collect()
    }

    /// Snapshot of a player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Vec<&Entity> {
        self.in_zone(player, Zone::Hand)
    }

    /// Snapshot of a player's deck.
    #[must_use]
    pub fn deck(&self, player: PlayerId) -> Vec<&Entity> {
        self.in_zone(player, Zone::Deck)
    }

    /// Snapshot of a player's board.
    #[must_use]
    pub fn board(&self, player: PlayerId) -> Vec<&Entity> {
        self.in_zone(player, Zone::Play)
    }

    /// Snapshot of a player's graveyard.
    #[must_use]
    pub fn graveyard(&self, player: PlayerId) -> Vec<&Entity> {
        self.in_zone(player, Zone::Graveyard)
    }

    /// Snapshot of a player's secret zone.
    #[must_use]
    pub fn secrets(&self, player: PlayerId) -> Vec<&Entity> {
        self.in_zone(player, Zone::Secret)
    }

    /// Snapshot of a player's set-aside zone.
    #[must_use]
    pub fn set_aside(&self, player: PlayerId) -> Vec<&Entity> {
        self.in_zone(player, Zone::SetAside)
    }

    /// Number of cards in a player's hand.
    #[must_use]
    pub fn hand_count(&self, player: PlayerId) -> usize {
        self.hand(player).len()
    }

    /// Number of cards in a player's deck.
    #[must_use]
    pub fn deck_count(&self, player: PlayerId) -> usize {
        self.deck(player).len()
    }

    /// Whether a player's hand holds a revealed copy of a card.
    #[must_use]
    pub fn hand_contains(&self, player: PlayerId, card_id: &CardId) -> bool {
        self.entities.values().any(|e| {
            e.is_controlled_by(player)
                && e.zone == Zone::Hand
                && e.card_id.as_ref() == Some(card_id)
        })
    }
}
