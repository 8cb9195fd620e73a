//! Deck-state reconciliation.
//!
//! Answers "what does the known decklist minus what has left it look
//! like right now, plus anything created" as two disjoint,
//! count-accurate card sequences.
//!
//! The local and opponent paths are kept separate: they differ in where
//! created-or-stolen cards sitting in the deck are sourced from (the
//! player's deck view vs the revealed-entity view), and the asymmetry
//! is preserved deliberately since opponent information is inherently
//! less certain.

use serde::{Deserialize, Serialize};

use crate::catalog::{CardCatalog, CardId};
use crate::core::{Entity, EntityStore, PlayerId};
use crate::deck::card::Card;
use crate::deck::decklist::Decklist;

/// The derived partition of a player's deck.
///
/// Always recomputed from the current entity store and decklist on
/// every query, never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckState {
    /// Cards presumed hidden in the deck, including created ones.
    pub remaining_in_deck: Vec<Card>,

    /// Cards known to have left the deck, reported with count 0.
    pub removed_from_deck: Vec<Card>,
}

/// Group items by key, preserving first-seen key order.
pub(crate) fn group_by_key<T, K: PartialEq>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> K,
) -> Vec<(K, Vec<T>)> {
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let k = key(&item);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, members)) => members.push(item),
            None => groups.push((k, vec![item])),
        }
    }
    groups
}

/// Reconcile the local player's deck against their decklist.
#[must_use]
pub fn deck_state(
    store: &EntityStore,
    player: PlayerId,
    decklist: &Decklist,
    catalog: &impl CardCatalog,
) -> DeckState {
    let created_in_deck: Vec<&Entity> = store
        .deck(player)
        .into_iter()
        .filter(|e| e.has_card_id() && (e.info.created || e.info.stolen) && !e.info.hidden)
        .collect();
    reconcile(store, player, decklist, catalog, created_in_deck)
}

/// Reconcile the opponent's deck against an externally tracked decklist.
#[must_use]
pub fn opponent_deck_state(
    store: &EntityStore,
    player: PlayerId,
    decklist: &Decklist,
    catalog: &impl CardCatalog,
) -> DeckState {
    let created_in_deck: Vec<&Entity> = store
        .revealed_for(player)
        .into_iter()
        .filter(|e| {
            e.original_controller == player
                && e.is_in_deck()
                && e.has_card_id()
                && (e.info.created || e.info.stolen)
                && !e.info.hidden
        })
        .collect();
    reconcile(store, player, decklist, catalog, created_in_deck)
}

fn reconcile(
    store: &EntityStore,
    player: PlayerId,
    decklist: &Decklist,
    catalog: &impl CardCatalog,
    created_in_deck: Vec<&Entity>,
) -> DeckState {
    let hand = store.hand(player);
    let hand_has =
        |card_id: &CardId| hand.iter().any(|e| e.card_id.as_ref() == Some(card_id));

    // Created or stolen cards currently in the deck, grouped by identity
    // and flags. Catalog misses drop the group.
    let mut remaining: Vec<Card> = Vec::new();
    let created_groups = group_by_key(created_in_deck, |e| {
        (
            e.card_id.clone(),
            e.info.created || e.info.stolen,
            e.info.discarded,
        )
    });
    for ((card_id, created, _discarded), group) in created_groups {
        let Some(card_id) = card_id else { continue };
        let Some(template) = catalog.lookup(&card_id) else { continue };
        let mut card = Card::from_template(template);
        card.count = group.len() as u32;
        card.is_created = created;
        card.highlight_in_hand = hand_has(&card_id);
        remaining.push(card);
    }

    // Working copy of the decklist, one entry per copy.
    let mut original: Vec<CardId> = decklist.expanded();

    // Revealed entities that are known to have left the deck. Transformed
    // entities are classified under their original card identity.
    let revealed_not_in_deck: Vec<&Entity> = store
        .revealed_for(player)
        .into_iter()
        .filter(|e| {
            (!e.info.created || e.info.original_entity_was_created == Some(false))
                && e.is_playable_card()
                && (!e.is_in_deck() || e.info.stolen)
                && e.original_controller == player
                && !(e.info.hidden && (e.is_in_deck() || e.is_in_hand()))
        })
        .collect();

    let mut removed_ids: Vec<CardId> = Vec::new();
    for e in revealed_not_in_deck {
        let Some(card_id) = e.tracked_card_id() else { continue };
        // Consume one matching decklist occurrence; multiset semantics,
        // only counts matter.
        if let Some(pos) = original.iter().position(|c| c == card_id) {
            original.remove(pos);
        }
        if !e.info.stolen || e.original_controller == player {
            removed_ids.push(card_id.clone());
        }
    }

    // What's left of the decklist is presumed still in the deck.
    for (card_id, group) in group_by_key(original, Clone::clone) {
        let Some(template) = catalog.lookup(&card_id) else { continue };
        let mut card = Card::from_template(template);
        card.count = group.len() as u32;
        card.highlight_in_hand = hand_has(&card_id);
        remaining.push(card);
    }

    // Known-gone cards are reported with count 0, not counted as held.
    let mut removed: Vec<Card> = Vec::new();
    for (card_id, _group) in group_by_key(removed_ids, Clone::clone) {
        let Some(template) = catalog.lookup(&card_id) else { continue };
        let mut card = Card::from_template(template);
        card.count = 0;
        card.highlight_in_hand = hand_has(&card_id);
        removed.push(card);
    }

    DeckState {
        remaining_in_deck: remaining,
        removed_from_deck: removed,
    }
}
