//! Card list building.
//!
//! The public-facing query surface: merges reconciler output, live
//! predictions, and hand-side creations into one sorted, display-ready
//! card list under caller-supplied display toggles.
//!
//! When no decklist is known at all, the builders fall back to a
//! best-effort reconstruction from revealed entities and predictions;
//! no remaining/removed distinction is possible in that case.

use crate::catalog::{CardCatalog, CardId};
use crate::core::{Entity, EntityStore, GuessedCardState, PlayerId, TrackerOptions};
use crate::deck::card::{sorted_card_list, Card};
use crate::deck::decklist::Decklist;
use crate::deck::reconcile::{deck_state, group_by_key, opponent_deck_state};
use crate::track::predictions::PredictionLedger;

/// Project the prediction ledger onto display cards.
///
/// `hidden` marks the entries as jousted (position unconfirmed), which
/// is how predictions are shown when no decklist anchors them.
#[must_use]
pub fn predicted_cards_in_deck(
    ledger: &PredictionLedger,
    catalog: &impl CardCatalog,
    hidden: bool,
) -> Vec<Card> {
    let mut out = Vec::new();
    for prediction in ledger.iter() {
        let Some(template) = catalog.lookup(&prediction.card_id) else { continue };
        let mut card = Card::from_template(template);
        if hidden {
            card.jousted = true;
        }
        if prediction.is_created {
            card.is_created = true;
        }
        out.push(card);
    }
    out
}

/// Revealed cards currently in a player's deck, shown as jousted.
#[must_use]
pub fn known_cards_in_deck(
    store: &EntityStore,
    player: PlayerId,
    catalog: &impl CardCatalog,
) -> Vec<Card> {
    let in_deck: Vec<&Entity> = store
        .deck(player)
        .into_iter()
        .filter(|e| e.has_card_id())
        .collect();

    let mut out = Vec::new();
    let groups = group_by_key(in_deck, |e| {
        (e.card_id.clone(), e.info.created || e.info.stolen)
    });
    for ((card_id, created), group) in groups {
        let Some(card_id) = card_id else { continue };
        let Some(template) = catalog.lookup(&card_id) else { continue };
        let mut card = Card::from_template(template);
        card.count = group.len() as u32;
        card.is_created = created;
        card.jousted = true;
        out.push(card);
    }
    out
}

/// Best-effort list of cards a player has revealed through play.
///
/// Used for the local player when no decklist is active.
#[must_use]
pub fn revealed_cards(
    store: &EntityStore,
    player: PlayerId,
    catalog: &impl CardCatalog,
) -> Vec<Card> {
    let revealed: Vec<&Entity> = store
        .revealed_for(player)
        .into_iter()
        .filter(|e| {
            (!e.info.created || e.info.original_entity_was_created == Some(false))
                && e.is_playable_card()
                && ((!e.is_in_deck() && (!e.info.stolen || e.original_controller == player))
                    || (e.info.stolen && e.original_controller == player))
        })
        .collect();

    let mut out = Vec::new();
    let groups = group_by_key(revealed, |e| {
        (
            e.card_id.clone(),
            e.info.stolen && e.original_controller != player,
        )
    });
    for ((card_id, stolen), group) in groups {
        let Some(card_id) = card_id else { continue };
        let Some(template) = catalog.lookup(&card_id) else { continue };
        let mut card = Card::from_template(template);
        card.count = group.len() as u32;
        card.is_created = stolen;
        card.highlight_in_hand = group
            .iter()
            .any(|e| e.is_in_hand() && e.is_controlled_by(player));
        out.push(card);
    }
    out
}

/// Cards created directly into a player's hand.
#[must_use]
pub fn created_cards_in_hand(
    store: &EntityStore,
    player: PlayerId,
    catalog: &impl CardCatalog,
) -> Vec<Card> {
    let created: Vec<&Entity> = store
        .hand(player)
        .into_iter()
        .filter(|e| e.has_card_id() && (e.info.created || e.info.stolen))
        .collect();

    let mut out = Vec::new();
    for (card_id, group) in group_by_key(created, |e| e.card_id.clone()) {
        let Some(card_id) = card_id else { continue };
        let Some(template) = catalog.lookup(&card_id) else { continue };
        let mut card = Card::from_template(template);
        card.count = group.len() as u32;
        card.is_created = true;
        card.highlight_in_hand = true;
        out.push(card);
    }
    out
}

/// Zero-count highlight entries for decklist cards now in hand.
///
/// Only cards not already represented in `in_deck` are emitted.
#[must_use]
pub fn highlighted_cards_in_hand(
    store: &EntityStore,
    player: PlayerId,
    decklist: &Decklist,
    in_deck: &[Card],
    catalog: &impl CardCatalog,
) -> Vec<Card> {
    let mut out = Vec::new();
    for entry in decklist.iter() {
        if in_deck.iter().any(|c| c.card_id == entry.card_id) {
            continue;
        }
        if !store.hand_contains(player, &entry.card_id) {
            continue;
        }
        let Some(template) = catalog.lookup(&entry.card_id) else { continue };
        let mut card = Card::from_template(template);
        card.count = 0;
        card.highlight_in_hand = true;
        out.push(card);
    }
    out
}

/// Build the local player's display list.
#[must_use]
pub fn player_card_list(
    store: &EntityStore,
    player: PlayerId,
    decklist: Option<&Decklist>,
    predictions: &PredictionLedger,
    catalog: &impl CardCatalog,
    options: &TrackerOptions,
) -> Vec<Card> {
    let created_in_hand = if options.show_player_get {
        created_cards_in_hand(store, player, catalog)
    } else {
        Vec::new()
    };

    let Some(decklist) = decklist else {
        let mut cards = revealed_cards(store, player, catalog);
        cards.extend(created_in_hand);
        cards.extend(known_cards_in_deck(store, player, catalog));
        cards.extend(predicted_cards_in_deck(predictions, catalog, true));
        return sorted_card_list(cards);
    };

    let state = deck_state(store, player, decklist, catalog);
    assemble_tracked_list(
        store,
        player,
        decklist,
        state.remaining_in_deck,
        state.removed_from_deck,
        predictions,
        created_in_hand,
        catalog,
        options,
    )
}

/// Build the opponent's display list.
#[must_use]
pub fn opponent_card_list(
    store: &EntityStore,
    player: PlayerId,
    known_deck: Option<&Decklist>,
    predictions: &PredictionLedger,
    catalog: &impl CardCatalog,
    options: &TrackerOptions,
) -> Vec<Card> {
    let Some(known_deck) = known_deck else {
        let mut cards = opponent_revealed_reconstruction(store, player, catalog, options);
        cards.extend(predicted_cards_in_deck(predictions, catalog, true));
        return sorted_card_list(cards);
    };

    let created_in_hand = if options.show_player_get {
        created_cards_in_hand(store, player, catalog)
    } else {
        Vec::new()
    };
    let state = opponent_deck_state(store, player, known_deck, catalog);
    assemble_tracked_list(
        store,
        player,
        known_deck,
        state.remaining_in_deck,
        state.removed_from_deck,
        predictions,
        created_in_hand,
        catalog,
        options,
    )
}

/// Shared tail of the tracked-decklist paths: union in predictions not
/// already represented, apply the display toggles, sort.
#[allow(clippy::too_many_arguments)]
fn assemble_tracked_list(
    store: &EntityStore,
    player: PlayerId,
    decklist: &Decklist,
    in_deck: Vec<Card>,
    removed: Vec<Card>,
    predictions: &PredictionLedger,
    created_in_hand: Vec<Card>,
    catalog: &impl CardCatalog,
    options: &TrackerOptions,
) -> Vec<Card> {
    let not_in_deck: Vec<Card> = removed
        .into_iter()
        .filter(|x| in_deck.iter().all(|c| c.card_id != x.card_id))
        .collect();
    let predicted: Vec<Card> = predicted_cards_in_deck(predictions, catalog, false)
        .into_iter()
        .filter(|x| in_deck.iter().all(|c| c.card_id != x.card_id))
        .collect();

    if !options.remove_cards_from_deck {
        let mut cards = in_deck;
        cards.extend(predicted);
        cards.extend(not_in_deck);
        cards.extend(created_in_hand);
        return sorted_card_list(cards);
    }
    if options.highlight_cards_in_hand {
        let highlighted = highlighted_cards_in_hand(store, player, decklist, &in_deck, catalog);
        let mut cards = in_deck;
        cards.extend(predicted);
        cards.extend(highlighted);
        cards.extend(created_in_hand);
        return sorted_card_list(cards);
    }
    let mut cards = in_deck;
    cards.extend(predicted);
    cards.extend(created_in_hand);
    sorted_card_list(cards)
}

/// The opponent fallback when no tracked decklist exists: reconstruct
/// everything knowable from revealed entities alone.
fn opponent_revealed_reconstruction(
    store: &EntityStore,
    player: PlayerId,
    catalog: &impl CardCatalog,
    options: &TrackerOptions,
) -> Vec<Card> {
    let candidates: Vec<&Entity> = store
        .revealed_for(player)
        .into_iter()
        .filter(|e| {
            !(e.info.guessed_card_state == GuessedCardState::None
                && e.info.hidden
                && (e.is_in_deck() || e.is_in_hand()))
        })
        .filter(|e| e.is_playable_card() || e.card_type.is_none())
        .filter(|e| {
            ((!e.info.created
                || (options.opponent_include_created
                    && (e.info.created_in_deck || e.info.created_in_hand)))
                && e.original_controller == player)
                || e.is_in_hand()
                || e.is_in_deck()
                || e.info.created_by_game
        })
        .filter(|e| {
            !(e.info.created
                && e.is_in_set_aside()
                && e.info.guessed_card_state != GuessedCardState::Guessed)
        })
        .collect();

    let mut out = Vec::new();
    let groups = group_by_key(candidates, |e| OpponentGroupKey {
        card_id: e.tracked_card_id().cloned(),
        hidden: (e.is_in_hand()
            || e.is_in_deck()
            || (e.is_in_set_aside() && e.info.guessed_card_state == GuessedCardState::Guessed))
            && e.is_controlled_by(player),
        created: e.info.created || (e.info.stolen && e.original_controller != player),
        discarded: e.info.discarded && options.highlight_discarded,
    });
    for (key, group) in groups {
        let Some(card_id) = key.card_id else { continue };
        let Some(template) = catalog.lookup(&card_id) else { continue };
        let mut card = Card::from_template(template);
        card.count = group.len() as u32;
        card.jousted = key.hidden;
        card.is_created = key.created;
        card.was_discarded = key.discarded;
        out.push(card);
    }
    out
}

#[derive(PartialEq)]
struct OpponentGroupKey {
    card_id: Option<CardId>,
    hidden: bool,
    created: bool,
    discarded: bool,
}

/// Split a player's dredge-ordered deck entities into (top, bottom)
/// display lists.
///
/// Entities with a positive deck index are known from the top of the
/// deck, negative from the bottom; both lists are ordered by descending
/// index, matching how the overlay stacks them.
#[must_use]
pub fn deck_top_bottom(
    store: &EntityStore,
    player: PlayerId,
    catalog: &impl CardCatalog,
) -> (Vec<Card>, Vec<Card>) {
    let mut dredged: Vec<&Entity> = store
        .deck(player)
        .into_iter()
        .filter(|e| e.info.deck_index != 0)
        .collect();
    dredged.sort_by(|a, b| b.info.deck_index.cmp(&a.info.deck_index));

    let to_card = |e: &&Entity| -> Option<Card> {
        let card_id = e.card_id.as_ref()?;
        let template = catalog.lookup(card_id)?;
        let mut card = Card::from_template(template);
        card.deck_list_index = e.info.deck_index;
        Some(card)
    };

    let top = dredged
        .iter()
        .filter(|e| e.info.deck_index > 0)
        .filter_map(to_card)
        .collect();
    let bottom = dredged
        .iter()
        .filter(|e| e.info.deck_index < 0)
        .filter_map(to_card)
        .collect();
    (top, bottom)
}
