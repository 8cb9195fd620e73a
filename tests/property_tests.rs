//! Property tests for deck-state reconciliation.

use proptest::prelude::*;

use deck_reckoner::{
    deck_state, CardDatabase, CardId, CardTemplate, CardType, Decklist, Entity, EntityId,
    EntityStore, PlayerId, Zone,
};

const PLAYER: PlayerId = PlayerId::new(0);

const CARD_POOL: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn catalog() -> CardDatabase {
    let mut db = CardDatabase::new();
    for (i, id) in CARD_POOL.iter().enumerate() {
        db.register(
            CardTemplate::new(CardId::new(*id), format!("Card {id}"), CardType::Minion)
                .with_cost(i as i32),
        );
    }
    db
}

/// A decklist over the pool plus a drawn/in-deck split of its copies.
///
/// The last pool card ("F") is never dealt into a decklist so tests
/// can use it as a guaranteed off-decklist identity.
fn decklist_with_draws() -> impl Strategy<Value = (Decklist, Vec<(CardId, bool)>)> {
    proptest::collection::btree_map(0..CARD_POOL.len() - 1, 1u32..=3, 1..CARD_POOL.len())
        .prop_flat_map(|counts| {
            let entries: Vec<(CardId, u32)> = counts
                .iter()
                .map(|(i, n)| (CardId::new(CARD_POOL[*i]), *n))
                .collect();
            let copies: Vec<CardId> = entries
                .iter()
                .flat_map(|(id, n)| std::iter::repeat(id.clone()).take(*n as usize))
                .collect();
            let len = copies.len();
            (
                Just(Decklist::new(entries).unwrap()),
                proptest::collection::vec(any::<bool>(), len)
                    .prop_map(move |drawn| copies.iter().cloned().zip(drawn).collect()),
            )
        })
}

fn store_for(copies: &[(CardId, bool)]) -> EntityStore {
    let mut store = EntityStore::new();
    for (i, (card_id, drawn)) in copies.iter().enumerate() {
        let zone = if *drawn { Zone::Hand } else { Zone::Deck };
        let mut e = Entity::new(EntityId::new(i as u32 + 1), PLAYER, zone)
            .with_card(card_id.clone(), CardType::Minion);
        // Undrawn copies are unrevealed deck cards, not known entities.
        if !*drawn {
            e.card_id = None;
            e.card_type = None;
        }
        store.insert(e);
    }
    store
}

proptest! {
    /// Every drawn copy removes exactly one count from the remaining
    /// list, so counts are conserved: remaining + drawn == decklist.
    #[test]
    fn prop_counts_are_conserved((decklist, copies) in decklist_with_draws()) {
        let store = store_for(&copies);
        let state = deck_state(&store, PLAYER, &decklist, &catalog());

        let remaining: u32 = state.remaining_in_deck.iter().map(|c| c.count).sum();
        let drawn = copies.iter().filter(|(_, d)| *d).count() as u32;
        prop_assert_eq!((remaining + drawn) as usize, decklist.total_count());
    }

    /// No remaining row ever exceeds its decklist entry, and removed
    /// rows always carry a zero count.
    #[test]
    fn prop_rows_stay_within_decklist_bounds((decklist, copies) in decklist_with_draws()) {
        let store = store_for(&copies);
        let state = deck_state(&store, PLAYER, &decklist, &catalog());

        for card in &state.remaining_in_deck {
            prop_assert!(card.count <= decklist.count_of(&card.card_id));
        }
        for card in &state.removed_from_deck {
            prop_assert_eq!(card.count, 0);
        }
    }

    /// Cards revealed outside the decklist never make counts negative
    /// or otherwise disturb the remaining rows.
    #[test]
    fn prop_off_decklist_reveals_do_not_disturb_remaining(
        (decklist, copies) in decklist_with_draws(),
        extra in 0usize..3,
    ) {
        let mut store = store_for(&copies);
        let baseline = deck_state(&store, PLAYER, &decklist, &catalog());

        // Reveal a few copies of a card the decklist cannot contain.
        for i in 0..extra {
            store.insert(
                Entity::new(EntityId::new(1000 + i as u32), PLAYER, Zone::Play)
                    .with_card(CardId::new("F"), CardType::Minion),
            );
        }
        let with_extra = deck_state(&store, PLAYER, &decklist, &catalog());

        let filter_f = |cards: &[deck_reckoner::Card]| -> Vec<deck_reckoner::Card> {
            cards
                .iter()
                .filter(|c| c.card_id != CardId::new("F"))
                .cloned()
                .collect()
        };
        prop_assert_eq!(
            filter_f(&with_extra.remaining_in_deck),
            filter_f(&baseline.remaining_in_deck)
        );
    }
}
