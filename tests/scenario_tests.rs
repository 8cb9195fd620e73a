//! End-to-end tracking scenarios.
//!
//! These tests drive a `GameTracker` with event sequences a real game
//! log would produce and check the display lists and deck states that
//! fall out, including serialization of a mid-game snapshot.

use deck_reckoner::{
    Card, CardDatabase, CardId, CardTemplate, CardType, Decklist, Entity, EntityId, GameTracker,
    LifecycleEvent, PlayerId, TrackerOptions, Zone,
};

const LOCAL: PlayerId = PlayerId::new(0);
const OPPONENT: PlayerId = PlayerId::new(1);

fn catalog() -> CardDatabase {
    let mut db = CardDatabase::new();
    for (id, name, cost, card_type) in [
        ("A", "Alpha", 1, CardType::Minion),
        ("B", "Beta", 2, CardType::Spell),
        ("C", "Gamma", 3, CardType::Minion),
        ("X", "Xi", 4, CardType::Minion),
    ] {
        db.register(CardTemplate::new(CardId::new(id), name, card_type).with_cost(cost));
    }
    db
}

fn minion(id: u32, player: PlayerId, card: &str, zone: Zone) -> Entity {
    Entity::new(EntityId::new(id), player, zone).with_card(CardId::new(card), CardType::Minion)
}

fn find<'a>(cards: &'a [Card], id: &str) -> Option<&'a Card> {
    cards.iter().find(|c| c.card_id == CardId::new(id))
}

/// Decklist {A x2, B x1}: after drawing one A the list shows three rows,
/// A remaining x1, A removed x0, B remaining x1.
#[test]
fn test_draw_splits_decklist_entry_into_remaining_and_removed() {
    let mut game = GameTracker::new(LOCAL, OPPONENT);
    game.set_local_deck(Some(
        Decklist::new(vec![(CardId::new("A"), 2), (CardId::new("B"), 1)]).unwrap(),
    ));
    // Entity 1 is the drawn A; the event source moved it to hand.
    game.store_mut().insert(minion(1, LOCAL, "A", Zone::Hand));
    game.apply(LOCAL, LifecycleEvent::Draw { entity: EntityId::new(1), turn: 1 });

    let cards = game.player_card_list(&catalog());
    assert_eq!(cards.len(), 3, "expected A x1, A x0 and B x1: {cards:?}");

    let a_rows: Vec<&Card> = cards.iter().filter(|c| c.card_id == CardId::new("A")).collect();
    assert_eq!(a_rows.len(), 2);
    assert!(a_rows.iter().any(|c| c.count == 1));
    assert!(a_rows.iter().any(|c| c.count == 0));
    assert_eq!(find(&cards, "B").unwrap().count, 1);

    let state = game.player_deck_state(&catalog()).unwrap();
    let remaining: u32 = state.remaining_in_deck.iter().map(|c| c.count).sum();
    assert_eq!(remaining, 2);
}

/// The same entity never consumes more than one decklist copy: playing
/// the drawn card later must not remove a second A.
#[test]
fn test_entity_consumes_at_most_one_decklist_copy() {
    let mut game = GameTracker::new(LOCAL, OPPONENT);
    game.set_local_deck(Some(Decklist::new(vec![(CardId::new("A"), 2)]).unwrap()));
    game.store_mut().insert(minion(1, LOCAL, "A", Zone::Hand));
    game.apply(LOCAL, LifecycleEvent::Draw { entity: EntityId::new(1), turn: 1 });
    game.apply(LOCAL, LifecycleEvent::Play { entity: EntityId::new(1), turn: 2 });
    game.store_mut().get_mut(EntityId::new(1)).unwrap().zone = Zone::Play;

    let state = game.player_deck_state(&catalog()).unwrap();
    let remaining: u32 = state.remaining_in_deck.iter().map(|c| c.count).sum();
    assert_eq!(remaining, 1, "one copy drawn+played, one still in deck");
}

/// A transformed entity is reconciled under its original card id.
#[test]
fn test_transformed_entity_tracks_original_identity() {
    let mut game = GameTracker::new(LOCAL, OPPONENT);
    game.set_local_deck(Some(
        Decklist::new(vec![(CardId::new("A"), 1), (CardId::new("B"), 1)]).unwrap(),
    ));
    let mut e = minion(1, LOCAL, "C", Zone::Hand);
    e.info.original_card_id = Some(CardId::new("A"));
    game.store_mut().insert(e);
    game.apply(LOCAL, LifecycleEvent::Draw { entity: EntityId::new(1), turn: 1 });

    let state = game.player_deck_state(&catalog()).unwrap();
    assert!(
        state
            .remaining_in_deck
            .iter()
            .all(|c| !(c.card_id == CardId::new("A") && c.count > 0)),
        "the transformed A left the deck"
    );
    assert_eq!(
        state
            .remaining_in_deck
            .iter()
            .find(|c| c.card_id == CardId::new("B"))
            .unwrap()
            .count,
        1
    );
}

/// Opponent with no known decklist: a jousted card shows up as one
/// hidden copy, and drawing it later keeps it a single known entry.
#[test]
fn test_opponent_joust_then_draw_confirms_single_copy() {
    let mut game = GameTracker::new(LOCAL, OPPONENT);
    let mut e = minion(1, OPPONENT, "X", Zone::Deck);
    e.info.hidden = true;
    game.store_mut().insert(e);
    game.apply(
        OPPONENT,
        LifecycleEvent::JoustReveal { entity: EntityId::new(1), turn: 2 },
    );

    // The hidden deck entity is suppressed; only the prediction shows.
    let cards = game.opponent_card_list(&catalog());
    assert_eq!(cards.len(), 1);
    assert!(cards[0].jousted);

    // The reveal is later confirmed when the same card is played.
    game.store_mut().get_mut(EntityId::new(1)).unwrap().zone = Zone::Play;
    game.apply(OPPONENT, LifecycleEvent::Play { entity: EntityId::new(1), turn: 4 });

    assert!(!game.opponent().predictions().contains(&CardId::new("X")));
    let cards = game.opponent_card_list(&catalog());
    assert_eq!(cards.len(), 1, "played copy replaces the prediction: {cards:?}");
    assert_eq!(cards[0].count, 1);
}

/// A play that happened before the joust reveal was recorded must not
/// consume the prediction.
#[test]
fn test_earlier_play_does_not_consume_later_joust_reveal() {
    let mut game = GameTracker::new(LOCAL, OPPONENT);
    game.store_mut().insert(minion(1, OPPONENT, "X", Zone::Deck));
    game.store_mut().insert(minion(2, OPPONENT, "X", Zone::Hand));
    // Entity 2 was last seen on turn 1, the joust happens on turn 3.
    game.store_mut().get_mut(EntityId::new(2)).unwrap().info.turn = 1;
    game.apply(
        OPPONENT,
        LifecycleEvent::JoustReveal { entity: EntityId::new(1), turn: 3 },
    );
    game.apply(OPPONENT, LifecycleEvent::Play { entity: EntityId::new(2), turn: 1 });

    assert!(
        game.opponent().predictions().contains(&CardId::new("X")),
        "a play older than the reveal cannot be the revealed copy"
    );
}

/// Mulligan-dealing phase: opponent redraws are marked mulliganed, not
/// hidden, so they never pollute the opponent list.
#[test]
fn test_mulligan_redraw_is_not_shown_as_hand_card() {
    let mut game = GameTracker::new(LOCAL, OPPONENT);
    game.store_mut()
        .insert(Entity::new(EntityId::new(1), OPPONENT, Zone::Hand));
    game.set_mulligan_dealing(true);
    game.apply(OPPONENT, LifecycleEvent::Draw { entity: EntityId::new(1), turn: 0 });
    game.set_mulligan_dealing(false);

    let e = game.store().get(EntityId::new(1)).unwrap();
    assert!(e.info.mulliganed);
    assert!(!e.info.hidden);
    assert!(game.opponent_card_list(&catalog()).is_empty());
}

/// Cards created into the local hand appear only when the option asks
/// for them, flagged as created.
#[test]
fn test_created_in_hand_follows_show_player_get() {
    let catalog = catalog();
    let mut game = GameTracker::new(LOCAL, OPPONENT);
    game.set_local_deck(Some(Decklist::new(vec![(CardId::new("A"), 2)]).unwrap()));
    game.store_mut().insert(minion(1, LOCAL, "C", Zone::Hand));
    game.apply(
        LOCAL,
        LifecycleEvent::CreateInHand { entity: EntityId::new(1), turn: 3 },
    );

    let cards = game.player_card_list(&catalog);
    assert!(find(&cards, "C").is_none());

    let game = game.with_options(TrackerOptions::default().show_player_get(true));
    let cards = game.player_card_list(&catalog);
    let c = find(&cards, "C").unwrap();
    assert!(c.is_created);
    assert!(c.highlight_in_hand);
}

/// Fatigue and per-turn play tracking across turn boundaries.
#[test]
fn test_counters_across_turns_and_fatigue() {
    let mut game = GameTracker::new(LOCAL, OPPONENT);
    game.store_mut().insert(minion(1, LOCAL, "A", Zone::Hand));
    game.apply(LOCAL, LifecycleEvent::Play { entity: EntityId::new(1), turn: 5 });
    game.apply(LOCAL, LifecycleEvent::Fatigue { value: 2 });
    assert_eq!(game.local().cards_played_this_turn.len(), 1);
    assert_eq!(game.local().fatigue, 2);

    game.apply(LOCAL, LifecycleEvent::TurnStart);
    assert!(game.local().cards_played_this_turn.is_empty());
    assert_eq!(game.local().fatigue, 2, "fatigue persists across turns");
}

/// Reset clears both seats and refuses to re-enter until finished.
#[test]
fn test_reset_is_guarded_and_complete() {
    let mut game = GameTracker::new(LOCAL, OPPONENT);
    game.store_mut().insert(minion(1, OPPONENT, "X", Zone::Deck));
    game.apply(
        OPPONENT,
        LifecycleEvent::JoustReveal { entity: EntityId::new(1), turn: 2 },
    );
    game.apply(OPPONENT, LifecycleEvent::Fatigue { value: 3 });

    assert!(game.begin_reset());
    assert!(!game.begin_reset(), "second reset must be refused");
    assert_eq!(game.store().len(), 0);
    assert!(game.opponent().predictions().is_empty());
    assert_eq!(game.opponent().fatigue, 0);

    game.finish_reset();
    assert!(game.begin_reset());
    game.finish_reset();
}

/// Dredge indices split the local deck into top and bottom lists, and a
/// shuffle forgets them.
#[test]
fn test_dredge_indices_and_shuffle() {
    let mut game = GameTracker::new(LOCAL, OPPONENT);
    for (id, card, index) in [(1, "A", 1), (2, "B", -1)] {
        let mut e = minion(id, LOCAL, card, Zone::Deck);
        e.info.deck_index = index;
        game.store_mut().insert(e);
    }

    let (top, bottom) = game.player_deck_top_bottom(&catalog());
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].card_id, CardId::new("A"));
    assert_eq!(bottom.len(), 1);
    assert_eq!(bottom[0].card_id, CardId::new("B"));

    game.apply(LOCAL, LifecycleEvent::ShuffleDeck);
    let (top, bottom) = game.player_deck_top_bottom(&catalog());
    assert!(top.is_empty());
    assert!(bottom.is_empty());
}

/// A mid-game tracker snapshot survives a serde round trip.
#[test]
fn test_tracker_snapshot_round_trip() {
    let mut game = GameTracker::new(LOCAL, OPPONENT);
    game.set_local_deck(Some(
        Decklist::new(vec![(CardId::new("A"), 2), (CardId::new("B"), 1)]).unwrap(),
    ));
    game.store_mut().insert(minion(1, LOCAL, "A", Zone::Hand));
    game.apply(LOCAL, LifecycleEvent::Draw { entity: EntityId::new(1), turn: 1 });
    game.store_mut().insert(minion(2, OPPONENT, "X", Zone::Deck));
    game.apply(
        OPPONENT,
        LifecycleEvent::JoustReveal { entity: EntityId::new(2), turn: 2 },
    );

    let json = serde_json::to_string(&game).unwrap();
    let restored: GameTracker = serde_json::from_str(&json).unwrap();

    assert_eq!(
        restored.player_card_list(&catalog()),
        game.player_card_list(&catalog())
    );
    assert_eq!(
        restored.opponent_card_list(&catalog()),
        game.opponent_card_list(&catalog())
    );
}
