//! Display list assembly from tracked state.

mod builder;

pub use builder::{
    created_cards_in_hand, deck_top_bottom, highlighted_cards_in_hand, known_cards_in_deck,
    opponent_card_list, player_card_list, predicted_cards_in_deck, revealed_cards,
};
