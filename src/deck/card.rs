//! Display cards - the projection handed to rendering collaborators.
//!
//! A `Card` is not game state: it aggregates entities with the same
//! card identity and equivalent flags into one row with a summed count.

use serde::{Deserialize, Serialize};

use crate::catalog::{CardId, CardTemplate};

/// One display row in a tracked card list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card identity.
    pub card_id: CardId,

    /// Display name from the catalog.
    pub name: String,

    /// Mana cost from the catalog.
    pub cost: i32,

    /// Aggregated copy count. Zero for "known gone" rows.
    pub count: u32,

    /// Did not originate from the starting decklist.
    pub is_created: bool,

    /// Known to exist but position unconfirmed.
    pub jousted: bool,

    /// A copy of this decklist card is currently in hand.
    pub highlight_in_hand: bool,

    /// Left the deck via a discard.
    pub was_discarded: bool,

    /// Dredge ordering: positive from the top of the deck, negative from
    /// the bottom, 0 = unknown position.
    pub deck_list_index: i32,
}

impl Card {
    /// Create a one-copy card row from a catalog template.
    #[must_use]
    pub fn from_template(template: &CardTemplate) -> Self {
        Self {
            card_id: template.id.clone(),
            name: template.name.clone(),
            cost: template.cost,
            count: 1,
            is_created: false,
            jousted: false,
            highlight_in_hand: false,
            was_discarded: false,
            deck_list_index: 0,
        }
    }
}

/// Sort a concatenated card list into canonical display order:
/// cost, then name, higher counts first among equal cards.
///
/// Deduplication happens upstream (entity grouping and the
/// already-represented filters in the list builder); rows with the same
/// card but different flags or counts stay distinct.
#[must_use]
pub fn sorted_card_list(cards: impl IntoIterator<Item = Card>) -> Vec<Card> {
    let mut out: Vec<Card> = cards.into_iter().collect();
    out.sort_by(|a, b| {
        a.cost
            .cmp(&b.cost)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| b.count.cmp(&a.count))
    });
    out
}
