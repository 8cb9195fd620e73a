//! Decklists - the fixed starting multiset of cards for a deck.
//!
//! A decklist is immutable once captured and consumed only for read.
//! The local player's decklist is always known; the opponent's is
//! either absent or a best-effort tracked list from an external
//! prediction source, with the same shape.

use serde::{Deserialize, Serialize};

use crate::catalog::CardId;
use crate::error::{Result, TrackerError};

/// Deck size at game start.
pub const DECK_SIZE: usize = 30;

/// One decklist entry: a card and how many copies the deck starts with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecklistEntry {
    pub card_id: CardId,
    pub count: u32,
}

/// An ordered multiset of (card, count) pairs.
///
/// ## Example
///
/// ```
/// use deck_reckoner::catalog::CardId;
/// use deck_reckoner::deck::Decklist;
///
/// let deck = Decklist::new(vec![
///     (CardId::new("A"), 2),
///     (CardId::new("B"), 1),
/// ]).unwrap();
///
/// assert_eq!(deck.total_count(), 3);
/// assert_eq!(deck.expanded().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decklist {
    entries: Vec<DecklistEntry>,
}

impl Decklist {
    /// Create a decklist from (card, count) pairs.
    ///
    /// Entry order is preserved. Fails on zero counts or duplicate
    /// card entries.
    pub fn new(cards: Vec<(CardId, u32)>) -> Result<Self> {
        let mut entries: Vec<DecklistEntry> = Vec::with_capacity(cards.len());
        for (card_id, count) in cards {
            if count == 0 {
                return Err(TrackerError::EmptyDecklistEntry(card_id));
            }
            if entries.iter().any(|e| e.card_id == card_id) {
                return Err(TrackerError::DuplicateDecklistEntry(card_id));
            }
            entries.push(DecklistEntry { card_id, count });
        }
        Ok(Self { entries })
    }

    /// Iterate over decklist entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &DecklistEntry> {
        self.entries.iter()
    }

    /// Total number of cards in the list.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|e| e.count as usize).sum()
    }

    /// Number of distinct cards.
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list contains a card.
    #[must_use]
    pub fn contains(&self, card_id: &CardId) -> bool {
        self.entries.iter().any(|e| e.card_id == *card_id)
    }

    /// Starting count for a card, 0 if absent.
    #[must_use]
    pub fn count_of(&self, card_id: &CardId) -> u32 {
        self.entries
            .iter()
            .find(|e| e.card_id == *card_id)
            .map_or(0, |e| e.count)
    }

    /// Expand into one entry per copy, preserving entry order.
    ///
    /// This is the mutable working copy the reconciler consumes
    /// occurrences from.
    #[must_use]
    pub fn expanded(&self) -> Vec<CardId> {
        self.entries
            .iter()
            .flat_map(|e| std::iter::repeat(e.card_id.clone()).take(e.count as usize))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_counts() {
        let deck = Decklist::new(vec![
            (CardId::new("A"), 2),
            (CardId::new("B"), 1),
        ])
        .unwrap();

        assert_eq!(deck.total_count(), 3);
        assert_eq!(deck.distinct_count(), 2);
        assert_eq!(deck.count_of(&CardId::new("A")), 2);
        assert_eq!(deck.count_of(&CardId::new("C")), 0);
        assert!(deck.contains(&CardId::new("B")));
    }

    #[test]
    fn test_zero_count_rejected() {
        let result = Decklist::new(vec![(CardId::new("A"), 0)]);
        assert_eq!(result, Err(TrackerError::EmptyDecklistEntry(CardId::new("A"))));
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let result = Decklist::new(vec![
            (CardId::new("A"), 1),
            (CardId::new("A"), 2),
        ]);
        assert_eq!(
            result,
            Err(TrackerError::DuplicateDecklistEntry(CardId::new("A")))
        );
    }

    #[test]
    fn test_expanded_preserves_order() {
        let deck = Decklist::new(vec![
            (CardId::new("A"), 2),
            (CardId::new("B"), 1),
        ])
        .unwrap();

        let expanded = deck.expanded();
        assert_eq!(
            expanded,
            vec![CardId::new("A"), CardId::new("A"), CardId::new("B")]
        );
    }

    #[test]
    fn test_serialization() {
        let deck = Decklist::new(vec![(CardId::new("A"), 2)]).unwrap();
        let json = serde_json::to_string(&deck).unwrap();
        let deserialized: Decklist = serde_json::from_str(&json).unwrap();
        assert_eq!(deck, deserialized);
    }
}
