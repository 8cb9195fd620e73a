//! Card database for template lookup.
//!
//! `CardCatalog` is the lookup interface the tracker depends on;
//! `CardDatabase` is the in-memory implementation.

use rustc_hash::FxHashMap;

use super::template::{CardId, CardTemplate};

/// Lookup interface for card templates.
///
/// Implementations must be idempotent and side-effect free: the tracker
/// may call `lookup` any number of times during a single query. A miss
/// means the producing pipeline stage drops that card group rather than
/// erroring.
pub trait CardCatalog {
    /// Look up a card template by ID.
    fn lookup(&self, id: &CardId) -> Option<&CardTemplate>;
}

/// In-memory card database.
///
/// ## Example
///
/// ```
/// use deck_reckoner::catalog::{CardCatalog, CardDatabase, CardId, CardTemplate, CardType};
///
/// let mut db = CardDatabase::new();
/// db.register(CardTemplate::new(CardId::new("CS2_029"), "Fireball", CardType::Spell).with_cost(4));
///
/// let found = db.lookup(&CardId::new("CS2_029")).unwrap();
/// assert_eq!(found.name, "Fireball");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardDatabase {
    cards: FxHashMap<CardId, CardTemplate>,
}

impl CardDatabase {
    /// Create a new empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card template.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardTemplate) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id.clone(), card);
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the database is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card templates.
    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        self.cards.values()
    }
}

impl CardCatalog for CardDatabase {
    fn lookup(&self, id: &CardId) -> Option<&CardTemplate> {
        self.cards.get(id)
    }
}
