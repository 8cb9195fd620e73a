//! Card templates - static card data.
//!
//! `CardTemplate` holds the immutable properties of a card: name, cost,
//! type. Per-game instance state (zone, annotations) lives in
//! `core::Entity`, keyed back to the template by `CardId`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card template.
///
/// This identifies the "type" of card (e.g., "Arcane Intellect"),
/// not a specific instance in a game. Card identifiers are opaque
/// strings assigned by the catalog collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The broad type of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Minion,
    Spell,
    Weapon,
    Hero,
    HeroPower,
    Token,
    Enchantment,
}

impl CardType {
    /// Whether cards of this type count as playable deck cards.
    ///
    /// Hero powers, tokens and enchantments exist as entities but are
    /// never part of a decklist.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        matches!(
            self,
            CardType::Minion | CardType::Spell | CardType::Weapon | CardType::Hero
        )
    }
}

/// Immutable template for a card.
///
/// ## Example
///
/// ```
/// use deck_reckoner::catalog::{CardId, CardTemplate, CardType};
///
/// let card = CardTemplate::new(CardId::new("EX1_001"), "Lightwarden", CardType::Minion)
///     .with_cost(1);
///
/// assert_eq!(card.name, "Lightwarden");
/// assert_eq!(card.cost, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Unique identifier for this template.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Mana cost, used for canonical display ordering.
    pub cost: i32,

    /// Broad card type.
    pub card_type: CardType,
}

impl CardTemplate {
    /// Create a new card template with zero cost.
    pub fn new(id: CardId, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id,
            name: name.into(),
            cost: 0,
            card_type,
        }
    }

    /// Set the mana cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: i32) -> Self {
        self.cost = cost;
        self
    }
}
