//! Core types: entity identity, annotations, the entity store, and
//! query options.

pub mod entity;
pub mod options;
pub mod player;
pub mod store;

pub use entity::{Entity, EntityId, EntityInfo, GuessedCardState, Zone};
pub use options::TrackerOptions;
pub use player::PlayerId;
pub use store::EntityStore;
