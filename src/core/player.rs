//! Player identification.
//!
//! The tracker observes a two-seat game: the local player (known deck)
//! and the opponent (deck unknown or externally predicted). Seats are
//! identified by `PlayerId`, assigned by the event source.

use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// Seat indices are assigned by the event source; the tracker only
/// compares them for equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
