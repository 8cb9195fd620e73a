//! Error types.
//!
//! The tracking core itself has no fatal error conditions: degenerate
//! inputs degrade to "omit the unresolvable item". The only fallible
//! seam is decklist construction.

use thiserror::Error;

use crate::catalog::CardId;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TrackerError {
    #[error("invalid decklist: zero count for card {0}")]
    EmptyDecklistEntry(CardId),

    #[error("invalid decklist: duplicate entry for card {0}")]
    DuplicateDecklistEntry(CardId),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
