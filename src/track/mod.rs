//! Lifecycle event tracking.
//!
//! The event-driven half of the crate: lifecycle events arrive from an
//! external log source, per-seat trackers apply them to the shared
//! entity store, and `GameTracker` coordinates both seats plus the
//! game-wide phase flags.

mod event;
mod game;
mod player;
pub(crate) mod predictions;

pub use event::LifecycleEvent;
pub use game::GameTracker;
pub use player::PlayerTracker;
pub use predictions::{PredictedCard, PredictionLedger};
