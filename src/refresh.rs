//! Display refresh coalescing.
//!
//! Consumers typically redraw after every applied event, but events
//! arrive in bursts. `UpdateCoalescer` counts outstanding refresh
//! requests so a consumer performs one redraw per burst instead of one
//! per event: each request increments the counter, and a settle only
//! reports ready once every outstanding request has settled.
//!
//! ## Example
//!
//! ```
//! use deck_reckoner::UpdateCoalescer;
//!
//! let mut coalescer = UpdateCoalescer::new();
//! coalescer.request();
//! coalescer.request();
//! assert!(!coalescer.settle()); // one request still pending
//! assert!(coalescer.settle()); // burst drained, redraw now
//! ```

use serde::{Deserialize, Serialize};

/// Counter that collapses bursts of refresh requests into one redraw.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateCoalescer {
    pending: u32,
}

impl UpdateCoalescer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one refresh request.
    pub fn request(&mut self) {
        self.pending += 1;
    }

    /// Settle one request. Returns `true` when no requests remain
    /// outstanding, meaning the caller should redraw now.
    pub fn settle(&mut self) -> bool {
        self.pending = self.pending.saturating_sub(1);
        self.pending == 0
    }

    /// Number of requests still outstanding.
    #[must_use]
    pub fn pending(&self) -> u32 {
        self.pending
    }
}
