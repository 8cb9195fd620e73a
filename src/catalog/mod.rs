//! Card catalog - immutable card templates and lookup.
//!
//! The catalog is an external collaborator: the tracker consumes it,
//! never owns it. `CardCatalog` is the lookup seam; `CardDatabase` is
//! an in-memory implementation for consumers and tests.

pub mod database;
pub mod template;

pub use database::{CardCatalog, CardDatabase};
pub use template::{CardId, CardTemplate, CardType};
