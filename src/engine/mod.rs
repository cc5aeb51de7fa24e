//! Read models derived from the catalog record stream.

/// Inventory counters backing the admin dashboard.
pub mod inventory;
/// Incremental op applier for any projection.
pub mod projector;
/// Projection trait.
pub mod traits;
