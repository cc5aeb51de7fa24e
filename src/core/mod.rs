//! In-memory authoritative catalog and index helpers.

/// Helper index aliases and bucket maintenance.
pub mod indices;
/// Authoritative catalog store.
pub mod store;
