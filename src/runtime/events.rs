//! Runtime event stream payloads.

use crate::types::{BookId, OpSeq};

/// Events emitted from the single-writer runtime loop.
///
/// Frontends re-run their current query against the catalog whenever a
/// mutation event arrives; derived views are recomputed, never patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// A new book was added.
    Added {
        /// Added book id.
        id: BookId,
    },
    /// An existing book was edited.
    Updated {
        /// Edited book id.
        id: BookId,
    },
    /// A book was removed.
    Removed {
        /// Removed book id.
        id: BookId,
    },
    /// Persistence has reached at least this op sequence.
    DurableUpTo {
        /// Highest sequence known durable.
        op_seq: OpSeq,
    },
}
