//! Mutation operation model and persistence wrappers.

use serde::{Deserialize, Serialize};

use crate::{
    book::{BookPatch, BookRecord},
    types::{BookId, OpSeq},
};

/// Version number for serialized [`StoredOpEnvelope`] payloads.
pub const OP_FORMAT_VERSION: u16 = 1;

/// Immutable operation appended to the journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    /// Insert a fully materialized book.
    Insert {
        /// Inserted record.
        book: BookRecord,
    },
    /// Patch a record, including precomputed inverse patch.
    Patch {
        /// Book id to mutate.
        id: BookId,
        /// Forward patch.
        patch: BookPatch,
        /// Inverse patch that restores prior state.
        prev: BookPatch,
    },
    /// Remove a record. Carries the removed record so projections can
    /// retract it and replay tooling can audit without a store lookup.
    Remove {
        /// Removed record.
        book: BookRecord,
    },
}

impl Op {
    /// Id of the record this operation touches.
    pub fn book_id(&self) -> &BookId {
        match self {
            Op::Insert { book } | Op::Remove { book } => &book.id,
            Op::Patch { id, .. } => id,
        }
    }
}

/// Journal row metadata plus operation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredOp {
    /// Monotonic operation sequence.
    pub seq: OpSeq,
    /// Operation timestamp in milliseconds.
    pub ts_ms: u64,
    /// Operation body.
    pub op: Op,
}

/// Versioned wrapper for stable on-disk payload decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredOpEnvelope {
    /// Payload format version.
    pub format_version: u16,
    /// Wrapped operation.
    pub stored: StoredOp,
}

impl StoredOpEnvelope {
    /// Constructs an envelope using [`OP_FORMAT_VERSION`].
    pub fn new(stored: StoredOp) -> Self {
        Self {
            format_version: OP_FORMAT_VERSION,
            stored,
        }
    }
}
