use std::time::{SystemTime, UNIX_EPOCH};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{
    book::{BookDraft, BookPatch, BookRecord},
    core::indices::{self, VecIndex},
    op::{Op, StoredOp},
    types::{BookId, OpSeq},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    MissingBook(BookId),
    AlreadyExists(BookId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshotV1 {
    pub next_book_seq: u64,
    pub next_op_seq: OpSeq,
    /// Records in curation order; `order` is rebuilt from this list on load.
    pub records: Vec<BookRecord>,
}

#[derive(Debug, Default)]
pub struct CatalogStore {
    records: HashMap<BookId, BookRecord>,
    order: Vec<BookId>,
    pos: HashMap<BookId, usize>,
    by_genre: VecIndex<String>,
    pending_ops: Vec<StoredOp>,
    next_op_seq: OpSeq,
    next_book_seq: u64,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            next_op_seq: 1,
            next_book_seq: 1,
            ..Self::default()
        }
    }

    /// Builds a store around an existing catalog list, preserving its order.
    /// Numeric ids bump the mint counter so later inserts never collide.
    pub fn from_records<I>(records: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = BookRecord>,
    {
        let mut store = Self::new();
        for rec in records {
            if store.records.contains_key(&rec.id) {
                return Err(StoreError::AlreadyExists(rec.id));
            }
            store.bump_book_seq_from(&rec.id);
            store.insert_indices(&rec);
            store.pos.insert(rec.id.clone(), store.order.len());
            store.order.push(rec.id.clone());
            store.records.insert(rec.id.clone(), rec);
        }
        Ok(store)
    }

    pub fn from_snapshot(snapshot: CatalogSnapshotV1) -> Result<Self, StoreError> {
        let mut store = Self::from_records(snapshot.records)?;
        store.next_book_seq = store.next_book_seq.max(snapshot.next_book_seq);
        store.next_op_seq = store.next_op_seq.max(snapshot.next_op_seq);
        Ok(store)
    }

    pub fn export_snapshot(&self) -> CatalogSnapshotV1 {
        CatalogSnapshotV1 {
            next_book_seq: self.next_book_seq,
            next_op_seq: self.next_op_seq,
            records: self.books_cloned(),
        }
    }

    pub fn insert(&mut self, draft: BookDraft) -> Result<(BookId, StoredOp), StoreError> {
        let id = self.mint_id();
        let book = draft.into_record(id.clone());
        let stored = self.apply_insert(book)?;
        self.pending_ops.push(stored.clone());
        Ok((id, stored))
    }

    pub fn patch(&mut self, id: &BookId, patch: BookPatch) -> Result<StoredOp, StoreError> {
        let stored = self.apply_patch(id, patch)?;
        self.pending_ops.push(stored.clone());
        Ok(stored)
    }

    pub fn remove(&mut self, id: &BookId) -> Result<(BookRecord, StoredOp), StoreError> {
        let book = self
            .records
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::MissingBook(id.clone()))?;
        let stored = self.apply_remove(id)?;
        self.pending_ops.push(stored.clone());
        Ok((book, stored))
    }

    pub fn apply_replayed_op(&mut self, stored: StoredOp) -> Result<(), StoreError> {
        let seq = stored.seq;
        match stored.op {
            Op::Insert { book } => {
                self.apply_insert_with_seq(book, seq)?;
            }
            Op::Patch { id, patch, .. } => {
                self.apply_patch_with_seq(&id, patch, seq)?;
            }
            Op::Remove { book } => {
                self.apply_remove_with_seq(&book.id, seq)?;
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &BookId) -> Option<&BookRecord> {
        self.records.get(id)
    }

    pub fn get_cloned(&self, id: &BookId) -> Option<BookRecord> {
        self.get(id).cloned()
    }

    pub fn books(&self) -> Vec<&BookRecord> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .collect()
    }

    pub fn books_cloned(&self) -> Vec<BookRecord> {
        self.books().into_iter().cloned().collect()
    }

    pub fn by_genre(&self, genre: &str) -> Vec<&BookRecord> {
        self.by_genre
            .get(genre)
            .into_iter()
            .flat_map(|ids| ids.iter())
            .filter_map(|id| self.records.get(id))
            .collect()
    }

    pub fn by_genre_cloned(&self, genre: &str) -> Vec<BookRecord> {
        self.by_genre(genre).into_iter().cloned().collect()
    }

    pub fn ordered_ids(&self) -> &[BookId] {
        &self.order
    }

    pub fn drain_pending_ops(&mut self) -> Vec<StoredOp> {
        std::mem::take(&mut self.pending_ops)
    }

    pub fn latest_op_seq(&self) -> OpSeq {
        self.next_op_seq.saturating_sub(1)
    }

    fn apply_insert(&mut self, book: BookRecord) -> Result<StoredOp, StoreError> {
        let seq = self.take_next_op_seq();
        self.apply_insert_with_seq(book, seq)
    }

    fn apply_insert_with_seq(&mut self, book: BookRecord, seq: OpSeq) -> Result<StoredOp, StoreError> {
        if self.records.contains_key(&book.id) {
            return Err(StoreError::AlreadyExists(book.id));
        }

        self.bump_book_seq_from(&book.id);
        self.insert_indices(&book);
        self.pos.insert(book.id.clone(), self.order.len());
        self.order.push(book.id.clone());
        self.records.insert(book.id.clone(), book.clone());

        self.bump_next_seq_from(seq);
        Ok(StoredOp {
            seq,
            ts_ms: now_ms(),
            op: Op::Insert { book },
        })
    }

    fn apply_patch(&mut self, id: &BookId, patch: BookPatch) -> Result<StoredOp, StoreError> {
        let seq = self.take_next_op_seq();
        self.apply_patch_with_seq(id, patch, seq)
    }

    fn apply_patch_with_seq(&mut self, id: &BookId, patch: BookPatch, seq: OpSeq) -> Result<StoredOp, StoreError> {
        let rec = self
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::MissingBook(id.clone()))?;
        let old_genre = rec.genre.clone();

        let prev = patch.capture_inverse_for(rec);
        patch.apply_to(rec);

        if rec.genre != old_genre {
            let new_genre = rec.genre.clone();
            indices::remove_id(&mut self.by_genre, &old_genre, id);
            indices::push_id(&mut self.by_genre, new_genre, id.clone());
        }

        self.bump_next_seq_from(seq);
        Ok(StoredOp {
            seq,
            ts_ms: now_ms(),
            op: Op::Patch {
                id: id.clone(),
                patch,
                prev,
            },
        })
    }

    fn apply_remove(&mut self, id: &BookId) -> Result<StoredOp, StoreError> {
        let seq = self.take_next_op_seq();
        self.apply_remove_with_seq(id, seq)
    }

    fn apply_remove_with_seq(&mut self, id: &BookId, seq: OpSeq) -> Result<StoredOp, StoreError> {
        let book = self
            .records
            .remove(id)
            .ok_or_else(|| StoreError::MissingBook(id.clone()))?;

        indices::remove_id(&mut self.by_genre, &book.genre, id);

        if let Some(idx) = self.pos.remove(id) {
            self.order.remove(idx);
            for moved in &self.order[idx..] {
                if let Some(p) = self.pos.get_mut(moved) {
                    *p -= 1;
                }
            }
        }

        self.bump_next_seq_from(seq);
        Ok(StoredOp {
            seq,
            ts_ms: now_ms(),
            op: Op::Remove { book },
        })
    }

    fn insert_indices(&mut self, rec: &BookRecord) {
        indices::push_id(&mut self.by_genre, rec.genre.clone(), rec.id.clone());
    }

    fn mint_id(&mut self) -> BookId {
        let id = self.next_book_seq.to_string();
        self.next_book_seq += 1;
        id
    }

    fn bump_book_seq_from(&mut self, id: &BookId) {
        if let Ok(n) = id.parse::<u64>() {
            self.next_book_seq = self.next_book_seq.max(n.saturating_add(1));
        }
    }

    fn take_next_op_seq(&mut self) -> OpSeq {
        let seq = self.next_op_seq;
        self.next_op_seq += 1;
        seq
    }

    fn bump_next_seq_from(&mut self, seq: OpSeq) {
        self.next_op_seq = self.next_op_seq.max(seq.saturating_add(1));
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
