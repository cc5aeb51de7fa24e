use crate::{
    core::store::CatalogStore,
    op::{Op, StoredOp},
    types::BookId,
};

use super::traits::CatalogProjection;

#[derive(Debug)]
pub enum ProjectorError {
    MissingBook(BookId),
}

/// Applies journal ops to a projection without rescanning the catalog.
pub struct Projector<P: CatalogProjection> {
    projection: P,
}

impl<P: CatalogProjection> Projector<P> {
    pub fn new(projection: P) -> Self {
        Self { projection }
    }

    pub fn projection(&self) -> &P {
        &self.projection
    }

    /// Folds one stored op into the projection. Expects the store to already
    /// reflect the op; patches reconstruct the pre-image from the op's
    /// inverse patch and swap contributions.
    pub fn apply_stored_op(
        &mut self,
        store: &CatalogStore,
        stored: &StoredOp,
    ) -> Result<(), ProjectorError> {
        match &stored.op {
            Op::Insert { book } => {
                self.projection.apply(book);
            }
            Op::Patch { id, prev, .. } => {
                let new = store
                    .get(id)
                    .ok_or_else(|| ProjectorError::MissingBook(id.clone()))?;
                let mut old = new.clone();
                prev.apply_to(&mut old);
                self.projection.retract(&old);
                self.projection.apply(new);
            }
            Op::Remove { book } => {
                self.projection.retract(book);
            }
        }
        Ok(())
    }

    /// Resets the projection and refolds the whole catalog.
    pub fn rebuild_from(&mut self, store: &CatalogStore) {
        self.projection.reset();
        for book in store.books() {
            self.projection.apply(book);
        }
    }
}
