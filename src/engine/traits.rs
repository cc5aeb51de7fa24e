use crate::book::BookRecord;

/// An aggregate over catalog records, maintained one contribution at a time.
///
/// `retract` must exactly invert `apply` for the same record; an edit is
/// projected as retract(old) then apply(new).
pub trait CatalogProjection: Send + 'static {
    fn apply(&mut self, book: &BookRecord);
    fn retract(&mut self, book: &BookRecord);
    fn reset(&mut self);
}
