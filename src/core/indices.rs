use hashbrown::HashMap;

use crate::types::BookId;

pub type VecIndex<K> = HashMap<K, Vec<BookId>>;

pub fn push_id<K: Eq + std::hash::Hash>(index: &mut VecIndex<K>, key: K, id: BookId) {
    index.entry(key).or_default().push(id);
}

// Empty buckets are dropped so key sets stay exact.
pub fn remove_id<K: Eq + std::hash::Hash>(index: &mut VecIndex<K>, key: &K, id: &BookId) {
    if let Some(bucket) = index.get_mut(key) {
        if let Some(pos) = bucket.iter().position(|x| x == id) {
            bucket.remove(pos);
        }
        if bucket.is_empty() {
            index.remove(key);
        }
    }
}
