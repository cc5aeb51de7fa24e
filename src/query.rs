//! The catalog query pipeline.
//!
//! [`apply`] is a pure function from a catalog and a [`CatalogQuery`] to an
//! ordered subset. The result depends only on its inputs; callers re-run it
//! whenever either input changes rather than caching derived lists.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::{
    book::BookRecord,
    types::{ALL_GENRES, SortKey},
};

/// A catalog view request.
///
/// `search_term` is matched as a literal case-insensitive substring against
/// title and author, with no trimming or tokenization; the empty string
/// matches everything. `genre` is matched exactly against record genres,
/// with [`ALL_GENRES`] disabling the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    /// Free-text needle for title/author.
    pub search_term: String,
    /// Exact genre label, or [`ALL_GENRES`].
    pub genre: String,
    /// Ordering applied after both filters.
    pub sort_key: SortKey,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            genre: ALL_GENRES.to_string(),
            sort_key: SortKey::default(),
        }
    }
}

impl CatalogQuery {
    /// Query selecting the whole catalog in title order.
    pub fn all() -> Self {
        Self::default()
    }
}

/// Runs the pipeline over `catalog`, preserving catalog order on ties.
///
/// Filters narrow first (text, then genre), then a stable sort orders the
/// survivors by `sort_key`. Identical inputs produce identical output.
pub fn apply<'a, I>(catalog: I, query: &CatalogQuery) -> Vec<&'a BookRecord>
where
    I: IntoIterator<Item = &'a BookRecord>,
{
    let needle = query.search_term.to_lowercase();
    let mut out: Vec<&BookRecord> = catalog
        .into_iter()
        .filter(|b| matches_text(b, &needle))
        .filter(|b| matches_genre(b, &query.genre))
        .collect();
    sort_books(&mut out, query.sort_key);
    out
}

/// Owned-record variant of [`apply`].
pub fn apply_cloned<'a, I>(catalog: I, query: &CatalogQuery) -> Vec<BookRecord>
where
    I: IntoIterator<Item = &'a BookRecord>,
{
    apply(catalog, query).into_iter().cloned().collect()
}

/// Genre labels offered to the user: [`ALL_GENRES`] first, then each distinct
/// record genre in first-appearance order.
///
/// Derived fresh from the live catalog on every call; never cached, so a
/// just-added genre shows up immediately. A record genre literally named
/// `"all"` does not duplicate the sentinel.
pub fn available_genres<'a, I>(catalog: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a BookRecord>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(ALL_GENRES);
    let mut genres = vec![ALL_GENRES.to_string()];
    for book in catalog {
        if seen.insert(book.genre.as_str()) {
            genres.push(book.genre.clone());
        }
    }
    genres
}

fn matches_text(book: &BookRecord, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    book.title.to_lowercase().contains(needle_lower)
        || book.author.to_lowercase().contains(needle_lower)
}

fn matches_genre(book: &BookRecord, genre: &str) -> bool {
    genre == ALL_GENRES || book.genre == genre
}

// All four orderings use std's stable sorts so ties keep catalog order.
fn sort_books(books: &mut [&BookRecord], key: SortKey) {
    match key {
        // Case-insensitive title order via a lowercase fold of the title.
        SortKey::Title => books.sort_by_cached_key(|b| b.title.to_lowercase()),
        SortKey::PriceAsc => books.sort_by_key(|b| b.price_cents),
        SortKey::PriceDesc => books.sort_by_key(|b| std::cmp::Reverse(b.price_cents)),
        // Unrated books sort as zero stars.
        SortKey::RatingDesc => {
            books.sort_by_key(|b| std::cmp::Reverse(b.rating_tenths.unwrap_or(0)))
        }
    }
}
