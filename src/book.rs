//! Book domain record, draft, and patch types.

use serde::{Deserialize, Serialize};

use crate::types::BookId;

/// Cover image used whenever a record has no usable image URL.
pub const PLACEHOLDER_COVER_URL: &str = "/placeholder.svg";

/// Fully materialized, authoritative catalog record.
///
/// Money and ratings are fixed-point integers so records stay `Eq` and sort
/// keys stay total: `price_cents` holds whole cents, `rating_tenths` holds
/// tenths of a star (42 is 4.2). The display helpers render the decimal forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Stable book identifier.
    pub id: BookId,
    /// Title text.
    pub title: String,
    /// Author text.
    pub author: String,
    /// Genre label, matched exactly by the genre filter.
    pub genre: String,
    /// Price in whole cents.
    pub price_cents: u32,
    /// Back-cover description.
    pub description: String,
    /// Units on hand.
    pub stock: u32,
    /// Cover image URL; may be empty.
    pub cover_url: String,
    /// Average rating in tenths of a star, if the book has been rated.
    pub rating_tenths: Option<u8>,
    /// ISBN text.
    pub isbn: String,
}

impl BookRecord {
    /// Returns true when at least one unit is on hand.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Price rendered with two decimal places, e.g. `"12.99"`.
    pub fn price_display(&self) -> String {
        format!("{}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }

    /// Rating rendered with one decimal place, e.g. `"4.2"`, if rated.
    pub fn rating_display(&self) -> Option<String> {
        self.rating_tenths
            .map(|t| format!("{}.{}", t / 10, t % 10))
    }

    /// Cover URL to render, falling back to [`PLACEHOLDER_COVER_URL`] when
    /// the record carries none.
    pub fn cover_url_or_placeholder(&self) -> &str {
        if self.cover_url.is_empty() {
            PLACEHOLDER_COVER_URL
        } else {
            &self.cover_url
        }
    }
}

/// Insert payload used to create a new [`BookRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    /// Title text.
    pub title: String,
    /// Author text.
    pub author: String,
    /// Genre label.
    pub genre: String,
    /// Price in whole cents.
    pub price_cents: u32,
    /// Back-cover description.
    pub description: String,
    /// Units on hand.
    pub stock: u32,
    /// Cover image URL; may be empty.
    pub cover_url: String,
    /// Average rating in tenths of a star, if rated.
    pub rating_tenths: Option<u8>,
    /// ISBN text.
    pub isbn: String,
}

impl BookDraft {
    /// Materializes the draft into a record under `id`.
    pub fn into_record(self, id: BookId) -> BookRecord {
        BookRecord {
            id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            price_cents: self.price_cents,
            description: self.description,
            stock: self.stock,
            cover_url: self.cover_url,
            rating_tenths: self.rating_tenths,
            isbn: self.isbn,
        }
    }
}

/// Patch slot for the optional rating field.
///
/// A plain `Option<Option<u8>>` would collapse "leave alone" and "clear"
/// when round-tripped through the journal, so the three states are explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RatingPatch {
    /// Leave the rating untouched.
    #[default]
    Keep,
    /// Remove the rating.
    Clear,
    /// Replace the rating with the given tenths value.
    Set(u8),
}

/// Sparse patch where each `Some` field overwrites the record value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookPatch {
    /// Optional replacement for title.
    pub title: Option<String>,
    /// Optional replacement for author.
    pub author: Option<String>,
    /// Optional replacement for genre.
    pub genre: Option<String>,
    /// Optional replacement for price in cents.
    pub price_cents: Option<u32>,
    /// Optional replacement for description.
    pub description: Option<String>,
    /// Optional replacement for stock.
    pub stock: Option<u32>,
    /// Optional replacement for cover URL.
    pub cover_url: Option<String>,
    /// Rating change, if any.
    pub rating: RatingPatch,
    /// Optional replacement for ISBN.
    pub isbn: Option<String>,
}

impl BookPatch {
    /// Returns true when no fields are set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Captures an inverse patch for all fields present in `self`.
    pub fn capture_inverse_for(&self, rec: &BookRecord) -> Self {
        Self {
            title: self.title.as_ref().map(|_| rec.title.clone()),
            author: self.author.as_ref().map(|_| rec.author.clone()),
            genre: self.genre.as_ref().map(|_| rec.genre.clone()),
            price_cents: self.price_cents.map(|_| rec.price_cents),
            description: self.description.as_ref().map(|_| rec.description.clone()),
            stock: self.stock.map(|_| rec.stock),
            cover_url: self.cover_url.as_ref().map(|_| rec.cover_url.clone()),
            rating: match self.rating {
                RatingPatch::Keep => RatingPatch::Keep,
                RatingPatch::Clear | RatingPatch::Set(_) => match rec.rating_tenths {
                    Some(t) => RatingPatch::Set(t),
                    None => RatingPatch::Clear,
                },
            },
            isbn: self.isbn.as_ref().map(|_| rec.isbn.clone()),
        }
    }

    /// Applies this patch in place to `rec`.
    pub fn apply_to(&self, rec: &mut BookRecord) {
        if let Some(v) = &self.title {
            rec.title = v.clone();
        }
        if let Some(v) = &self.author {
            rec.author = v.clone();
        }
        if let Some(v) = &self.genre {
            rec.genre = v.clone();
        }
        if let Some(v) = self.price_cents {
            rec.price_cents = v;
        }
        if let Some(v) = &self.description {
            rec.description = v.clone();
        }
        if let Some(v) = self.stock {
            rec.stock = v;
        }
        if let Some(v) = &self.cover_url {
            rec.cover_url = v.clone();
        }
        match self.rating {
            RatingPatch::Keep => {}
            RatingPatch::Clear => rec.rating_tenths = None,
            RatingPatch::Set(t) => rec.rating_tenths = Some(t),
        }
        if let Some(v) = &self.isbn {
            rec.isbn = v.clone();
        }
    }
}
