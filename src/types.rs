//! Shared primitive IDs and storefront enums.

use serde::{Deserialize, Serialize};

/// Catalog book identifier. Store-minted ids are decimal strings ("1", "2",
/// ...); ids loaded from snapshots may be arbitrary non-empty strings.
pub type BookId = String;
/// Monotonic operation sequence number.
pub type OpSeq = u64;

/// Sentinel genre meaning "no genre filter".
pub const ALL_GENRES: &str = "all";

/// Catalog ordering key.
///
/// Serialized names are the published key strings (`"title"`, `"price-asc"`,
/// `"price-desc"`, `"rating-desc"`); anything else fails to deserialize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Alphabetical by title, case-insensitive.
    #[default]
    Title,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Best-rated first; unrated sorts as zero.
    RatingDesc,
}

/// Session role controlling which card actions a book offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Browsing shopper; sees purchase actions.
    #[default]
    Customer,
    /// Store staff; sees edit and delete actions.
    Admin,
}
