//! In-memory bookstore catalog with a pure query pipeline and append-only
//! SQLite journaling.
//!
//! The heart of the crate is [`query::apply`]: a deterministic function from
//! a catalog snapshot and a [`query::CatalogQuery`] (search term, genre,
//! sort key) to an ordered subset of records. Everything else exists to feed
//! it: an authoritative [`core::store::CatalogStore`], inventory read models,
//! a journal sink, and a single-writer async runtime.
//!
//! # Examples
//!
//! Pure queries over an in-memory catalog:
//! ```
//! use bookhaven::{
//!     query::{self, CatalogQuery},
//!     seed,
//! };
//!
//! let books = seed::sample_books();
//! let request = CatalogQuery {
//!     search_term: "the".to_string(),
//!     ..CatalogQuery::default()
//! };
//! let hits = query::apply(&books, &request);
//! let titles: Vec<&str> = hits.iter().map(|b| b.title.as_str()).collect();
//! assert_eq!(
//!     titles,
//!     [
//!         "Harry Potter and the Sorcerer's Stone",
//!         "The Catcher in the Rye",
//!         "The Great Gatsby",
//!     ]
//! );
//!
//! let genres = query::available_genres(&books);
//! assert_eq!(genres.first().map(String::as_str), Some("all"));
//! ```
//!
//! Runtime usage with a SQLite sink:
//! ```no_run
//! use bookhaven::{
//!     book::BookDraft,
//!     core::store::CatalogStore,
//!     persist::sqlite::SqliteOpSink,
//!     runtime::handle::{RuntimeConfig, spawn_catalog},
//!     seed,
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let sink = SqliteOpSink::open("bookhaven.db").expect("open sqlite");
//! let store = CatalogStore::from_records(seed::sample_books()).expect("seed catalog");
//! let handle = spawn_catalog(store, Some(Box::new(sink)), RuntimeConfig::default());
//! let id = handle
//!     .add_book(BookDraft {
//!         title: "The Hobbit".to_string(),
//!         author: "J.R.R. Tolkien".to_string(),
//!         genre: "Fantasy".to_string(),
//!         price_cents: 1099,
//!         description: "There and back again.".to_string(),
//!         stock: 12,
//!         cover_url: String::new(),
//!         rating_tenths: Some(48),
//!         isbn: "978-0-547-92822-7".to_string(),
//!     })
//!     .await
//!     .expect("add book");
//! assert_eq!(id, "7");
//! handle.shutdown().await.expect("shutdown");
//! # }
//! ```

/// Book domain records, drafts, and patches.
pub mod book;
/// Core in-memory catalog store and index helpers.
pub mod core;
/// Projection traits, inventory counters, and the incremental projector.
pub mod engine;
/// Mutation op model and persistence wrapper types.
pub mod op;
/// Persistence abstraction and SQLite implementation.
pub mod persist;
/// The catalog query pipeline.
pub mod query;
/// Single-writer runtime handle and events.
pub mod runtime;
/// Starter catalog data.
pub mod seed;
/// Storefront session state and card actions.
pub mod session;
/// Shared primitive types and enums.
pub mod types;
