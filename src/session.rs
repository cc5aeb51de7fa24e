//! Storefront session state and the role-gated card action contract.
//!
//! A [`Session`] is the externally owned UI state (role, cart counter, the
//! current query). It is rebuilt input for the query pipeline, never a cache
//! of its output, and it is never journaled.

use serde::{Deserialize, Serialize};

use crate::{
    book::BookRecord,
    query::{self, CatalogQuery},
    types::Role,
};

/// Per-visitor storefront state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Display-mode flag; carries no enforcement semantics.
    pub role: Role,
    /// Number of add-to-cart clicks this session.
    pub cart_count: u32,
    /// Current catalog view request.
    pub query: CatalogQuery,
}

impl Session {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    /// Counts one added unit. Returns false without counting when the title
    /// is out of stock.
    pub fn add_to_cart(&mut self, book: &BookRecord) -> bool {
        if !book.in_stock() {
            return false;
        }
        self.cart_count = self.cart_count.saturating_add(1);
        true
    }

    /// Runs the session's current query over `catalog`.
    pub fn visible_books<'a, I>(&self, catalog: I) -> Vec<&'a BookRecord>
    where
        I: IntoIterator<Item = &'a BookRecord>,
    {
        query::apply(catalog, &self.query)
    }

    /// Actions a card for `book` offers this session.
    pub fn card_actions(&self, book: &BookRecord) -> CardActions {
        card_actions(self.role, book)
    }
}

/// What a book card offers. One variant per rendered footer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardActions {
    /// Edit and delete controls; shown to admins regardless of stock.
    Manage,
    /// Enabled add-to-cart control.
    AddToCart,
    /// Disabled, relabeled purchase control.
    OutOfStock,
}

/// Role-gated action picker. Admins always manage; purchase actions follow
/// stock. Role never reaches the query pipeline.
pub fn card_actions(role: Role, book: &BookRecord) -> CardActions {
    match role {
        Role::Admin => CardActions::Manage,
        Role::Customer if book.in_stock() => CardActions::AddToCart,
        Role::Customer => CardActions::OutOfStock,
    }
}
