use serde::{Deserialize, Serialize};

use crate::book::BookRecord;

use super::traits::CatalogProjection;

/// Stock level below which a title counts as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Titles with `stock` strictly below this count as low stock.
    pub low_stock_threshold: u32,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

/// Dashboard counters. `low_stock` uses a strict threshold comparison and so
/// includes out-of-stock titles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub titles: u64,
    pub low_stock: u64,
    pub out_of_stock: u64,
}

/// Incrementally maintained inventory counters.
#[derive(Debug, Default)]
pub struct InventoryStats {
    config: InventoryConfig,
    summary: InventorySummary,
}

impl InventoryStats {
    pub fn new(config: InventoryConfig) -> Self {
        Self {
            config,
            summary: InventorySummary::default(),
        }
    }

    pub fn config(&self) -> InventoryConfig {
        self.config
    }

    pub fn summary(&self) -> InventorySummary {
        self.summary
    }
}

impl CatalogProjection for InventoryStats {
    fn apply(&mut self, book: &BookRecord) {
        self.summary.titles += 1;
        if book.stock < self.config.low_stock_threshold {
            self.summary.low_stock += 1;
        }
        if book.stock == 0 {
            self.summary.out_of_stock += 1;
        }
    }

    fn retract(&mut self, book: &BookRecord) {
        self.summary.titles = self.summary.titles.saturating_sub(1);
        if book.stock < self.config.low_stock_threshold {
            self.summary.low_stock = self.summary.low_stock.saturating_sub(1);
        }
        if book.stock == 0 {
            self.summary.out_of_stock = self.summary.out_of_stock.saturating_sub(1);
        }
    }

    fn reset(&mut self) {
        self.summary = InventorySummary::default();
    }
}

/// Full-scan reference for [`InventoryStats`]; used on cold starts and to
/// cross-check the incremental path.
pub fn summarize<'a, I>(catalog: I, config: InventoryConfig) -> InventorySummary
where
    I: IntoIterator<Item = &'a BookRecord>,
{
    let mut stats = InventoryStats::new(config);
    for book in catalog {
        stats.apply(book);
    }
    stats.summary()
}
