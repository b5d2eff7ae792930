//! Cached product listing shared across request handlers.

use parking_lot::RwLock;

use crate::dto::products::ProductDto;

/// Snapshot of the product listing served by the index page.
///
/// Mutations mark the snapshot stale through [`Self::invalidate`]; the next
/// page load rebuilds it from the repository.
#[derive(Default)]
pub struct ListingCache {
    entries: RwLock<Option<Vec<ProductDto>>>,
}

impl ListingCache {
    /// Create an empty, stale cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached listing, or `None` when stale.
    pub fn get(&self) -> Option<Vec<ProductDto>> {
        self.entries.read().clone()
    }

    /// Replace the cached listing with a freshly built one.
    pub fn store(&self, products: Vec<ProductDto>) {
        *self.entries.write() = Some(products);
    }

    /// Mark the cached listing stale.
    pub fn invalidate(&self) {
        *self.entries.write() = None;
    }
}
