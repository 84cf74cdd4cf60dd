//! # Collection Store
//!
//! The authoritative in-memory state: catalog, collection, wishlist. All
//! mutation goes through here. Every mutating operation persists
//! immediately, and the in-memory change stands even when the write
//! fails: the failure is logged, not propagated, and nothing rolls back.
//! Statistics are derived on read and never cached.
//!
//! There is no global instance: the host constructs one store and passes
//! it to whatever renders its published state.

use std::collections::HashSet;

use log::warn;

use super::catalog;
use super::coin::Coin;
use super::storage::Storage;

pub struct CollectionStore {
    catalog: Vec<Coin>,
    collection: Vec<Coin>,
    wishlist: Vec<Coin>,
    storage: Storage,
}

impl CollectionStore {
    /// Load persisted state and seed the reference catalog.
    ///
    /// Only the collection and wishlist are ever persisted, so the catalog
    /// coming out of storage is always empty; it is seeded from the static
    /// list here, once per startup.
    pub fn open(storage: Storage) -> Self {
        let (collection, wishlist) = storage.load();
        CollectionStore {
            catalog: catalog::static_catalog(),
            collection,
            wishlist,
            storage,
        }
    }

    pub fn catalog(&self) -> &[Coin] {
        &self.catalog
    }

    pub fn collection(&self) -> &[Coin] {
        &self.collection
    }

    pub fn wishlist(&self) -> &[Coin] {
        &self.wishlist
    }

    /// Append `coin` to the collection unless a value-equal coin is
    /// already there. Returns whether anything changed.
    pub fn add_to_collection(&mut self, coin: Coin) -> bool {
        if self.collection.contains(&coin) {
            return false;
        }
        self.collection.push(coin);
        self.persist();
        true
    }

    /// Remove every collection entry carrying `coin`'s identifier.
    ///
    /// Matching is by identifier, not value equality: an edited copy of a
    /// stored coin still removes the stored entry. Removing an absent coin
    /// is a no-op, not an error. Returns whether anything was removed.
    pub fn remove_from_collection(&mut self, coin: &Coin) -> bool {
        let before = self.collection.len();
        self.collection.retain(|c| c.id != coin.id);
        let removed = self.collection.len() != before;
        self.persist();
        removed
    }

    /// Append `coin` to the wishlist unless a value-equal coin is already
    /// there. Returns whether anything changed.
    pub fn add_to_wishlist(&mut self, coin: Coin) -> bool {
        if self.wishlist.contains(&coin) {
            return false;
        }
        self.wishlist.push(coin);
        self.persist();
        true
    }

    /// Remove every wishlist entry carrying `coin`'s identifier.
    pub fn remove_from_wishlist(&mut self, coin: &Coin) -> bool {
        let before = self.wishlist.len();
        self.wishlist.retain(|c| c.id != coin.id);
        let removed = self.wishlist.len() != before;
        self.persist();
        removed
    }

    /// Sum of market prices over the owned collection. Zero when empty.
    pub fn total_market_price(&self) -> f64 {
        self.collection.iter().map(|c| c.market_price).sum()
    }

    /// Number of distinct countries among owned coins.
    pub fn unique_countries(&self) -> usize {
        self.collection
            .iter()
            .map(|c| c.country.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.collection, &self.wishlist) {
            warn!("Failed to persist coin lists: {e}");
        }
    }
}
