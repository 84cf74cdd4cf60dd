//! # Achievements
//!
//! Milestones derived from the current store state. Evaluation is a pure
//! read: fixed order, literal thresholds, recomputed on every call, no
//! state of its own.

use super::store::CollectionStore;

/// One milestone row: a human-readable title and whether it is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub achieved: bool,
}

/// Evaluate every milestone against the store.
pub fn evaluate(store: &CollectionStore) -> Vec<Achievement> {
    vec![
        Achievement {
            title: "First 5 coins collected",
            achieved: store.collection().len() >= 5,
        },
        Achievement {
            title: "10 coins collected",
            achieved: store.collection().len() >= 10,
        },
        Achievement {
            title: "20 coins in wishlist",
            achieved: store.wishlist().len() >= 20,
        },
        Achievement {
            title: "Collected coins from 3+ countries",
            achieved: store.unique_countries() >= 3,
        },
        Achievement {
            title: "Total market value over $1000",
            achieved: store.total_market_price() >= 1000.0,
        },
    ]
}
