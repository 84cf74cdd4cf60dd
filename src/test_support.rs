//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::path::PathBuf;

use uuid::Uuid;

use crate::core::coin::{Coin, ImageRef};

/// A unique throwaway directory under the system temp dir. Not created
/// here; storage creates it on first save.
pub fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("numis-test-{}", Uuid::new_v4()))
}

/// A minimal coin for membership and arithmetic tests.
pub fn coin(country: &str, market_price: f64) -> Coin {
    Coin::new(
        country.to_string(),
        "1 Unit".to_string(),
        2000,
        "Nickel".to_string(),
        market_price,
        ImageRef::None,
        String::new(),
        String::new(),
        String::new(),
    )
}
