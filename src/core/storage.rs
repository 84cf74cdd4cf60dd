//! # Persistence
//!
//! Saves the collection and wishlist as JSON in the application data
//! directory, one file per key (`coinCollection.json`, `coinWishlist.json`),
//! keeping the two keys earlier releases stored these lists under.
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`) for crash
//! safety. Loading never fails: a missing or corrupt file falls back to an
//! empty list for that key only, so a broken wishlist can't take a valid
//! collection down with it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use serde::Serialize;

use super::coin::Coin;

/// Key the owned collection is persisted under.
pub const COLLECTION_KEY: &str = "coinCollection";
/// Key the wishlist is persisted under.
pub const WISHLIST_KEY: &str = "coinWishlist";

/// Handle on the directory the coin lists are persisted in.
///
/// The catalog is never persisted, only what the user curates.
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Storage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Serialize both lists to disk. Each key is written independently and
    /// atomically; both writes are attempted even when the first fails,
    /// and the first error is returned.
    ///
    /// Callers treat failure as non-fatal: the in-memory state stands, the
    /// error gets logged, nothing is rolled back.
    pub fn save(&self, collection: &[Coin], wishlist: &[Coin]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let collection_result = self.write_key(COLLECTION_KEY, collection);
        let wishlist_result = self.write_key(WISHLIST_KEY, wishlist);
        collection_result.and(wishlist_result)
    }

    /// Read both lists back as `(collection, wishlist)`.
    ///
    /// A missing key decodes to an empty list. A corrupt key is logged and
    /// also decodes to empty, without touching the other key.
    pub fn load(&self) -> (Vec<Coin>, Vec<Coin>) {
        (self.read_key(COLLECTION_KEY), self.read_key(WISHLIST_KEY))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn write_key(&self, key: &str, coins: &[Coin]) -> io::Result<()> {
        atomic_write_json(&self.key_path(key), &coins)
    }

    fn read_key(&self, key: &str) -> Vec<Coin> {
        let path = self.key_path(key);
        if !path.exists() {
            return Vec::new();
        }
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to read {key}: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&json) {
            Ok(coins) => coins,
            Err(e) => {
                warn!("Discarding corrupt {key} data: {e}");
                Vec::new()
            }
        }
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::core::coin::ImageRef;
    use crate::test_support::{coin, scratch_dir};

    #[test]
    fn test_round_trip_preserves_order_and_fields() {
        let dir = scratch_dir();
        let storage = Storage::new(&dir);

        let mut first = coin("France", 68.5);
        first.image = ImageRef::Bundled("france_2014_gallic_rooster".to_string());
        let mut second = coin("USA", 35.0);
        second.image = ImageRef::Imported(PathBuf::from("/photos/morgan.jpg"));
        let third = coin("Russia", 15.0);

        let collection = vec![first, second];
        let wishlist = vec![third];
        storage.save(&collection, &wishlist).unwrap();

        let (loaded_collection, loaded_wishlist) = storage.load();
        assert_eq!(loaded_collection, collection);
        assert_eq!(loaded_wishlist, wishlist);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_keys_load_as_empty() {
        let storage = Storage::new(scratch_dir());
        let (collection, wishlist) = storage.load();
        assert!(collection.is_empty());
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_corrupt_wishlist_does_not_poison_collection() {
        let dir = scratch_dir();
        let storage = Storage::new(&dir);

        let collection = vec![coin("Canada", 7.5)];
        storage.save(&collection, &[]).unwrap();
        fs::write(dir.join(format!("{WISHLIST_KEY}.json")), "{not json").unwrap();

        let (loaded_collection, loaded_wishlist) = storage.load();
        assert_eq!(loaded_collection, collection);
        assert!(loaded_wishlist.is_empty());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_creates_data_dir_and_leaves_no_tmp_files() {
        let dir = scratch_dir();
        assert!(!dir.exists());

        let storage = Storage::new(&dir);
        storage.save(&[coin("Japan", 1.5)], &[]).unwrap();

        assert!(dir.join(format!("{COLLECTION_KEY}.json")).exists());
        let leftovers: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_reports_failure_when_dir_is_unwritable() {
        // A file where the data dir should be makes create_dir_all fail.
        let blocker = scratch_dir();
        fs::write(&blocker, "").unwrap();

        let storage = Storage::new(blocker.join("nested"));
        assert!(storage.save(&[coin("UK", 12.0)], &[]).is_err());

        let _ = fs::remove_file(&blocker);
    }
}
