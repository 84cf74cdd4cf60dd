//! # Coin Entity
//!
//! The value record everything else is built on. A coin's identity is a
//! UUID minted at construction and never changed; every other field is
//! plain data. Equality is full structural equality across all fields,
//! identifier included. The store's membership checks depend on that
//! contract.
//!
//! The persisted JSON layout predates this crate, so [`Coin`] round-trips
//! through [`CoinRecord`], which keeps the original camelCase field names
//! and the legacy optional fields.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to a coin's picture.
///
/// Exactly one of three shapes: no picture, a bundled asset key resolved
/// by the presentation layer, or the path to a photo the user imported.
/// The crate only stores the reference; image bytes are never read here.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ImageRef {
    #[default]
    None,
    /// Opaque key into the bundled asset set, e.g. `"usa_1_dollar"`.
    Bundled(String),
    /// Filesystem path to a user-imported photo, stored as-is.
    Imported(PathBuf),
}

/// One coin, from the reference catalog or entered by the user.
///
/// Plain public data. [`Coin::new`] is the only constructor that mints an
/// identity. No range validation happens here: `year` and `market_price`
/// are checked at the form boundary ([`crate::core::input`]), and callers
/// are expected to pass a finite price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "CoinRecord", from = "CoinRecord")]
pub struct Coin {
    pub id: Uuid,
    pub country: String,
    pub denomination: String,
    pub year: i32,
    pub material: String,
    pub market_price: f64,
    pub description: String,
    pub purchase_place: String,
    pub condition: String,
    pub image: ImageRef,
}

impl Coin {
    /// Create a coin with a fresh random identity.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        country: String,
        denomination: String,
        year: i32,
        material: String,
        market_price: f64,
        image: ImageRef,
        description: String,
        purchase_place: String,
        condition: String,
    ) -> Self {
        Coin {
            id: Uuid::new_v4(),
            country,
            denomination,
            year,
            material,
            market_price,
            description,
            purchase_place,
            condition,
            image,
        }
    }
}

/// Wire shape of a coin: the exact JSON layout the original app persisted.
///
/// `imageData` carried inline photo bytes (base64) in very old records; it
/// is accepted on decode and dropped, never written back. `imageName` and
/// `imagePath` are the two halves of what is an [`ImageRef`] in memory;
/// when a legacy record somehow carries both, the bundled name wins.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoinRecord {
    id: Uuid,
    country: String,
    denomination: String,
    year: i32,
    material: String,
    market_price: f64,
    #[serde(default, skip_serializing)]
    image_data: Option<String>,
    description: String,
    purchase_place: String,
    condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_path: Option<String>,
}

impl From<Coin> for CoinRecord {
    fn from(coin: Coin) -> Self {
        let (image_name, image_path) = match coin.image {
            ImageRef::None => (None, None),
            ImageRef::Bundled(name) => (Some(name), None),
            ImageRef::Imported(path) => (None, Some(path.to_string_lossy().into_owned())),
        };
        CoinRecord {
            id: coin.id,
            country: coin.country,
            denomination: coin.denomination,
            year: coin.year,
            material: coin.material,
            market_price: coin.market_price,
            image_data: None,
            description: coin.description,
            purchase_place: coin.purchase_place,
            condition: coin.condition,
            image_name,
            image_path,
        }
    }
}

impl From<CoinRecord> for Coin {
    fn from(record: CoinRecord) -> Self {
        let image = match (record.image_name, record.image_path) {
            (Some(name), _) => ImageRef::Bundled(name),
            (None, Some(path)) => ImageRef::Imported(PathBuf::from(path)),
            (None, None) => ImageRef::None,
        };
        Coin {
            id: record.id,
            country: record.country,
            denomination: record.denomination,
            year: record.year,
            material: record.material,
            market_price: record.market_price,
            description: record.description,
            purchase_place: record.purchase_place,
            condition: record.condition,
            image,
        }
    }
}
