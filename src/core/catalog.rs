//! # Reference Catalog
//!
//! The built-in list of 20 well-known coins the app shows before the user
//! has saved anything. Pure data, no I/O: [`static_catalog`] returns the
//! same coins, with the same identities, on every call. Identities are
//! UUID v5 over the bundled asset slug, so separate processes agree on
//! which catalog coin is which.

use uuid::Uuid;

use super::coin::{Coin, ImageRef};

/// Namespace for deterministic catalog identities.
const CATALOG_NAMESPACE: Uuid = Uuid::from_u128(0x9e97_1c86_5a04_4f0e_9d6f_3a7c_21d4_b5a1);

fn seed(
    slug: &str,
    country: &str,
    denomination: &str,
    year: i32,
    material: &str,
    market_price: f64,
    description: &str,
    purchase_place: &str,
    condition: &str,
) -> Coin {
    Coin {
        id: Uuid::new_v5(&CATALOG_NAMESPACE, slug.as_bytes()),
        country: country.to_string(),
        denomination: denomination.to_string(),
        year,
        material: material.to_string(),
        market_price,
        description: description.to_string(),
        purchase_place: purchase_place.to_string(),
        condition: condition.to_string(),
        image: ImageRef::Bundled(slug.to_string()),
    }
}

/// The fixed reference list. Used only as the startup seed when storage
/// has no catalog; never mutated afterwards.
pub fn static_catalog() -> Vec<Coin> {
    vec![
        seed(
            "france_2014_gallic_rooster",
            "France",
            "10 Euro",
            2014,
            "Silver 333",
            68.5,
            "The Gallic Rooster is a symbol of France, featured on the 2014 coin issued by \
             the Paris Mint. The coin has a denomination of 10 euros, is made of 333 fine \
             silver, weighs 17 grams, and has a diameter of 31 millimeters",
            "Paris Mint",
            "UNC",
        ),
        seed("usa_1_dollar", "USA", "1 Dollar", 1921, "Silver", 35.0, "Morgan Dollar", "eBay", "Good"),
        seed("russia_5_kopeks", "Russia", "5 Kopeks", 1899, "Copper", 15.0, "Nicholas II", "Antique Store", "Very Good"),
        seed("canada_2_dollars", "Canada", "2 Dollars", 1996, "Nickel", 7.5, "Toonie", "Coin Show", "Excellent"),
        seed("uk_1_pound", "UK", "1 Pound", 1983, "Nickel-Brass", 12.0, "Queen Elizabeth", "Collector", "Fine"),
        seed("germany_50_pfennig", "Germany", "50 Pfennig", 1950, "Cupro-Nickel", 5.0, "Post-war", "Market", "Good"),
        seed("france_5_francs", "France", "5 Francs", 1925, "Silver", 20.0, "Rooster Design", "Online", "VG"),
        seed("italy_10_lire", "Italy", "10 Lire", 1954, "Aluminum", 3.0, "Post-war", "Show", "Good"),
        seed("japan_10_yen", "Japan", "10 Yen", 1964, "Bronze", 1.5, "Tokyo Olympics", "Shop", "Excellent"),
        seed("brazil_1000_reis", "Brazil", "1000 Reis", 1900, "Copper", 25.0, "Old Coin", "Auction", "Fine"),
        seed("australia_50_cents", "Australia", "50 Cents", 1966, "Cupro-Nickel", 10.0, "Emu Design", "Collector", "Good"),
        seed("mexico_5_pesos", "Mexico", "5 Pesos", 1970, "Silver", 18.0, "Commemorative", "eBay", "VG"),
        seed("india_10_rupees", "India", "10 Rupees", 1991, "Nickel-Brass", 7.0, "Economic Reform Coin", "Market", "Good"),
        seed("china_1_yuan", "China", "1 Yuan", 1987, "Copper", 2.0, "Dragon Design", "Shop", "Excellent"),
        seed("southafrica_1_rand", "South Africa", "1 Rand", 1961, "Nickel", 6.0, "Springbok", "Collector", "Good"),
        seed("sweden_1_krona", "Sweden", "1 Krona", 1965, "Cupro-Nickel", 4.5, "King Gustaf", "Auction", "Fine"),
        seed("norway_5_kroner", "Norway", "5 Kroner", 1948, "Silver", 30.0, "Post-war Design", "Market", "VG"),
        seed("netherlands_1_gulden", "Netherlands", "1 Gulden", 1975, "Nickel", 7.0, "Wilhelmina", "Shop", "Good"),
        seed("poland_10_zloty", "Poland", "10 Zloty", 1939, "Silver", 22.0, "Pre-war Coin", "Collector", "Fine"),
        seed("czech_5_korun", "Czech Republic", "5 Korun", 2000, "NiBrAl", 3.5, "Millennium Coin", "Online", "Excellent"),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_has_twenty_entries() {
        assert_eq!(static_catalog().len(), 20);
    }

    #[test]
    fn test_catalog_is_deterministic() {
        // Same coins, same identities, same order, every call.
        assert_eq!(static_catalog(), static_catalog());
    }

    #[test]
    fn test_catalog_identities_are_distinct() {
        let ids: HashSet<Uuid> = static_catalog().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_catalog_coins_use_bundled_images() {
        for c in static_catalog() {
            assert!(matches!(c.image, ImageRef::Bundled(_)), "{} has no bundled image", c.country);
        }
    }
}
