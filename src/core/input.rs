//! # Add-Coin Form
//!
//! The boundary between raw user input and the entity. Fields arrive as
//! text, exactly as typed. [`CoinForm::is_valid`] is the predicate the
//! host uses to enable the save action; [`CoinForm::build`] turns a valid
//! form into a coin with a fresh identity. The entity itself never
//! range-checks; all of that lives here.

use super::coin::{Coin, ImageRef};

/// Raw field values for a coin being entered by the user.
///
/// Country, denomination, and material are required; year must parse as a
/// positive integer and market price as a finite non-negative number.
/// Description, purchase place, and condition may stay empty.
#[derive(Debug, Clone, Default)]
pub struct CoinForm {
    pub country: String,
    pub denomination: String,
    pub year: String,
    pub material: String,
    pub market_price: String,
    pub description: String,
    pub purchase_place: String,
    pub condition: String,
    pub image: ImageRef,
}

impl CoinForm {
    /// Whether the form describes a constructible coin.
    pub fn is_valid(&self) -> bool {
        if self.country.is_empty() || self.denomination.is_empty() || self.material.is_empty() {
            return false;
        }
        let year_ok = self.year.parse::<i32>().is_ok_and(|y| y > 0);
        let price_ok = self
            .market_price
            .parse::<f64>()
            .is_ok_and(|p| p.is_finite() && p >= 0.0);
        year_ok && price_ok
    }

    /// Build the coin this form describes, minting a fresh identity.
    /// Returns `None` exactly when [`CoinForm::is_valid`] is false.
    pub fn build(self) -> Option<Coin> {
        if !self.is_valid() {
            return None;
        }
        let year = self.year.parse().ok()?;
        let market_price = self.market_price.parse().ok()?;
        Some(Coin::new(
            self.country,
            self.denomination,
            year,
            self.material,
            market_price,
            self.image,
            self.description,
            self.purchase_place,
            self.condition,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CoinForm {
        CoinForm {
            country: "France".to_string(),
            denomination: "10 Euro".to_string(),
            year: "2014".to_string(),
            material: "Silver 333".to_string(),
            market_price: "68.5".to_string(),
            description: "Gallic Rooster".to_string(),
            purchase_place: "Paris Mint".to_string(),
            condition: "UNC".to_string(),
            image: ImageRef::None,
        }
    }

    #[test]
    fn test_complete_form_is_valid() {
        assert!(valid_form().is_valid());
    }

    #[test]
    fn test_optional_text_fields_may_be_empty() {
        let mut form = valid_form();
        form.description = String::new();
        form.purchase_place = String::new();
        form.condition = String::new();
        assert!(form.is_valid());
    }

    #[test]
    fn test_required_text_fields_reject_empty() {
        for field in ["country", "denomination", "material"] {
            let mut form = valid_form();
            match field {
                "country" => form.country = String::new(),
                "denomination" => form.denomination = String::new(),
                _ => form.material = String::new(),
            }
            assert!(!form.is_valid(), "{field} should be required");
        }
    }

    #[test]
    fn test_year_must_be_a_positive_integer() {
        for bad in ["", "abc", "0", "-5", "19.99"] {
            let mut form = valid_form();
            form.year = bad.to_string();
            assert!(!form.is_valid(), "year {bad:?} should be rejected");
        }
    }

    #[test]
    fn test_price_must_be_finite_and_non_negative() {
        for bad in ["", "abc", "-1", "inf", "NaN"] {
            let mut form = valid_form();
            form.market_price = bad.to_string();
            assert!(!form.is_valid(), "price {bad:?} should be rejected");
        }

        let mut free = valid_form();
        free.market_price = "0".to_string();
        assert!(free.is_valid());
    }

    #[test]
    fn test_build_maps_fields_and_parses_numbers() {
        let c = valid_form().build().unwrap();
        assert_eq!(c.country, "France");
        assert_eq!(c.year, 2014);
        assert_eq!(c.market_price, 68.5);
        assert_eq!(c.condition, "UNC");
        assert_eq!(c.image, ImageRef::None);
    }

    #[test]
    fn test_build_rejects_what_is_valid_rejects() {
        let mut form = valid_form();
        form.year = "zero".to_string();
        assert!(form.build().is_none());
    }

    #[test]
    fn test_build_mints_fresh_identities() {
        let a = valid_form().build().unwrap();
        let b = valid_form().build().unwrap();
        assert_ne!(a.id, b.id);
        // Everything but the identity matches.
        assert_eq!(a.country, b.country);
        assert_eq!(a.market_price, b.market_price);
    }
}
