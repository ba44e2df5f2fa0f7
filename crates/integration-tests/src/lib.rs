//! Integration tests for Shopfront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `delivery_scenarios` - Checkout scenarios loaded from `fixtures/`
//! - `delivery_properties` - Invariants checked over generated carts
//!
//! This crate only provides fixture loading; the tests live in `tests/`.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Deserialize;
use shopfront_core::{CartItem, DeliverySettings, QuoteRequest};

/// One priced checkout with its expected fee.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub name: String,
    pub settings: DeliverySettings,
    #[serde(default)]
    pub cart: Vec<CartItem>,
    /// Defaults to the cart's subtotal.
    pub subtotal: Option<Decimal>,
    #[serde(default)]
    pub area_fee: Decimal,
    #[serde(default)]
    pub distance_km: Decimal,
    pub expected_fee: Decimal,
}

impl Scenario {
    /// The quote request for this scenario.
    #[must_use]
    pub fn request(&self) -> QuoteRequest<'_> {
        let mut request = QuoteRequest::for_cart(&self.cart)
            .with_area_fee(self.area_fee)
            .with_distance_km(self.distance_km);
        if let Some(subtotal) = self.subtotal {
            request.subtotal = subtotal;
        }
        request
    }
}

/// Path to a file under this crate's `fixtures/` directory.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Load a list of scenarios from a YAML fixture.
///
/// # Errors
///
/// Returns an error if the fixture cannot be read or parsed.
pub fn load_scenarios(name: &str) -> Result<Vec<Scenario>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(fixture_path(name))?;
    Ok(serde_yaml::from_str(&content)?)
}
