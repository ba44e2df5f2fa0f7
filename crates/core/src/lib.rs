//! Shopfront Core - delivery fee engine and shared types.
//!
//! This crate holds the delivery pricing rules of the Shopfront platform,
//! independent of any storefront or dashboard. Checkout prices a cart with
//! it, the dashboard previews a tenant's policy with it, and `sf-cli` quotes
//! and validates settings files with it.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP clients. Delivery settings and cart snapshots are
//! loaded by the caller and passed in by reference for every calculation.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the enums shared by the delivery model
//! - [`delivery`] - Delivery settings, cart snapshot and the fee calculators

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod delivery;
pub mod types;

pub use delivery::{
    CartItem, D2cDeliverySettings, DeliveryQuote, DeliverySettings, DistanceSlab, FeeBreakdown,
    GeoPoint, GroceryDeliverySettings, ProductDeliveryInfo, QuoteRequest, WeightSlab,
    calculate_d2c_delivery_fee, calculate_grocery_delivery_fee, quote,
};
pub use types::*;
