//! Delivery fee engine.
//!
//! Two calculators, one per business model, share the same outline: return
//! zero without settings, waive the fee at the free-delivery threshold, build
//! the fee, then apply the cap.
//!
//! - [`calculate_d2c_delivery_fee`] - fixed or weight-based fee plus
//!   per-product overrides
//! - [`calculate_grocery_delivery_fee`] - distance, area or fixed fee, first
//!   applicable wins
//! - [`quote`] - dispatches on [`DeliverySettings`] and explains the result
//!
//! Calculators are pure and never fail: missing configuration contributes
//! zero. Checkout gates live alongside them in [`check_minimum_order`] and
//! [`check_delivery_radius`].

pub mod cart;
pub mod d2c;
pub mod geo;
pub mod grocery;
pub mod minimum_order;
pub mod policy;
pub mod quote;
pub mod settings;

pub use cart::{CartItem, ProductDeliveryInfo, cart_subtotal};
pub use d2c::calculate_d2c_delivery_fee;
pub use geo::{GeoPoint, GeofenceError, check_delivery_radius, distance_km_decimal, haversine_km};
pub use grocery::{FeeStrategy, calculate_grocery_delivery_fee};
pub use minimum_order::{MinimumOrderError, check_minimum_order};
pub use policy::{Slab, SlabIssue, validate_slabs};
pub use quote::{DeliveryQuote, FeeBreakdown, QuoteRequest, quote};
pub use settings::{
    D2cDeliverySettings, DeliverySettings, DistanceSlab, GroceryDeliverySettings, WeightSlab,
};
