//! Cart snapshot consumed by the calculators.
//!
//! The cart/catalog layer joins product delivery fields onto each line before
//! calling in; a fresh snapshot is built for every calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Product fields that affect delivery pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDeliveryInfo {
    /// Charge `product_delivery_fee` per unit instead of the cart-wide base fee.
    pub product_delivery_fee_enabled: Option<bool>,
    pub product_delivery_fee: Option<Decimal>,
    /// Unit weight in kg, used only by weight-based D2C delivery.
    pub product_weight: Option<Decimal>,
}

impl ProductDeliveryInfo {
    /// A per-unit delivery fee override.
    #[must_use]
    pub const fn with_override(fee: Decimal) -> Self {
        Self {
            product_delivery_fee_enabled: Some(true),
            product_delivery_fee: Some(fee),
            product_weight: None,
        }
    }

    /// No override, with a unit weight in kg.
    #[must_use]
    pub const fn with_weight(weight: Decimal) -> Self {
        Self {
            product_delivery_fee_enabled: None,
            product_delivery_fee: None,
            product_weight: Some(weight),
        }
    }
}

/// One cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub qty: u32,
    pub unit_price: Decimal,
    #[serde(default)]
    pub product: ProductDeliveryInfo,
}

impl CartItem {
    #[must_use]
    pub const fn new(
        product_id: ProductId,
        qty: u32,
        unit_price: Decimal,
        product: ProductDeliveryInfo,
    ) -> Self {
        Self {
            product_id,
            qty,
            unit_price,
            product,
        }
    }

    #[must_use]
    pub fn quantity(&self) -> Decimal {
        Decimal::from(self.qty)
    }

    /// `unit_price * qty`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(self.quantity())
    }

    /// The per-unit override fee, only when the override is enabled and set.
    #[must_use]
    pub fn delivery_override(&self) -> Option<Decimal> {
        if self.product.product_delivery_fee_enabled.unwrap_or(false) {
            self.product.product_delivery_fee
        } else {
            None
        }
    }

    /// `product_weight * qty`; an unknown weight counts as zero.
    #[must_use]
    pub fn line_weight(&self) -> Decimal {
        self.product
            .product_weight
            .unwrap_or_default()
            .saturating_mul(self.quantity())
    }
}

/// Sum of line totals.
#[must_use]
pub fn cart_subtotal(items: &[CartItem]) -> Decimal {
    items
        .iter()
        .map(CartItem::line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}
