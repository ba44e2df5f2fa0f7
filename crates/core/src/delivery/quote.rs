//! Business-model dispatch with an explanation of how the fee was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::{CartItem, cart_subtotal};
use super::grocery::FeeStrategy;
use super::settings::DeliverySettings;
use super::{d2c, grocery};
use crate::types::BusinessModel;

/// How a delivery fee was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum FeeBreakdown {
    /// No delivery settings for the tenant.
    NotConfigured,
    /// The subtotal met the free-delivery threshold.
    FreeDelivery { threshold: Decimal },
    /// The fee was built from its parts and then capped.
    Computed {
        /// Fixed, weight or distance/area fee.
        base_fee: Decimal,
        /// Sum of per-product overrides (D2C only).
        product_fees: Decimal,
        /// Grocery pricing strategy that applied, if any.
        strategy: Option<FeeStrategy>,
        /// `base_fee + product_fees` before the cap.
        uncapped: Decimal,
        fee: Decimal,
    },
}

impl FeeBreakdown {
    /// The fee to charge.
    #[must_use]
    pub const fn fee(&self) -> Decimal {
        match self {
            Self::NotConfigured | Self::FreeDelivery { .. } => Decimal::ZERO,
            Self::Computed { fee, .. } => *fee,
        }
    }

    /// Whether the cap lowered the fee.
    #[must_use]
    pub fn is_capped(&self) -> bool {
        matches!(self, Self::Computed { uncapped, fee, .. } if fee < uncapped)
    }
}

/// Inputs for [`quote`].
///
/// `items` are used by D2C pricing; `area_fee` and `distance_km` by grocery.
#[derive(Debug, Clone, Copy)]
pub struct QuoteRequest<'a> {
    pub subtotal: Decimal,
    pub items: &'a [CartItem],
    pub area_fee: Decimal,
    pub distance_km: Decimal,
}

impl<'a> QuoteRequest<'a> {
    /// A request whose subtotal is the sum of the cart's line totals.
    #[must_use]
    pub fn for_cart(items: &'a [CartItem]) -> Self {
        Self {
            subtotal: cart_subtotal(items),
            items,
            area_fee: Decimal::ZERO,
            distance_km: Decimal::ZERO,
        }
    }

    #[must_use]
    pub const fn with_area_fee(mut self, area_fee: Decimal) -> Self {
        self.area_fee = area_fee;
        self
    }

    #[must_use]
    pub const fn with_distance_km(mut self, distance_km: Decimal) -> Self {
        self.distance_km = distance_km;
        self
    }
}

/// A priced delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryQuote {
    pub business_model: BusinessModel,
    pub subtotal: Decimal,
    pub fee: Decimal,
    pub breakdown: FeeBreakdown,
}

impl DeliveryQuote {
    /// `subtotal + fee`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.subtotal.saturating_add(self.fee)
    }
}

/// Prices delivery with the calculator matching the tenant's business model.
#[must_use]
pub fn quote(settings: &DeliverySettings, request: &QuoteRequest<'_>) -> DeliveryQuote {
    let breakdown = match settings {
        DeliverySettings::D2c(s) => d2c::breakdown(request.subtotal, request.items, Some(s)),
        DeliverySettings::Grocery(s) => grocery::breakdown(
            request.subtotal,
            Some(s),
            request.area_fee,
            request.distance_km,
        ),
    };

    DeliveryQuote {
        business_model: settings.business_model(),
        subtotal: request.subtotal,
        fee: breakdown.fee(),
        breakdown,
    }
}
