//! Delivery fee for direct-to-consumer stores.
//!
//! Order of evaluation:
//! 1. Free delivery at or above the threshold returns zero immediately.
//! 2. If any line has no per-product override, the cart-wide base fee is
//!    charged once: weight-based (per kg or slab) or the fixed fee.
//! 3. Every line with an override adds `override * qty`.
//! 4. The cap is applied last.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::cart::CartItem;
use super::policy::{apply_cap, free_delivery_applies, slab_fee};
use super::quote::FeeBreakdown;
use super::settings::D2cDeliverySettings;
use crate::types::WeightCalculationType;

/// Computes the D2C delivery fee.
///
/// `subtotal` is expected to be the sum of the items' line totals. With no
/// settings the fee is zero. The minimum order value is not enforced here.
///
/// The base fee (fixed or weight-based) is only charged when at least one
/// line has no per-product override, so an empty cart costs nothing to
/// deliver even with a fixed fee configured.
///
/// Arithmetic saturates at [`Decimal::MAX`] rather than overflowing, so an
/// enabled cap still bounds the result.
#[must_use]
pub fn calculate_d2c_delivery_fee(
    subtotal: Decimal,
    items: &[CartItem],
    settings: Option<&D2cDeliverySettings>,
) -> Decimal {
    breakdown(subtotal, items, settings).fee()
}

/// Computes the D2C delivery fee along with how it was reached.
#[must_use]
pub fn breakdown(
    subtotal: Decimal,
    items: &[CartItem],
    settings: Option<&D2cDeliverySettings>,
) -> FeeBreakdown {
    let Some(settings) = settings else {
        debug!("no D2C delivery settings, fee is zero");
        return FeeBreakdown::NotConfigured;
    };

    if free_delivery_applies(
        settings.free_delivery_enabled,
        settings.free_delivery_threshold,
        subtotal,
    ) {
        debug!(%subtotal, "free delivery threshold met");
        return FeeBreakdown::FreeDelivery {
            threshold: settings.free_delivery_threshold.unwrap_or_default(),
        };
    }

    let items_using_base_fee: Vec<&CartItem> = items
        .iter()
        .filter(|item| item.delivery_override().is_none())
        .collect();

    let base_fee = if items_using_base_fee.is_empty() {
        Decimal::ZERO
    } else {
        cart_base_fee(settings, &items_using_base_fee)
    };

    // Overrides are summed over the whole cart, independently of the partition above.
    let product_fees = items
        .iter()
        .filter_map(|item| {
            item.delivery_override()
                .map(|fee| fee.saturating_mul(item.quantity()))
        })
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let uncapped = base_fee.saturating_add(product_fees);
    let fee = apply_cap(
        uncapped,
        settings.max_delivery_fee_enabled,
        settings.max_delivery_fee,
    );
    trace!(%base_fee, %product_fees, %uncapped, %fee, "D2C delivery fee");

    FeeBreakdown::Computed {
        base_fee,
        product_fees,
        strategy: None,
        uncapped,
        fee,
    }
}

/// Cart-wide fee for lines without an override.
fn cart_base_fee(settings: &D2cDeliverySettings, items: &[&CartItem]) -> Decimal {
    if settings.weight_based_delivery_enabled {
        let total_weight = items
            .iter()
            .map(|item| item.line_weight())
            .fold(Decimal::ZERO, Decimal::saturating_add);
        match settings.weight_calculation_type {
            WeightCalculationType::PerKg => total_weight.saturating_mul(settings.per_kg_rate),
            WeightCalculationType::Slab => slab_fee(&settings.weight_slabs, total_weight),
        }
    } else if settings.fixed_delivery_fee_enabled {
        settings.fixed_delivery_fee
    } else {
        Decimal::ZERO
    }
}
