//! Minimum order gate checked by checkout before an order is placed.

use rust_decimal::Decimal;
use thiserror::Error;

use super::settings::DeliverySettings;

/// The order does not meet the tenant's minimum order value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MinimumOrderError {
    #[error("order subtotal {subtotal} is below the minimum of {minimum} (add {shortfall} more)")]
    BelowMinimum {
        minimum: Decimal,
        subtotal: Decimal,
        /// `minimum - subtotal`.
        shortfall: Decimal,
    },
}

/// Checks `subtotal` against the minimum order value, when enabled.
///
/// The fee calculators never call this; checkout must.
///
/// # Errors
///
/// Returns [`MinimumOrderError::BelowMinimum`] if the gate is enabled and the
/// subtotal is strictly below the minimum.
pub fn check_minimum_order(
    subtotal: Decimal,
    settings: &DeliverySettings,
) -> Result<(), MinimumOrderError> {
    match settings.minimum_order() {
        Some(minimum) if subtotal < minimum => Err(MinimumOrderError::BelowMinimum {
            minimum,
            subtotal,
            shortfall: minimum - subtotal,
        }),
        _ => Ok(()),
    }
}
