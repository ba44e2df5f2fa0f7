//! Delivery fee for grocery stores.
//!
//! The fee comes from the first applicable [`FeeStrategy`] in
//! [`FeeStrategy::PRIORITY`] order, after the free-delivery check and before
//! the cap. Distance and area fee are computed by the caller (geolocation or
//! zone lookup) and passed in.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::policy::{apply_cap, free_delivery_applies, slab_fee};
use super::quote::FeeBreakdown;
use super::settings::GroceryDeliverySettings;
use crate::types::DistanceCalculationType;

/// An alternative way of pricing grocery delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeStrategy {
    /// Per-km rate or distance slab, when distance-based delivery is enabled.
    Distance,
    /// Zone fee supplied by the caller, when positive.
    Area,
    /// The store's flat delivery fee, when enabled.
    Fixed,
}

impl FeeStrategy {
    /// Evaluation order. The first strategy that applies sets the fee.
    pub const PRIORITY: [Self; 3] = [Self::Distance, Self::Area, Self::Fixed];

    /// The fee under this strategy, or `None` if it does not apply.
    #[must_use]
    pub fn evaluate(
        self,
        settings: &GroceryDeliverySettings,
        area_fee: Decimal,
        distance_km: Decimal,
    ) -> Option<Decimal> {
        match self {
            Self::Distance => settings.distance_based_delivery_enabled.then(|| {
                match settings.distance_calculation_type {
                    DistanceCalculationType::PerKm => {
                        distance_km.saturating_mul(settings.per_km_rate)
                    }
                    DistanceCalculationType::Slab => {
                        slab_fee(&settings.distance_slabs, distance_km)
                    }
                }
            }),
            Self::Area => (area_fee > Decimal::ZERO).then_some(area_fee),
            Self::Fixed => settings
                .fixed_delivery_fee_enabled
                .then_some(settings.delivery_fee),
        }
    }
}

/// Computes the grocery delivery fee.
///
/// With no settings the fee is zero. Pass zero for `area_fee` and
/// `distance_km` when unknown. The minimum order amount and maximum delivery
/// distance are not enforced here.
#[must_use]
pub fn calculate_grocery_delivery_fee(
    subtotal: Decimal,
    settings: Option<&GroceryDeliverySettings>,
    area_fee: Decimal,
    distance_km: Decimal,
) -> Decimal {
    breakdown(subtotal, settings, area_fee, distance_km).fee()
}

/// Computes the grocery delivery fee along with how it was reached.
#[must_use]
pub fn breakdown(
    subtotal: Decimal,
    settings: Option<&GroceryDeliverySettings>,
    area_fee: Decimal,
    distance_km: Decimal,
) -> FeeBreakdown {
    let Some(settings) = settings else {
        debug!("no grocery delivery settings, fee is zero");
        return FeeBreakdown::NotConfigured;
    };

    if free_delivery_applies(
        settings.free_delivery_enabled,
        settings.free_delivery_above,
        subtotal,
    ) {
        debug!(%subtotal, "free delivery threshold met");
        return FeeBreakdown::FreeDelivery {
            threshold: settings.free_delivery_above.unwrap_or_default(),
        };
    }

    let selected = FeeStrategy::PRIORITY.into_iter().find_map(|strategy| {
        strategy
            .evaluate(settings, area_fee, distance_km)
            .map(|fee| (strategy, fee))
    });
    let (strategy, base_fee) = selected.map_or((None, Decimal::ZERO), |(strategy, fee)| {
        (Some(strategy), fee)
    });

    let fee = apply_cap(
        base_fee,
        settings.max_delivery_fee_enabled,
        settings.max_delivery_fee,
    );
    trace!(?strategy, %base_fee, %fee, "grocery delivery fee");

    FeeBreakdown::Computed {
        base_fee,
        product_fees: Decimal::ZERO,
        strategy,
        uncapped: base_fee,
        fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::DistanceSlab;

    fn dec(value: i64) -> Decimal {
        Decimal::from(value)
    }

    fn fixed_fee(fee: i64) -> GroceryDeliverySettings {
        GroceryDeliverySettings {
            fixed_delivery_fee_enabled: true,
            delivery_fee: dec(fee),
            ..Default::default()
        }
    }

    fn distance_slabs() -> GroceryDeliverySettings {
        GroceryDeliverySettings {
            distance_based_delivery_enabled: true,
            distance_calculation_type: DistanceCalculationType::Slab,
            distance_slabs: vec![
                DistanceSlab::new(dec(0), dec(3), dec(10)),
                DistanceSlab::new(dec(3), dec(8), dec(25)),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_no_settings_is_free() {
        assert_eq!(
            calculate_grocery_delivery_fee(dec(250), None, dec(25), dec(4)),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_area_fee_beats_fixed_fee() {
        let fee = calculate_grocery_delivery_fee(dec(300), Some(&fixed_fee(50)), dec(25), Decimal::ZERO);
        assert_eq!(fee, dec(25));
    }

    #[test]
    fn test_fixed_fee_without_area_fee() {
        let fee = calculate_grocery_delivery_fee(dec(300), Some(&fixed_fee(50)), Decimal::ZERO, Decimal::ZERO);
        assert_eq!(fee, dec(50));
    }

    #[test]
    fn test_distance_beats_area_and_fixed() {
        let settings = GroceryDeliverySettings {
            fixed_delivery_fee_enabled: true,
            delivery_fee: dec(50),
            ..distance_slabs()
        };
        let fee = calculate_grocery_delivery_fee(dec(300), Some(&settings), dec(25), dec(5));
        assert_eq!(fee, dec(25));

        let result = breakdown(dec(300), Some(&settings), dec(40), dec(2));
        assert_eq!(result.fee(), dec(10));
        assert!(matches!(
            result,
            FeeBreakdown::Computed {
                strategy: Some(FeeStrategy::Distance),
                ..
            }
        ));
    }

    #[test]
    fn test_distance_outside_slabs_is_zero_not_fallback() {
        let settings = GroceryDeliverySettings {
            fixed_delivery_fee_enabled: true,
            delivery_fee: dec(50),
            ..distance_slabs()
        };
        let fee = calculate_grocery_delivery_fee(dec(300), Some(&settings), dec(25), dec(12));
        assert_eq!(fee, Decimal::ZERO);
    }

    #[test]
    fn test_per_km_rate() {
        let settings = GroceryDeliverySettings {
            distance_based_delivery_enabled: true,
            distance_calculation_type: DistanceCalculationType::PerKm,
            per_km_rate: dec(8),
            ..Default::default()
        };
        let fee = calculate_grocery_delivery_fee(dec(300), Some(&settings), Decimal::ZERO, Decimal::new(25, 1));
        assert_eq!(fee, dec(20));
    }

    #[test]
    fn test_free_delivery_above_threshold() {
        let settings = GroceryDeliverySettings {
            free_delivery_enabled: true,
            free_delivery_above: Some(dec(500)),
            ..distance_slabs()
        };
        assert_eq!(
            calculate_grocery_delivery_fee(dec(500), Some(&settings), dec(25), dec(5)),
            Decimal::ZERO
        );
        assert_eq!(
            calculate_grocery_delivery_fee(dec(499), Some(&settings), dec(25), dec(5)),
            dec(25)
        );
    }

    #[test]
    fn test_free_delivery_without_threshold_is_ignored() {
        let settings = GroceryDeliverySettings {
            free_delivery_enabled: true,
            free_delivery_above: None,
            ..fixed_fee(50)
        };
        assert_eq!(
            calculate_grocery_delivery_fee(dec(10_000), Some(&settings), Decimal::ZERO, Decimal::ZERO),
            dec(50)
        );
    }

    #[test]
    fn test_cap_clamps_fee() {
        let settings = GroceryDeliverySettings {
            max_delivery_fee_enabled: true,
            max_delivery_fee: dec(30),
            ..fixed_fee(50)
        };
        assert_eq!(
            calculate_grocery_delivery_fee(dec(300), Some(&settings), Decimal::ZERO, Decimal::ZERO),
            dec(30)
        );
    }

    #[test]
    fn test_huge_per_km_rate_saturates_and_is_capped() {
        let settings = GroceryDeliverySettings {
            distance_based_delivery_enabled: true,
            distance_calculation_type: DistanceCalculationType::PerKm,
            per_km_rate: Decimal::from_i128_with_scale(10_i128.pow(25), 0),
            max_delivery_fee_enabled: true,
            max_delivery_fee: dec(100),
            ..Default::default()
        };
        let result = breakdown(dec(300), Some(&settings), Decimal::ZERO, dec(100_000));

        assert_eq!(result.fee(), dec(100));
        assert!(matches!(
            result,
            FeeBreakdown::Computed { uncapped, .. } if uncapped == Decimal::MAX
        ));
    }

    #[test]
    fn test_nothing_applies() {
        let settings = GroceryDeliverySettings::default();
        let result = breakdown(dec(300), Some(&settings), Decimal::ZERO, dec(4));
        assert_eq!(result.fee(), Decimal::ZERO);
        assert!(matches!(result, FeeBreakdown::Computed { strategy: None, .. }));
    }

    #[test]
    fn test_strategies_in_isolation() {
        let settings = fixed_fee(50);
        assert_eq!(FeeStrategy::Distance.evaluate(&settings, dec(25), dec(4)), None);
        assert_eq!(FeeStrategy::Area.evaluate(&settings, Decimal::ZERO, dec(4)), None);
        assert_eq!(FeeStrategy::Area.evaluate(&settings, dec(25), dec(4)), Some(dec(25)));
        assert_eq!(FeeStrategy::Fixed.evaluate(&settings, dec(25), dec(4)), Some(dec(50)));
        assert_eq!(
            FeeStrategy::Distance.evaluate(&distance_slabs(), Decimal::ZERO, dec(3)),
            Some(dec(10))
        );
    }
}
