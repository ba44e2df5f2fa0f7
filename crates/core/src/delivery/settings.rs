//! Tenant delivery policy records.
//!
//! Settings are owned by the admin dashboard and stored per tenant. Field
//! names serialize in camelCase so stored records deserialize directly.
//! Every field defaults (flags off, amounts zero, lists empty) and an explicit
//! `null` is read as the default, so partially filled records still load.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::geo::GeoPoint;
use super::policy::Slab;
use crate::types::{
    BusinessModel, DistanceCalculationType, StoreId, TenantId, WeightCalculationType,
};

/// Reads `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A weight bracket (kg) mapped to a flat fee. Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WeightSlab {
    #[serde(deserialize_with = "null_as_default")]
    pub min_weight: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub max_weight: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub fee: Decimal,
}

impl WeightSlab {
    #[must_use]
    pub const fn new(min_weight: Decimal, max_weight: Decimal, fee: Decimal) -> Self {
        Self {
            min_weight,
            max_weight,
            fee,
        }
    }
}

impl Slab for WeightSlab {
    fn bounds(&self) -> (Decimal, Decimal) {
        (self.min_weight, self.max_weight)
    }

    fn fee(&self) -> Decimal {
        self.fee
    }
}

/// A distance bracket (km) mapped to a flat fee. Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DistanceSlab {
    #[serde(deserialize_with = "null_as_default")]
    pub min_distance: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub max_distance: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub fee: Decimal,
}

impl DistanceSlab {
    #[must_use]
    pub const fn new(min_distance: Decimal, max_distance: Decimal, fee: Decimal) -> Self {
        Self {
            min_distance,
            max_distance,
            fee,
        }
    }
}

impl Slab for DistanceSlab {
    fn bounds(&self) -> (Decimal, Decimal) {
        (self.min_distance, self.max_distance)
    }

    fn fee(&self) -> Decimal {
        self.fee
    }
}

/// Delivery policy for a direct-to-consumer store.
///
/// The fee is either a flat amount or derived from cart weight, with optional
/// per-product overrides, a free-delivery threshold and a cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct D2cDeliverySettings {
    /// Tenant and store this record belongs to.
    pub tenant_id: Option<TenantId>,
    pub store_id: Option<StoreId>,

    /// Apply `fixed_delivery_fee` when weight-based delivery is off.
    #[serde(deserialize_with = "null_as_default")]
    pub fixed_delivery_fee_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub fixed_delivery_fee: Decimal,

    /// Waive the fee entirely once the subtotal reaches the threshold.
    #[serde(deserialize_with = "null_as_default")]
    pub free_delivery_enabled: bool,
    /// `None` (missing or `null`) never triggers free delivery, while
    /// `Some(0)` makes every order free once the flag is on.
    pub free_delivery_threshold: Option<Decimal>,

    /// Checkout gate only; see [`super::check_minimum_order`].
    #[serde(deserialize_with = "null_as_default")]
    pub minimum_order_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub minimum_order_value: Decimal,

    /// Clamp the final fee to `max_delivery_fee` (ignored unless positive).
    #[serde(deserialize_with = "null_as_default")]
    pub max_delivery_fee_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub max_delivery_fee: Decimal,

    /// Price by cart weight instead of the fixed fee.
    #[serde(deserialize_with = "null_as_default")]
    pub weight_based_delivery_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub weight_calculation_type: WeightCalculationType,
    #[serde(deserialize_with = "null_as_default")]
    pub per_kg_rate: Decimal,
    /// Ordered by `min_weight` ascending; the first match wins.
    #[serde(deserialize_with = "null_as_default")]
    pub weight_slabs: Vec<WeightSlab>,
}

/// Delivery policy for a grocery / quick-commerce store.
///
/// The fee comes from the first applicable of distance, caller-supplied area
/// fee, or flat fee, with an optional free-delivery threshold and a cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GroceryDeliverySettings {
    /// Tenant and store this record belongs to.
    pub tenant_id: Option<TenantId>,
    pub store_id: Option<StoreId>,

    #[serde(deserialize_with = "null_as_default")]
    pub fixed_delivery_fee_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub delivery_fee: Decimal,

    #[serde(deserialize_with = "null_as_default")]
    pub free_delivery_enabled: bool,
    pub free_delivery_above: Option<Decimal>,

    #[serde(deserialize_with = "null_as_default")]
    pub minimum_order_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub min_order_amount: Decimal,

    #[serde(deserialize_with = "null_as_default")]
    pub max_delivery_fee_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub max_delivery_fee: Decimal,

    #[serde(deserialize_with = "null_as_default")]
    pub distance_based_delivery_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub distance_calculation_type: DistanceCalculationType,
    #[serde(deserialize_with = "null_as_default")]
    pub per_km_rate: Decimal,
    /// Ordered by `min_distance` ascending; the first match wins.
    #[serde(deserialize_with = "null_as_default")]
    pub distance_slabs: Vec<DistanceSlab>,

    /// Geofencing inputs. The calculator never reads these; see
    /// [`super::check_delivery_radius`].
    pub store_latitude: Option<f64>,
    pub store_longitude: Option<f64>,
    pub max_delivery_distance: Option<Decimal>,
}

impl GroceryDeliverySettings {
    /// The store's coordinates, when both are configured.
    #[must_use]
    pub fn store_location(&self) -> Option<GeoPoint> {
        Some(GeoPoint::new(self.store_latitude?, self.store_longitude?))
    }
}

/// A tenant's delivery policy, tagged by business model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "businessModel", rename_all = "snake_case")]
pub enum DeliverySettings {
    D2c(D2cDeliverySettings),
    Grocery(GroceryDeliverySettings),
}

impl DeliverySettings {
    #[must_use]
    pub const fn business_model(&self) -> BusinessModel {
        match self {
            Self::D2c(_) => BusinessModel::D2c,
            Self::Grocery(_) => BusinessModel::Grocery,
        }
    }

    /// The tenant owning this record, when the store recorded it.
    #[must_use]
    pub const fn tenant_id(&self) -> Option<TenantId> {
        match self {
            Self::D2c(s) => s.tenant_id,
            Self::Grocery(s) => s.tenant_id,
        }
    }

    #[must_use]
    pub const fn store_id(&self) -> Option<StoreId> {
        match self {
            Self::D2c(s) => s.store_id,
            Self::Grocery(s) => s.store_id,
        }
    }

    /// The minimum order value, when the gate is enabled.
    #[must_use]
    pub const fn minimum_order(&self) -> Option<Decimal> {
        match self {
            Self::D2c(s) if s.minimum_order_enabled => Some(s.minimum_order_value),
            Self::Grocery(s) if s.minimum_order_enabled => Some(s.min_order_amount),
            _ => None,
        }
    }
}

impl From<D2cDeliverySettings> for DeliverySettings {
    fn from(settings: D2cDeliverySettings) -> Self {
        Self::D2c(settings)
    }
}

impl From<GroceryDeliverySettings> for DeliverySettings {
    fn from(settings: GroceryDeliverySettings) -> Self {
        Self::Grocery(settings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_d2c_settings_from_camel_case_record() {
        let json = r#"{
            "fixedDeliveryFeeEnabled": true,
            "fixedDeliveryFee": 40,
            "freeDeliveryEnabled": true,
            "freeDeliveryThreshold": "1000",
            "weightCalculationType": "per_kg",
            "perKgRate": 12.5,
            "weightSlabs": [{ "minWeight": 0, "maxWeight": 5, "fee": 20 }]
        }"#;
        let settings: D2cDeliverySettings = serde_json::from_str(json).unwrap();

        assert!(settings.fixed_delivery_fee_enabled);
        assert_eq!(settings.fixed_delivery_fee, Decimal::from(40));
        assert_eq!(settings.free_delivery_threshold, Some(Decimal::from(1000)));
        assert_eq!(settings.weight_calculation_type, WeightCalculationType::PerKg);
        assert_eq!(settings.per_kg_rate, Decimal::new(125, 1));
        assert_eq!(
            settings.weight_slabs,
            vec![WeightSlab::new(Decimal::ZERO, Decimal::from(5), Decimal::from(20))]
        );
        assert!(!settings.max_delivery_fee_enabled);
    }

    #[test]
    fn test_nulls_read_as_defaults() {
        let json = r#"{
            "fixedDeliveryFeeEnabled": null,
            "deliveryFee": null,
            "freeDeliveryAbove": null,
            "distanceCalculationType": null,
            "distanceSlabs": null
        }"#;
        let settings: GroceryDeliverySettings = serde_json::from_str(json).unwrap();

        assert!(!settings.fixed_delivery_fee_enabled);
        assert_eq!(settings.delivery_fee, Decimal::ZERO);
        assert_eq!(settings.free_delivery_above, None);
        assert_eq!(settings.distance_calculation_type, DistanceCalculationType::Slab);
        assert!(settings.distance_slabs.is_empty());
    }

    #[test]
    fn test_tagged_settings() {
        let json = r#"{ "businessModel": "grocery", "deliveryFee": 50 }"#;
        let settings: DeliverySettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.business_model(), BusinessModel::Grocery);
        assert!(matches!(
            settings,
            DeliverySettings::Grocery(ref s) if s.delivery_fee == Decimal::from(50)
        ));
    }

    #[test]
    fn test_tenant_keys() {
        let json = r#"{ "businessModel": "d2c", "tenantId": 14, "storeId": 3 }"#;
        let settings: DeliverySettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.tenant_id(), Some(TenantId::new(14)));
        assert_eq!(settings.store_id(), Some(StoreId::new(3)));

        let unkeyed: DeliverySettings =
            serde_json::from_str(r#"{ "businessModel": "grocery" }"#).unwrap();
        assert_eq!(unkeyed.tenant_id(), None);
    }

    #[test]
    fn test_d2c_zero_threshold_differs_from_unset() {
        let zero: D2cDeliverySettings =
            serde_json::from_str(r#"{ "freeDeliveryThreshold": 0 }"#).unwrap();
        assert_eq!(zero.free_delivery_threshold, Some(Decimal::ZERO));
        let unset: D2cDeliverySettings =
            serde_json::from_str(r#"{ "freeDeliveryThreshold": null }"#).unwrap();
        assert_eq!(unset.free_delivery_threshold, None);
    }

    #[test]
    fn test_minimum_order_only_when_enabled() {
        let mut d2c = D2cDeliverySettings {
            minimum_order_value: Decimal::from(200),
            ..Default::default()
        };
        assert_eq!(DeliverySettings::from(d2c.clone()).minimum_order(), None);

        d2c.minimum_order_enabled = true;
        assert_eq!(
            DeliverySettings::from(d2c).minimum_order(),
            Some(Decimal::from(200))
        );
    }

    #[test]
    fn test_store_location_requires_both_coordinates() {
        let mut settings = GroceryDeliverySettings {
            store_latitude: Some(12.97),
            ..Default::default()
        };
        assert!(settings.store_location().is_none());

        settings.store_longitude = Some(77.59);
        assert_eq!(settings.store_location(), Some(GeoPoint::new(12.97, 77.59)));
    }
}
