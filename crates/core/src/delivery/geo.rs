//! Distance-to-store helpers for grocery geofencing.
//!
//! The grocery calculator takes a distance as input; these helpers let the
//! caller derive it from coordinates and reject addresses beyond the store's
//! delivery radius.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::settings::GroceryDeliverySettings;

/// Mean Earth radius used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two points in km.
#[must_use]
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// [`haversine_km`] as a decimal rounded to 2 places.
///
/// Returns zero for non-finite coordinates.
#[must_use]
pub fn distance_km_decimal(from: GeoPoint, to: GeoPoint) -> Decimal {
    Decimal::from_f64(haversine_km(from, to)).map_or(Decimal::ZERO, |km| km.round_dp(2))
}

/// The delivery address is beyond the store's delivery radius.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeofenceError {
    #[error("delivery address is {distance_km} km away, beyond the {max_km} km delivery radius")]
    OutOfRange { distance_km: Decimal, max_km: Decimal },
}

/// Checks `distance_km` against `max_delivery_distance`, when it is set and
/// positive.
///
/// # Errors
///
/// Returns [`GeofenceError::OutOfRange`] if the distance exceeds the radius.
pub fn check_delivery_radius(
    settings: &GroceryDeliverySettings,
    distance_km: Decimal,
) -> Result<(), GeofenceError> {
    match settings.max_delivery_distance {
        Some(max_km) if max_km > Decimal::ZERO && distance_km > max_km => {
            Err(GeofenceError::OutOfRange {
                distance_km,
                max_km,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point_is_zero() {
        let point = GeoPoint::new(12.9716, 77.5946);
        assert!(haversine_km(point, point).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        // One degree of latitude is about 111.19 km on a 6371 km sphere.
        let km = haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        assert!((km - 111.19).abs() < 0.01, "got {km}");
        assert_eq!(
            distance_km_decimal(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0)),
            Decimal::new(11119, 2)
        );
    }

    #[test]
    fn test_non_finite_distance_is_zero() {
        let nan = GeoPoint::new(f64::NAN, 0.0);
        assert_eq!(distance_km_decimal(nan, GeoPoint::new(0.0, 0.0)), Decimal::ZERO);
    }

    #[test]
    fn test_delivery_radius() {
        let settings = GroceryDeliverySettings {
            max_delivery_distance: Some(Decimal::from(8)),
            ..Default::default()
        };
        assert!(check_delivery_radius(&settings, Decimal::from(8)).is_ok());
        assert!(matches!(
            check_delivery_radius(&settings, Decimal::new(81, 1)),
            Err(GeofenceError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_unset_or_zero_radius_is_unlimited() {
        let unset = GroceryDeliverySettings::default();
        assert!(check_delivery_radius(&unset, Decimal::from(500)).is_ok());

        let zero = GroceryDeliverySettings {
            max_delivery_distance: Some(Decimal::ZERO),
            ..Default::default()
        };
        assert!(check_delivery_radius(&zero, Decimal::from(500)).is_ok());
    }
}
