//! Check a delivery settings file for configuration problems.
//!
//! Slab problems fail the command. Gaps that silently price delivery at zero
//! (an enabled rule with nothing configured) are logged as warnings.

use std::path::PathBuf;

use rust_decimal::Decimal;
use shopfront_core::delivery::{DeliverySettings, SlabIssue, validate_slabs};
use shopfront_core::{DistanceCalculationType, WeightCalculationType};
use tracing::{error, info, warn};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::load_settings;

/// Run the `validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or any slab list is invalid.
pub fn run(config: &CliConfig, settings: Option<&PathBuf>) -> Result<(), CliError> {
    let path = super::settings_path(settings.map(PathBuf::as_path), config.settings_path.as_ref())?;
    let settings = load_settings(path)?;

    for gap in configuration_gaps(&settings) {
        warn!("{gap}");
    }

    let issues = slab_issues(&settings);
    if !issues.is_empty() {
        error!("Slab validation failed:");
        for issue in &issues {
            error!("  - {issue}");
        }
        return Err(CliError::InvalidSlabs(issues.len()));
    }

    info!(
        path = %path.display(),
        tenant_id = ?settings.tenant_id(),
        business_model = %settings.business_model(),
        "Delivery settings are valid"
    );
    Ok(())
}

/// Slab problems in whichever slab list the business model uses.
fn slab_issues(settings: &DeliverySettings) -> Vec<SlabIssue> {
    match settings {
        DeliverySettings::D2c(s) => validate_slabs(&s.weight_slabs),
        DeliverySettings::Grocery(s) => validate_slabs(&s.distance_slabs),
    }
}

/// Enabled rules that will contribute nothing as configured.
fn configuration_gaps(settings: &DeliverySettings) -> Vec<String> {
    let mut gaps = Vec::new();

    match settings {
        DeliverySettings::D2c(s) => {
            if s.free_delivery_enabled && s.free_delivery_threshold.is_none() {
                gaps.push("free delivery is enabled without a threshold".to_string());
            }
            if s.max_delivery_fee_enabled && s.max_delivery_fee <= Decimal::ZERO {
                gaps.push("fee cap is enabled but not positive".to_string());
            }
            if s.weight_based_delivery_enabled {
                match s.weight_calculation_type {
                    WeightCalculationType::PerKg if s.per_kg_rate.is_zero() => {
                        gaps.push("per-kg delivery is enabled with a zero rate".to_string());
                    }
                    WeightCalculationType::Slab if s.weight_slabs.is_empty() => {
                        gaps.push("weight slab delivery is enabled with no slabs".to_string());
                    }
                    _ => {}
                }
            }
        }
        DeliverySettings::Grocery(s) => {
            if s.free_delivery_enabled && s.free_delivery_above.is_none() {
                gaps.push("free delivery is enabled without a threshold".to_string());
            }
            if s.max_delivery_fee_enabled && s.max_delivery_fee <= Decimal::ZERO {
                gaps.push("fee cap is enabled but not positive".to_string());
            }
            if s.distance_based_delivery_enabled {
                match s.distance_calculation_type {
                    DistanceCalculationType::PerKm if s.per_km_rate.is_zero() => {
                        gaps.push("per-km delivery is enabled with a zero rate".to_string());
                    }
                    DistanceCalculationType::Slab if s.distance_slabs.is_empty() => {
                        gaps.push("distance slab delivery is enabled with no slabs".to_string());
                    }
                    _ => {}
                }
            }
        }
    }

    gaps
}
