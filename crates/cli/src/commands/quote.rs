//! Price delivery for a cart against a tenant's settings.
//!
//! # Usage
//!
//! ```bash
//! # D2C store, cart from file
//! sf-cli quote --settings tenant.yaml --cart cart.yaml
//!
//! # Grocery store priced by zone fee
//! sf-cli quote --settings grocery.yaml --subtotal 320 --area-fee 25
//!
//! # Grocery store priced by distance from the store's coordinates
//! sf-cli quote --settings grocery.yaml --cart cart.json --customer-lat 12.93 --customer-lng 77.62
//! ```

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Serialize;
use shopfront_core::delivery::{
    DeliveryQuote, DeliverySettings, GeoPoint, QuoteRequest, check_delivery_radius,
    check_minimum_order, distance_km_decimal, quote,
};
use shopfront_core::CartItem;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{load_cart, load_settings};

/// Arguments for the `quote` command.
#[derive(Debug, Default)]
pub struct QuoteArgs {
    pub settings: Option<PathBuf>,
    pub cart: Option<PathBuf>,
    /// Overrides the subtotal computed from the cart.
    pub subtotal: Option<Decimal>,
    pub area_fee: Decimal,
    pub distance_km: Option<Decimal>,
    pub customer_location: Option<GeoPoint>,
    /// Fail instead of warning when checkout gates are not met.
    pub strict: bool,
}

/// Printed result of a quote.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReport {
    #[serde(flatten)]
    pub quote: DeliveryQuote,
    pub total: Decimal,
    pub distance_km: Decimal,
    pub warnings: Vec<String>,
}

/// Run the `quote` command and print the report as JSON.
///
/// # Errors
///
/// Returns an error if inputs cannot be loaded, or in strict mode if the
/// minimum order or delivery radius check fails.
pub fn run(config: &CliConfig, args: &QuoteArgs) -> Result<(), CliError> {
    let settings_path = super::settings_path(args.settings.as_deref(), config.settings_path.as_ref())?;
    let settings = load_settings(settings_path)?;
    let items = match &args.cart {
        Some(path) => load_cart(path)?,
        None => Vec::new(),
    };

    let report = build_report(&settings, &items, args)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

/// Price the cart and collect checkout warnings.
fn build_report(
    settings: &DeliverySettings,
    items: &[CartItem],
    args: &QuoteArgs,
) -> Result<QuoteReport, CliError> {
    let distance_km = resolve_distance(settings, args)?;

    let mut request = QuoteRequest::for_cart(items)
        .with_area_fee(args.area_fee)
        .with_distance_km(distance_km);
    if let Some(subtotal) = args.subtotal {
        request.subtotal = subtotal;
    }

    let mut warnings = Vec::new();

    if let Err(e) = check_minimum_order(request.subtotal, settings) {
        if args.strict {
            return Err(e.into());
        }
        warn!("{e}");
        warnings.push(e.to_string());
    }

    if let DeliverySettings::Grocery(grocery) = settings {
        if let Err(e) = check_delivery_radius(grocery, distance_km) {
            if args.strict {
                return Err(e.into());
            }
            warn!("{e}");
            warnings.push(e.to_string());
        }
    }

    let quote = quote(settings, &request);
    info!(
        tenant_id = ?settings.tenant_id(),
        store_id = ?settings.store_id(),
        business_model = %quote.business_model,
        subtotal = %quote.subtotal,
        fee = %quote.fee,
        "Delivery quoted"
    );

    Ok(QuoteReport {
        total: quote.total(),
        quote,
        distance_km,
        warnings,
    })
}

/// Distance from the flag, else from customer and store coordinates, else zero.
fn resolve_distance(settings: &DeliverySettings, args: &QuoteArgs) -> Result<Decimal, CliError> {
    if let Some(distance_km) = args.distance_km {
        return Ok(distance_km);
    }

    match (args.customer_location, settings) {
        (Some(customer), DeliverySettings::Grocery(grocery)) => {
            let store = grocery
                .store_location()
                .ok_or(CliError::MissingStoreLocation)?;
            Ok(distance_km_decimal(store, customer))
        }
        _ => Ok(Decimal::ZERO),
    }
}
