//! Shopfront CLI - delivery quotes and settings checks.
//!
//! # Usage
//!
//! ```bash
//! # Quote delivery for a D2C cart
//! sf-cli quote --settings tenant.yaml --cart cart.yaml
//!
//! # Quote grocery delivery for a known distance
//! sf-cli quote --settings grocery.yaml --subtotal 320 --distance-km 4.5
//!
//! # Check a settings file before publishing it
//! sf-cli validate --settings tenant.yaml
//! ```
//!
//! # Commands
//!
//! - `quote` - Price delivery and report checkout gate warnings
//! - `validate` - Report slab and configuration problems

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use shopfront_core::GeoPoint;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod input;

use config::{CliConfig, LogFormat};
use error::CliError;

#[derive(Parser)]
#[command(name = "sf-cli")]
#[command(author, version, about = "Shopfront CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price delivery for a cart
    Quote {
        /// Delivery settings file (YAML or JSON)
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Cart file: a list of cart items (YAML or JSON)
        #[arg(short, long)]
        cart: Option<PathBuf>,

        /// Subtotal to use instead of the cart's line totals
        #[arg(long)]
        subtotal: Option<Decimal>,

        /// Zone fee from the area lookup (grocery)
        #[arg(long, default_value = "0")]
        area_fee: Decimal,

        /// Distance to the customer in km (grocery)
        #[arg(long, conflicts_with_all = ["customer_lat", "customer_lng"])]
        distance_km: Option<Decimal>,

        /// Customer latitude; distance is measured from the store (grocery)
        #[arg(long, requires = "customer_lng", allow_hyphen_values = true)]
        customer_lat: Option<f64>,

        /// Customer longitude
        #[arg(long, requires = "customer_lat", allow_hyphen_values = true)]
        customer_lng: Option<f64>,

        /// Fail when the minimum order or delivery radius is not met
        #[arg(long)]
        strict: bool,
    },
    /// Check a delivery settings file
    Validate {
        /// Delivery settings file (YAML or JSON)
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },
}

/// Initialize tracing with `RUST_LOG` (or a default filter) and the
/// configured output format.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopfront_cli=info,shopfront_core=info".into());

    let is_json = format == LogFormat::Json;
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format);

    if let Err(e) = run(&config, cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(config: &CliConfig, cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Quote {
            settings,
            cart,
            subtotal,
            area_fee,
            distance_km,
            customer_lat,
            customer_lng,
            strict,
        } => {
            let customer_location = customer_lat
                .zip(customer_lng)
                .map(|(lat, lng)| GeoPoint::new(lat, lng));
            let args = commands::quote::QuoteArgs {
                settings,
                cart,
                subtotal,
                area_fee,
                distance_km,
                customer_location,
                strict,
            };
            commands::quote::run(config, &args)?;
        }
        Commands::Validate { settings } => {
            commands::validate::run(config, settings.as_ref())?;
        }
    }
    Ok(())
}
