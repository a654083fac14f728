// ABOUTME: Foodprint CLI - estimate an order's footprint or inspect the built-in tables
// ABOUTME: Prints JSON on stdout; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence
//!
//! Usage:
//! ```bash
//! # Offline estimate with a known distance
//! foodprint-cli estimate --dishes "2 x butter chicken, 1 x naan" --distance 4.2 --offline
//!
//! # Geocode the restaurant and route to the customer
//! foodprint-cli estimate --dishes "1 x dal fry" --origin "Indiranagar, Bengaluru" \
//!     --dest-lat 12.9352 --dest-lng 77.6245 --transport e-bike --packaging paper
//!
//! # List dishes, ingredients, transport modes, and packaging types
//! foodprint-cli tables
//! ```

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use foodprint::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "foodprint-cli",
    about = "Foodprint emission estimation CLI",
    long_about = "Estimate the greenhouse-gas footprint of a food-delivery order from its dish list, delivery route, and packaging."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate one order
    Estimate(EstimateArgs),

    /// Show the built-in table keys
    Tables {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Arguments of `estimate`
#[derive(Args)]
struct EstimateArgs {
    /// Dish string, e.g. "2 x butter chicken, 1 x naan"
    #[arg(long)]
    dishes: String,

    /// Restaurant address to geocode
    #[arg(long)]
    origin: Option<String>,

    /// Delivery latitude
    #[arg(long, allow_negative_numbers = true)]
    dest_lat: Option<f64>,

    /// Delivery longitude
    #[arg(long, allow_negative_numbers = true)]
    dest_lng: Option<f64>,

    /// Transport mode (bicycle, e-bike, scooter, motorbike, car, ...)
    #[arg(long)]
    transport: Option<String>,

    /// Known delivery distance in km; skips geocoding and routing
    #[arg(long, allow_negative_numbers = true)]
    distance: Option<f64>,

    /// Packaging type (plastic, paper, aluminium, biodegradable, reusable)
    #[arg(long)]
    packaging: Option<String>,

    /// Never call external services
    #[arg(long)]
    offline: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    match cli.command {
        Command::Estimate(args) => commands::estimate(&args).await,
        Command::Tables { pretty } => commands::tables(pretty),
    }
}
