use std::path::PathBuf;

use clap::Parser;
use eco_core::{TransportMode, DEFAULT_PASSENGERS, MAX_CARPOOL_PASSENGERS, MIN_CARPOOL_PASSENGERS};
use eco_mock::DEFAULT_ROUTE_COUNT;

#[derive(Parser, Debug)]
#[command(name = "ecoride", version, about = "Compare car, bus, carpool, and bicycle trips and earn Ecopoints")]
pub struct Cli {
    /// Seed for route generation; the same seed gives the same routes.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of mock routes to generate.
    #[arg(long, default_value_t = DEFAULT_ROUTE_COUNT)]
    pub routes: usize,

    /// Load routes from a CSV file (origin,destination,distance_km) instead of generating them.
    #[arg(long, conflicts_with = "routes")]
    pub routes_csv: Option<PathBuf>,

    /// Index of the route to travel, as shown in the route list.
    #[arg(long, default_value_t = 0)]
    pub route: usize,

    /// Passengers sharing the carpool.
    #[arg(
        long,
        default_value_t = DEFAULT_PASSENGERS,
        value_parser = clap::value_parser!(u32).range(MIN_CARPOOL_PASSENGERS as i64..=MAX_CARPOOL_PASSENGERS as i64)
    )]
    pub passengers: u32,

    /// Fuel price in CLP per litre (defaults to the configured price).
    #[arg(long)]
    pub fuel_price: Option<f64>,

    /// Mode chosen for the simulated trips: car, bus, carpool, or bicycle.
    #[arg(long, default_value = "bus")]
    pub mode: TransportMode,

    /// How many times to make the trip.
    #[arg(long, default_value_t = 1)]
    pub trips: u32,

    /// Merchant to redeem after the trips (repeatable).
    #[arg(long)]
    pub redeem: Vec<String>,

    /// JSON file overriding tariff and conversion constants.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory to write the CSV export to.
    #[arg(long)]
    pub out: Option<PathBuf>,
}
