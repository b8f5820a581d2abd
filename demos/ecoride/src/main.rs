//! ecoride — command-line demo of the Ecopoints trip comparator.
//!
//! Picks a mock route in Antofagasta, prices it by car, bus, carpool, and
//! bicycle, simulates one or more trips with the chosen mode, and redeems
//! points against the partner catalog.  All state lives in memory and is
//! discarded on exit.

mod cli;
mod display;


use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eco_calc::{find_option, Calculator};
use eco_core::{CalcConfig, EcoRng};
use eco_mock::{generate_routes, load_routes_csv};
use eco_output::{export_session, CsvExporter};
use eco_session::SessionState;

use cli::Cli;

/// RNG stream offset reserved for route generation.
const ROUTE_STREAM: u64 = 1;

fn load_config(path: Option<&Path>) -> Result<CalcConfig> {
    let Some(path) = path else {
        return Ok(CalcConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config: CalcConfig = serde_json::from_reader(file)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded tariff overrides");
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "ecoride=info,eco_session=info".into())
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // 1. Calculator.
    let mut calc = Calculator::new(load_config(cli.config.as_deref())?)?;
    if let Some(price) = cli.fuel_price {
        calc = calc.with_fuel_price(price).context("invalid --fuel-price")?;
    }
    let fuel_price = calc.default_fuel_price();

    println!("=== EcoRide — save money and look after the planet ===");
    println!("Fuel price: {fuel_price} CLP/L  |  Carpool passengers: {}", cli.passengers);
    println!();

    // 2. Routes, generated once and read-only afterwards.
    let routes = match &cli.routes_csv {
        Some(path) => load_routes_csv(path)
            .with_context(|| format!("loading routes from {}", path.display()))?,
        None => {
            let mut rng = EcoRng::new(cli.seed).child(ROUTE_STREAM);
            generate_routes(&mut rng, cli.routes)
        }
    };
    let Some(route) = routes.get(cli.route) else {
        bail!("route index {} out of range (have {} routes)", cli.route, routes.len());
    };
    tracing::info!(route = %route.label(), "route selected");

    let mut state = SessionState::new();
    display::dashboard(&state);
    display::routes(&routes, cli.route);

    // 3. Options and benefit for the chosen mode.
    let options = calc.compute_options(route.distance_km, cli.passengers, fuel_price)?;
    display::options(&options);

    let chosen = find_option(&options, cli.mode)
        .with_context(|| format!("no option computed for {}", cli.mode))?;
    let benefit = calc.compare_to_car(route.distance_km, chosen, cli.passengers, fuel_price)?;

    // 4. Simulated trips.
    for _ in 0..cli.trips {
        let outcome = state.record_trip(&benefit);
        println!("{outcome}");
    }
    println!();
    display::dashboard(&state);

    // 5. Redemptions.
    display::catalog(&state);
    for name in &cli.redeem {
        match state.redeem_by_name(name) {
            Ok(merchant) => println!(
                "Redeemed {} pts at {}; {} pts left",
                merchant.points_required, merchant.name, state.points
            ),
            Err(e) => println!("Could not redeem {name}: {e}"),
        }
    }
    display::redeemed(&state);
    println!();

    // 6. Report.
    println!("── Summary report ─────────────────────────────────────────");
    print!("{}", state.report());
    println!();
    display::history(&state);
    println!();
    println!("── Methodology ────────────────────────────────────────────");
    println!("{}", calc.config().methodology());

    // 7. Optional export.
    if let Some(dir) = &cli.out {
        let mut writer = CsvExporter::new(dir)?;
        export_session(&mut writer, &options, &state)?;
        println!();
        println!("Wrote options.csv, report.csv, points_history.csv to {}", dir.display());
    }

    Ok(())
}
