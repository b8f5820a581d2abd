//! CSV route loader.
//!
//! An alternative to [`generate_routes`](crate::generate_routes) for fixed
//! demo scripts.
//!
//! # CSV format
//!
//! ```csv
//! origin,destination,distance_km
//! Avenida Grecia,Avenida Argentina,7.4
//! Avenida Ejército,Avenida Jaime Guzmán,3.0
//! ```
//!
//! `distance_km` must be a finite, non-negative number.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{MockError, MockResult, Route};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRecord {
    origin:      String,
    destination: String,
    distance_km: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load routes from a CSV file.
pub fn load_routes_csv(path: &Path) -> MockResult<Vec<Route>> {
    let file = std::fs::File::open(path)?;
    load_routes_reader(file)
}

/// Like [`load_routes_csv`] but accepts any `Read` source.
pub fn load_routes_reader<R: Read>(reader: R) -> MockResult<Vec<Route>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut routes = Vec::new();

    for (line, result) in csv_reader.deserialize::<RouteRecord>().enumerate() {
        let row = result?;
        if !row.distance_km.is_finite() || row.distance_km < 0.0 {
            return Err(MockError::Parse(format!(
                "row {}: distance_km must be a non-negative number, got {}",
                line + 1,
                row.distance_km
            )));
        }
        routes.push(Route {
            origin:      row.origin.trim().to_owned(),
            destination: row.destination.trim().to_owned(),
            distance_km: row.distance_km,
        });
    }

    Ok(routes)
}
