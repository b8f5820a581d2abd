//! Synthetic origin/destination routes.

use eco_core::EcoRng;

use crate::STREETS;

/// Number of routes generated at startup when the caller has no preference.
pub const DEFAULT_ROUTE_COUNT: usize = 20;

/// Shortest sampled route, km.
pub const MIN_DISTANCE_KM: f64 = 2.0;

/// Longest sampled route, km.
pub const MAX_DISTANCE_KM: f64 = 15.0;

/// A trip between two named streets.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub origin:      String,
    pub destination: String,
    pub distance_km: f64,
}

impl Route {
    /// Label used in route pickers, e.g. `"Avenida Grecia ➡ Avenida Argentina (7.4 km)"`.
    pub fn label(&self) -> String {
        format!("{} ➡ {} ({:.1} km)", self.origin, self.destination, self.distance_km)
    }
}

/// Uniform distance in `[MIN_DISTANCE_KM, MAX_DISTANCE_KM]`, rounded to one
/// decimal.
pub fn random_distance(rng: &mut EcoRng) -> f64 {
    let raw = rng.gen_range(MIN_DISTANCE_KM..=MAX_DISTANCE_KM);
    (raw * 10.0).round() / 10.0
}

/// Generate `n` routes between the avenues in [`STREETS`].
pub fn generate_routes(rng: &mut EcoRng, n: usize) -> Vec<Route> {
    generate_routes_from(rng, n, &STREETS)
}

/// Generate `n` routes between names drawn from `streets`.
///
/// Origin and destination are always distinct when `streets` holds at least
/// two names; with a single name every route loops back to it.  An empty
/// street list yields no routes.
pub fn generate_routes_from(rng: &mut EcoRng, n: usize, streets: &[&str]) -> Vec<Route> {
    if streets.is_empty() {
        tracing::warn!(requested = n, "no street names available; generated no routes");
        return Vec::new();
    }

    let mut routes = Vec::with_capacity(n);
    for _ in 0..n {
        let origin_idx = rng.gen_range(0..streets.len());
        let dest_idx = if streets.len() == 1 {
            origin_idx
        } else {
            // Sample from the other len-1 names, skipping over the origin.
            let pick = rng.gen_range(0..streets.len() - 1);
            if pick >= origin_idx { pick + 1 } else { pick }
        };

        routes.push(Route {
            origin:      streets[origin_idx].to_owned(),
            destination: streets[dest_idx].to_owned(),
            distance_km: random_distance(rng),
        });
    }

    tracing::debug!(count = routes.len(), streets = streets.len(), "generated mock routes");
    routes
}
