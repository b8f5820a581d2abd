//! `eco-mock` — fixture data for the ecoride demo.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`streets`]   | `STREETS` — avenue names of Antofagasta                     |
//! | [`route`]     | `Route`, `generate_routes`, `random_distance`               |
//! | [`catalog`]   | `Merchant`, `CATALOG`, `find_merchant`                      |
//! | [`loader`]    | `load_routes_csv` / `load_routes_reader`                    |
//! | [`error`]     | `MockError`, `MockResult<T>`                                |
//!
//! Routes are generated once at startup from an explicit [`EcoRng`] and are
//! read-only afterwards; the same seed always yields the same list.
//!
//! [`EcoRng`]: eco_core::EcoRng

pub mod catalog;
pub mod error;
pub mod loader;
pub mod route;
pub mod streets;


pub use catalog::{find_merchant, Merchant, CATALOG};
pub use error::{MockError, MockResult};
pub use loader::{load_routes_csv, load_routes_reader};
pub use route::{
    generate_routes, generate_routes_from, random_distance, Route, DEFAULT_ROUTE_COUNT,
    MAX_DISTANCE_KM, MIN_DISTANCE_KM,
};
pub use streets::STREETS;
