//! `eco-core` — foundational types for the `ecoride` workspace.
//!
//! This crate is a dependency of every other `eco-*` crate.  It has no
//! `eco-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`transport`]   | `TransportMode` enum                                  |
//! | [`config`]      | `CalcConfig` (every tariff and conversion constant)   |
//! | [`rng`]         | `EcoRng` (seedable, for mock data)                    |
//! | [`error`]       | `EcoError`, `EcoResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod rng;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    CalcConfig, DEFAULT_PASSENGERS, MAX_CARPOOL_PASSENGERS, MIN_CARPOOL_PASSENGERS,
};
pub use error::{EcoError, EcoResult};
pub use rng::EcoRng;
pub use transport::TransportMode;
