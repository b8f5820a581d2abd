//! `eco-session` — accumulated totals for one interactive session.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`state`]   | `SessionState` — totals, points history, redemptions              |
//! | [`report`]  | `Report`, `ReportRow`, `TripOutcome`, CLP formatting              |
//! | [`error`]   | `SessionError`, `SessionResult<T>`                                |
//!
//! # Ownership
//!
//! A session owns its `SessionState` outright and threads it through every
//! handler explicitly; nothing is global and nothing is shared between
//! threads.  State lives only as long as the session and is lost on restart.
//!
//! # Invariants
//!
//! - The point balance is a `u64` and can never go negative.
//! - A merchant is redeemed only when the balance covers its price, and
//!   redemption deducts exactly that price.
//! - `points_history` gains one entry per trip (the balance right after the
//!   trip); redemptions do not append to it.

pub mod error;
pub mod report;
pub mod state;

#[cfg(test)]
mod tests;

pub use error::{SessionError, SessionResult};
pub use report::{format_clp, Report, ReportRow, TripOutcome};
pub use state::{apply_trip, SessionState};
