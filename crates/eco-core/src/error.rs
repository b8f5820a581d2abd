//! Workspace error type.
//!
//! `eco-calc` returns `EcoError` directly.  Crates with their own failure
//! modes (`eco-mock`, `eco-session`, `eco-output`) define separate enums.

use thiserror::Error;

/// The top-level error type for `eco-core` and `eco-calc`.
#[derive(Debug, Error)]
pub enum EcoError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `eco-core` and `eco-calc`.
pub type EcoResult<T> = Result<T, EcoError>;
