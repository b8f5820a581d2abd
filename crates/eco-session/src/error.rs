use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("{merchant} requires {required} points but only {available} are available")]
    InsufficientPoints {
        merchant:  String,
        required:  u64,
        available: u64,
    },

    #[error("no merchant named {0:?} in the catalog")]
    UnknownMerchant(String),
}

pub type SessionResult<T> = Result<T, SessionError>;
