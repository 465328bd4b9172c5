// In crates/core-types/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown timeframe: {0}")]
    UnknownTimeframe(String),

    #[error("Unknown strategy kind: {0}")]
    UnknownStrategy(String),

    #[error("Invalid applied price code: {0}")]
    InvalidAppliedPrice(i32),
}

pub type Result<T> = std::result::Result<T, Error>;
