// In crates/engine/src/error.rs

use core_types::{StrategyKind, Symbol, Timeframe};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Every strategy kind must register exactly one global default.
    #[error("No global default registered for strategy '{0}'")]
    MissingGlobalDefault(StrategyKind),

    #[error("Global default for strategy '{0}' is already registered")]
    DuplicateGlobalDefault(StrategyKind),

    #[error("Timeframe default {timeframe} for strategy '{kind}' is already registered")]
    DuplicateTimeframeDefault {
        kind: StrategyKind,
        timeframe: Timeframe,
    },

    #[error("Override {symbol} {timeframe} for strategy '{kind}' is already registered")]
    DuplicateOverride {
        kind: StrategyKind,
        symbol: Symbol,
        timeframe: Timeframe,
    },

    #[error("Failed to load parameter sets: {0}")]
    Config(#[from] app_config::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
