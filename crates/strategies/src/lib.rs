// In crates/strategies/src/lib.rs

use core_types::StrategyKind;

pub mod types;
pub mod wpr;

pub use types::{
    IndicatorOverrides, IndicatorParams, SignalMethods, StrategyDefaults, StrategyParams,
    TimeframeDefaults, WprParams,
};

/// The built-in parameter tables of one strategy kind.
#[derive(Debug, Clone)]
pub struct BuiltinTables {
    pub defaults: StrategyDefaults,
    pub timeframes: Vec<TimeframeDefaults>,
    pub overrides: Vec<WprParams>,
}

/// Returns the compiled-in tables for a strategy kind.
pub fn builtin_tables(kind: StrategyKind) -> BuiltinTables {
    match kind {
        StrategyKind::Wpr => BuiltinTables {
            defaults: wpr::defaults(),
            timeframes: wpr::timeframe_defaults(),
            overrides: wpr::overrides(),
        },
    }
}
