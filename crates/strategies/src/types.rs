// In crates/strategies/src/types.rs

use core_types::{AppliedPrice, Symbol, Timeframe};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters governing the computation of the underlying oscillator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndicatorParams {
    /// Lookback period of the oscillator.
    pub period: u32,
    /// Price field the oscillator is computed on.
    pub applied_price: AppliedPrice,
    /// Bar offset of the value read by the strategy (0 = current bar).
    pub shift: u32,
    /// The timeframe these parameters are bound to.
    pub timeframe: Timeframe,
}

/// Indicator fields a timeframe default may pin. Unset fields keep the global value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_price: Option<AppliedPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<u32>,
}

/// The generic fields every strategy must fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrategyParams {
    pub lot_size: Decimal,
    pub signal_open_method: i32,
    pub signal_open_filter: i32,
    pub signal_open_level: Decimal,
    pub signal_open_boost: i32,
    pub signal_close_method: i32,
    pub signal_close_level: Decimal,
    pub price_stop_method: i32,
    pub price_stop_level: Decimal,
    pub tick_filter_method: i32,
    pub max_spread: Decimal,
}

/// Method selectors only the strategy-specific records carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalMethods {
    pub trailing_stop_method: i32,
    pub trailing_profit_method: i32,
    pub signal_base_method: i32,
    pub signal_open_method2: i32,
    pub signal_close_method2: i32,
}

/// The global default of a strategy kind. Always total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrategyDefaults {
    pub indicator: IndicatorParams,
    pub strategy: StrategyParams,
    #[serde(default)]
    pub methods: SignalMethods,
}

/// Default parameters for one timeframe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeframeDefaults {
    pub timeframe: Timeframe,
    #[serde(default)]
    pub indicator: IndicatorOverrides,
    pub strategy: StrategyParams,
}

/// A WPR parameter set scoped to one (symbol, timeframe) pair.
///
/// Every field is required: a record is never partially initialised.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WprParams {
    pub symbol: Symbol,
    pub timeframe: Timeframe,
    pub period: u32,
    pub applied_price: AppliedPrice,
    pub shift: u32,
    pub trailing_stop_method: i32,
    pub trailing_profit_method: i32,
    pub signal_open_level: Decimal,
    pub signal_base_method: i32,
    pub signal_open_method1: i32,
    pub signal_open_method2: i32,
    pub signal_close_level: Decimal,
    pub signal_close_method1: i32,
    pub signal_close_method2: i32,
    pub max_spread: Decimal,
}

impl WprParams {
    /// The indicator parameters carried by this record.
    pub fn indicator(&self) -> IndicatorParams {
        IndicatorParams {
            period: self.period,
            applied_price: self.applied_price,
            shift: self.shift,
            timeframe: self.timeframe,
        }
    }

    /// The secondary method selectors carried by this record.
    pub fn methods(&self) -> SignalMethods {
        SignalMethods {
            trailing_stop_method: self.trailing_stop_method,
            trailing_profit_method: self.trailing_profit_method,
            signal_base_method: self.signal_base_method,
            signal_open_method2: self.signal_open_method2,
            signal_close_method2: self.signal_close_method2,
        }
    }
}
