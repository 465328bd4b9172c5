// In crates/strategies/src/wpr.rs

//! Built-in parameter tables for the Williams %R strategy.

use core_types::{AppliedPrice, Symbol, Timeframe};
use rust_decimal_macros::dec;

use crate::types::{
    IndicatorOverrides, IndicatorParams, SignalMethods, StrategyDefaults, StrategyParams,
    TimeframeDefaults, WprParams,
};

/// The global WPR default. Applies whenever no narrower layer exists.
pub fn defaults() -> StrategyDefaults {
    StrategyDefaults {
        indicator: IndicatorParams {
            period: 14,
            applied_price: AppliedPrice::Close,
            shift: 0,
            timeframe: Timeframe::Current,
        },
        strategy: StrategyParams {
            lot_size: dec!(0),
            signal_open_method: 0,
            signal_open_filter: 1,
            signal_open_level: dec!(20),
            signal_open_boost: 0,
            signal_close_method: 0,
            signal_close_level: dec!(20),
            price_stop_method: 0,
            price_stop_level: dec!(0),
            tick_filter_method: 1,
            max_spread: dec!(4),
        },
        methods: SignalMethods::default(),
    }
}

/// Per-timeframe WPR defaults.
pub fn timeframe_defaults() -> Vec<TimeframeDefaults> {
    vec![m1()]
}

fn m1() -> TimeframeDefaults {
    TimeframeDefaults {
        timeframe: Timeframe::M1,
        indicator: IndicatorOverrides {
            shift: Some(0),
            ..IndicatorOverrides::default()
        },
        strategy: StrategyParams {
            lot_size: dec!(0),
            signal_open_method: 0,
            signal_open_filter: 1,
            signal_open_level: dec!(0),
            signal_open_boost: 0,
            signal_close_method: 0,
            signal_close_level: dec!(0),
            price_stop_method: 0,
            price_stop_level: dec!(2),
            tick_filter_method: 1,
            max_spread: dec!(0),
        },
    }
}

/// Symbol-specific WPR overrides.
pub fn overrides() -> Vec<WprParams> {
    vec![eurusd_m1(), eurusd_m5(), eurusd_m15(), eurusd_h4()]
}

fn eurusd_m1() -> WprParams {
    WprParams {
        symbol: Symbol::new("EURUSD"),
        timeframe: Timeframe::M1,
        period: 32,
        applied_price: AppliedPrice::Low,
        shift: 0,
        trailing_stop_method: 6,
        trailing_profit_method: 11,
        signal_open_level: dec!(36),
        signal_base_method: 0,
        signal_open_method1: 0,
        signal_open_method2: 0,
        signal_close_level: dec!(36),
        signal_close_method1: 0,
        signal_close_method2: 0,
        max_spread: dec!(2),
    }
}

fn eurusd_m5() -> WprParams {
    WprParams {
        symbol: Symbol::new("EURUSD"),
        timeframe: Timeframe::M5,
        period: 2,
        applied_price: AppliedPrice::Low,
        shift: 0,
        trailing_stop_method: 6,
        trailing_profit_method: 11,
        signal_open_level: dec!(36),
        // Anomaly: negative base method, kept as published.
        signal_base_method: -61,
        signal_open_method1: 1,
        signal_open_method2: 0,
        signal_close_level: dec!(36),
        signal_close_method1: 1,
        signal_close_method2: 0,
        max_spread: dec!(3),
    }
}

fn eurusd_m15() -> WprParams {
    WprParams {
        symbol: Symbol::new("EURUSD"),
        timeframe: Timeframe::M15,
        period: 2,
        applied_price: AppliedPrice::Low,
        shift: 0,
        trailing_stop_method: 6,
        trailing_profit_method: 11,
        signal_open_level: dec!(36),
        // Anomalies: both selectors are far outside the usual small codes.
        // Kept as published, do not "fix".
        signal_base_method: -63,
        signal_open_method1: 389,
        signal_open_method2: 0,
        signal_close_level: dec!(36),
        signal_close_method1: 1,
        signal_close_method2: 0,
        max_spread: dec!(4),
    }
}

fn eurusd_h4() -> WprParams {
    WprParams {
        symbol: Symbol::new("EURUSD"),
        timeframe: Timeframe::H4,
        period: 2,
        applied_price: AppliedPrice::Low,
        shift: 0,
        trailing_stop_method: 6,
        trailing_profit_method: 11,
        signal_open_level: dec!(36),
        signal_base_method: 0,
        signal_open_method1: 1,
        signal_open_method2: 0,
        signal_close_level: dec!(36),
        signal_close_method1: 1,
        signal_close_method2: 0,
        max_spread: dec!(10),
    }
}
