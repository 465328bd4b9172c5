// In crates/engine/src/resolver.rs

//! Produces the effective parameters of one strategy instance.
//!
//! Layers are applied in a fixed order, each overwriting the fields it carries:
//! 1. the strategy kind's global default,
//! 2. the timeframe default, if registered,
//! 3. the (symbol, timeframe) override, if registered.

use serde::Serialize;

use core_types::{StrategyKind, Symbol, Timeframe};
use strategies::{
    IndicatorParams, SignalMethods, StrategyDefaults, StrategyParams, TimeframeDefaults, WprParams,
};

use crate::error::{Error, Result};
use crate::registry::ParamRegistry;

/// The most specific layer that contributed to a resolved record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Global,
    Timeframe,
    Symbol,
}

/// A fully populated, read-only parameter record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedParams {
    pub kind: StrategyKind,
    pub symbol: Symbol,
    pub timeframe: Timeframe,
    pub layer: Layer,
    pub indicator: IndicatorParams,
    pub strategy: StrategyParams,
    pub methods: SignalMethods,
}

impl ResolvedParams {
    /// Starts from the global default.
    pub fn from_defaults(
        kind: StrategyKind,
        symbol: Symbol,
        timeframe: Timeframe,
        defaults: &StrategyDefaults,
    ) -> Self {
        Self {
            kind,
            symbol,
            timeframe,
            layer: Layer::Global,
            indicator: defaults.indicator,
            strategy: defaults.strategy,
            methods: defaults.methods,
        }
    }

    /// Replaces the strategy params and binds the indicator to the timeframe.
    /// Indicator fields the timeframe leaves unset keep their current value.
    pub fn apply_timeframe(&mut self, defaults: &TimeframeDefaults) {
        let pinned = &defaults.indicator;
        self.indicator = IndicatorParams {
            period: pinned.period.unwrap_or(self.indicator.period),
            applied_price: pinned.applied_price.unwrap_or(self.indicator.applied_price),
            shift: pinned.shift.unwrap_or(self.indicator.shift),
            timeframe: defaults.timeframe,
        };
        self.strategy = defaults.strategy;
        self.layer = Layer::Timeframe;
    }

    /// Overwrites every field the override carries. Lot size, open filter and
    /// boost, price stop and tick filter are not part of an override and keep
    /// their current value.
    pub fn apply_override(&mut self, params: &WprParams) {
        self.indicator = params.indicator();
        self.strategy.signal_open_method = params.signal_open_method1;
        self.strategy.signal_open_level = params.signal_open_level;
        self.strategy.signal_close_method = params.signal_close_method1;
        self.strategy.signal_close_level = params.signal_close_level;
        self.strategy.max_spread = params.max_spread;
        self.methods = params.methods();
        self.layer = Layer::Symbol;
    }
}

impl ParamRegistry {
    /// Resolves the parameters for one (strategy kind, symbol, timeframe) triple.
    ///
    /// Missing timeframe defaults or overrides are not errors; only a strategy
    /// kind without a global default is.
    pub fn resolve(
        &self,
        kind: StrategyKind,
        symbol: &str,
        timeframe: Timeframe,
    ) -> Result<ResolvedParams> {
        let defaults = self
            .global_default(kind)
            .ok_or(Error::MissingGlobalDefault(kind))?;

        let mut resolved =
            ResolvedParams::from_defaults(kind, Symbol::new(symbol), timeframe, defaults);

        if let Some(tf_defaults) = self.timeframe_default(kind, timeframe) {
            resolved.apply_timeframe(tf_defaults);
        }
        if let Some(params) = self.symbol_override(kind, symbol, timeframe) {
            resolved.apply_override(params);
        }

        tracing::debug!(%kind, symbol, %timeframe, layer = ?resolved.layer, "Resolved strategy parameters.");
        Ok(resolved)
    }
}

/// Resolves against the process-wide built-in registry.
pub fn resolve(kind: StrategyKind, symbol: &str, timeframe: Timeframe) -> Result<ResolvedParams> {
    ParamRegistry::shared()?.resolve(kind, symbol, timeframe)
}
