// In crates/engine/src/registry.rs

//! The read-only store of every known parameter layer.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use app_config::{ParamSet, ParamSettings};
use core_types::{StrategyKind, Symbol, Timeframe};
use strategies::{StrategyDefaults, TimeframeDefaults, WprParams};

use crate::error::{Error, Result};

static SHARED: OnceLock<ParamRegistry> = OnceLock::new();

/// Global defaults, timeframe defaults and symbol overrides, keyed by strategy kind.
///
/// Built once through [`RegistryBuilder`] and never mutated afterwards, so it can be
/// shared across threads freely.
#[derive(Debug, Clone, Default)]
pub struct ParamRegistry {
    globals: BTreeMap<StrategyKind, StrategyDefaults>,
    timeframes: BTreeMap<(StrategyKind, Timeframe), TimeframeDefaults>,
    overrides: BTreeMap<(StrategyKind, Symbol, Timeframe), WprParams>,
}

impl ParamRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// A registry holding only the compiled-in tables.
    pub fn builtin() -> Result<Self> {
        Ok(Self::builder().with_builtin()?.build())
    }

    /// The process-wide built-in registry, built on first use.
    pub fn shared() -> Result<&'static ParamRegistry> {
        if let Some(registry) = SHARED.get() {
            return Ok(registry);
        }
        let registry = Self::builtin()?;
        Ok(SHARED.get_or_init(|| registry))
    }

    /// Builds a registry from the application's parameter settings: the compiled-in
    /// tables (unless disabled) followed by every configured set file.
    pub fn from_settings(settings: &ParamSettings) -> Result<Self> {
        let mut builder = Self::builder();
        if settings.include_builtin {
            builder = builder.with_builtin()?;
        }
        for set in app_config::load_param_sets(settings)? {
            builder = builder.with_param_set(set)?;
        }
        Ok(builder.build())
    }

    /// Reopens the registry to register further layers on top of it.
    pub fn into_builder(self) -> RegistryBuilder {
        RegistryBuilder { registry: self }
    }

    pub fn global_default(&self, kind: StrategyKind) -> Option<&StrategyDefaults> {
        self.globals.get(&kind)
    }

    pub fn timeframe_default(
        &self,
        kind: StrategyKind,
        timeframe: Timeframe,
    ) -> Option<&TimeframeDefaults> {
        self.timeframes.get(&(kind, timeframe))
    }

    pub fn symbol_override(
        &self,
        kind: StrategyKind,
        symbol: &str,
        timeframe: Timeframe,
    ) -> Option<&WprParams> {
        self.overrides.get(&(kind, Symbol::new(symbol), timeframe))
    }

    /// Strategy kinds that have a global default.
    pub fn kinds(&self) -> impl Iterator<Item = StrategyKind> + '_ {
        self.globals.keys().copied()
    }

    /// Strategy kinds that have timeframe defaults or overrides but no global default.
    pub fn orphaned_kinds(&self) -> BTreeSet<StrategyKind> {
        self.timeframes
            .keys()
            .map(|(kind, _)| *kind)
            .chain(self.overrides.keys().map(|(kind, _, _)| *kind))
            .filter(|kind| !self.globals.contains_key(kind))
            .collect()
    }

    /// Timeframe defaults of one kind, ordered by timeframe.
    pub fn timeframe_defaults(
        &self,
        kind: StrategyKind,
    ) -> impl Iterator<Item = &TimeframeDefaults> + '_ {
        self.timeframes
            .iter()
            .filter(move |((k, _), _)| *k == kind)
            .map(|(_, defaults)| defaults)
    }

    /// Symbol overrides of one kind, ordered by symbol then timeframe.
    pub fn overrides(&self, kind: StrategyKind) -> impl Iterator<Item = &WprParams> + '_ {
        self.overrides
            .iter()
            .filter(move |((k, _, _), _)| *k == kind)
            .map(|(_, params)| params)
    }
}

/// Collects parameter layers and rejects any key registered twice.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: ParamRegistry,
}

impl RegistryBuilder {
    pub fn with_global(mut self, kind: StrategyKind, defaults: StrategyDefaults) -> Result<Self> {
        if self.registry.globals.contains_key(&kind) {
            return Err(Error::DuplicateGlobalDefault(kind));
        }
        self.registry.globals.insert(kind, defaults);
        Ok(self)
    }

    pub fn with_timeframe(mut self, kind: StrategyKind, defaults: TimeframeDefaults) -> Result<Self> {
        let key = (kind, defaults.timeframe);
        if self.registry.timeframes.contains_key(&key) {
            return Err(Error::DuplicateTimeframeDefault {
                kind,
                timeframe: defaults.timeframe,
            });
        }
        self.registry.timeframes.insert(key, defaults);
        Ok(self)
    }

    pub fn with_override(mut self, kind: StrategyKind, params: WprParams) -> Result<Self> {
        let key = (kind, params.symbol.clone(), params.timeframe);
        if self.registry.overrides.contains_key(&key) {
            return Err(Error::DuplicateOverride {
                kind,
                symbol: params.symbol,
                timeframe: params.timeframe,
            });
        }
        tracing::debug!(%kind, symbol = %params.symbol, timeframe = %params.timeframe, "Registered override.");
        self.registry.overrides.insert(key, params);
        Ok(self)
    }

    /// Registers the compiled-in tables of every strategy kind.
    pub fn with_builtin(mut self) -> Result<Self> {
        for kind in StrategyKind::ALL {
            let tables = strategies::builtin_tables(kind);
            self = self.with_global(kind, tables.defaults)?;
            for defaults in tables.timeframes {
                self = self.with_timeframe(kind, defaults)?;
            }
            for params in tables.overrides {
                self = self.with_override(kind, params)?;
            }
        }
        Ok(self)
    }

    /// Registers everything one parameter-set file declares.
    pub fn with_param_set(mut self, set: ParamSet) -> Result<Self> {
        let kind = set.strategy;
        tracing::debug!(
            %kind,
            timeframes = set.timeframes.len(),
            overrides = set.overrides.len(),
            "Registering parameter set."
        );
        if let Some(defaults) = set.global {
            self = self.with_global(kind, defaults)?;
        }
        for defaults in set.timeframes {
            self = self.with_timeframe(kind, defaults)?;
        }
        for params in set.overrides {
            self = self.with_override(kind, params)?;
        }
        Ok(self)
    }

    pub fn build(self) -> ParamRegistry {
        let registry = self.registry;

        // Layers without a global default cannot be resolved; resolve() reports it.
        for kind in registry.orphaned_kinds() {
            tracing::warn!(%kind, "Parameter layer registered for a strategy without a global default.");
        }

        registry
    }
}
