// In crates/app-config/src/types.rs

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use core_types::StrategyKind;
use strategies::{StrategyDefaults, TimeframeDefaults, WprParams};

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    /// Where strategy parameter tables come from.
    #[serde(default)]
    pub params: ParamSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    pub environment: String,
    /// The log level for the application.
    pub log_level: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ParamSettings {
    /// Register the compiled-in tables before any set file.
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
    /// Additional parameter-set files, registered in order.
    #[serde(default)]
    pub set_files: Vec<PathBuf>,
}

impl Default for ParamSettings {
    fn default() -> Self {
        Self {
            include_builtin: default_include_builtin(),
            set_files: Vec::new(),
        }
    }
}

fn default_include_builtin() -> bool {
    true
}

// --- Structs for parameter-set files ---

/// One parameter-set file: tables for a single strategy kind.
///
/// ```toml
/// strategy = "wpr"
///
/// [[overrides]]
/// symbol = "GBPUSD"
/// timeframe = "M5"
/// period = 14
/// # ... every other override field
/// ```
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ParamSet {
    pub strategy: StrategyKind,
    /// Only needed when the compiled-in tables are not registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<StrategyDefaults>,
    #[serde(default)]
    pub timeframes: Vec<TimeframeDefaults>,
    #[serde(default)]
    pub overrides: Vec<WprParams>,
}
