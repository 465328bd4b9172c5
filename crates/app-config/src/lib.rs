// In crates/app-config/src/lib.rs

use std::path::Path;

use config::{Config, Environment, File};

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AppSettings, ParamSet, ParamSettings, Settings};

/// Loads the application settings from the default `config` directory.
pub fn load_settings() -> Result<Settings> {
    load_settings_from(Path::new("config"))
}

/// Loads the application settings from various sources.
///
/// This function orchestrates the layered configuration loading:
/// 1. Reads from a default `base.toml` file.
/// 2. Merges settings from an environment-specific file (e.g., `development.toml`).
/// 3. Merges settings from environment variables.
pub fn load_settings_from(config_dir: &Path) -> Result<Settings> {
    // Get the current environment. Default to "development" if not set.
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

    build_settings(config_dir, &environment, app_environment())
}

/// Settings from environment variables (e.g., `APP__APP__LOG_LEVEL=debug`).
/// The prefix is `APP`, separator is `__`.
fn app_environment() -> Environment {
    Environment::with_prefix("APP").separator("__")
}

fn build_settings(config_dir: &Path, environment: &str, env_source: Environment) -> Result<Settings> {
    let base = config_dir.join("base");
    let env_specific = config_dir.join(environment);

    let settings = Config::builder()
        // 1. Load the base configuration file.
        .add_source(File::with_name(&base.to_string_lossy()))
        // 2. Load the environment-specific configuration file.
        .add_source(File::with_name(&env_specific.to_string_lossy()).required(false))
        // 3. Load settings from environment variables.
        .add_source(env_source)
        .build()?;

    let settings: Settings = settings.try_deserialize()?;

    Ok(settings)
}

/// Loads one parameter-set file.
pub fn load_param_set(path: &Path) -> Result<ParamSet> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::IoError {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| Error::TomlError {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads every configured parameter-set file, in order.
pub fn load_param_sets(settings: &ParamSettings) -> Result<Vec<ParamSet>> {
    settings
        .set_files
        .iter()
        .map(|path| load_param_set(path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{AppliedPrice, StrategyKind, Timeframe};
    use rust_decimal_macros::dec;
    use std::fs;

    const GBPUSD_SET: &str = r#"
strategy = "wpr"

[[timeframes]]
timeframe = "M5"
indicator = { shift = 1 }

[timeframes.strategy]
lot_size = 0
signal_open_method = 0
signal_open_filter = 1
signal_open_level = 10
signal_open_boost = 0
signal_close_method = 0
signal_close_level = 10
price_stop_method = 0
price_stop_level = 1.5
tick_filter_method = 1
max_spread = 1

[[overrides]]
symbol = "GBPUSD"
timeframe = "M5"
period = 21
applied_price = 0
shift = 1
trailing_stop_method = 6
trailing_profit_method = 11
signal_open_level = 30
signal_base_method = 0
signal_open_method1 = 1
signal_open_method2 = 0
signal_close_level = 30
signal_close_method1 = 1
signal_close_method2 = 0
max_spread = 3
"#;

    #[test]
    fn parses_a_full_param_set() {
        let set: ParamSet = toml::from_str(GBPUSD_SET).unwrap();
        assert_eq!(set.strategy, StrategyKind::Wpr);
        assert!(set.global.is_none());

        let tf = &set.timeframes[0];
        assert_eq!(tf.timeframe, Timeframe::M5);
        assert_eq!(tf.indicator.shift, Some(1));
        assert_eq!(tf.indicator.period, None);
        assert_eq!(tf.strategy.price_stop_level, dec!(1.5));

        let ov = &set.overrides[0];
        assert_eq!(ov.symbol.as_str(), "GBPUSD");
        assert_eq!(ov.period, 21);
        assert_eq!(ov.applied_price, AppliedPrice::Close);
        assert_eq!(ov.max_spread, dec!(3));
    }

    #[test]
    fn rejects_partial_override() {
        let partial = r#"
strategy = "wpr"

[[overrides]]
symbol = "GBPUSD"
timeframe = "M5"
period = 21
"#;
        assert!(toml::from_str::<ParamSet>(partial).is_err());
    }

    #[test]
    fn rejects_unknown_fields_and_price_codes() {
        let typo = GBPUSD_SET.replace("max_spread = 3", "max_sprad = 3");
        assert!(toml::from_str::<ParamSet>(&typo).is_err());

        let bad_price = GBPUSD_SET.replace("applied_price = 0", "applied_price = 9");
        assert!(toml::from_str::<ParamSet>(&bad_price).is_err());
    }

    #[test]
    fn load_param_set_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "strategy = \"rsi\"").unwrap();

        let err = load_param_set(&path).unwrap_err();
        assert!(matches!(err, Error::TomlError { .. }));
        assert!(err.to_string().contains("broken.toml"));

        let missing = load_param_set(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, Error::IoError { .. }));
    }

    fn write_base(dir: &Path) {
        fs::write(
            dir.join("base.toml"),
            "[app]\nenvironment = \"test\"\nlog_level = \"warn\"\n",
        )
        .unwrap();
    }

    fn env_vars(vars: &[(&str, &str)]) -> Environment {
        let mut source = config::Map::new();
        for (key, value) in vars {
            source.insert(key.to_string(), value.to_string());
        }
        app_environment().source(Some(source))
    }

    #[test]
    fn loads_settings_with_param_defaults() {
        let dir = tempfile::tempdir().unwrap();
        write_base(dir.path());

        let settings = build_settings(dir.path(), "development", env_vars(&[])).unwrap();
        assert_eq!(settings.app.log_level, "warn");
        assert!(settings.params.include_builtin);
        assert!(settings.params.set_files.is_empty());
    }

    #[test]
    fn environment_file_overlays_base() {
        let dir = tempfile::tempdir().unwrap();
        write_base(dir.path());
        fs::write(
            dir.path().join("development.toml"),
            "[app]\nlog_level = \"debug\"\n\n[params]\ninclude_builtin = false\n",
        )
        .unwrap();

        let settings = build_settings(dir.path(), "development", env_vars(&[])).unwrap();
        assert_eq!(settings.app.log_level, "debug");
        assert_eq!(settings.app.environment, "test");
        assert!(!settings.params.include_builtin);

        // Another environment does not pick up development.toml.
        let production = build_settings(dir.path(), "production", env_vars(&[])).unwrap();
        assert_eq!(production.app.log_level, "warn");
        assert!(production.params.include_builtin);
    }

    #[test]
    fn environment_variables_override_files() {
        let dir = tempfile::tempdir().unwrap();
        write_base(dir.path());
        fs::write(
            dir.path().join("development.toml"),
            "[app]\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let settings = build_settings(
            dir.path(),
            "development",
            env_vars(&[("APP__APP__LOG_LEVEL", "error")]),
        )
        .unwrap();
        assert_eq!(settings.app.log_level, "error");

        // A single underscore after the prefix does not match.
        let ignored = build_settings(
            dir.path(),
            "development",
            env_vars(&[("APP_APP__LOG_LEVEL", "error")]),
        )
        .unwrap();
        assert_eq!(ignored.app.log_level, "debug");
    }

    #[test]
    fn loads_configured_set_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gbpusd.toml");
        fs::write(&path, GBPUSD_SET).unwrap();

        let settings = ParamSettings {
            include_builtin: true,
            set_files: vec![path],
        };
        let sets = load_param_sets(&settings).unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].overrides.len(), 1);
    }
}
