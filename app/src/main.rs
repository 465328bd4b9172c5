// In app/src/main.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use core_types::{StrategyKind, Timeframe};
use engine::{ParamRegistry, ResolvedParams};
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Resolves layered strategy parameters.")]
struct Cli {
    /// Directory holding `base.toml` and the environment-specific settings.
    #[arg(long, default_value = "config", global = true)]
    config_dir: PathBuf,

    /// Log at debug level regardless of the configured level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints the effective parameters of one strategy instance.
    Resolve {
        /// The strategy kind (e.g., "wpr").
        #[arg(long, default_value = "wpr")]
        strategy: StrategyKind,

        /// The trading symbol (e.g., "EURUSD").
        #[arg(short, long)]
        symbol: String,

        /// The timeframe (e.g., "M1", "H4" or "5m").
        #[arg(short, long)]
        timeframe: Timeframe,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Lists every registered timeframe default and symbol override.
    List {
        /// Restrict the listing to one strategy kind.
        #[arg(long)]
        strategy: Option<StrategyKind>,
    },

    /// Parses parameter-set files and registers them on top of the configured tables.
    Check {
        /// The parameter-set files to check.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OutputFormat {
    Json,
    Toml,
}

// --- Main Application Entry Point ---

fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = app_config::load_settings_from(&cli.config_dir)
        .with_context(|| format!("Failed to load settings from {}", cli.config_dir.display()))?;
    init_tracing(&settings.app.log_level, cli.verbose)?;

    tracing::info!(environment = %settings.app.environment, "Starting paramctl");

    let registry = ParamRegistry::from_settings(&settings.params)?;

    match cli.command {
        Commands::Resolve {
            strategy,
            symbol,
            timeframe,
            format,
        } => {
            let resolved = registry.resolve(strategy, &symbol, timeframe)?;
            println!("{}", render(&resolved, format)?);
        }
        Commands::List { strategy } => {
            handle_list(&registry, strategy);
        }
        Commands::Check { files } => {
            handle_check(registry, &files)?;
        }
    }

    tracing::info!("paramctl has finished successfully.");

    Ok(())
}

fn init_tracing(log_level: &str, verbose: bool) -> Result<()> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        log_level
            .parse::<tracing::Level>()
            .with_context(|| format!("Invalid log level '{}'", log_level))?
    };

    // Logs go to stderr so stdout only carries command output.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(Targets::new().with_default(level));
    tracing_subscriber::registry().with(fmt_layer).init();

    Ok(())
}

fn render(resolved: &ResolvedParams, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(resolved)?,
        OutputFormat::Toml => toml::to_string_pretty(resolved)?,
    };
    Ok(rendered)
}

// --- "List" Subcommand Logic ---

fn handle_list(registry: &ParamRegistry, only: Option<StrategyKind>) {
    let kinds: Vec<StrategyKind> = match only {
        Some(kind) => vec![kind],
        None => registry.kinds().collect(),
    };

    for kind in kinds {
        let has_global = registry.global_default(kind).is_some();
        println!("{kind} (global default: {})", if has_global { "yes" } else { "MISSING" });

        let timeframes: Vec<String> = registry
            .timeframe_defaults(kind)
            .map(|d| d.timeframe.to_string())
            .collect();
        println!("  timeframe defaults: {}", timeframes.join(", "));

        println!("  overrides:");
        for params in registry.overrides(kind) {
            println!(
                "    {:<8} {:<4} period={} max_spread={}",
                params.symbol, params.timeframe, params.period, params.max_spread
            );
        }
    }
}

// --- "Check" Subcommand Logic ---

fn handle_check(registry: ParamRegistry, files: &[PathBuf]) -> Result<()> {
    let mut builder = registry.into_builder();

    for path in files {
        let set = app_config::load_param_set(path)?;
        let (timeframes, overrides) = (set.timeframes.len(), set.overrides.len());
        builder = builder
            .with_param_set(set)
            .with_context(|| format!("{} conflicts with registered parameters", path.display()))?;
        println!(
            "{}: ok ({} timeframe defaults, {} overrides)",
            path.display(),
            timeframes,
            overrides
        );
    }

    let checked = builder.build();
    if let Some(kind) = checked.orphaned_kinds().into_iter().next() {
        anyhow::bail!("Strategy '{}' has parameter layers but no global default.", kind);
    }

    Ok(())
}
