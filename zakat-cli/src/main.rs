//! # Zakat CLI
//!
//! Terminal front end for `zakat-calculator`. Collects the form values from
//! flags, an input file or an interactive wizard, calculates, and prints the
//! result.
//!
//! ## Usage
//! ```bash
//! # Calculate from individual fields
//! zakat-cli --set cash=20000 --set debts=1500
//!
//! # Load fields from a JSON or TOML file and print the export record
//! zakat-cli --input wealth.toml --json
//!
//! # Answer the form interactively
//! zakat-cli wizard
//! ```

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use zakat_calculator::config::{ENV_NISAB_THRESHOLD, ENV_RATE};
use zakat_calculator::prelude::*;

mod config_loader;
mod render;
mod wizard;

use config_loader::CliConfig;

/// Zakat calculator for personal and business wealth
#[derive(Parser, Debug)]
#[command(name = "zakat-cli")]
#[command(version)]
#[command(about = "Calculate Zakat on personal and business wealth", long_about = None)]
struct Args {
    /// Enable file logging to logs/ directory
    #[arg(long, default_value = "false")]
    log: bool,

    /// Set a field, e.g. `--set cash=20000` (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_field)]
    fields: Vec<(String, String)>,

    /// Load fields from a JSON or TOML file
    #[arg(long)]
    input: Option<PathBuf>,

    /// Nisab threshold (overrides config and environment)
    #[arg(long)]
    threshold: Option<Decimal>,

    /// Gold price per gram; derives the threshold when no threshold is given
    #[arg(long)]
    gold_price: Option<Decimal>,

    /// Zakat rate as a fraction (overrides config and environment)
    #[arg(long)]
    rate: Option<Decimal>,

    /// Use a different config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the step-by-step calculation
    #[arg(long, default_value = "false")]
    explain: bool,

    /// Output the export record as JSON (non-interactive mode)
    #[arg(long, default_value = "false")]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer each field of the form interactively
    Wizard,
    /// List every field id with its label
    Fields,
    /// Print the JSON Schema of the export record
    Schema,
    /// Write a sample config file to the platform config directory
    InitConfig,
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;
    if Field::from_id(key).is_none() {
        return Err(format!("unknown field '{}' (see `zakat-cli fields`)", key.trim()));
    }
    Ok((key.trim().to_string(), value.to_string()))
}

/// Either `{ "assets": {...}, "deductions": {...} }` or `{ "cash": 100, "debts": 5 }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum InputFile {
    Grouped(GroupedFields),
    Flat(BTreeMap<String, RawAmount>),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupedFields {
    #[serde(default)]
    assets: BTreeMap<String, RawAmount>,
    #[serde(default)]
    deductions: BTreeMap<String, RawAmount>,
}

impl From<InputFile> for ZakatInputs {
    fn from(file: InputFile) -> Self {
        match file {
            InputFile::Grouped(grouped) => {
                ZakatInputs::from_fields(grouped.assets.into_iter().chain(grouped.deductions))
            }
            InputFile::Flat(fields) => ZakatInputs::from_fields(fields),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let (config, config_error) = load_config(&args);

    let _file_guard = init_tracing(args.log || config.enable_logging.unwrap_or(false))?;
    if let Some(e) = config_error {
        warn!(error = %e, "config file ignored, using defaults");
    }

    match args.command {
        Some(Commands::Fields) => {
            for field in Field::all() {
                println!("{:<22} {}", field.id(), field.label());
            }
            return Ok(());
        }
        Some(Commands::Schema) => {
            println!("{}", serde_json::to_string_pretty(&ZakatExport::json_schema())?);
            return Ok(());
        }
        Some(Commands::InitConfig) => {
            let path = CliConfig::create_sample()?;
            println!("Wrote sample configuration to {}", path.display());
            return Ok(());
        }
        Some(Commands::Wizard) | None => {}
    }

    let params = resolve_params(&args, &config)?;
    let formatter = config.formatter()?;
    debug!(threshold = %params.nisab_threshold, rate = %params.rate, "parameters resolved");

    if matches!(args.command, Some(Commands::Wizard)) {
        return run_wizard(&params, &formatter, args.explain);
    }

    let inputs = collect_inputs(&args)?;
    let report = validate(&inputs);
    render::print_issues(&report);

    let result = inputs.calculate_zakat(&params);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&export_today(&result, &params))?);
        return Ok(());
    }

    render::print_view(&result.to_view(&params, &formatter), &inputs, &formatter);
    if args.explain {
        println!("\n{}", result.explain());
    }
    Ok(())
}

/// Reads the config file named by `--config`, or the default one. A broken
/// file yields the defaults plus the error, to be logged once tracing is up.
fn load_config(args: &Args) -> (CliConfig, Option<ZakatError>) {
    let loaded = match &args.config {
        Some(path) => CliConfig::load_from(path),
        None => CliConfig::load(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (CliConfig::default(), Some(e)),
    }
}

/// The CLI logs at info; the library surfaces its warnings on stderr and
/// everything down to debug in a log file.
fn default_directives(to_file: bool) -> [&'static str; 2] {
    let library = if to_file { "zakat_calculator=debug" } else { "zakat_calculator=warn" };
    ["zakat_cli=info", library]
}

/// Initializes tracing. With `to_file`, logs go to a daily file under `logs/`
/// and the returned guard must be kept alive until exit.
fn init_tracing(
    to_file: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>, Box<dyn std::error::Error>> {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in default_directives(to_file) {
        env_filter = env_filter.add_directive(directive.parse()?);
    }

    if to_file {
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        std::fs::create_dir_all("logs")?;
        let file_appender = tracing_appender::rolling::daily("logs", "zakat.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .init();

        info!("--- Zakat Calculation Session Started [{}] ---", chrono::Utc::now());
        return Ok(Some(guard));
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(None)
}

/// Parameter precedence: flags, then environment, then config file, then
/// built-in defaults. An explicit threshold always beats a gold price from
/// the same source.
fn resolve_params(args: &Args, config: &CliConfig) -> Result<ZakatParameters, ZakatError> {
    resolve_params_with(args, config, |key| env::var(key).ok())
}

fn resolve_params_with(
    args: &Args,
    config: &CliConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ZakatParameters, ZakatError> {
    let mut builder = ZakatParameters::builder();

    if let Some(threshold) = args.threshold {
        builder = builder.nisab_threshold(threshold);
    } else if let Some(price) = args.gold_price {
        builder = builder.gold_price_per_gram(price);
    } else if let Some(threshold) = lookup(ENV_NISAB_THRESHOLD) {
        builder = builder.nisab_threshold(threshold);
    } else if let Some(threshold) = config.nisab_threshold {
        builder = builder.nisab_threshold(threshold);
    } else if let Some(price) = config.gold_price {
        builder = builder.gold_price_per_gram(price);
    }

    if let Some(grams) = config.nisab_gold_grams {
        builder = builder.nisab_gold_grams(grams);
    }

    if let Some(rate) = args.rate {
        builder = builder.rate(rate);
    } else if let Some(rate) = lookup(ENV_RATE) {
        builder = builder.rate(rate);
    } else if let Some(rate) = config.rate {
        builder = builder.rate(rate);
    }

    builder.build()
}

fn collect_inputs(args: &Args) -> Result<ZakatInputs, Box<dyn std::error::Error>> {
    let mut inputs = match &args.input {
        Some(path) => read_input_file(path)?,
        None => ZakatInputs::new(),
    };
    for (id, value) in &args.fields {
        inputs.set(id, value.as_str());
    }
    Ok(inputs)
}

fn read_input_file(path: &Path) -> Result<ZakatInputs, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let file: InputFile = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&content)?,
        _ => serde_json::from_str(&content)?,
    };
    debug!("Loaded inputs from {:?}", path);
    Ok(file.into())
}

/// Wizard loop: ask, show, and offer to start over with a cleared form.
fn run_wizard(
    params: &ZakatParameters,
    formatter: &CurrencyFormatter,
    explain: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "Nisab threshold: {}",
        formatter.format_currency(params.nisab_threshold, false)
    );

    let mut inputs = ZakatInputs::new();
    loop {
        wizard::run_wizard_mode(&mut inputs)?;
        let result = inputs.calculate_zakat(params);
        render::print_view(&result.to_view(params, formatter), &inputs, formatter);
        if explain {
            println!("\n{}", result.explain());
        }

        let again = inquire::Confirm::new("Start over with a cleared form?")
            .with_default(false)
            .prompt()?;
        if !again {
            return Ok(());
        }
        inputs.reset();
        debug!("form reset");
    }
}
