//! Persistent CLI Configuration Loader
//!
//! Configuration is loaded from `~/.config/zakat/config.toml` on Linux,
//! `~/Library/Application Support/zakat/config.toml` on macOS
//! or `%APPDATA%\zakat\config.toml` on Windows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use zakat_calculator::prelude::*;

/// CLI Configuration structure loaded from TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CliConfig {
    /// Nisab threshold in currency units.
    pub nisab_threshold: Option<Decimal>,
    /// Fraction of net wealth due, e.g. 0.025.
    pub rate: Option<Decimal>,
    /// Gold price per gram; used to derive the Nisab when no threshold is set.
    pub gold_price: Option<Decimal>,
    /// Grams of gold making up the Nisab (default 85).
    pub nisab_gold_grams: Option<Decimal>,
    /// Locale for digit grouping (e.g., "en-US").
    pub locale: Option<String>,
    /// Currency symbol (e.g., "$", "USD").
    pub currency_symbol: Option<String>,
    /// Put the symbol after the number.
    pub symbol_after: Option<bool>,
    /// Enable file logging by default.
    pub enable_logging: Option<bool>,
}

impl CliConfig {
    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("zakat"))
    }

    /// Returns the full path to the config file.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Loads the configuration from the default location.
    ///
    /// A missing file gives `CliConfig::default()`. A file that cannot be read
    /// or parsed is an error, so the caller can fall back to defaults and
    /// warn once logging is up.
    pub fn load() -> Result<Self, ZakatError> {
        let Some(path) = Self::config_path() else {
            debug!("Could not determine config directory");
            return Ok(Self::default());
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ZakatError> {
        if !path.exists() {
            debug!("No config file found at {:?}", path);
            return Ok(Self::default());
        }

        let source = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ZakatError::ConfigurationError(format!("Failed to read config file: {}", e), Some(source.clone()))
        })?;
        let config = toml::from_str::<CliConfig>(&content).map_err(|e| {
            ZakatError::ConfigurationError(format!("Failed to parse config file: {}", e), Some(source))
        })?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Saves the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        std::fs::write(path, content)?;
        debug!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Creates a sample configuration file at the default location.
    pub fn create_sample() -> Result<PathBuf, std::io::Error> {
        let path = Self::config_path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "Could not determine config directory")
        })?;
        Self::sample().save_to(&path)?;
        Ok(path)
    }

    fn sample() -> Self {
        let defaults = ZakatParameters::default();
        CliConfig {
            nisab_threshold: Some(defaults.nisab_threshold),
            rate: Some(defaults.rate),
            gold_price: None,
            nisab_gold_grams: None,
            locale: Some("en-US".to_string()),
            currency_symbol: Some("$".to_string()),
            symbol_after: Some(false),
            enable_logging: Some(false),
        }
    }

    /// Builds the currency formatter described by this config.
    pub fn formatter(&self) -> Result<CurrencyFormatter, ZakatError> {
        if self.locale.is_none() && self.currency_symbol.is_none() && self.symbol_after.is_none() {
            return Ok(CurrencyFormatter::default());
        }
        let placement = if self.symbol_after.unwrap_or(false) {
            SymbolPlacement::Suffix
        } else {
            SymbolPlacement::Prefix
        };
        CurrencyFormatter::new(
            self.locale.as_deref().unwrap_or("en-US"),
            self.currency_symbol.clone().unwrap_or_else(|| "$".to_string()),
            placement,
        )
    }
}
