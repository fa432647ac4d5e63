use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use tracing::debug;

use crate::builder::{Builder, Validate};
use crate::inputs::RawAmount;
use crate::types::ZakatError;

/// Nisab in currency units, based on 3 troy ounces of gold.
pub const DEFAULT_NISAB_THRESHOLD: Decimal = dec!(10034);
/// 2.5%.
pub const DEFAULT_ZAKAT_RATE: Decimal = dec!(0.025);
/// Grams of gold making up the Nisab when it is derived from a gold price.
pub const DEFAULT_NISAB_GOLD_GRAMS: Decimal = dec!(85);

pub const ENV_NISAB_THRESHOLD: &str = "ZAKAT_NISAB_THRESHOLD";
pub const ENV_RATE: &str = "ZAKAT_RATE";

/// Fixed parameters of a calculation.
///
/// Immutable once built; pass it by reference into every calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZakatParameters {
    /// Minimum net wealth (currency units) for Zakat to be obligatory.
    pub nisab_threshold: Decimal,
    /// Fraction of net wealth due, e.g. `0.025`.
    pub rate: Decimal,
}

impl Default for ZakatParameters {
    fn default() -> Self {
        ZakatParameters {
            nisab_threshold: DEFAULT_NISAB_THRESHOLD,
            rate: DEFAULT_ZAKAT_RATE,
        }
    }
}

impl std::str::FromStr for ZakatParameters {
    type Err = ZakatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let params: ZakatParameters = serde_json::from_str(s)
            .map_err(|e| ZakatError::ConfigurationError(format!("Failed to parse parameters JSON: {}", e), None))?;
        params.validate()?;
        Ok(params)
    }
}

impl ZakatParameters {
    pub fn builder() -> ZakatParametersBuilder {
        ZakatParametersBuilder::default()
    }

    pub fn new(nisab_threshold: impl Into<RawAmount>, rate: impl Into<RawAmount>) -> Result<Self, ZakatError> {
        let params = Self {
            nisab_threshold: required(nisab_threshold.into(), "nisab_threshold")?,
            rate: required(rate.into(), "rate")?,
        };
        params.validate()?;
        Ok(params)
    }

    /// Derives the threshold from the current gold price
    /// (`price_per_gram * 85 g`), keeping the default rate.
    pub fn from_gold_price(price_per_gram: impl Into<RawAmount>) -> Result<Self, ZakatError> {
        Self::builder().gold_price_per_gram(price_per_gram).build()
    }

    /// Validates the parameters for logical consistency.
    pub fn validate(&self) -> Result<(), ZakatError> {
        if self.nisab_threshold <= Decimal::ZERO {
            return Err(ZakatError::ConfigurationError("Nisab threshold must be positive".to_string(), None));
        }
        if self.rate < Decimal::ZERO || self.rate > Decimal::ONE {
            return Err(ZakatError::ConfigurationError("Rate must be a fraction between 0 and 1".to_string(), None));
        }
        Ok(())
    }

    /// Loads overrides from `ZAKAT_NISAB_THRESHOLD` and `ZAKAT_RATE`.
    ///
    /// Variables that are not set keep their default; variables that are set
    /// but malformed are an error.
    pub fn from_env() -> Result<Self, ZakatError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ZakatError> {
        let mut builder = Self::builder();
        if let Some(value) = lookup(ENV_NISAB_THRESHOLD) {
            debug!(threshold = %value, "nisab threshold taken from environment");
            builder = builder.nisab_threshold(parse_env(ENV_NISAB_THRESHOLD, &value)?);
        }
        if let Some(value) = lookup(ENV_RATE) {
            debug!(rate = %value, "rate taken from environment");
            builder = builder.rate(parse_env(ENV_RATE, &value)?);
        }
        builder.build()
    }

    /// Attempts to load parameters from a JSON file.
    pub fn try_from_json(path: &str) -> Result<Self, ZakatError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ZakatError::ConfigurationError(format!("Failed to read parameters file: {}", e), Some(path.to_string())))?;
        content.parse::<Self>().map_err(|e| e.with_source(path))
    }

    pub fn with_nisab_threshold(mut self, threshold: impl Into<RawAmount>) -> Result<Self, ZakatError> {
        self.nisab_threshold = required(threshold.into(), "nisab_threshold")?;
        self.validate()?;
        Ok(self)
    }

    pub fn with_rate(mut self, rate: impl Into<RawAmount>) -> Result<Self, ZakatError> {
        self.rate = required(rate.into(), "rate")?;
        self.validate()?;
        Ok(self)
    }
}

fn required(raw: RawAmount, field: &str) -> Result<Decimal, ZakatError> {
    raw.parse()
        .map_err(|e| e.with_source(field))?
        .ok_or_else(|| ZakatError::MissingConfig { field: field.to_string(), origin: None })
}

fn parse_env(key: &str, value: &str) -> Result<Decimal, ZakatError> {
    RawAmount::from(value)
        .parse()
        .map_err(|e| ZakatError::ConfigurationError(e.to_string(), Some(key.to_string())))?
        .ok_or_else(|| ZakatError::MissingConfig { field: key.to_string(), origin: Some("environment".to_string()) })
}

// ========== ZakatParametersBuilder ==========

#[derive(Debug, Default)]
pub struct ZakatParametersBuilder {
    nisab_threshold: Option<RawAmount>,
    rate: Option<RawAmount>,
    gold_price_per_gram: Option<RawAmount>,
    nisab_gold_grams: Option<RawAmount>,
}

impl ZakatParametersBuilder {
    /// Sets the threshold directly. Takes precedence over a gold price.
    pub fn nisab_threshold(mut self, threshold: impl Into<RawAmount>) -> Self {
        self.nisab_threshold = Some(threshold.into());
        self
    }

    pub fn rate(mut self, rate: impl Into<RawAmount>) -> Self {
        self.rate = Some(rate.into());
        self
    }

    pub fn gold_price_per_gram(mut self, price: impl Into<RawAmount>) -> Self {
        self.gold_price_per_gram = Some(price.into());
        self
    }

    pub fn nisab_gold_grams(mut self, grams: impl Into<RawAmount>) -> Self {
        self.nisab_gold_grams = Some(grams.into());
        self
    }

    fn resolve(&self, raw: &Option<RawAmount>, field: &str) -> Result<Option<Decimal>, ZakatError> {
        match raw {
            Some(value) => required(value.clone(), field).map(Some),
            None => Ok(None),
        }
    }

    fn threshold(&self) -> Result<Decimal, ZakatError> {
        if let Some(threshold) = self.resolve(&self.nisab_threshold, "nisab_threshold")? {
            return Ok(threshold);
        }
        match self.resolve(&self.gold_price_per_gram, "gold_price_per_gram")? {
            Some(price) => {
                let grams = self
                    .resolve(&self.nisab_gold_grams, "nisab_gold_grams")?
                    .unwrap_or(DEFAULT_NISAB_GOLD_GRAMS);
                price.checked_mul(grams).ok_or_else(|| {
                    ZakatError::ConfigurationError("Nisab derived from gold price is out of range".to_string(), None)
                })
            }
            None => Ok(DEFAULT_NISAB_THRESHOLD),
        }
    }
}

impl Validate for ZakatParametersBuilder {
    fn validate(&self) -> Result<(), ZakatError> {
        if let Some(price) = self.resolve(&self.gold_price_per_gram, "gold_price_per_gram")?
            && price <= Decimal::ZERO
        {
            return Err(ZakatError::ConfigurationError("Gold price must be positive".to_string(), None));
        }
        if let Some(grams) = self.resolve(&self.nisab_gold_grams, "nisab_gold_grams")?
            && grams <= Decimal::ZERO
        {
            return Err(ZakatError::ConfigurationError("Nisab gold weight must be positive".to_string(), None));
        }
        Ok(())
    }
}

impl Builder<ZakatParameters> for ZakatParametersBuilder {
    fn build(self) -> Result<ZakatParameters, ZakatError> {
        Validate::validate(&self)?;

        let params = ZakatParameters {
            nisab_threshold: self.threshold()?,
            rate: self.resolve(&self.rate, "rate")?.unwrap_or(DEFAULT_ZAKAT_RATE),
        };

        params.validate()?;
        Ok(params)
    }
}
