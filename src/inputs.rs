use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::debug;

use crate::categories::{AssetCategory, DeductionCategory, Field};
use crate::types::ZakatError;

/// A value exactly as a form field holds it, before any interpretation.
///
/// Deserializes from a JSON/TOML string or number, so input files may write
/// either `cash = 2000` or `cash = "2000"`. Any other value (a boolean, an
/// array) is kept as `Other` and counts as zero like any non-numeric text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    #[default]
    Empty,
    Exact(Decimal),
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawAmount {
    /// Interprets the raw value.
    ///
    /// * `Ok(None)` for an empty or blank field.
    /// * `Ok(Some(value))` for anything numeric, negative values included.
    /// * `Err(InvalidInput)` for text that is not a number, or a float that is
    ///   NaN, infinite or out of decimal range.
    pub fn parse(&self) -> Result<Option<Decimal>, ZakatError> {
        match self {
            RawAmount::Empty => Ok(None),
            RawAmount::Exact(value) => Ok(Some(*value)),
            RawAmount::Number(value) => {
                if !value.is_finite() {
                    return Err(ZakatError::InvalidInput(format!("Non-finite number: {}", value), None));
                }
                Decimal::from_f64(*value)
                    .map(Some)
                    .ok_or_else(|| ZakatError::InvalidInput(format!("Number out of range: {}", value), None))
            }
            RawAmount::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                Decimal::from_str(trimmed)
                    .or_else(|_| Decimal::from_scientific(trimmed))
                    .map(Some)
                    .map_err(|e| ZakatError::InvalidInput(format!("Invalid number format '{}': {}", trimmed, e), None))
            }
            RawAmount::Other(value) => Err(ZakatError::InvalidInput(format!("Not a number: {}", value), None)),
        }
    }

    /// The amount the calculation uses: the parsed value when it is a
    /// non-negative number, otherwise zero. Never fails.
    pub fn sanitized(&self) -> Decimal {
        match self.parse() {
            Ok(Some(value)) if value >= Decimal::ZERO => value,
            Ok(Some(value)) => {
                debug!(%value, "negative amount treated as zero");
                Decimal::ZERO
            }
            Ok(None) => Decimal::ZERO,
            Err(e) => {
                debug!(error = %e, "unparseable amount treated as zero");
                Decimal::ZERO
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.parse(), Ok(None))
    }
}

impl From<Decimal> for RawAmount {
    fn from(value: Decimal) -> Self {
        RawAmount::Exact(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        RawAmount::Text(value)
    }
}

impl<T: Into<RawAmount>> From<Option<T>> for RawAmount {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawAmount::Empty)
    }
}

// Integers are exact.
macro_rules! impl_raw_amount_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawAmount {
                fn from(value: $t) -> Self {
                    RawAmount::Exact(Decimal::from(value))
                }
            }
        )*
    };
}

impl_raw_amount_int!(i32, u32, i64, u64, isize, usize);

// Floats keep their float form so NaN/infinity can be reported by validation.
macro_rules! impl_raw_amount_float {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawAmount {
                fn from(value: $t) -> Self {
                    RawAmount::Number(value as f64)
                }
            }
        )*
    };
}

impl_raw_amount_float!(f32, f64);

/// A snapshot of every form field.
///
/// Categories that were never set behave exactly like empty fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ZakatInputs {
    #[serde(default)]
    pub assets: BTreeMap<AssetCategory, RawAmount>,
    #[serde(default)]
    pub deductions: BTreeMap<DeductionCategory, RawAmount>,
}

impl ZakatInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from `(field id, value)` pairs as a form would
    /// report them. Unknown ids are skipped.
    pub fn from_fields<K, V, I>(fields: I) -> Self
    where
        K: AsRef<str>,
        V: Into<RawAmount>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut inputs = Self::new();
        for (id, value) in fields {
            inputs.set(id.as_ref(), value);
        }
        inputs
    }

    /// Sets a field by its form id. Returns `false` when the id names no
    /// known category, in which case nothing changes.
    pub fn set(&mut self, id: &str, value: impl Into<RawAmount>) -> bool {
        match Field::from_id(id) {
            Some(field) => {
                self.set_field(field, value);
                true
            }
            None => {
                debug!(field = id, "ignoring unknown field");
                false
            }
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<RawAmount>) {
        match field {
            Field::Asset(category) => {
                self.assets.insert(category, value.into());
            }
            Field::Deduction(category) => {
                self.deductions.insert(category, value.into());
            }
        }
    }

    pub fn asset(mut self, category: AssetCategory, value: impl Into<RawAmount>) -> Self {
        self.assets.insert(category, value.into());
        self
    }

    pub fn deduction(mut self, category: DeductionCategory, value: impl Into<RawAmount>) -> Self {
        self.deductions.insert(category, value.into());
        self
    }

    /// The raw value currently held by a field, if it was ever set.
    pub fn raw(&self, field: Field) -> Option<&RawAmount> {
        match field {
            Field::Asset(category) => self.assets.get(&category),
            Field::Deduction(category) => self.deductions.get(&category),
        }
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        self.assets.clear();
        self.deductions.clear();
    }
}
