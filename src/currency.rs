use fixed_decimal::FixedDecimal;
use icu::decimal::{FixedDecimalFormatter, options::FixedDecimalFormatterOptions};
use icu::locid::Locale;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;
use writeable::Writeable;

use crate::types::ZakatError;

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolPlacement {
    #[default]
    Prefix,
    Suffix,
}

/// Formats amounts as display strings in a single currency.
///
/// Digit grouping and separators follow the locale (via ICU4X); the symbol is
/// placed as configured. Defaults to US dollars in `en-US`.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormatter {
    locale: Locale,
    symbol: String,
    placement: SymbolPlacement,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self {
            locale: icu::locid::locale!("en-US"),
            symbol: "$".to_string(),
            placement: SymbolPlacement::Prefix,
        }
    }
}

impl CurrencyFormatter {
    pub fn new(locale: &str, symbol: impl Into<String>, placement: SymbolPlacement) -> Result<Self, ZakatError> {
        let locale = Locale::from_str(locale)
            .map_err(|e| ZakatError::ConfigurationError(format!("Invalid locale '{}': {}", locale, e), None))?;
        Ok(Self {
            locale,
            symbol: symbol.into(),
            placement,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Formats `amount` for display.
    ///
    /// With `include_cents` the number always carries exactly two fraction
    /// digits; without, it is rounded to the nearest whole unit. Halves round
    /// away from zero in both cases. The amount itself is not modified.
    pub fn format_currency(&self, amount: Decimal, include_cents: bool) -> String {
        let dp = if include_cents { 2 } else { 0 };
        let mut rounded = amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(dp);

        let sign = if rounded < Decimal::ZERO { "-" } else { "" };
        let number = self.format_number(rounded.abs());

        match self.placement {
            SymbolPlacement::Prefix => format!("{}{}{}", sign, self.symbol, number),
            SymbolPlacement::Suffix => format!("{}{} {}", sign, number, self.symbol),
        }
    }

    fn format_number(&self, amount: Decimal) -> String {
        let plain = amount.to_string();

        let formatter = match FixedDecimalFormatter::try_new(&(&self.locale).into(), FixedDecimalFormatterOptions::default()) {
            Ok(formatter) => formatter,
            Err(e) => {
                warn!(locale = %self.locale, error = ?e, "no decimal format data, falling back to plain digits");
                return plain;
            }
        };

        match FixedDecimal::from_str(&plain) {
            Ok(fixed) => formatter.format(&fixed).write_to_string().into_owned(),
            Err(e) => {
                warn!(amount = %plain, error = ?e, "amount not representable for ICU formatting");
                plain
            }
        }
    }
}
