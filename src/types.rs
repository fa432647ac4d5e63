use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of arithmetic a [`CalculationStep`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Initial,
    Subtract,
    Compare,
    Rate,
    Result,
    Info,
}

impl Operation {
    fn symbol(&self) -> &'static str {
        match self {
            Operation::Subtract => "-",
            Operation::Rate => "x",
            Operation::Result => "=",
            Operation::Compare => "?",
            Operation::Initial | Operation::Info => " ",
        }
    }
}

/// Represents a single step in the Zakat calculation process.
///
/// The trace makes the final amount verifiable: every total, deduction and
/// comparison that led to `zakat_due` is listed in order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationStep {
    /// Human-readable description of what this step does.
    pub description: String,
    /// The value at this step (if applicable).
    pub amount: Option<Decimal>,
    pub operation: Operation,
}

impl CalculationStep {
    fn with_amount(description: impl Into<String>, amount: Decimal, operation: Operation) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation,
        }
    }

    pub fn initial(description: impl Into<String>, amount: Decimal) -> Self {
        Self::with_amount(description, amount, Operation::Initial)
    }

    pub fn subtract(description: impl Into<String>, amount: Decimal) -> Self {
        Self::with_amount(description, amount, Operation::Subtract)
    }

    pub fn compare(description: impl Into<String>, amount: Decimal) -> Self {
        Self::with_amount(description, amount, Operation::Compare)
    }

    pub fn rate(description: impl Into<String>, rate: Decimal) -> Self {
        Self::with_amount(description, rate, Operation::Rate)
    }

    pub fn result(description: impl Into<String>, amount: Decimal) -> Self {
        Self::with_amount(description, amount, Operation::Result)
    }

    pub fn info(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: None,
            operation: Operation::Info,
        }
    }
}

/// The outcome of one calculation.
///
/// Always rebuilt from scratch by [`crate::engine::calculate`]; nothing in here
/// is carried over between calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZakatResult {
    /// Sum of every personal and business asset category.
    pub total_assets: Decimal,
    /// Sum of debts and Zakat already paid.
    pub total_deductions: Decimal,
    /// `max(0, total_assets - total_deductions)`.
    pub net_wealth: Decimal,
    /// `net_wealth * rate` when at or above the Nisab, otherwise zero.
    pub zakat_due: Decimal,
    pub is_above_nisab: bool,
    /// The Nisab threshold this result was compared against.
    pub nisab_threshold: Decimal,
    /// Step-by-step trace of how this calculation was derived.
    pub calculation_trace: Vec<CalculationStep>,
}

impl ZakatResult {
    /// Returns the Zakat due formatted as a plain string with 2 decimal places.
    pub fn format_amount(&self) -> String {
        use rust_decimal::RoundingStrategy;
        let rounded = self
            .zakat_due
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", rounded)
    }

    /// Generates a human-readable explanation of the calculation.
    ///
    /// Each trace step is printed on its own line with its operation symbol,
    /// followed by the final status.
    pub fn explain(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();

        let _ = writeln!(&mut output, "Zakat calculation:");
        let _ = writeln!(&mut output, "{:-<50}", "");

        let width = self
            .calculation_trace
            .iter()
            .map(|step| step.description.len())
            .max()
            .unwrap_or(20)
            .max(20);

        for step in &self.calculation_trace {
            match (step.operation, step.amount) {
                (Operation::Info, _) | (_, None) => {
                    let _ = writeln!(&mut output, "  INFO: {}", step.description);
                }
                (Operation::Rate, Some(amount)) => {
                    let _ = writeln!(
                        &mut output,
                        "  {:<width$} : {} {:>10}",
                        step.description,
                        step.operation.symbol(),
                        format!("{:.3}", amount),
                        width = width
                    );
                }
                (operation, Some(amount)) => {
                    let _ = writeln!(
                        &mut output,
                        "  {:<width$} : {} {:>10}",
                        step.description,
                        operation.symbol(),
                        format!("{:.2}", amount),
                        width = width
                    );
                }
            }
        }

        let _ = writeln!(&mut output, "{:-<50}", "");
        let status = if self.is_above_nisab { "OBLIGATORY" } else { "NOT OBLIGATORY" };
        let _ = writeln!(&mut output, "Status: {}", status);
        if self.is_above_nisab {
            let _ = writeln!(&mut output, "Amount Due: {}", self.format_amount());
        }

        output
    }
}

impl std::fmt::Display for ZakatResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Net Wealth: {} | Nisab: {}", self.net_wealth, self.nisab_threshold)?;
        if self.is_above_nisab {
            write!(f, "Status: OBLIGATORY ({} due)", self.format_amount())
        } else {
            write!(f, "Status: NOT OBLIGATORY")
        }
    }
}

/// Errors raised while building parameters or reading raw values.
///
/// The calculation itself never returns these; invalid amounts are coerced
/// to zero before they reach the engine.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ZakatError {
    #[error("Invalid Input [Field: {src}]: {0}", src = .1.as_deref().unwrap_or("Unknown"))]
    InvalidInput(String, Option<String>),
    #[error("Configuration Error [Source: {src}]: {0}", src = .1.as_deref().unwrap_or("Unknown"))]
    ConfigurationError(String, Option<String>),
    #[error("Missing Configuration [Source: {src}]: Field '{field}' is required", src = .origin.as_deref().unwrap_or("Unknown"))]
    MissingConfig {
        field: String,
        origin: Option<String>,
    },
}

impl ZakatError {
    /// Attaches the field or file the error came from.
    pub fn with_source(self, source: impl Into<String>) -> Self {
        let source = Some(source.into());
        match self {
            ZakatError::InvalidInput(msg, _) => ZakatError::InvalidInput(msg, source),
            ZakatError::ConfigurationError(msg, _) => ZakatError::ConfigurationError(msg, source),
            ZakatError::MissingConfig { field, .. } => ZakatError::MissingConfig { field, origin: source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample(is_above_nisab: bool) -> ZakatResult {
        ZakatResult {
            total_assets: dec!(20000),
            total_deductions: dec!(0),
            net_wealth: dec!(20000),
            zakat_due: if is_above_nisab { dec!(500.000) } else { dec!(0) },
            is_above_nisab,
            nisab_threshold: dec!(10034),
            calculation_trace: vec![
                CalculationStep::initial("Total Assets", dec!(20000)),
                CalculationStep::subtract("Total Deductions", dec!(0)),
                CalculationStep::rate("Applied Rate", dec!(0.025)),
                CalculationStep::info("Net wealth meets the Nisab"),
            ],
        }
    }

    #[test]
    fn test_format_amount_two_places() {
        assert_eq!(sample(true).format_amount(), "500.00");
        assert_eq!(sample(false).format_amount(), "0.00");
    }

    #[test]
    fn test_explain_lists_every_step() {
        let text = sample(true).explain();
        assert!(text.contains("Total Assets"));
        assert!(text.contains("20000.00"));
        assert!(text.contains("0.025"));
        assert!(text.contains("INFO: Net wealth meets the Nisab"));
        assert!(text.contains("Status: OBLIGATORY"));
        assert!(text.contains("Amount Due: 500.00"));
    }

    #[test]
    fn test_display_summary() {
        let shown = sample(false).to_string();
        assert!(shown.contains("Nisab: 10034"));
        assert!(shown.ends_with("NOT OBLIGATORY"));
    }

    #[test]
    fn test_error_display_and_source() {
        let err = ZakatError::InvalidInput("not a number".to_string(), None).with_source("cash");
        assert_eq!(err.to_string(), "Invalid Input [Field: cash]: not a number");

        let missing = ZakatError::MissingConfig { field: "rate".to_string(), origin: None };
        assert_eq!(missing.to_string(), "Missing Configuration [Source: Unknown]: Field 'rate' is required");
    }

    #[test]
    fn test_operation_serializes_camel_case() {
        let json = serde_json::to_string(&CalculationStep::rate("Rate", dec!(0.025))).unwrap();
        assert!(json.contains(r#""operation":"rate""#));
    }
}
