//! Display-ready view of a [`ZakatResult`].
//!
//! A renderer only has to copy these strings into its widgets; it never
//! computes anything itself.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::config::ZakatParameters;
use crate::currency::CurrencyFormatter;
use crate::engine::shortfall;
use crate::types::ZakatResult;

/// Where a result stands relative to the Nisab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum NisabStatus {
    /// Net wealth reached the Nisab.
    Obligatory { zakat_due: Decimal },
    /// Some wealth, but not enough to reach the Nisab.
    BelowNisab { shortfall: Decimal },
    /// Nothing entered yet (net wealth is zero).
    AwaitingInput,
}

impl NisabStatus {
    pub fn from_result(result: &ZakatResult, params: &ZakatParameters) -> Self {
        if result.is_above_nisab {
            NisabStatus::Obligatory { zakat_due: result.zakat_due }
        } else if result.net_wealth > Decimal::ZERO {
            NisabStatus::BelowNisab { shortfall: shortfall(result, params) }
        } else {
            NisabStatus::AwaitingInput
        }
    }

    /// CSS-style class a renderer attaches to the status box.
    pub fn css_class(&self) -> &'static str {
        match self {
            NisabStatus::Obligatory { .. } => "above-nisab",
            NisabStatus::BelowNisab { .. } | NisabStatus::AwaitingInput => "below-nisab",
        }
    }

    /// The status message, one entry per paragraph.
    pub fn messages(&self, formatter: &CurrencyFormatter) -> Vec<String> {
        match self {
            NisabStatus::Obligatory { zakat_due } if *zakat_due > Decimal::ZERO => vec![
                "Zakat is obligatory! Your wealth exceeds the Nisab threshold.".to_string(),
                format!(
                    "You are required to pay {} as Zakat.",
                    formatter.format_currency(*zakat_due, true)
                ),
            ],
            NisabStatus::Obligatory { .. } => vec![
                "Zakat is obligatory! Your wealth exceeds the Nisab threshold.".to_string(),
            ],
            NisabStatus::BelowNisab { shortfall } => vec![
                "Zakat is not obligatory. Your wealth is below the Nisab threshold.".to_string(),
                format!(
                    "You need an additional {} to reach the Nisab.",
                    formatter.format_currency(*shortfall, true)
                ),
            ],
            NisabStatus::AwaitingInput => vec![
                "Enter your assets above to calculate your Zakat obligation.".to_string(),
            ],
        }
    }
}

/// Every string the results panel shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultView {
    pub formatted_total_assets: String,
    pub formatted_total_deductions: String,
    pub formatted_net_wealth: String,
    pub formatted_zakat_due: String,
    /// Threshold without cents, as shown in the page header.
    pub formatted_nisab: String,
    pub status: NisabStatus,
    pub status_class: String,
    pub messages: Vec<String>,
    /// `net_wealth / nisab_threshold`, capped at 1.0.
    pub nisab_progress: f64,
}

impl ResultView {
    pub fn new(result: &ZakatResult, params: &ZakatParameters, formatter: &CurrencyFormatter) -> Self {
        let status = NisabStatus::from_result(result, params);

        // A quotient too large for Decimal is far past the threshold.
        let nisab_progress = if params.nisab_threshold > Decimal::ZERO {
            result
                .net_wealth
                .checked_div(params.nisab_threshold)
                .map_or(1.0, |p| p.min(Decimal::ONE).to_f64().unwrap_or(0.0))
        } else {
            1.0
        };

        ResultView {
            formatted_total_assets: formatter.format_currency(result.total_assets, true),
            formatted_total_deductions: formatter.format_currency(result.total_deductions, true),
            formatted_net_wealth: formatter.format_currency(result.net_wealth, true),
            formatted_zakat_due: formatter.format_currency(result.zakat_due, true),
            formatted_nisab: formatter.format_currency(params.nisab_threshold, false),
            status_class: status.css_class().to_string(),
            messages: status.messages(formatter),
            status,
            nisab_progress,
        }
    }
}

impl ZakatResult {
    /// Builds the display model for this result.
    pub fn to_view(&self, params: &ZakatParameters, formatter: &CurrencyFormatter) -> ResultView {
        ResultView::new(self, params, formatter)
    }
}
