//! # Zakat Engine
//!
//! Pure functions from a snapshot of form values and a set of
//! [`ZakatParameters`] to a [`ZakatResult`]. Nothing here keeps state between
//! calls, performs I/O, or can fail: every malformed, missing or negative
//! amount is counted as zero.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::trace;

use crate::categories::{AssetCategory, DeductionCategory};
use crate::config::ZakatParameters;
use crate::inputs::{RawAmount, ZakatInputs};
use crate::traits::CalculateZakat;
use crate::types::{CalculationStep, ZakatResult};

/// Sums the sanitized value of every allowed category.
///
/// Entries for categories outside `allowed` are ignored; allowed categories
/// without an entry count as zero. The result is never negative, and the sum
/// saturates at `Decimal::MAX` rather than overflowing.
pub fn compute_total<C, I>(entries: &BTreeMap<C, RawAmount>, allowed: I) -> Decimal
where
    C: Ord,
    I: IntoIterator<Item = C>,
{
    allowed
        .into_iter()
        .filter_map(|category| entries.get(&category))
        .map(RawAmount::sanitized)
        .fold(Decimal::ZERO, |total, amount| total.saturating_add(amount))
}

/// Calculates the Zakat due for one snapshot of asset and deduction entries.
pub fn calculate(
    asset_entries: &BTreeMap<AssetCategory, RawAmount>,
    deduction_entries: &BTreeMap<DeductionCategory, RawAmount>,
    params: &ZakatParameters,
) -> ZakatResult {
    let total_assets = compute_total(asset_entries, AssetCategory::all());
    let total_deductions = compute_total(deduction_entries, DeductionCategory::all());
    let net_wealth = total_assets.saturating_sub(total_deductions).max(Decimal::ZERO);

    trace!(%total_assets, %total_deductions, %net_wealth, "totals computed");

    let mut trace = vec![
        CalculationStep::initial("Total Assets", total_assets),
        CalculationStep::subtract("Total Deductions", total_deductions),
        CalculationStep::result("Net Wealth", net_wealth),
        CalculationStep::compare("Nisab Threshold", params.nisab_threshold),
    ];

    let is_above_nisab = net_wealth >= params.nisab_threshold;
    let zakat_due = if is_above_nisab {
        let due = net_wealth.saturating_mul(params.rate);
        trace.push(CalculationStep::rate("Applied Rate", params.rate));
        trace.push(CalculationStep::result("Zakat Due", due));
        due
    } else {
        trace.push(CalculationStep::info("Net wealth below Nisab - no Zakat due"));
        Decimal::ZERO
    };

    ZakatResult {
        total_assets,
        total_deductions,
        net_wealth,
        zakat_due,
        is_above_nisab,
        nisab_threshold: params.nisab_threshold,
        calculation_trace: trace,
    }
}

/// How much more net wealth is needed to reach the Nisab.
///
/// Zero when the result is already at or above the threshold.
pub fn shortfall(result: &ZakatResult, params: &ZakatParameters) -> Decimal {
    (params.nisab_threshold - result.net_wealth).max(Decimal::ZERO)
}

/// Stateless facade over [`calculate`] and [`shortfall`] bound to one set of
/// parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZakatEngine {
    params: ZakatParameters,
}

impl ZakatEngine {
    pub fn new(params: ZakatParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ZakatParameters {
        &self.params
    }

    pub fn calculate(&self, inputs: &ZakatInputs) -> ZakatResult {
        inputs.calculate_zakat(&self.params)
    }

    pub fn shortfall(&self, result: &ZakatResult) -> Decimal {
        shortfall(result, &self.params)
    }
}

impl CalculateZakat for ZakatInputs {
    fn calculate_zakat(&self, params: &ZakatParameters) -> ZakatResult {
        calculate(&self.assets, &self.deductions, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compute_total_ignores_unlisted_categories() {
        let entries = BTreeMap::from([
            (AssetCategory::Cash, RawAmount::from(100)),
            (AssetCategory::Inventory, RawAmount::from(50)),
        ]);
        assert_eq!(compute_total(&entries, AssetCategory::personal()), dec!(100));
        assert_eq!(compute_total(&entries, AssetCategory::all()), dec!(150));
        assert_eq!(compute_total(&entries, Vec::new()), Decimal::ZERO);
    }

    #[test]
    fn test_compute_total_saturates() {
        let entries = BTreeMap::from([
            (AssetCategory::Cash, RawAmount::from(Decimal::MAX)),
            (AssetCategory::Stocks, RawAmount::from(Decimal::MAX)),
        ]);
        assert_eq!(compute_total(&entries, AssetCategory::all()), Decimal::MAX);
    }

    #[test]
    fn test_trace_for_payable_result() {
        let inputs = ZakatInputs::new().asset(AssetCategory::Cash, 20000);
        let result = calculate(&inputs.assets, &inputs.deductions, &ZakatParameters::default());

        let last = result.calculation_trace.last().unwrap();
        assert_eq!(last.description, "Zakat Due");
        assert_eq!(last.amount, Some(dec!(500)));
        assert_eq!(result.calculation_trace.len(), 6);
    }

    #[test]
    fn test_trace_for_exempt_result() {
        let result = calculate(&BTreeMap::new(), &BTreeMap::new(), &ZakatParameters::default());
        let last = result.calculation_trace.last().unwrap();
        assert!(last.amount.is_none());
        assert_eq!(result.calculation_trace.len(), 5);
    }

    #[test]
    fn test_deductions_exceeding_assets_floor_at_zero() {
        let inputs = ZakatInputs::new()
            .asset(AssetCategory::Cash, 1000)
            .deduction(DeductionCategory::Debts, 5000);
        let result = inputs.calculate_zakat(&ZakatParameters::default());
        assert_eq!(result.net_wealth, Decimal::ZERO);
        assert_eq!(result.total_deductions, dec!(5000));
    }

    #[test]
    fn test_shortfall_clamped_above_threshold() {
        let engine = ZakatEngine::default();
        let result = engine.calculate(&ZakatInputs::new().asset(AssetCategory::Cash, 50000));
        assert_eq!(engine.shortfall(&result), Decimal::ZERO);
    }

    #[test]
    fn test_engine_uses_its_parameters() {
        let params = ZakatParameters::new(1000, "0.1").unwrap();
        let engine = ZakatEngine::new(params);
        let result = engine.calculate(&ZakatInputs::new().asset(AssetCategory::Retirement, 1000));
        assert!(result.is_above_nisab);
        assert_eq!(result.zakat_due, dec!(100));
        assert_eq!(engine.params().rate, dec!(0.1));
    }
}
