use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use zakat_calculator::prelude::*;

fn params() -> ZakatParameters {
    ZakatParameters::default()
}

#[test]
fn test_all_categories_zero() {
    let mut inputs = ZakatInputs::new();
    for field in Field::all() {
        inputs.set_field(field, 0);
    }
    let result = inputs.calculate_zakat(&params());

    assert_eq!(result.total_assets, Decimal::ZERO);
    assert_eq!(result.net_wealth, Decimal::ZERO);
    assert_eq!(result.zakat_due, Decimal::ZERO);
    assert!(!result.is_above_nisab);
    assert_eq!(shortfall(&result, &params()), dec!(10034));
}

#[test]
fn test_cash_above_nisab() {
    let result = ZakatInputs::new()
        .asset(AssetCategory::Cash, 20000)
        .calculate_zakat(&params());

    assert_eq!(result.total_assets, dec!(20000));
    assert_eq!(result.net_wealth, dec!(20000));
    assert!(result.is_above_nisab);
    assert_eq!(result.zakat_due, dec!(500.00));
    assert_eq!(result.format_amount(), "500.00");
}

#[test]
fn test_cash_exactly_at_nisab() {
    let result = ZakatInputs::new()
        .asset(AssetCategory::Cash, 10034)
        .calculate_zakat(&params());

    assert_eq!(result.net_wealth, dec!(10034));
    assert!(result.is_above_nisab, "meeting the threshold exactly is enough");
    assert_eq!(result.zakat_due, dec!(250.85));
}

#[test]
fn test_debts_pull_below_nisab() {
    let result = ZakatInputs::new()
        .asset(AssetCategory::Cash, 15000)
        .deduction(DeductionCategory::Debts, 6000)
        .calculate_zakat(&params());

    assert_eq!(result.total_assets, dec!(15000));
    assert_eq!(result.total_deductions, dec!(6000));
    assert_eq!(result.net_wealth, dec!(9000));
    assert!(!result.is_above_nisab);
    assert_eq!(result.zakat_due, Decimal::ZERO);
    assert_eq!(shortfall(&result, &params()), dec!(1034));
}

#[test]
fn test_negative_cash_counts_as_zero() {
    let result = ZakatInputs::new()
        .asset(AssetCategory::Cash, -500)
        .calculate_zakat(&params());

    assert_eq!(result.total_assets, Decimal::ZERO);
    assert_eq!(result.net_wealth, Decimal::ZERO);
    assert!(!result.is_above_nisab);
}

#[test]
fn test_mixed_personal_and_business_assets() {
    let inputs = ZakatInputs::from_fields([
        ("business-cash", "5000"),
        ("inventory", "3000"),
        ("cash", "2000"),
        ("debts", "1000"),
    ]);
    let engine = ZakatEngine::new(params());
    let result = engine.calculate(&inputs);

    assert_eq!(result.total_assets, dec!(10000));
    assert_eq!(result.total_deductions, dec!(1000));
    assert_eq!(result.net_wealth, dec!(9000));
    assert!(!result.is_above_nisab);
    assert_eq!(engine.shortfall(&result), dec!(1034));
}

#[test]
fn test_zakat_paid_is_deducted() {
    let result = ZakatInputs::new()
        .asset(AssetCategory::Stocks, 30000)
        .deduction(DeductionCategory::ZakatPaid, 10000)
        .calculate_zakat(&params());

    assert_eq!(result.net_wealth, dec!(20000));
    assert_eq!(result.zakat_due, dec!(500));
}
