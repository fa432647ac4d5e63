use rust_decimal_macros::dec;
use zakat_calculator::prelude::*;

#[test]
fn test_view_model_formatting() {
    let params = ZakatParameters::default();
    let formatter = CurrencyFormatter::default();

    let result = ZakatInputs::new()
        .asset(AssetCategory::Cash, "10034")
        .calculate_zakat(&params);
    let view = result.to_view(&params, &formatter);

    assert_eq!(view.formatted_total_assets, "$10,034.00");
    assert_eq!(view.formatted_total_deductions, "$0.00");
    assert_eq!(view.formatted_net_wealth, "$10,034.00");
    assert_eq!(view.formatted_zakat_due, "$250.85");
    assert_eq!(view.formatted_nisab, "$10,034");
    assert_eq!(view.status_class, "above-nisab");
    assert_eq!(view.nisab_progress, 1.0);
}

#[test]
fn test_view_model_shortfall_message() {
    let params = ZakatParameters::default();
    let inputs = ZakatInputs::from_fields([
        ("business-cash", "5000"),
        ("inventory", "3000"),
        ("cash", "2000"),
        ("debts", "1000"),
    ]);
    let view = inputs
        .calculate_zakat(&params)
        .to_view(&params, &CurrencyFormatter::default());

    assert_eq!(view.status, NisabStatus::BelowNisab { shortfall: dec!(1034) });
    assert_eq!(
        view.messages,
        vec![
            "Zakat is not obligatory. Your wealth is below the Nisab threshold.".to_string(),
            "You need an additional $1,034.00 to reach the Nisab.".to_string(),
        ]
    );
}

#[test]
fn test_display_rounding_does_not_touch_result() {
    let params = ZakatParameters::new(100, "0.025").unwrap();
    let result = ZakatInputs::new()
        .asset(AssetCategory::Dividends, "100.3")
        .calculate_zakat(&params);

    // 100.3 * 0.025 = 2.5075
    assert_eq!(result.zakat_due, dec!(2.5075));
    let view = result.to_view(&params, &CurrencyFormatter::default());
    assert_eq!(view.formatted_zakat_due, "$2.51");
    assert_eq!(result.zakat_due, dec!(2.5075));
}

#[test]
fn test_custom_symbol() {
    let params = ZakatParameters::default();
    let formatter = CurrencyFormatter::new("en-US", "USD", SymbolPlacement::Suffix).unwrap();
    let view = ZakatInputs::new()
        .asset(AssetCategory::Cash, 20000)
        .calculate_zakat(&params)
        .to_view(&params, &formatter);

    assert_eq!(view.formatted_zakat_due, "500.00 USD");
    assert_eq!(view.messages[1], "You are required to pay 500.00 USD as Zakat.");
}
