use rust_decimal_macros::dec;
use zakat_calculator::prelude::*;

#[test]
fn test_trace_serialization() {
    let trace = vec![
        CalculationStep::initial("Total Assets", dec!(100)),
        CalculationStep::subtract("Debts", dec!(50)),
        CalculationStep::rate("Rate Applied", dec!(0.025)),
    ];

    let json = serde_json::to_string(&trace).unwrap();

    assert!(json.contains(r#""operation":"initial""#));
    assert!(json.contains(r#""operation":"subtract""#));
    assert!(json.contains(r#""operation":"rate""#));
    assert!(json.contains(r#""amount":"100""#));
}

#[test]
fn test_result_trace_and_explanation() {
    let result = ZakatInputs::new()
        .asset(AssetCategory::Cash, 20000)
        .calculate_zakat(&ZakatParameters::default());

    let operations: Vec<Operation> = result.calculation_trace.iter().map(|s| s.operation).collect();
    assert_eq!(
        operations,
        vec![
            Operation::Initial,
            Operation::Subtract,
            Operation::Result,
            Operation::Compare,
            Operation::Rate,
            Operation::Result,
        ]
    );

    let explanation = result.explain();
    assert!(explanation.contains("Nisab Threshold"));
    assert!(explanation.contains("10034.00"));
    assert!(explanation.contains("Amount Due: 500.00"));
}
