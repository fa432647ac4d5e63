//! Advisory input checks.
//!
//! Calculation never depends on these: a flagged field is still counted (as
//! zero). The report only tells a form which fields to highlight.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::Field;
use crate::inputs::{RawAmount, ZakatInputs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    NotNumeric,
    Negative,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::NotNumeric => f.write_str("is not a number"),
            IssueKind::Negative => f.write_str("must not be negative"),
        }
    }
}

/// One field a form should mark as invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputIssue {
    /// Form id of the field, e.g. `"gold-silver"`.
    pub field: String,
    pub kind: IssueKind,
    /// The raw value as entered.
    pub raw: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<InputIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn is_flagged(&self, field: Field) -> bool {
        self.issues.iter().any(|issue| issue.field == field.id())
    }
}

/// Checks a single raw value. Empty values are never an issue.
pub fn check_amount(raw: &RawAmount) -> Option<IssueKind> {
    match raw.parse() {
        Ok(Some(value)) if value < Decimal::ZERO => Some(IssueKind::Negative),
        Ok(_) => None,
        Err(_) => Some(IssueKind::NotNumeric),
    }
}

/// Flags every non-empty field whose value is non-numeric or negative, in
/// form order.
pub fn validate(inputs: &ZakatInputs) -> ValidationReport {
    let issues = Field::all()
        .into_iter()
        .filter_map(|field| {
            let raw = inputs.raw(field)?;
            check_amount(raw).map(|kind| InputIssue {
                field: field.id().to_string(),
                kind,
                raw: describe(raw),
            })
        })
        .collect();

    ValidationReport { issues }
}

fn describe(raw: &RawAmount) -> String {
    match raw {
        RawAmount::Empty => String::new(),
        RawAmount::Exact(value) => value.to_string(),
        RawAmount::Number(value) => value.to_string(),
        RawAmount::Text(text) => text.clone(),
        RawAmount::Other(value) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::{AssetCategory, DeductionCategory};

    #[test]
    fn test_check_amount() {
        assert_eq!(check_amount(&RawAmount::Empty), None);
        assert_eq!(check_amount(&RawAmount::from("")), None);
        assert_eq!(check_amount(&RawAmount::from("0")), None);
        assert_eq!(check_amount(&RawAmount::from("12.5")), None);
        assert_eq!(check_amount(&RawAmount::from("-1")), Some(IssueKind::Negative));
        assert_eq!(check_amount(&RawAmount::from("12abc")), Some(IssueKind::NotNumeric));
        assert_eq!(check_amount(&RawAmount::from(f64::NAN)), Some(IssueKind::NotNumeric));
        assert_eq!(
            check_amount(&RawAmount::Other(serde_json::Value::Bool(true))),
            Some(IssueKind::NotNumeric)
        );
    }

    #[test]
    fn test_validate_reports_in_form_order() {
        let inputs = ZakatInputs::new()
            .deduction(DeductionCategory::Debts, "abc")
            .asset(AssetCategory::Cash, -500)
            .asset(AssetCategory::Stocks, "");

        let report = validate(&inputs);
        assert!(!report.is_valid());
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.issues[0].field, "cash");
        assert_eq!(report.issues[0].kind, IssueKind::Negative);
        assert_eq!(report.issues[0].raw, "-500");
        assert_eq!(report.issues[1].field, "debts");
        assert_eq!(report.issues[1].kind, IssueKind::NotNumeric);
        assert!(report.is_flagged(Field::Deduction(DeductionCategory::Debts)));
        assert!(!report.is_flagged(Field::Asset(AssetCategory::Stocks)));
    }

    #[test]
    fn test_empty_inputs_are_valid() {
        assert!(validate(&ZakatInputs::default()).is_valid());
    }
}
