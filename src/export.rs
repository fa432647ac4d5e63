use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::ZakatParameters;
use crate::types::ZakatResult;

/// Snapshot of a calculation for reporting or saving elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ZakatExport {
    pub calculation_date: NaiveDate,
    pub nisab_value: Decimal,
    pub total_assets: Decimal,
    pub total_deductions: Decimal,
    pub net_wealth: Decimal,
    pub zakat_due: Decimal,
    pub is_zakat_obligatory: bool,
}

impl ZakatExport {
    /// JSON Schema describing the export format.
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ZakatExport)
    }
}

/// Builds the export record for `result` as of `date`.
pub fn export(result: &ZakatResult, params: &ZakatParameters, date: NaiveDate) -> ZakatExport {
    ZakatExport {
        calculation_date: date,
        nisab_value: params.nisab_threshold,
        total_assets: result.total_assets,
        total_deductions: result.total_deductions,
        net_wealth: result.net_wealth,
        zakat_due: result.zakat_due,
        is_zakat_obligatory: result.is_above_nisab,
    }
}

/// [`export`] dated with the local calendar day.
pub fn export_today(result: &ZakatResult, params: &ZakatParameters) -> ZakatExport {
    export(result, params, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::AssetCategory;
    use crate::inputs::ZakatInputs;
    use crate::traits::CalculateZakat;
    use rust_decimal_macros::dec;

    #[test]
    fn test_export_copies_result() {
        let params = ZakatParameters::default();
        let result = ZakatInputs::new().asset(AssetCategory::Cash, 10034).calculate_zakat(&params);
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        let snapshot = export(&result, &params, date);
        assert_eq!(snapshot.nisab_value, dec!(10034));
        assert_eq!(snapshot.zakat_due, dec!(250.85));
        assert!(snapshot.is_zakat_obligatory);
        assert_eq!(snapshot.calculation_date, date);
    }

    #[test]
    fn test_export_json_field_names() {
        let params = ZakatParameters::default();
        let result = ZakatInputs::new().calculate_zakat(&params);
        let snapshot = export(&result, &params, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["calculationDate"], "2025-01-31");
        assert_eq!(json["isZakatObligatory"], false);
        for key in ["nisabValue", "totalAssets", "totalDeductions", "netWealth", "zakatDue"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_schema_lists_fields() {
        let schema = serde_json::to_string(&ZakatExport::json_schema()).unwrap();
        assert!(schema.contains("calculationDate"));
        assert!(schema.contains("isZakatObligatory"));
    }
}
