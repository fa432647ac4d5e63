//! The fixed set of fields a Zakat form asks for.
//!
//! Identifiers are kebab-case (`gold-silver`, `zakat-paid`, ...) so that a form
//! layer can map its field ids straight onto a category.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Whether an asset is held personally or by a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum AssetGroup {
    Personal,
    Business,
}

/// Every zakatable asset the calculator sums.
///
/// Declaration order is iteration order: the seven personal categories first,
/// then the six business categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, EnumIter, EnumString, Display, AsRefStr, IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum AssetCategory {
    Cash,
    GoldSilver,
    Stocks,
    Dividends,
    Retirement,
    LoansGiven,
    Receivables,
    BusinessCash,
    Inventory,
    BusinessReceivables,
    RealEstate,
    FixedAssets,
    MobileAssets,
}

impl AssetCategory {
    pub fn group(&self) -> AssetGroup {
        match self {
            AssetCategory::Cash
            | AssetCategory::GoldSilver
            | AssetCategory::Stocks
            | AssetCategory::Dividends
            | AssetCategory::Retirement
            | AssetCategory::LoansGiven
            | AssetCategory::Receivables => AssetGroup::Personal,
            AssetCategory::BusinessCash
            | AssetCategory::Inventory
            | AssetCategory::BusinessReceivables
            | AssetCategory::RealEstate
            | AssetCategory::FixedAssets
            | AssetCategory::MobileAssets => AssetGroup::Business,
        }
    }

    /// Form label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            AssetCategory::Cash => "Cash (on hand and in bank accounts)",
            AssetCategory::GoldSilver => "Gold and silver",
            AssetCategory::Stocks => "Stocks and shares",
            AssetCategory::Dividends => "Dividends",
            AssetCategory::Retirement => "Retirement accounts",
            AssetCategory::LoansGiven => "Loans given to others",
            AssetCategory::Receivables => "Money owed to you",
            AssetCategory::BusinessCash => "Business cash",
            AssetCategory::Inventory => "Inventory",
            AssetCategory::BusinessReceivables => "Business receivables",
            AssetCategory::RealEstate => "Real estate held for sale",
            AssetCategory::FixedAssets => "Fixed assets",
            AssetCategory::MobileAssets => "Mobile assets",
        }
    }

    pub fn personal() -> Vec<AssetCategory> {
        Self::iter().filter(|c| c.group() == AssetGroup::Personal).collect()
    }

    pub fn business() -> Vec<AssetCategory> {
        Self::iter().filter(|c| c.group() == AssetGroup::Business).collect()
    }

    /// Personal categories followed by business categories.
    pub fn all() -> Vec<AssetCategory> {
        Self::iter().collect()
    }
}

/// Amounts subtracted from total assets before the Nisab comparison.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, EnumIter, EnumString, Display, AsRefStr, IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DeductionCategory {
    Debts,
    ZakatPaid,
}

impl DeductionCategory {
    pub fn label(&self) -> &'static str {
        match self {
            DeductionCategory::Debts => "Outstanding debts",
            DeductionCategory::ZakatPaid => "Zakat already paid",
        }
    }

    pub fn all() -> Vec<DeductionCategory> {
        Self::iter().collect()
    }
}

/// Any field of the form, asset or deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Asset(AssetCategory),
    Deduction(DeductionCategory),
}

impl Field {
    /// Resolves a form field id such as `"business-cash"` or `"debts"`.
    pub fn from_id(id: &str) -> Option<Field> {
        let id = id.trim();
        if let Ok(asset) = id.parse::<AssetCategory>() {
            return Some(Field::Asset(asset));
        }
        id.parse::<DeductionCategory>().ok().map(Field::Deduction)
    }

    pub fn id(&self) -> &'static str {
        match self {
            Field::Asset(c) => (*c).into(),
            Field::Deduction(c) => (*c).into(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Asset(c) => c.label(),
            Field::Deduction(c) => c.label(),
        }
    }

    /// Every field in form order: personal assets, business assets, deductions.
    pub fn all() -> Vec<Field> {
        AssetCategory::iter()
            .map(Field::Asset)
            .chain(DeductionCategory::iter().map(Field::Deduction))
            .collect()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_counts_and_order() {
        assert_eq!(AssetCategory::personal().len(), 7);
        assert_eq!(AssetCategory::business().len(), 6);
        assert_eq!(AssetCategory::all().len(), 13);
        assert_eq!(DeductionCategory::all().len(), 2);

        let all = AssetCategory::all();
        assert_eq!(all.first(), Some(&AssetCategory::Cash));
        assert_eq!(all.last(), Some(&AssetCategory::MobileAssets));
    }

    #[test]
    fn test_kebab_case_ids() {
        assert_eq!(AssetCategory::GoldSilver.to_string(), "gold-silver");
        assert_eq!(AssetCategory::BusinessReceivables.as_ref(), "business-receivables");
        assert_eq!(DeductionCategory::ZakatPaid.to_string(), "zakat-paid");
        assert_eq!("loans-given".parse::<AssetCategory>(), Ok(AssetCategory::LoansGiven));
        assert_eq!("Real-Estate".parse::<AssetCategory>(), Ok(AssetCategory::RealEstate));
    }

    #[test]
    fn test_field_resolution() {
        assert_eq!(Field::from_id("debts"), Some(Field::Deduction(DeductionCategory::Debts)));
        assert_eq!(Field::from_id(" inventory "), Some(Field::Asset(AssetCategory::Inventory)));
        assert_eq!(Field::from_id("livestock"), None);
        assert_eq!(Field::all().len(), 15);
        assert_eq!(Field::Asset(AssetCategory::MobileAssets).id(), "mobile-assets");
    }
}
