//! Prelude module for zakat-calculator
//!
//! Re-exports the types needed for a typical calculation.
//!
//! # Usage
//!
//! ```rust
//! use zakat_calculator::prelude::*;
//! ```

pub use crate::builder::Builder;
pub use crate::categories::{AssetCategory, AssetGroup, DeductionCategory, Field};
pub use crate::config::ZakatParameters;
pub use crate::currency::{CurrencyFormatter, SymbolPlacement};
pub use crate::engine::{ZakatEngine, calculate, compute_total, shortfall};
pub use crate::export::{ZakatExport, export, export_today};
pub use crate::inputs::{RawAmount, ZakatInputs};
pub use crate::report::{NisabStatus, ResultView};
pub use crate::traits::CalculateZakat;
pub use crate::types::{CalculationStep, Operation, ZakatError, ZakatResult};
pub use crate::validation::{InputIssue, IssueKind, ValidationReport, validate};
