//! # zakat-calculator
//!
//! Computes the Zakat obligation on personal and business wealth: asset
//! categories are summed, debts and Zakat already paid are deducted, and the
//! net wealth is compared with the Nisab threshold. At or above the
//! threshold, the due amount is `net wealth * rate` (2.5% by default).
//!
//! ```rust
//! use zakat_calculator::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let params = ZakatParameters::default();
//! let inputs = ZakatInputs::from_fields([("cash", "20000"), ("debts", "")]);
//! let result = inputs.calculate_zakat(&params);
//!
//! assert!(result.is_above_nisab);
//! assert_eq!(result.zakat_due, dec!(500));
//! ```

pub mod builder;
pub mod categories;
pub mod config;
pub mod currency;
pub mod engine;
pub mod export;
pub mod inputs;
pub mod prelude;
pub mod report;
pub mod traits;
pub mod types;
pub mod validation;

pub use config::ZakatParameters;
pub use engine::{ZakatEngine, calculate, compute_total, shortfall};
pub use traits::CalculateZakat;
pub use types::{ZakatError, ZakatResult};
