use crate::config::ZakatParameters;
use crate::types::ZakatResult;

/// Trait to be implemented by anything that can be turned into a Zakat result.
///
/// Unlike parameter loading, calculation is infallible: implementors must
/// coerce bad input instead of rejecting it.
pub trait CalculateZakat {
    fn calculate_zakat(&self, params: &ZakatParameters) -> ZakatResult;
}
