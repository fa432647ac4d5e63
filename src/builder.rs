use crate::types::ZakatError;

/// Trait for builders that produce a validated configuration value.
pub trait Builder<T> {
    /// Builds the final object, returning a Result.
    fn build(self) -> Result<T, ZakatError>;
}

/// Checks performed before a builder is allowed to produce its value.
pub trait Validate {
    fn validate(&self) -> Result<(), ZakatError>;
}
