//! Trait to validate semantic errors.
//!
//! Errors could involve more than one configuration option. Some configuration
//! combinations can be incompatible.
use thiserror::Error;

/// Errors that can occur validating the configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticValidationError {
    #[error("The default collection limit ({default_limit}) can not be greater than the maximum limit ({max_limit}).")]
    DefaultLimitAboveMaximum { default_limit: usize, max_limit: usize },
}

pub trait Validator {
    /// # Errors
    ///
    /// Will return an error if the configuration is invalid.
    fn validate(&self) -> Result<(), SemanticValidationError>;
}
