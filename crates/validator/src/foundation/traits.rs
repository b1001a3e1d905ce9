//! Core traits for the validation system

use crate::combinators::WithMessage;
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Generic over the input type so a string validator cannot be handed a
/// number by mistake. Use `?Sized` inputs for `str` and slices.
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Implemented automatically for every `Validate` type.
pub trait ValidateExt: Validate + Sized {
    /// Replaces the error message reported on failure.
    ///
    /// ```rust
    /// use cronoszkevm_validator::prelude::*;
    ///
    /// let validator = not_empty().with_message("Cronos zkEVM private key is required");
    /// let err = validator.validate("").unwrap_err();
    /// assert_eq!(err.message, "Cronos zkEVM private key is required");
    /// assert_eq!(err.code, "not_empty");
    /// ```
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Returns `true` if the input passes.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<T: Validate> ValidateExt for T {}
