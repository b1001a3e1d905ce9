//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the error message of a validator.
///
/// The original error is kept as a nested error so its code and params are
/// not lost.
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
    code: Option<String>,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            let code = self
                .code
                .clone()
                .map_or_else(|| original.code.clone(), Cow::Owned);

            ValidationError::new(code, self.message.clone()).with_nested_error(original)
        })
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::MinLength;

    #[test]
    fn replaces_message_keeps_code() {
        let validator = with_message(MinLength::new(1), "Address is required");
        let err = validator.validate("").unwrap_err();

        assert_eq!(err.code, "min_length");
        assert_eq!(err.message, "Address is required");
        assert_eq!(err.nested.len(), 1);
        assert_eq!(err.nested[0].param("min"), Some("1"));
    }

    #[test]
    fn custom_code() {
        let validator = WithMessage::new(MinLength::new(1), "Required").with_code("required");
        let err = validator.validate("").unwrap_err();
        assert_eq!(err.code, "required");
    }

    #[test]
    fn passes_through_success() {
        let validator = with_message(MinLength::new(1), "unused");
        assert!(validator.validate("ok").is_ok());
    }
}
