//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the error message of a validator.
///
/// The original error is kept as the single nested error, so callers that
/// need the precise failure can still reach it. The error code is preserved
/// unless [`with_code`](WithMessage::with_code) overrides it.
///
/// # Examples
///
/// ```
/// use sift_validator::prelude::*;
///
/// let validator = trim().pipe(min_length(1)).with_message("Required");
///
/// let error = validator.validate("   ").unwrap_err();
/// assert_eq!(error.message, "Required");
/// assert_eq!(error.code, "min_length");
/// ```
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

    /// Creates a combinator that only overrides the error code, keeping the original message.
    pub fn code_only(inner: V, code: impl Into<String>) -> Self {
        Self {
            inner,
            message: String::new(),
            code: Some(code.into()),
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;
    type Output = V::Output;

    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        self.inner.validate(input).map_err(|original| {
            let code = self
                .code
                .clone()
                .map_or_else(|| original.code.clone(), Cow::Owned);

            let message = if self.message.is_empty() {
                original.message.clone()
            } else {
                Cow::Owned(self.message.clone())
            };

            let mut error = ValidationError::new(code, message);
            error.field.clone_from(&original.field);
            error.params.clone_from(&original.params);
            error.with_nested_error(original)
        })
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

/// Creates a combinator that overrides only the error code.
pub fn with_code<V>(validator: V, code: impl Into<String>) -> WithMessage<V> {
    WithMessage::code_only(validator, code)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct MinLength {
        min: usize,
    }

    impl Validate for MinLength {
        type Input = str;
        type Output = usize;

        fn validate(&self, input: &str) -> Result<usize, ValidationError> {
            if input.len() >= self.min {
                Ok(input.len())
            } else {
                Err(ValidationError::min_length(self.min, input.len()))
            }
        }
    }

    #[test]
    fn test_with_message_success_keeps_output() {
        let validator = WithMessage::new(MinLength { min: 3 }, "Custom message");
        assert_eq!(validator.validate("hello").unwrap(), 5);
    }

    #[test]
    fn test_with_message_replaces_message() {
        let validator = WithMessage::new(MinLength { min: 10 }, "Password too short");
        let error = validator.validate("short").unwrap_err();

        assert_eq!(error.message, "Password too short");
        assert_eq!(error.code, "min_length");
        assert_eq!(error.param("min"), Some("10"));
    }

    #[test]
    fn test_with_message_and_code() {
        let validator =
            WithMessage::new(MinLength { min: 10 }, "Password too short").with_code("ERR_PASSWORD");
        let error = validator.validate("short").unwrap_err();

        assert_eq!(error.message, "Password too short");
        assert_eq!(error.code, "ERR_PASSWORD");
    }

    #[test]
    fn test_with_code_replaces_code() {
        let validator = with_code(MinLength { min: 10 }, "ERR_TOO_SHORT");
        let error = validator.validate("short").unwrap_err();

        assert_eq!(error.code, "ERR_TOO_SHORT");
        assert!(error.message.contains("at least"));
    }

    #[test]
    fn test_nested_error_preserved() {
        let validator = with_message(MinLength { min: 10 }, "Custom");
        let error = validator.validate("short").unwrap_err();

        assert_eq!(error.nested.len(), 1);
        assert_eq!(error.nested[0].code, "min_length");
    }
}
