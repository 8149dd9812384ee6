//! OR combinator - union of validators
//!
//! This module provides the [`Or`] combinator which combines two validators
//! with union semantics - the first validator that accepts the input decides
//! the output.
//!
//! # Examples
//!
//! ```
//! use sift_validator::combinators::Or;
//! use sift_validator::foundation::Validate;
//! use sift_validator::validators::exact_length;
//!
//! let validator = Or::new(exact_length(5), exact_length(10));
//! assert!(validator.validate("hello").is_ok()); // 5 chars
//! assert!(validator.validate("helloworld").is_ok()); // 10 chars
//! assert!(validator.validate("hi").is_err()); // neither 5 nor 10
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two validators as a union.
///
/// If the first validator passes, the second is not evaluated (short-circuits).
/// If both fail, the combined error carries both errors as nested errors.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input, Output = L::Output>,
{
    type Input = L::Input;
    type Output = L::Output;

    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        match self.left.validate(input) {
            Ok(output) => Ok(output),
            Err(left_error) => match self.right.validate(input) {
                Ok(output) => Ok(output),
                Err(right_error) => {
                    Err(ValidationError::new("or_failed", "All alternatives failed")
                        .with_nested(vec![left_error, right_error]))
                }
            },
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input, Output = L::Output>,
{
    Or::new(left, right)
}

/// Creates an `OrAny` combinator from a vector of validators.
///
/// This is useful when you have a dynamic number of alternatives, such as
/// accepting an identifier for any one of several tables.
///
/// # Examples
///
/// ```
/// use sift_validator::combinators::or_any;
/// use sift_validator::foundation::Validate;
/// use sift_validator::validators::prefixed_id;
///
/// let any_owner = or_any(vec![prefixed_id("usr"), prefixed_id("org")]);
/// assert!(any_owner.validate("org_42").is_ok());
/// assert!(any_owner.validate("acc_42").is_err());
/// ```
#[must_use]
pub fn or_any<V>(validators: Vec<V>) -> OrAny<V>
where
    V: Validate,
{
    OrAny { validators }
}

/// Tries multiple validators until one passes.
///
/// Iterates through all validators in order, returning the first success.
/// If all validators fail, returns a combined error containing all
/// individual errors.
#[derive(Debug, Clone)]
pub struct OrAny<V> {
    validators: Vec<V>,
}

impl<V> Validate for OrAny<V>
where
    V: Validate,
{
    type Input = V::Input;
    type Output = V::Output;

    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        let mut errors = Vec::new();

        for validator in &self.validators {
            match validator.validate(input) {
                Ok(output) => return Ok(output),
                Err(e) => errors.push(e),
            }
        }

        let count = errors.len();
        Err(
            ValidationError::new("or_any_failed", format!("All {count} alternatives failed"))
                .with_nested(errors),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;

    struct ExactLength {
        length: usize,
    }

    impl Validate for ExactLength {
        type Input = str;
        type Output = usize;

        fn validate(&self, input: &str) -> Result<usize, ValidationError> {
            if input.len() == self.length {
                Ok(self.length)
            } else {
                Err(ValidationError::new(
                    "exact_length",
                    format!("Expected length {}", self.length),
                ))
            }
        }
    }

    #[test]
    fn test_or_left_passes() {
        let validator = Or::new(ExactLength { length: 5 }, ExactLength { length: 10 });
        assert_eq!(validator.validate("hello").unwrap(), 5);
    }

    #[test]
    fn test_or_right_passes() {
        let validator = Or::new(ExactLength { length: 5 }, ExactLength { length: 10 });
        assert_eq!(validator.validate("helloworld").unwrap(), 10);
    }

    #[test]
    fn test_or_both_fail() {
        let validator = Or::new(ExactLength { length: 5 }, ExactLength { length: 10 });
        let err = validator.validate("hi").unwrap_err();
        assert_eq!(err.code.as_ref(), "or_failed");
        assert_eq!(err.nested.len(), 2);
        assert_eq!(err.nested[0].code.as_ref(), "exact_length");
        assert_eq!(err.nested[1].code.as_ref(), "exact_length");
    }

    #[test]
    fn test_or_chain() {
        let validator = ExactLength { length: 3 }
            .or(ExactLength { length: 5 })
            .or(ExactLength { length: 7 });
        assert!(validator.validate("abc").is_ok());
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hi").is_err());
    }

    #[test]
    fn test_or_any() {
        let combined = or_any(vec![
            ExactLength { length: 3 },
            ExactLength { length: 5 },
            ExactLength { length: 7 },
        ]);
        assert!(combined.validate("abc").is_ok());

        let err = combined.validate("hi").unwrap_err();
        assert_eq!(err.code.as_ref(), "or_any_failed");
        assert_eq!(err.nested.len(), 3);
    }
}
