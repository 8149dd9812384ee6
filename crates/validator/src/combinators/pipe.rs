//! PIPE combinator - feeds one validator's output into the next

use std::borrow::Borrow;

use crate::foundation::{Validate, ValidationError};

/// Runs `first`, then validates its output with `then`.
///
/// Transforming steps such as [`Trim`](crate::validators::Trim) change the
/// value that later checks see; `Pipe` is how those steps are sequenced.
///
/// # Examples
///
/// ```
/// use sift_validator::prelude::*;
///
/// let name = trim().pipe(min_length(2));
/// assert_eq!(name.validate("  al  ").unwrap(), "al");
/// assert!(name.validate("  a  ").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe<A, B> {
    pub(crate) first: A,
    pub(crate) then: B,
}

impl<A, B> Pipe<A, B> {
    pub fn new(first: A, then: B) -> Self {
        Self { first, then }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn then(&self) -> &B {
        &self.then
    }
}

impl<A, B> Validate for Pipe<A, B>
where
    A: Validate,
    B: Validate,
    A::Output: Borrow<B::Input>,
{
    type Input = A::Input;
    type Output = B::Output;

    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        let intermediate = self.first.validate(input)?;
        self.then.validate(intermediate.borrow())
    }
}

pub fn pipe<A, B>(first: A, then: B) -> Pipe<A, B>
where
    A: Validate,
    B: Validate,
    A::Output: Borrow<B::Input>,
{
    Pipe::new(first, then)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Lower;

    impl Validate for Lower {
        type Input = str;
        type Output = String;

        fn validate(&self, input: &str) -> Result<String, ValidationError> {
            Ok(input.to_lowercase())
        }
    }

    struct OnlyLower;

    impl Validate for OnlyLower {
        type Input = str;
        type Output = String;

        fn validate(&self, input: &str) -> Result<String, ValidationError> {
            if input.chars().all(|c| !c.is_uppercase()) {
                Ok(input.to_owned())
            } else {
                Err(ValidationError::new("lowercase", "String must be lowercase"))
            }
        }
    }

    #[test]
    fn test_pipe_sees_transformed_value() {
        let validator = Pipe::new(Lower, OnlyLower);
        assert_eq!(validator.validate("HeLLo").unwrap(), "hello");
    }

    #[test]
    fn test_pipe_first_error_short_circuits() {
        let validator = pipe(OnlyLower, Lower);
        assert_eq!(validator.validate("ABC").unwrap_err().code, "lowercase");
    }
}
