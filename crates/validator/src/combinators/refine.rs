//! REFINE combinator - custom predicates on validated output

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Runs a predicate on the output of a successful validation.
///
/// When the predicate returns `false` the validation fails with code
/// `custom` and the configured message.
///
/// # Examples
///
/// ```
/// use sift_validator::prelude::*;
///
/// let number = coerce_number().refine(|n| n.is_some(), "Invalid number");
/// assert!(number.validate("12").is_ok());
/// assert_eq!(number.validate("abc").unwrap_err().message, "Invalid number");
/// ```
#[derive(Debug, Clone)]
pub struct Refine<V, F> {
    inner: V,
    predicate: F,
    message: Cow<'static, str>,
}

impl<V, F> Refine<V, F> {
    pub fn new(inner: V, predicate: F, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            predicate,
            message: message.into(),
        }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<V, F> Validate for Refine<V, F>
where
    V: Validate,
    F: Fn(&V::Output) -> bool,
{
    type Input = V::Input;
    type Output = V::Output;

    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        let output = self.inner.validate(input)?;
        if (self.predicate)(&output) {
            Ok(output)
        } else {
            Err(ValidationError::custom(self.message.clone()))
        }
    }
}
