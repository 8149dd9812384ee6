//! CATCH combinator - explicit fallback on failure

use crate::foundation::{Validate, ValidationError};

/// Returns a fallback value instead of failing.
///
/// Nothing in the crate recovers from errors on its own; this is the opt-in.
#[derive(Debug, Clone)]
pub struct Catch<V, O> {
    inner: V,
    fallback: O,
}

impl<V, O> Catch<V, O> {
    pub fn new(inner: V, fallback: O) -> Self {
        Self { inner, fallback }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn fallback(&self) -> &O {
        &self.fallback
    }
}

impl<V> Validate for Catch<V, V::Output>
where
    V: Validate,
    V::Output: Clone,
{
    type Input = V::Input;
    type Output = V::Output;

    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        match self.inner.validate(input) {
            Ok(output) => Ok(output),
            Err(error) => {
                tracing::trace!(code = %error.code, "validation failed, using fallback");
                Ok(self.fallback.clone())
            }
        }
    }
}
