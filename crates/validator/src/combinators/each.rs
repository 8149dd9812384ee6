//! EACH combinator - validates each element of a collection

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Validates each element of a slice.
///
/// Applies a validator to every element and collects the outputs in order.
/// By default every element is checked and all failures are reported with
/// their indices; [`Each::fail_fast`] stops at the first one instead.
///
/// # Examples
///
/// ```
/// use sift_validator::prelude::*;
///
/// let tags = nullish_string(non_empty_string()).each();
/// let input = [Nullish::from("a"), Nullish::from("  "), Nullish::Null];
///
/// assert_eq!(tags.validate(&input).unwrap(), vec![Some("a".to_owned()), None, None]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Each<V> {
    inner: V,
    fail_fast: bool,
}

impl<V> Each<V> {
    /// Creates a new EACH combinator.
    ///
    /// By default, validates all elements and collects all errors.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            fail_fast: false,
        }
    }

    /// Creates an EACH combinator that stops on first error.
    pub fn fail_fast(inner: V) -> Self {
        Self {
            inner,
            fail_fast: true,
        }
    }

    /// Sets whether to stop on first error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Each<V>
where
    V: Validate,
    V::Input: Sized,
{
    type Input = [V::Input];
    type Output = Vec<V::Output>;

    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        let mut outputs = Vec::with_capacity(input.len());
        let mut errors: Vec<(usize, ValidationError)> = Vec::new();

        for (index, element) in input.iter().enumerate() {
            match self.inner.validate(element) {
                Ok(output) => outputs.push(output),
                Err(e) if self.fail_fast => {
                    return Err(ValidationError::new(
                        "each_failed",
                        format!("Element at index {index} failed: {}", e.message),
                    )
                    .with_param("index", index.to_string())
                    .with_nested_error(e));
                }
                Err(e) => errors.push((index, e)),
            }
        }

        if errors.is_empty() {
            return Ok(outputs);
        }

        let indices: Vec<String> = errors.iter().map(|(i, _)| i.to_string()).collect();
        let messages: Vec<String> = errors
            .iter()
            .map(|(i, e)| format!("[{i}]: {}", e.message))
            .collect();

        let error = ValidationError::new(
            "each_failed",
            format!(
                "{} of {} elements failed validation: {}",
                errors.len(),
                input.len(),
                messages.join("; ")
            ),
        )
        .with_param("failed_count", errors.len().to_string())
        .with_param("total_count", input.len().to_string())
        .with_param("failed_indices", indices.join(","));

        Err(error.with_nested(errors.into_iter().map(|(_, e)| e).collect()))
    }
}

/// Creates an EACH combinator that validates all elements.
pub fn each<V>(validator: V) -> Each<V> {
    Each::new(validator)
}

/// Creates an EACH combinator that stops on first error.
pub fn each_fail_fast<V>(validator: V) -> Each<V> {
    Each::fail_fast(validator)
}

// ============================================================================
// TESTS
// ============================================================================
