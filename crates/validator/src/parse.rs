//! Entry points for running validators.
//!
//! [`parse_input`] and [`safe_parse_input`] run a validator once;
//! [`parse_array`] runs one over a sequence, stopping at the first element
//! that fails.

use std::borrow::Borrow;

use serde::Serialize;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// SINGLE VALUES
// ============================================================================

/// Runs `validator` on `input`.
pub fn parse_input<V>(validator: &V, input: &V::Input) -> Result<V::Output, ValidationError>
where
    V: Validate + ?Sized,
{
    validator.validate(input)
}

/// Outcome of [`safe_parse_input`], shaped for API responses.
///
/// Serializes as `{"success": true, "data": ...}` or
/// `{"success": false, "error": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafeParseResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl<T> SafeParseResult<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Converts back into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the validation error of a failed parse.
    pub fn into_result(self) -> Result<T, ValidationError> {
        match (self.data, self.error) {
            (Some(data), _) => Ok(data),
            (None, Some(error)) => Err(error),
            (None, None) => Err(ValidationError::custom("Parse produced neither data nor error")),
        }
    }
}

impl<T> From<Result<T, ValidationError>> for SafeParseResult<T> {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                data: Some(data),
                error: None,
            },
            Err(error) => Self {
                success: false,
                data: None,
                error: Some(error),
            },
        }
    }
}

/// Runs `validator` on `input`, folding the outcome into a [`SafeParseResult`].
///
/// ```
/// use sift_validator::prelude::*;
///
/// let result = safe_parse_input(&nullish_string(non_empty_string()), &Nullish::from("  "));
/// assert_eq!(serde_json::to_string(&result).unwrap(), r#"{"success":true,"data":null}"#);
/// ```
pub fn safe_parse_input<V>(validator: &V, input: &V::Input) -> SafeParseResult<V::Output>
where
    V: Validate + ?Sized,
{
    validator.validate(input).into()
}

// ============================================================================
// ARRAYS
// ============================================================================

/// An element of a sequence failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error parsing element {index}: {}", .source.message)]
pub struct ParseArrayError {
    /// Position of the failing element.
    pub index: usize,
    /// The element's validation error.
    pub source: ValidationError,
}

/// Validates a sequence one element at a time.
///
/// Elements are pulled from the iterator lazily and validation stops at the
/// first failure, so large or streamed inputs never need to be held in full.
///
/// ```
/// use sift_validator::prelude::*;
///
/// let ids = parse_array(&prefixed_id("usr"), ["usr_1", "usr_2"]).unwrap();
/// assert_eq!(ids, ["usr_1", "usr_2"]);
///
/// let error = parse_array(&prefixed_id("usr"), vec!["usr_1".to_owned(), "org_2".to_owned()]).unwrap_err();
/// assert_eq!(error.index, 1);
/// assert_eq!(
///     error.to_string(),
///     r#"Error parsing element 1: ID must start with the prefix "usr_"."#
/// );
/// ```
pub fn parse_array<V, I>(validator: &V, items: I) -> Result<Vec<V::Output>, ParseArrayError>
where
    V: Validate + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<V::Input>,
{
    let items = items.into_iter();
    let mut outputs = Vec::with_capacity(items.size_hint().0);

    for (index, item) in items.enumerate() {
        match validator.validate(item.borrow()) {
            Ok(output) => outputs.push(output),
            Err(source) => {
                tracing::debug!(index, code = %source.code, "array element failed validation");
                return Err(ParseArrayError { index, source });
            }
        }
    }

    Ok(outputs)
}

// ============================================================================
// TESTS
// ============================================================================
