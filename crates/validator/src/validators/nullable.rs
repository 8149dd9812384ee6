//! Nullish string normalization
//!
//! Optional text fields arrive in three shapes that all mean "no value": the
//! field is missing, it is explicitly `null`, or it is a blank string. A
//! [`NullishString`] collapses all three into `None` and hands every other
//! string to an inner validator.
//!
//! | input | output |
//! |---|---|
//! | `Undefined` | `Ok(None)` |
//! | `Null` | `Ok(None)` |
//! | blank string (`""`, `"  \t\n"`, `"\u{FEFF}"`) | `Ok(None)` |
//! | any other string | `inner.validate(s).map(Some)` |
//!
//! # Examples
//!
//! ```
//! use sift_validator::prelude::*;
//!
//! let bio = nullish_string(non_empty_string().pipe(max_length(10)));
//!
//! assert_eq!(bio.validate_str("   ").unwrap(), None);
//! assert_eq!(bio.validate_option(None).unwrap(), None);
//! assert_eq!(bio.validate_str(" short ").unwrap(), Some("short".to_owned()));
//! assert!(bio.validate_str("this is too long").is_err());
//! ```

use crate::foundation::{Nullish, Validate, ValidationError};
use crate::json::value_kind;
use crate::validators::is_blank;

/// Maps absent, null and blank strings to `None`; validates everything else
/// with the inner validator.
///
/// Blank detection happens before the inner validator runs, so blank input
/// is `None` whatever the inner validator would have said. The inner
/// validator receives the original, untrimmed string, and its errors are
/// returned unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NullishString<V> {
    inner: V,
}

impl<V> NullishString<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> NullishString<V>
where
    V: Validate<Input = str>,
{
    /// Validates a present string.
    pub fn validate_str(&self, input: &str) -> Result<Option<V::Output>, ValidationError> {
        self.validate_nullish(Nullish::Value(input))
    }

    /// Validates an optional string; `None` is treated as explicit null.
    pub fn validate_option(&self, input: Option<&str>) -> Result<Option<V::Output>, ValidationError> {
        self.validate_nullish(Nullish::from(input))
    }

    /// Validates a field looked up in a JSON object.
    ///
    /// `None` (missing key) is absent, `Value::Null` is null, strings are
    /// validated, and any other JSON kind is a `type_mismatch`.
    pub fn validate_json(
        &self,
        input: Option<&serde_json::Value>,
    ) -> Result<Option<V::Output>, ValidationError> {
        match input {
            None => self.validate_nullish(Nullish::Undefined),
            Some(serde_json::Value::Null) => self.validate_nullish(Nullish::Null),
            Some(serde_json::Value::String(s)) => self.validate_nullish(Nullish::Value(s.as_str())),
            Some(other) => Err(ValidationError::type_mismatch("string", value_kind(other))),
        }
    }

    fn validate_nullish(&self, input: Nullish<&str>) -> Result<Option<V::Output>, ValidationError> {
        match input {
            Nullish::Undefined | Nullish::Null => Ok(None),
            Nullish::Value(s) if is_blank(s) => {
                tracing::trace!(len = s.len(), "blank string normalized to none");
                Ok(None)
            }
            Nullish::Value(s) => self.inner.validate(s).map(Some),
        }
    }
}

impl<V> Validate for NullishString<V>
where
    V: Validate<Input = str>,
{
    type Input = Nullish<String>;
    type Output = Option<V::Output>;

    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        self.validate_nullish(input.as_deref())
    }
}

/// Wraps a string validator so that absent, null and blank input become `None`.
pub fn nullish_string<V>(inner: V) -> NullishString<V>
where
    V: Validate<Input = str>,
{
    NullishString::new(inner)
}

// ============================================================================
// TESTS
// ============================================================================
