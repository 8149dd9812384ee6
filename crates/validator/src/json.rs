//! JSON adapters for string validators.
//!
//! Validators in this crate take typed input (`str`, `Nullish<String>`, ...).
//! When the input is an untyped [`serde_json::Value`], the adapters here do
//! the type check first and report a `type_mismatch` naming the JSON kind
//! that was received.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sift_validator::json;
//! use sift_validator::prelude::*;
//!
//! let user_id = json::string(prefixed_id("usr"));
//!
//! assert!(user_id.validate(&json!("usr_1")).is_ok());
//!
//! let error = user_id.validate(&json!(42)).unwrap_err();
//! assert_eq!(error.code, "type_mismatch");
//! assert_eq!(error.message, "Expected string, received number");
//! ```

use serde_json::Value;

use crate::foundation::{Validate, ValidationError};

/// Names the kind of a JSON value: `null`, `boolean`, `number`, `string`,
/// `array` or `object`.
#[must_use]
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Applies a string validator to a JSON value, rejecting non-strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JsonString<V> {
    inner: V,
}

impl<V> JsonString<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V> Validate for JsonString<V>
where
    V: Validate<Input = str>,
{
    type Input = Value;
    type Output = V::Output;

    fn validate(&self, input: &Value) -> Result<Self::Output, ValidationError> {
        match input {
            Value::String(s) => self.inner.validate(s),
            other => Err(ValidationError::type_mismatch("string", value_kind(other))),
        }
    }
}

/// Wraps a string validator so it accepts a [`serde_json::Value`].
pub fn string<V>(inner: V) -> JsonString<V>
where
    V: Validate<Input = str>,
{
    JsonString::new(inner)
}
