//! Prefixed string validators
//!
//! Identifiers of the form `prefix_rest`, where `prefix` names the kind of
//! record (`usr`, `org`, ...) and `rest` is any non-empty body. The body is
//! not inspected.
//!
//! # Examples
//!
//! ```
//! use sift_validator::prelude::*;
//!
//! let user_id = prefixed_id("usr");
//! assert_eq!(user_id.validate("usr_01H8X").unwrap(), "usr_01H8X");
//!
//! let error = user_id.validate("org_01H8X").unwrap_err();
//! assert_eq!(error.message, r#"ID must start with the prefix "usr_"."#);
//!
//! let error = user_id.validate("usr_").unwrap_err();
//! assert_eq!(error.message, "Malformed ID");
//! ```

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

const DEFAULT_LABEL: &str = "string";

// ============================================================================
// PREFIXED STRING
// ============================================================================

/// Validates the `prefix_rest` shape.
///
/// Checks run in order and stop at the first failure:
///
/// 1. the input starts with `prefix_` (code `starts_with`)
/// 2. at least one character follows the separator (code `min_length`)
///
/// Both messages mention the label, which defaults to `"string"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixedString {
    prefix: String,
    separator_prefix: String,
    label: Cow<'static, str>,
    start_message: String,
    malformed_message: String,
}

impl PrefixedString {
    /// Creates a validator for `prefix` with the default label.
    ///
    /// The prefix should be non-empty and free of `_`; this is not checked
    /// here (see [`PrefixMapping::check`](super::PrefixMapping::check)).
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let separator_prefix = format!("{prefix}_");
        let mut validator = Self {
            prefix,
            separator_prefix,
            label: Cow::Borrowed(DEFAULT_LABEL),
            start_message: String::new(),
            malformed_message: String::new(),
        };
        validator.render_messages();
        validator
    }

    /// Sets the label used in error messages.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self.render_messages();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Shortest accepted input: the prefix, the separator and one character.
    pub fn min_len(&self) -> usize {
        self.prefix.len() + 2
    }

    fn render_messages(&mut self) {
        self.start_message = format!(
            "{} must start with the prefix \"{}\".",
            capitalize_label(&self.label),
            self.separator_prefix
        );
        self.malformed_message = if self.label == DEFAULT_LABEL {
            "Malformed prefixed string".to_owned()
        } else {
            format!("Malformed {}", self.label)
        };
    }
}

impl Validate for PrefixedString {
    type Input = str;
    type Output = String;

    fn validate(&self, input: &str) -> Result<String, ValidationError> {
        if !input.starts_with(self.separator_prefix.as_str()) {
            return Err(
                ValidationError::new("starts_with", self.start_message.clone())
                    .with_param("prefix", self.separator_prefix.clone()),
            );
        }

        // The prefix matched byte for byte, so byte length is enough to tell
        // whether a body follows.
        if input.len() < self.min_len() {
            return Err(
                ValidationError::new("min_length", self.malformed_message.clone())
                    .with_param("min", self.min_len().to_string())
                    .with_param("actual", input.chars().count().to_string()),
            );
        }

        Ok(input.to_owned())
    }
}

/// Upper-cases the first character unless the label is already all caps.
///
/// Only the first character changes: `customLabel` becomes `CustomLabel`,
/// `users ID` becomes `Users ID`, `ID` stays `ID`.
#[must_use]
pub fn capitalize_label(label: &str) -> Cow<'_, str> {
    if label.to_uppercase() == label {
        return Cow::Borrowed(label);
    }

    let mut chars = label.chars();
    match chars.next() {
        Some(first) => Cow::Owned(first.to_uppercase().chain(chars).collect()),
        None => Cow::Borrowed(label),
    }
}

// ============================================================================
// FACTORIES
// ============================================================================

/// Creates a [`PrefixedString`] with the default `"string"` label.
#[must_use]
pub fn prefixed_string(prefix: impl Into<String>) -> PrefixedString {
    PrefixedString::new(prefix)
}

/// Creates a [`PrefixedString`] labelled `"ID"`.
#[must_use]
pub fn prefixed_id(prefix: impl Into<String>) -> PrefixedString {
    PrefixedString::new(prefix).with_label("ID")
}

// ============================================================================
// TESTS
// ============================================================================
