//! String schemas
//!
//! This module provides the base string schemas that other checks build on:
//! - [`string`]: accepts any string unchanged
//! - [`trim`]: trims form-style whitespace
//! - [`non_empty_string`]: trimmed, at least one character, message `Required`
//! - [`slug`]: a non-empty string of `a-z`, `0-9` and `-`

mod trim;

use std::sync::LazyLock;

use crate::combinators::{Pipe, WithMessage};
use crate::foundation::{Validate, ValidateExt, ValidationError};
use crate::validators::{MatchesRegex, MinLength, min_length};

pub use trim::{Trim, is_blank, is_js_whitespace, trim, trim_js};

static SLUG_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-z0-9-]+$").unwrap());

// ============================================================================
// STRING
// ============================================================================

/// Accepts any string and returns it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StringSchema;

impl Validate for StringSchema {
    type Input = str;
    type Output = String;

    fn validate(&self, input: &str) -> Result<String, ValidationError> {
        Ok(input.to_owned())
    }
}

#[must_use]
pub const fn string() -> StringSchema {
    StringSchema
}

// ============================================================================
// NON EMPTY STRING
// ============================================================================

/// Trimmed string with at least one character.
pub type NonEmptyString = Pipe<Trim, WithMessage<MinLength>>;

/// A string that contains something other than whitespace.
///
/// The output is the trimmed string. Chain further checks with
/// [`pipe`](ValidateExt::pipe) so they see the trimmed value.
///
/// ```
/// use sift_validator::prelude::*;
///
/// assert_eq!(non_empty_string().validate("  hello  ").unwrap(), "hello");
/// assert_eq!(non_empty_string().validate(" \t ").unwrap_err().message, "Required");
///
/// let bio = non_empty_string().pipe(max_length(10));
/// assert!(bio.validate("this is too long").is_err());
/// ```
#[must_use]
pub fn non_empty_string() -> NonEmptyString {
    trim().pipe(min_length(1).with_message("Required"))
}

// ============================================================================
// SLUG
// ============================================================================

pub type Slug = Pipe<NonEmptyString, WithMessage<MatchesRegex>>;

/// Lowercase alphanumerics and hyphens, after trimming.
#[must_use]
pub fn slug() -> Slug {
    non_empty_string().pipe(MatchesRegex::from_regex(SLUG_REGEX.clone()).with_message("Invalid slug"))
}
