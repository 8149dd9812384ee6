//! Built-in validators
//!
//! # Categories
//!
//! - **Length**: [`min_length`], [`max_length`], [`exact_length`], [`not_empty`]
//! - **Pattern**: [`contains`], [`starts_with`], [`ends_with`]
//! - **Content**: [`email`], [`url`], [`uuid`], [`matches_regex`]
//! - **String schemas**: [`string`], [`trim`], [`non_empty_string`], [`slug`]
//! - **Identifiers**: [`prefixed_string`], [`prefixed_id`], [`IdSchemaSet`]
//! - **Nullish**: [`nullish_string`], [`nullish_non_empty_array`]
//! - **Coercion**: [`coerce_bigint`], [`coerce_number`], [`coerce_number_valid`]
//!
//! # Examples
//!
//! ```
//! use sift_validator::prelude::*;
//!
//! let handle = nullish_string(non_empty_string().pipe(max_length(20)));
//! assert_eq!(handle.validate_str(" ada ").unwrap(), Some("ada".to_owned()));
//!
//! let user_id = prefixed_id("usr");
//! assert!(user_id.validate("usr_1").is_ok());
//! ```

pub mod coerce;
pub mod collection;
pub mod content;
pub mod id_schema;
pub mod length;
pub mod nullable;
pub mod pattern;
pub mod prefixed;
pub mod string;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use length::{
    ExactLength, LengthMode, MaxLength, MinLength, NotEmpty, exact_length, max_length,
    min_length, not_empty,
};

pub use pattern::{Contains, EndsWith, StartsWith, contains, ends_with, starts_with};

pub use content::{Email, MatchesRegex, Url, Uuid, email, matches_regex, url, uuid};

pub use string::{
    NonEmptyString, Slug, StringSchema, Trim, is_blank, is_js_whitespace, non_empty_string,
    slug, string, trim, trim_js,
};

pub use prefixed::{PrefixedString, capitalize_label, prefixed_id, prefixed_string};

pub use id_schema::{IdSchemaSet, MappingError, PrefixMapping};

pub use nullable::{NullishString, nullish_string};

pub use coerce::{
    CoerceBigint, CoerceNumber, CoerceNumberValid, coerce_bigint, coerce_number,
    coerce_number_valid, format_number, parse_bigint, parse_float_prefix,
};

pub use collection::{
    NonEmptyVec, NullishNonEmptyArray, RequiredNullishNonEmptyArray, nullish_non_empty_array,
    required_nullish_non_empty_array,
};
