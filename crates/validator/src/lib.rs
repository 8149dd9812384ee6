//! # sift-validator
//!
//! Composable validators for the string-shaped input that reaches a service
//! boundary: prefixed identifiers, optional text fields that may be missing,
//! `null` or blank, and loosely typed numbers.
//!
//! ## Quick Start
//!
//! ```
//! use sift_validator::prelude::*;
//!
//! // `usr_` followed by at least one character
//! let user_id = prefixed_id("usr");
//! assert!(user_id.validate("usr_42").is_ok());
//! assert_eq!(
//!     user_id.validate("org_42").unwrap_err().message,
//!     r#"ID must start with the prefix "usr_"."#
//! );
//!
//! // absent, null and blank all mean "no value"
//! let nickname = nullish_string(non_empty_string());
//! assert_eq!(nickname.validate_str("  ").unwrap(), None);
//! assert_eq!(nickname.validate_str(" Ada ").unwrap(), Some("Ada".to_owned()));
//! ```
//!
//! ## Identifier schema sets
//!
//! A table-to-prefix mapping becomes one validator per table, either at
//! runtime with [`IdSchemaSet`](validators::IdSchemaSet) or as a typed struct
//! with the [`id_schemas!`] macro.
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.

// ValidationError is the error type of every validator; boxing it would add
// an allocation to every failed call.
#![allow(clippy::result_large_err)]
// Combinator chains (Pipe<Trim, WithMessage<MinLength>>, ...) produce nested types.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
pub mod json;
mod macros;
pub mod parse;
pub mod prelude;
pub mod validators;
