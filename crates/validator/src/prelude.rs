//! Prelude module for convenient imports.
//!
//! Provides a single `use sift_validator::prelude::*;` import that brings
//! in the traits, error types, validators, combinators and parse entry points.
//!
//! # Examples
//!
//! ```
//! use sift_validator::prelude::*;
//!
//! let display_name = nullish_string(non_empty_string().pipe(max_length(40)));
//! let order_id = prefixed_id("ord");
//!
//! assert_eq!(display_name.validate(&Nullish::Null).unwrap(), None);
//! assert!(order_id.validate("ord_9").is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    Nullish, Validate, ValidateExt, ValidationError, ValidationErrors, ValidationResult,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, Catch, Each, Map, Or, OrAny, Pipe, Refine, WithMessage, and, each, each_fail_fast, map,
    or, or_any, pipe, with_code, with_message,
};

// ============================================================================
// PARSING: Entry points
// ============================================================================

pub use crate::parse::{
    ParseArrayError, SafeParseResult, parse_array, parse_input, safe_parse_input,
};
