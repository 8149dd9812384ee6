//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`, `ValidationErrors`
//! - **Input**: `Nullish` for absent / null / present fields
//!
//! # Architecture
//!
//! ## 1. Type Safety
//!
//! Validators are generic over their input and output types:
//!
//! ```rust,ignore
//! impl Validate for PrefixedString {
//!     type Input = str;      // only validates strings
//!     type Output = String;  // returns the accepted string
//!     // ...
//! }
//! ```
//!
//! ## 2. Composition
//!
//! Validators compose using combinators, and every combinator is itself a
//! validator, so nesting is unrestricted:
//!
//! ```rust,ignore
//! let bio = nullish_string(non_empty_string().pipe(max_length(100)));
//! let tags = nullish_string(non_empty_string()).each();
//! ```
//!
//! ## 3. Rich Error Information
//!
//! ```rust,ignore
//! let error = ValidationError::new("min_length", "Too short")
//!     .with_field("username")
//!     .with_param("min", "5");
//! ```

pub mod error;
pub mod nullish;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use nullish::Nullish;
pub use traits::{Validate, ValidateExt};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
