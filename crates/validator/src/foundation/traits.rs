//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators must implement.

use std::borrow::{Borrow, Cow};
use std::sync::Arc;

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// A validator accepts a borrowed `Input` and either produces an owned
/// `Output` (possibly transformed, e.g. trimmed or coerced) or a structured
/// [`ValidationError`]. Validators hold no mutable state, so a single
/// instance can be shared across threads and invoked concurrently.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
/// * `Output` - The value produced on success
///
/// # Examples
///
/// ```
/// use sift_validator::foundation::{Validate, ValidationError};
///
/// struct Upper;
///
/// impl Validate for Upper {
///     type Input = str;
///     type Output = String;
///
///     fn validate(&self, input: &str) -> Result<String, ValidationError> {
///         if input.is_empty() {
///             return Err(ValidationError::custom("empty"));
///         }
///         Ok(input.to_uppercase())
///     }
/// }
///
/// assert_eq!(Upper.validate("abc").unwrap(), "ABC");
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// The type produced by a successful validation.
    type Output;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(output)` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;
    type Output = V::Output;

    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;
    type Output = V::Output;

    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;
    type Output = V::Output;

    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// This trait is automatically implemented for all types that implement
/// `Validate`, providing a fluent API for composing validators.
///
/// # Examples
///
/// ```
/// use sift_validator::prelude::*;
///
/// let shout = trim()
///     .pipe(min_length(1))
///     .transform(|s| s.to_uppercase());
///
/// assert_eq!(shout.validate("  hi ").unwrap(), "HI");
/// assert!(shout.validate("   ").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Runs both validators on the same input; both must pass.
    ///
    /// The output of `other` is returned. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Tries `self`, then `other`; the first success wins.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input, Output = Self::Output>,
    {
        Or::new(self, other)
    }

    /// Feeds the output of `self` into `next`.
    ///
    /// This is how transforming steps (such as [`trim`](crate::validators::trim))
    /// are followed by checks that see the transformed value.
    fn pipe<V>(self, next: V) -> Pipe<Self, V>
    where
        V: Validate,
        Self::Output: Borrow<V::Input>,
    {
        Pipe::new(self, next)
    }

    /// Maps a successful output through `f`.
    fn transform<F, O>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> O,
    {
        Map::new(self, f)
    }

    /// Adds a custom predicate on the output, failing with `message` when it
    /// returns `false`.
    fn refine<F>(self, predicate: F, message: impl Into<Cow<'static, str>>) -> Refine<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Refine::new(self, predicate, message)
    }

    /// Replaces the error message on failure.
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Substitutes `fallback` for any failure.
    fn catch_with(self, fallback: Self::Output) -> Catch<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        Catch::new(self, fallback)
    }

    /// Lifts the validator to a slice of inputs, validating every element.
    fn each(self) -> Each<Self>
    where
        Self::Input: Sized,
    {
        Each::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

pub use crate::combinators::and::And;
pub use crate::combinators::catch::Catch;
pub use crate::combinators::each::Each;
pub use crate::combinators::map::Map;
pub use crate::combinators::message::WithMessage;
pub use crate::combinators::or::Or;
pub use crate::combinators::pipe::Pipe;
pub use crate::combinators::refine::Refine;

// ============================================================================
// TESTS
// ============================================================================
