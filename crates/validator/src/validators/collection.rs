//! Non-empty array validators
//!
//! Multi-select fields and tag lists treat "nothing selected" as no value.
//! These validators validate every element and turn an empty list into
//! `None`, so a present value is always a [`NonEmptyVec`].

use std::ops::Deref;

use serde::Serialize;

use crate::combinators::Each;
use crate::foundation::{Validate, ValidationError};

// ============================================================================
// NON EMPTY VEC
// ============================================================================

/// A `Vec` with at least one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NonEmptyVec<T>(Vec<T>);

impl<T> NonEmptyVec<T> {
    /// Returns `None` for an empty vector.
    #[must_use]
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self(items))
        }
    }

    #[must_use]
    pub fn first(&self) -> &T {
        &self.0[0]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for NonEmptyVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(items: NonEmptyVec<T>) -> Self {
        items.0
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// REQUIRED NULLISH NON EMPTY ARRAY
// ============================================================================

/// Validates every element; an empty slice becomes `None`.
///
/// ```
/// use serde_json::json;
/// use sift_validator::prelude::*;
///
/// let ids = required_nullish_non_empty_array(coerce_bigint());
///
/// assert_eq!(ids.validate(&[]).unwrap(), None);
///
/// let some = ids.validate(&[json!("1"), json!(2)]).unwrap().unwrap();
/// assert_eq!(some.as_slice(), [1, 2]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequiredNullishNonEmptyArray<V> {
    each: Each<V>,
}

impl<V> RequiredNullishNonEmptyArray<V> {
    pub fn new(inner: V) -> Self {
        Self {
            each: Each::new(inner),
        }
    }

    pub fn inner(&self) -> &V {
        self.each.inner()
    }
}

impl<V> Validate for RequiredNullishNonEmptyArray<V>
where
    V: Validate,
    V::Input: Sized,
{
    type Input = [V::Input];
    type Output = Option<NonEmptyVec<V::Output>>;

    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        if input.is_empty() {
            return Ok(None);
        }
        self.each.validate(input).map(NonEmptyVec::new)
    }
}

pub fn required_nullish_non_empty_array<V>(inner: V) -> RequiredNullishNonEmptyArray<V>
where
    V: Validate,
    V::Input: Sized,
{
    RequiredNullishNonEmptyArray::new(inner)
}

// ============================================================================
// NULLISH NON EMPTY ARRAY
// ============================================================================

/// Like [`RequiredNullishNonEmptyArray`], but also accepts `None` input.
#[derive(Debug, Clone, Copy)]
pub struct NullishNonEmptyArray<V> {
    required: RequiredNullishNonEmptyArray<V>,
}

impl<V> Validate for NullishNonEmptyArray<V>
where
    V: Validate,
    V::Input: Sized,
{
    type Input = Option<Vec<V::Input>>;
    type Output = Option<NonEmptyVec<V::Output>>;

    fn validate(&self, input: &Self::Input) -> Result<Self::Output, ValidationError> {
        match input {
            None => Ok(None),
            Some(items) => self.required.validate(items),
        }
    }
}

pub fn nullish_non_empty_array<V>(inner: V) -> NullishNonEmptyArray<V>
where
    V: Validate,
    V::Input: Sized,
{
    NullishNonEmptyArray {
        required: RequiredNullishNonEmptyArray::new(inner),
    }
}

// ============================================================================
// TESTS
// ============================================================================
