//! String length validators
//!
//! This module provides validators for checking string length constraints.
//! By default, length is measured in Unicode scalar values (chars).
//! Use the `.bytes()` constructor for byte-length counting when the input is
//! known to be ASCII.

use crate::foundation::ValidationError;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    ///
    /// Whitespace counts as content; pipe through [`trim`](crate::validators::trim)
    /// first to reject blank strings.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "String must not be empty") }
    fn not_empty();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, self.mode.measure(input)) }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Creates a minimum length validator that counts bytes.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, self.mode.measure(input)) }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Creates a maximum length validator that counts bytes.
    #[must_use]
    pub fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// EXACT LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has an exact length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) == self.length }
    error(self, input) {
        ValidationError::new(
            "exact_length",
            format!("String must be exactly {} characters", self.length),
        )
        .with_param("expected", self.length.to_string())
        .with_param("actual", self.mode.measure(input).to_string())
    }
    new(length: usize) { Self { length, mode: LengthMode::Chars } }
    fn exact_length(length: usize);
}

impl ExactLength {
    /// Creates an exact length validator that counts bytes.
    #[must_use]
    pub fn bytes(length: usize) -> Self {
        Self {
            length,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
