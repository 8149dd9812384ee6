//! Coercing validators
//!
//! Database drivers and spreadsheet-style form fields hand over numbers in
//! whatever shape they have: JSON numbers, numeric strings, strings with
//! thousands separators. These validators turn them into one canonical form.

use crate::combinators::Refine;
use crate::foundation::{Validate, ValidateExt, ValidationError};
use crate::json::value_kind;
use crate::validators::{is_js_whitespace, trim_js};

// ============================================================================
// BIGINT
// ============================================================================

/// Coerces a JSON integer, integral float or integer string to `i128`.
///
/// Strings are trimmed first. An empty string is zero. Besides plain decimal
/// (with an optional sign), `0x`, `0o` and `0b` radix prefixes are accepted.
/// Fractions, `null` and other JSON kinds fail with
/// `Expected bigint, received <kind>`.
///
/// ```
/// use serde_json::json;
/// use sift_validator::prelude::*;
///
/// assert_eq!(coerce_bigint().validate(&json!("12345678901234567890")).unwrap(), 12345678901234567890);
/// assert_eq!(coerce_bigint().validate(&json!(42)).unwrap(), 42);
/// assert_eq!(coerce_bigint().validate(&json!("")).unwrap(), 0);
/// assert!(coerce_bigint().validate(&json!("123.456")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CoerceBigint;

impl Validate for CoerceBigint {
    type Input = serde_json::Value;
    type Output = i128;

    fn validate(&self, input: &serde_json::Value) -> Result<i128, ValidationError> {
        let parsed = match input {
            serde_json::Value::Number(n) => number_to_i128(n),
            serde_json::Value::String(s) => parse_bigint(s),
            _ => None,
        };
        parsed.ok_or_else(|| ValidationError::type_mismatch("bigint", value_kind(input)))
    }
}

#[must_use]
pub const fn coerce_bigint() -> CoerceBigint {
    CoerceBigint
}

#[allow(clippy::cast_possible_truncation)]
fn number_to_i128(n: &serde_json::Number) -> Option<i128> {
    if let Some(i) = n.as_i64() {
        return Some(i128::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(i128::from(u));
    }

    // 2^127 is exactly representable, so this bound is exact.
    const LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;
    let f = n.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) {
        Some(f as i128)
    } else {
        None
    }
}

/// Parses an integer string the way `BigInt(string)` does.
///
/// Returns `None` for anything that is not a complete integer literal.
#[must_use]
pub fn parse_bigint(input: &str) -> Option<i128> {
    let s = trim_js(input);
    if s.is_empty() {
        return Some(0);
    }

    let (radix, body, negative) = match s.as_bytes() {
        [b'0', b'x' | b'X', ..] => (16, &s[2..], false),
        [b'0', b'o' | b'O', ..] => (8, &s[2..], false),
        [b'0', b'b' | b'B', ..] => (2, &s[2..], false),
        [b'-', ..] => (10, &s[1..], true),
        [b'+', ..] => (10, &s[1..], false),
        _ => (10, s, false),
    };

    // from_str_radix would accept a second sign
    if body.is_empty() || !body.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = u128::from_str_radix(body, radix).ok()?;
    if negative {
        0_i128.checked_sub_unsigned(magnitude)
    } else {
        i128::try_from(magnitude).ok()
    }
}

// ============================================================================
// NUMBER
// ============================================================================

/// Normalizes a numeric string; unparseable input becomes `None`.
///
/// Commas are removed, then the longest leading decimal literal is read
/// (`"12px"` is `12`, `"1,234.50"` is `1234.5`). The result is rendered in
/// the shortest form that reads back as the same number, switching to
/// exponent notation below `1e-6` and from `1e21` on.
///
/// ```
/// use sift_validator::prelude::*;
///
/// assert_eq!(coerce_number().validate("1,234.50").unwrap(), Some("1234.5".to_owned()));
/// assert_eq!(coerce_number().validate("abc").unwrap(), None);
/// assert_eq!(coerce_number().validate("").unwrap(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CoerceNumber;

impl Validate for CoerceNumber {
    type Input = str;
    type Output = Option<String>;

    fn validate(&self, input: &str) -> Result<Option<String>, ValidationError> {
        if input.is_empty() {
            return Ok(None);
        }

        let without_separators = input.replace(',', "");
        Ok(parse_float_prefix(&without_separators)
            .filter(|n| !n.is_nan())
            .map(format_number))
    }
}

#[must_use]
pub const fn coerce_number() -> CoerceNumber {
    CoerceNumber
}

pub type CoerceNumberValid = Refine<CoerceNumber, fn(&Option<String>) -> bool>;

/// Like [`coerce_number`], but unparseable input fails with `Invalid number`.
#[must_use]
pub fn coerce_number_valid() -> CoerceNumberValid {
    coerce_number().refine(Option::is_some as fn(&Option<String>) -> bool, "Invalid number")
}

/// Reads the longest leading decimal literal, skipping leading whitespace.
///
/// Accepts an optional sign, `Infinity`, digits with an optional fraction
/// and an optional exponent. Returns `None` when no digits are found.
#[must_use]
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start_matches(is_js_whitespace);
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let scan_digits = |from: usize| {
        from + bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_end = scan_digits(end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = scan_digits(end + 1);
        let frac_digits = frac_end - (end + 1);
        if digits > 0 || frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = scan_digits(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Renders a number the way a browser's `String(number)` does.
///
/// `-0` is `"0"`, infinities are `"Infinity"`/`"-Infinity"`, magnitudes in
/// `[1e-6, 1e21)` use plain decimal, everything else uses `d.ddde±x`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n == 0.0 {
        return "0".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }

    let rendered = format!("{n:e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered,
    }
}

// ============================================================================
// TESTS
// ============================================================================
