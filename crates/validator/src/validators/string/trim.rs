//! Whitespace trimming with the whitespace set used by web form input.
//!
//! Unicode `White_Space` minus U+0085 (NEXT LINE), plus U+FEFF (BYTE ORDER
//! MARK). Zero-width characters such as U+200B are content, not whitespace.

use crate::foundation::{Validate, ValidationError};

/// Returns `true` for characters removed by [`trim_js`].
#[inline]
#[must_use]
pub fn is_js_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        c => c.is_whitespace(),
    }
}

/// Trims leading and trailing whitespace as browsers do for form values.
#[inline]
#[must_use]
pub fn trim_js(input: &str) -> &str {
    input.trim_matches(is_js_whitespace)
}

/// Returns `true` if the string is empty after trimming.
#[inline]
#[must_use]
pub fn is_blank(input: &str) -> bool {
    input.chars().all(is_js_whitespace)
}

/// Trims the input; never fails.
///
/// Typically the first step of a [`pipe`](crate::foundation::ValidateExt::pipe)
/// chain so later checks see the trimmed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Trim;

impl Validate for Trim {
    type Input = str;
    type Output = String;

    fn validate(&self, input: &str) -> Result<String, ValidationError> {
        Ok(trim_js(input).to_owned())
    }
}

#[must_use]
pub const fn trim() -> Trim {
    Trim
}
