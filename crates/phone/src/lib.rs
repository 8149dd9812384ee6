//! # sift-phone
//!
//! Phone number schema for `sift-validator`. Input is parsed with the
//! [`phonenumber`] crate, checked against its metadata and normalized to
//! E.164 (`+358401234567`).
//!
//! ```
//! use sift_phone::{country, phone_number};
//! use sift_validator::prelude::*;
//!
//! let phone = phone_number(Some(country::Id::US));
//! assert_eq!(phone.validate("908-283-9281").unwrap().as_str(), "+19082839281");
//!
//! // Compose with the nullish wrapper for optional fields.
//! let optional_phone = nullish_string(phone);
//! assert_eq!(optional_phone.validate_str("  ").unwrap(), None);
//! ```

use std::fmt;

use phonenumber::{Mode, ParseError};
use serde::{Deserialize, Deserializer, Serialize};
use sift_validator::foundation::{Validate, ValidationError};

pub use phonenumber::country;

const REQUIRED_MESSAGE: &str = "This is a required field.";
const VERIFY_MESSAGE: &str = "Please verify that your phone number is correct.";

// ============================================================================
// E164 NUMBER
// ============================================================================

/// A phone number in E.164 form: `+`, country code, national number.
///
/// Deserializing runs the string through [`PhoneNumber`] without a default
/// country, so only valid international numbers are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct E164Number(String);

impl E164Number {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for E164Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for E164Number {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for E164Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        PhoneNumber::new(None)
            .validate(&raw)
            .map_err(|error| serde::de::Error::custom(error.message))
    }
}

impl From<E164Number> for String {
    fn from(number: E164Number) -> Self {
        number.0
    }
}

// ============================================================================
// PHONE NUMBER
// ============================================================================

/// Validates a phone number and normalizes it to E.164.
///
/// Numbers written without a `+` country code are read as national numbers
/// of the default country, when one is set.
///
/// Errors:
///
/// * empty input: code `min_length`, `This is a required field.`
/// * numbers the metadata rejects, and numbers too short to parse:
///   `Please verify that your phone number is correct.`
/// * any other parse failure: the parser's own message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhoneNumber {
    default_country: Option<country::Id>,
}

impl PhoneNumber {
    #[must_use]
    pub fn new(default_country: Option<country::Id>) -> Self {
        Self { default_country }
    }

    /// Uses a region code such as `"PH"` or `"FI"` as the default country.
    ///
    /// Returns `None` for codes the metadata does not know.
    #[must_use]
    pub fn for_region(region: &str) -> Option<Self> {
        region
            .parse::<country::Id>()
            .ok()
            .map(|id| Self::new(Some(id)))
    }

    pub fn default_country(&self) -> Option<country::Id> {
        self.default_country
    }
}

impl Validate for PhoneNumber {
    type Input = str;
    type Output = E164Number;

    fn validate(&self, input: &str) -> Result<E164Number, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::new("min_length", REQUIRED_MESSAGE)
                .with_param("min", "1")
                .with_param("actual", "0"));
        }

        let number = phonenumber::parse(self.default_country, input).map_err(|error| {
            tracing::debug!(
                country = ?self.default_country,
                error = %error,
                "phone number failed to parse"
            );
            match error {
                ParseError::TooShortNsn | ParseError::TooShortAfterIdd => {
                    ValidationError::custom(VERIFY_MESSAGE)
                }
                other => ValidationError::custom(other.to_string()),
            }
        })?;

        if !phonenumber::is_valid(&number) {
            tracing::debug!(country = ?self.default_country, "phone number rejected by metadata");
            return Err(ValidationError::custom(VERIFY_MESSAGE));
        }

        Ok(E164Number(number.format().mode(Mode::E164).to_string()))
    }
}

/// Creates a [`PhoneNumber`] validator with an optional default country.
#[must_use]
pub fn phone_number(default_country: Option<country::Id>) -> PhoneNumber {
    PhoneNumber::new(default_country)
}

/// A [`PhoneNumber`] validator for the Philippines.
#[must_use]
pub fn phone_number_ph() -> PhoneNumber {
    PhoneNumber::new(Some(country::Id::PH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_e164_number_serializes_as_string() {
        let number = E164Number("+19082839281".to_owned());
        assert_eq!(serde_json::to_string(&number).unwrap(), r#""+19082839281""#);
        assert_eq!(number.to_string(), "+19082839281");
    }

    #[test]
    fn test_e164_number_deserialize_validates() {
        let number: E164Number = serde_json::from_str(r#""+1 908 283 9281""#).unwrap();
        assert_eq!(number.as_str(), "+19082839281");

        assert!(serde_json::from_str::<E164Number>(r#""not-a-phone-number""#).is_err());
        assert!(serde_json::from_str::<E164Number>(r#""""#).is_err());
    }

    #[test]
    fn test_for_region() {
        assert_eq!(
            PhoneNumber::for_region("PH").and_then(|p| p.default_country()),
            Some(country::Id::PH)
        );
        assert!(PhoneNumber::for_region("not a region").is_none());
    }

    #[test]
    fn test_empty_is_required() {
        let error = phone_number(None).validate("").unwrap_err();
        assert_eq!(error.code, "min_length");
        assert_eq!(error.message, REQUIRED_MESSAGE);
    }
}
