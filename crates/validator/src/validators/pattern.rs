//! String pattern validators
//!
//! Substring checks. For the `prefix_rest` identifier shape with its
//! user-facing messages, see [`PrefixedString`](super::PrefixedString).

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string contains a substring.
    #[derive(PartialEq, Eq, Hash)]
    pub Contains { substring: String } for str;
    rule(self, input) { input.contains(self.substring.as_str()) }
    error(self, input) {
        ValidationError::new(
            "contains",
            format!("String must contain '{}'", self.substring),
        )
        .with_param("substring", self.substring.clone())
    }
    new(substring: impl Into<String>) { Self { substring: substring.into() } }
    fn contains(substring: impl Into<String>);
}

crate::validator! {
    /// Validates that a string starts with a prefix.
    #[derive(PartialEq, Eq, Hash)]
    pub StartsWith { prefix: String } for str;
    rule(self, input) { input.starts_with(self.prefix.as_str()) }
    error(self, input) {
        ValidationError::new(
            "starts_with",
            format!("String must start with '{}'", self.prefix),
        )
        .with_param("prefix", self.prefix.clone())
    }
    new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
    fn starts_with(prefix: impl Into<String>);
}

crate::validator! {
    /// Validates that a string ends with a suffix.
    #[derive(PartialEq, Eq, Hash)]
    pub EndsWith { suffix: String } for str;
    rule(self, input) { input.ends_with(self.suffix.as_str()) }
    error(self, input) {
        ValidationError::new(
            "ends_with",
            format!("String must end with '{}'", self.suffix),
        )
        .with_param("suffix", self.suffix.clone())
    }
    new(suffix: impl Into<String>) { Self { suffix: suffix.into() } }
    fn ends_with(suffix: impl Into<String>);
}
