//! MAP combinator - transforms validation output

use crate::foundation::{Validate, ValidationError};

/// Maps the output of a successful validation through a function.
///
/// The mapper only runs when the inner validator succeeds; errors pass
/// through untouched.
///
/// # Examples
///
/// ```
/// use sift_validator::prelude::*;
///
/// let length = non_empty_string().transform(|s| s.chars().count());
/// assert_eq!(length.validate(" hello ").unwrap(), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Map<V, F> {
    pub(crate) validator: V,
    pub(crate) mapper: F,
}

impl<V, F> Map<V, F> {
    pub fn new(validator: V, mapper: F) -> Self {
        Self { validator, mapper }
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn into_parts(self) -> (V, F) {
        (self.validator, self.mapper)
    }
}

impl<V, F, O> Validate for Map<V, F>
where
    V: Validate,
    F: Fn(V::Output) -> O,
{
    type Input = V::Input;
    type Output = O;

    fn validate(&self, input: &Self::Input) -> Result<O, ValidationError> {
        self.validator.validate(input).map(&self.mapper)
    }
}

pub fn map<V, F, O>(validator: V, mapper: F) -> Map<V, F>
where
    V: Validate,
    F: Fn(V::Output) -> O,
{
    Map::new(validator, mapper)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;
    impl Validate for AlwaysValid {
        type Input = str;
        type Output = String;
        fn validate(&self, input: &str) -> Result<String, ValidationError> {
            Ok(input.to_owned())
        }
    }

    struct AlwaysFails;
    impl Validate for AlwaysFails {
        type Input = str;
        type Output = String;
        fn validate(&self, _: &str) -> Result<String, ValidationError> {
            Err(ValidationError::new("fail", "Always fails"))
        }
    }

    #[test]
    fn test_map_transforms_success() {
        let validator = Map::new(AlwaysValid, |s: String| format!("prefix_{s}"));
        assert_eq!(validator.validate("x").unwrap(), "prefix_x");
    }

    #[test]
    fn test_map_changes_output_type() {
        let validator = map(AlwaysValid, |s: String| s.len());
        assert_eq!(validator.validate("four").unwrap(), 4);
    }

    #[test]
    fn test_map_delegates_failure() {
        let validator = Map::new(AlwaysFails, |_: String| "mapped");
        assert_eq!(validator.validate("test").unwrap_err().code, "fail");
    }
}
