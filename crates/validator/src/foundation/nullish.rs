//! Three-state input for optional fields.
//!
//! Form submissions and JSON payloads distinguish a field that is missing
//! from one that is explicitly `null`. [`Nullish`] keeps that distinction on
//! the input side so that normalizing combinators can collapse both (plus
//! blank strings) into a single `None` on the output side.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that may be absent, explicitly null, or present.
///
/// Deserializes from `null` as [`Nullish::Null`] and from any other value as
/// [`Nullish::Value`]. Combine with `#[serde(default)]` so that a missing key
/// becomes [`Nullish::Undefined`].
///
/// # Examples
///
/// ```
/// use serde::Deserialize;
/// use sift_validator::foundation::Nullish;
///
/// #[derive(Deserialize)]
/// struct Profile {
///     #[serde(default)]
///     bio: Nullish<String>,
///     #[serde(default)]
///     website: Nullish<String>,
/// }
///
/// let profile: Profile = serde_json::from_str(r#"{ "bio": null }"#).unwrap();
/// assert_eq!(profile.bio, Nullish::Null);
/// assert_eq!(profile.website, Nullish::Undefined);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Nullish<T> {
    /// The field was not provided at all.
    #[default]
    Undefined,
    /// The field was provided with an explicit null.
    Null,
    /// The field carries a value.
    Value(T),
}

impl<T> Nullish<T> {
    /// Returns `true` for [`Nullish::Undefined`] and [`Nullish::Null`].
    #[must_use]
    pub fn is_nullish(&self) -> bool {
        !matches!(self, Nullish::Value(_))
    }

    /// Borrows the contained value.
    #[must_use]
    pub fn as_ref(&self) -> Nullish<&T> {
        match self {
            Nullish::Undefined => Nullish::Undefined,
            Nullish::Null => Nullish::Null,
            Nullish::Value(value) => Nullish::Value(value),
        }
    }

    /// Returns the contained value, dropping the absent/null distinction.
    #[must_use]
    pub fn value(self) -> Option<T> {
        match self {
            Nullish::Value(value) => Some(value),
            Nullish::Undefined | Nullish::Null => None,
        }
    }
}

impl Nullish<String> {
    /// Borrows the contained string as `&str`.
    #[must_use]
    pub fn as_deref(&self) -> Nullish<&str> {
        match self {
            Nullish::Undefined => Nullish::Undefined,
            Nullish::Null => Nullish::Null,
            Nullish::Value(value) => Nullish::Value(value.as_str()),
        }
    }
}

/// `None` maps to an explicit null.
impl<T> From<Option<T>> for Nullish<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Nullish::Null, Nullish::Value)
    }
}

impl From<&str> for Nullish<String> {
    fn from(value: &str) -> Self {
        Nullish::Value(value.to_owned())
    }
}

impl From<String> for Nullish<String> {
    fn from(value: String) -> Self {
        Nullish::Value(value)
    }
}

impl<'de, T> Deserialize<'de> for Nullish<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Nullish::from)
    }
}

/// Absent and null both serialize as `null`.
impl<T> Serialize for Nullish<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Nullish::Value(value) => serializer.serialize_some(value),
            Nullish::Undefined | Nullish::Null => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(Nullish::<String>::from(None), Nullish::Null);
        assert_eq!(Nullish::from(Some(3)), Nullish::Value(3));
    }

    #[test]
    fn nullish_classification() {
        assert!(Nullish::<u8>::Undefined.is_nullish());
        assert!(Nullish::<u8>::Null.is_nullish());
        assert!(!Nullish::Value(1).is_nullish());
        assert_eq!(Nullish::from("x").as_deref(), Nullish::Value("x"));
    }

    #[test]
    fn deserializes_missing_null_and_value() {
        #[derive(Deserialize)]
        struct Form {
            #[serde(default)]
            a: Nullish<String>,
            #[serde(default)]
            b: Nullish<String>,
            #[serde(default)]
            c: Nullish<String>,
        }

        let form: Form = serde_json::from_str(r#"{ "b": null, "c": "hi" }"#).unwrap();
        assert_eq!(form.a, Nullish::Undefined);
        assert_eq!(form.b, Nullish::Null);
        assert_eq!(form.c, Nullish::Value("hi".to_owned()));
    }
}
