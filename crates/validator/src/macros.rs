//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`] — Create a check validator (struct + Validate impl + factory fn)
//! - [`compose!`] — AND-chain multiple validators
//! - [`any_of!`] — OR-chain multiple validators
//! - [`id_schemas!`] — Declare a struct holding one prefixed-ID validator per table
//!
//! # Examples
//!
//! ```
//! use sift_validator::validator;
//! use sift_validator::foundation::{Validate, ValidationError};
//!
//! validator! {
//!     pub NoSpaces for str;
//!     rule(input) { !input.contains(' ') }
//!     error(input) { ValidationError::new("no_spaces", "must not contain spaces") }
//!     fn no_spaces();
//! }
//!
//! assert_eq!(no_spaces().validate("abc").unwrap(), "abc");
//! assert!(no_spaces().validate("a b").is_err());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a check validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// A check never transforms its input: on success it returns an owned copy
/// (`Output = <Input as ToOwned>::Owned`, so `String` for `str`).
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub NotEmpty for str;
///     rule(input) { !input.is_empty() }
///     error(input) { ValidationError::new("not_empty", "empty") }
///     fn not_empty();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MinLength { min: usize } for str;
///     rule(self, input) { input.chars().count() >= self.min }
///     error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     pub StartsWith { prefix: String } for str;
///     rule(self, input) { input.starts_with(&self.prefix) }
///     error(self, input) { ValidationError::new("starts_with", "bad prefix") }
///     new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
///     fn starts_with(prefix: impl Into<String>);
/// }
/// ```
///
/// **Fallible constructor** (`new` returns `Result<Self, E>`):
/// ```rust,ignore
/// validator! {
///     pub MatchesRegex { pattern: Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     error(self, input) { ValidationError::invalid_format("regex") }
///     new(pattern: &str) -> regex::Error { Ok(Self { pattern: Regex::new(pattern)? }) }
///     fn matches_regex(pattern: &str) -> regex::Error;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Shared Validate impl for struct validators ───────────────────────
    (@impl $name:ident, $input:ty, $self_:ident, $inp:ident, $rule:block, $self2:ident, $einp:ident, $err:block) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;
            type Output = <$input as ::std::borrow::ToOwned>::Owned;

            #[allow(unused_variables)]
            fn validate(
                &$self_,
                $inp: &Self::Input,
            ) -> ::std::result::Result<Self::Output, $crate::foundation::ValidationError> {
                if $rule {
                    Ok(::std::borrow::ToOwned::to_owned($inp))
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Unit validator (no fields) + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator (no fields), no factory ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;
            type Output = <$input as ::std::borrow::ToOwned>::Owned;

            #[allow(unused_variables)]
            fn validate(
                &self,
                $inp: &Self::Input,
            ) -> ::std::result::Result<Self::Output, $crate::foundation::ValidationError> {
                if $rule {
                    Ok(::std::borrow::ToOwned::to_owned($inp))
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + custom new, no factory ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $self2, $einp, $err);
    };

    // ── Struct with fields + fallible new + fallible factory ─────────────
    //
    // The type after `->` is the error type; the macro wraps it in Result.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $self2, $einp, $err);

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new, no factory ────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $self2, $einp, $err);
    };

}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes multiple validators using AND logic.
///
/// ```rust,ignore
/// let validator = compose![not_empty(), min_length(5), max_length(20)];
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// Composes multiple validators using OR logic.
///
/// ```rust,ignore
/// let validator = any_of![prefixed_id("usr"), prefixed_id("org")];
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.or($rest))+
    };
}

// ============================================================================
// ID SCHEMAS MACRO
// ============================================================================

/// Declares a struct with one [`PrefixedString`](crate::validators::PrefixedString)
/// field per table.
///
/// This is the compile-time counterpart of
/// [`IdSchemaSet`](crate::validators::IdSchemaSet): a missing table is a
/// compile error rather than a `None` lookup. Every field is labelled
/// `"{table} ID"`.
///
/// ```
/// use sift_validator::id_schemas;
/// use sift_validator::foundation::Validate;
///
/// id_schemas! {
///     pub struct Ids {
///         user => "usr",
///         organization => "org",
///     }
/// }
///
/// let ids = Ids::new();
/// assert!(ids.user.validate("usr_123").is_ok());
///
/// let error = ids.organization.validate("usr_123").unwrap_err();
/// assert_eq!(error.message, r#"Organization ID must start with the prefix "org_"."#);
/// ```
#[macro_export]
macro_rules! id_schemas {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($table:ident => $prefix:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $table: $crate::validators::PrefixedString,)+
        }

        impl $name {
            #[must_use]
            pub fn new() -> Self {
                Self {
                    $($table: $crate::validators::PrefixedString::new($prefix)
                        .with_label(concat!(stringify!($table), " ID")),)+
                }
            }

            /// The table to prefix mapping these validators were built from.
            #[must_use]
            pub fn mapping() -> $crate::validators::PrefixMapping {
                [$((stringify!($table), $prefix)),+].into_iter().collect()
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================
