//! Table-keyed identifier validators
//!
//! A [`PrefixMapping`] names the prefix used by each table's IDs; an
//! [`IdSchemaSet`] holds one ready-made [`PrefixedString`] per table.
//!
//! # Examples
//!
//! ```
//! use sift_validator::prelude::*;
//!
//! let mapping = PrefixMapping::from_json_str(r#"{"accounts": "acc", "users": "usr"}"#)?;
//! let ids = IdSchemaSet::new(mapping);
//!
//! assert!(ids["users"].validate("usr_123").is_ok());
//! assert_eq!(
//!     ids.validate("users", "acc_123").unwrap_err().message,
//!     r#"Users ID must start with the prefix "usr_"."#
//! );
//! # Ok::<(), sift_validator::validators::MappingError>(())
//! ```

use std::collections::BTreeMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};
use crate::validators::PrefixedString;

// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised while building or loading a [`PrefixMapping`].
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("prefix for table `{table}` is empty")]
    EmptyPrefix { table: String },

    #[error("prefix `{prefix}` for table `{table}` contains the `_` separator")]
    SeparatorInPrefix { table: String, prefix: String },

    #[error("invalid prefix mapping document: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// PREFIX MAPPING
// ============================================================================

/// Table name to ID prefix.
///
/// Serializes as a flat JSON object, `{"users": "usr"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixMapping(BTreeMap<String, String>);

impl PrefixMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a mapping from a JSON object and checks it.
    pub fn from_json_str(json: &str) -> Result<Self, MappingError> {
        let mapping: Self = serde_json::from_str(json)?;
        mapping.check()?;
        Ok(mapping)
    }

    pub fn insert(&mut self, table: impl Into<String>, prefix: impl Into<String>) -> Option<String> {
        self.0.insert(table.into(), prefix.into())
    }

    #[must_use]
    pub fn get(&self, table: &str) -> Option<&str> {
        self.0.get(table).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(t, p)| (t.as_str(), p.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks that every prefix is non-empty and free of `_`.
    ///
    /// Prefixes that are themselves prefixes of one another (`us` and `usr`)
    /// are allowed; the separator keeps `us_1` and `usr_1` apart.
    pub fn check(&self) -> Result<(), MappingError> {
        for (table, prefix) in &self.0 {
            if prefix.is_empty() {
                return Err(MappingError::EmptyPrefix {
                    table: table.clone(),
                });
            }
            if prefix.contains('_') {
                return Err(MappingError::SeparatorInPrefix {
                    table: table.clone(),
                    prefix: prefix.clone(),
                });
            }
        }
        Ok(())
    }
}

impl<T, P> FromIterator<(T, P)> for PrefixMapping
where
    T: Into<String>,
    P: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(t, p)| (t.into(), p.into()))
                .collect(),
        )
    }
}

// ============================================================================
// ID SCHEMA SET
// ============================================================================

/// One [`PrefixedString`] per table, labelled `"{table} ID"`.
///
/// Built once and read-only afterwards; share it behind an `Arc` or a
/// `static` and validate from any thread.
#[derive(Debug, Clone, Default)]
pub struct IdSchemaSet {
    schemas: BTreeMap<String, PrefixedString>,
}

impl IdSchemaSet {
    /// Builds a validator for every table in `mapping`.
    ///
    /// The mapping is taken as given. Use [`try_new`](Self::try_new) to reject
    /// empty prefixes or prefixes containing `_`.
    #[must_use]
    pub fn new(mapping: PrefixMapping) -> Self {
        let schemas: BTreeMap<_, _> = mapping
            .0
            .into_iter()
            .map(|(table, prefix)| {
                let label = format!("{table} ID");
                (table, PrefixedString::new(prefix).with_label(label))
            })
            .collect();

        tracing::debug!(tables = schemas.len(), "built id schema set");
        Self { schemas }
    }

    /// Checks the mapping, then builds the set.
    pub fn try_new(mapping: PrefixMapping) -> Result<Self, MappingError> {
        mapping.check()?;
        Ok(Self::new(mapping))
    }

    #[must_use]
    pub fn get(&self, table: &str) -> Option<&PrefixedString> {
        self.schemas.get(table)
    }

    /// Validates `input` as an ID of `table`.
    ///
    /// An unknown table is reported as a validation error with code
    /// `unknown_table`.
    pub fn validate(&self, table: &str, input: &str) -> Result<String, ValidationError> {
        match self.schemas.get(table) {
            Some(schema) => schema.validate(input),
            None => Err(
                ValidationError::new("unknown_table", format!("Unknown table \"{table}\""))
                    .with_param("table", table.to_owned()),
            ),
        }
    }

    /// Table names, in sorted order.
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PrefixedString)> {
        self.schemas.iter().map(|(t, s)| (t.as_str(), s))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl Index<&str> for IdSchemaSet {
    type Output = PrefixedString;

    /// # Panics
    ///
    /// Panics if `table` is not part of the set.
    fn index(&self, table: &str) -> &PrefixedString {
        match self.schemas.get(table) {
            Some(schema) => schema,
            None => panic!("no id schema for table `{table}`"),
        }
    }
}

impl From<PrefixMapping> for IdSchemaSet {
    fn from(mapping: PrefixMapping) -> Self {
        Self::new(mapping)
    }
}

// ============================================================================
// TESTS
// ============================================================================
