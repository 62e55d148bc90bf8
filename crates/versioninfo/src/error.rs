//! ---
//! vi_section: "01-core-functionality"
//! vi_subsection: "module"
//! vi_type: "source"
//! vi_scope: "code"
//! vi_description: "Error taxonomy for version construction, lookup, and parsing."
//! vi_version: "v1.0.1"
//! vi_owner: "tbd"
//! ---
use thiserror::Error;

use crate::field::Field;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VersionError>;

/// Broad category of a [`VersionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value of the wrong kind was supplied for a field.
    Type,
    /// A value of the right kind but outside the accepted domain.
    Value,
    /// A field name that does not exist.
    KeyNotFound,
}

/// Errors raised while building, updating, looking up or parsing versions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// Text that is not one of the four release levels.
    #[error("releaselevel must be one of alpha, beta, release, final (got '{0}')")]
    InvalidReleaseLevel(String),
    /// A [`crate::FieldValue`] of the wrong kind for the addressed field.
    #[error("field '{field}' expects {expected}, got {found}")]
    InvalidType {
        /// Field being replaced.
        field: Field,
        /// Kind the field holds.
        expected: &'static str,
        /// Kind that was supplied.
        found: &'static str,
    },
    /// Empty or whitespace-only name.
    #[error("name must be a non-empty string")]
    EmptyName,
    /// Name that would not survive a version-string round trip.
    #[error("name '{name}' {reason}")]
    InvalidName {
        /// Rejected name.
        name: String,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// Numeric component that does not fit a `u64`.
    #[error("field '{field}' must be a non-negative integer (got '{value}')")]
    InvalidNumber {
        /// Component being parsed.
        field: Field,
        /// Offending text.
        value: String,
    },
    /// Lookup of a field name that does not exist.
    #[error("unknown field '{0}'")]
    UnknownField(String),
    /// Text that is not a version string, v-string or bare version.
    #[error("malformed version '{input}': {reason}")]
    Malformed {
        /// Full input as given.
        input: String,
        /// First problem found.
        reason: &'static str,
    },
}

impl VersionError {
    /// Classify the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            VersionError::InvalidReleaseLevel(_) | VersionError::InvalidType { .. } => {
                ErrorKind::Type
            }
            VersionError::EmptyName
            | VersionError::InvalidName { .. }
            | VersionError::InvalidNumber { .. }
            | VersionError::Malformed { .. } => ErrorKind::Value,
            VersionError::UnknownField(_) => ErrorKind::KeyNotFound,
        }
    }

    pub(crate) fn malformed(input: &str, reason: &'static str) -> Self {
        VersionError::Malformed {
            input: input.to_owned(),
            reason,
        }
    }
}
