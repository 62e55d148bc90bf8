//! ---
//! vi_section: "01-core-functionality"
//! vi_subsection: "module"
//! vi_type: "source"
//! vi_scope: "code"
//! vi_description: "Field names and dynamically typed field values."
//! vi_version: "v1.0.1"
//! vi_owner: "tbd"
//! ---
use std::fmt;
use std::str::FromStr;

use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::error::VersionError;
use crate::release::ReleaseLevel;

/// The six fields of a [`crate::VersionInfo`], in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    /// `name`
    Name,
    /// `major`
    Major,
    /// `minor`
    Minor,
    /// `micro`
    Micro,
    /// `releaselevel`
    Releaselevel,
    /// `serial`
    Serial,
}

impl Field {
    /// Human readable kind of value the field holds.
    #[must_use]
    pub fn expected(&self) -> &'static str {
        match self {
            Field::Name => "text",
            Field::Major | Field::Minor | Field::Micro | Field::Serial => "integer",
            Field::Releaselevel => "release level",
        }
    }
}

impl FromStr for Field {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::iter()
            .find(|field| field.as_ref() == s)
            .ok_or_else(|| VersionError::UnknownField(s.to_owned()))
    }
}

/// Value of a single field, as returned by index-style lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// The name; `None` when the version is unnamed.
    Text(Option<String>),
    /// A numeric component or the serial.
    Integer(u64),
    /// The release level.
    Level(ReleaseLevel),
}

impl FieldValue {
    /// Kind name used in type error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Integer(_) => "integer",
            FieldValue::Level(_) => "release level",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(Some(text)) => f.write_str(text),
            FieldValue::Text(None) => Ok(()),
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Level(level) => write!(f, "{level}"),
        }
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<ReleaseLevel> for FieldValue {
    fn from(value: ReleaseLevel) -> Self {
        FieldValue::Level(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(Some(value.to_owned()))
    }
}
