//! ---
//! vi_section: "01-core-functionality"
//! vi_subsection: "module"
//! vi_type: "source"
//! vi_scope: "code"
//! vi_description: "Immutable version value object and its renderings."
//! vi_version: "v1.0.1"
//! vi_owner: "tbd"
//! ---
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, VersionError};
use crate::field::{Field, FieldValue};
use crate::release::ReleaseLevel;

/// Ordered projection returned by [`VersionInfo::to_tuple`].
pub type VersionTuple<'a> = (Option<&'a str>, u64, u64, u64, ReleaseLevel, u64);

fn default_releaselevel() -> String {
    ReleaseLevel::Final.to_string()
}

/// Mapping projection of a [`VersionInfo`], with the release level as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfoDict {
    /// Artifact name; `null` when unnamed.
    #[serde(default)]
    pub name: Option<String>,
    /// Major component.
    pub major: u64,
    /// Minor component, default 0.
    #[serde(default)]
    pub minor: u64,
    /// Micro component, default 0.
    #[serde(default)]
    pub micro: u64,
    /// One of `alpha`, `beta`, `release`, `final`.
    #[serde(default = "default_releaselevel")]
    pub releaselevel: String,
    /// Pre-release serial, default 0.
    #[serde(default)]
    pub serial: u64,
}

/// A single software version: `major.minor.micro`, a release level, a serial
/// and an optional artifact name.
///
/// Values are immutable. The `with_*` methods return updated copies.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "VersionInfoDict", into = "VersionInfoDict")]
pub struct VersionInfo {
    name: Option<String>,
    major: u64,
    minor: u64,
    micro: u64,
    releaselevel: ReleaseLevel,
    serial: u64,
}

/// Names must be non-empty and render unambiguously before the `==` separator.
fn validate_name(name: String) -> Result<String> {
    if name.trim().is_empty() {
        debug!(name = %name, "rejected empty version name");
        return Err(VersionError::EmptyName);
    }
    let reason = if name.trim() != name {
        Some("has leading or trailing whitespace")
    } else if name.contains("==") {
        Some("contains '=='")
    } else if name.ends_with('=') {
        Some("ends with '='")
    } else {
        None
    };
    if let Some(reason) = reason {
        debug!(name = %name, reason, "rejected version name");
        return Err(VersionError::InvalidName { name, reason });
    }
    Ok(name)
}

impl VersionInfo {
    /// Unnamed final release `major.0.0`.
    #[must_use]
    pub fn new(major: u64) -> Self {
        Self {
            name: None,
            major,
            minor: 0,
            micro: 0,
            releaselevel: ReleaseLevel::Final,
            serial: 0,
        }
    }

    /// Named final release `major.minor.micro`.
    pub fn named(name: impl Into<String>, major: u64, minor: u64, micro: u64) -> Result<Self> {
        Ok(Self {
            name: Some(validate_name(name.into())?),
            ..Self::new(major).with_minor(minor).with_micro(micro)
        })
    }

    /// Construct a value from every field at once.
    pub fn from_parts(
        name: Option<String>,
        major: u64,
        minor: u64,
        micro: u64,
        releaselevel: ReleaseLevel,
        serial: u64,
    ) -> Result<Self> {
        let name = name.map(validate_name).transpose()?;
        Ok(Self {
            name,
            major,
            minor,
            micro,
            releaselevel,
            serial,
        })
    }

    /// Rebuild a value from its [`VersionInfo::to_dict`] projection.
    pub fn from_dict(dict: VersionInfoDict) -> Result<Self> {
        Self::try_from(dict)
    }

    /// Artifact name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Major component.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// Minor component.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Micro component.
    pub fn micro(&self) -> u64 {
        self.micro
    }

    /// Release level.
    pub fn releaselevel(&self) -> ReleaseLevel {
        self.releaselevel
    }

    /// Pre-release serial; zero when absent.
    pub fn serial(&self) -> u64 {
        self.serial
    }

    /// Copy with a new artifact name. Empty names, names with surrounding
    /// whitespace, and names containing `==` or ending in `=` are rejected.
    pub fn with_name(&self, name: impl Into<String>) -> Result<Self> {
        let name = validate_name(name.into())?;
        Ok(Self {
            name: Some(name),
            ..self.clone()
        })
    }

    /// Copy without an artifact name.
    #[must_use]
    pub fn without_name(&self) -> Self {
        Self {
            name: None,
            ..self.clone()
        }
    }

    /// Copy with a new major component.
    #[must_use]
    pub fn with_major(&self, major: u64) -> Self {
        Self {
            major,
            ..self.clone()
        }
    }

    /// Copy with a new minor component.
    #[must_use]
    pub fn with_minor(&self, minor: u64) -> Self {
        Self {
            minor,
            ..self.clone()
        }
    }

    /// Copy with a new micro component.
    #[must_use]
    pub fn with_micro(&self, micro: u64) -> Self {
        Self {
            micro,
            ..self.clone()
        }
    }

    /// Copy with a new release level and serial.
    #[must_use]
    pub fn with_releaselevel(&self, releaselevel: ReleaseLevel, serial: u64) -> Self {
        Self {
            releaselevel,
            serial,
            ..self.clone()
        }
    }

    /// Copy with a new serial, keeping the release level.
    #[must_use]
    pub fn with_serial(&self, serial: u64) -> Self {
        Self {
            serial,
            ..self.clone()
        }
    }

    /// Index-style lookup by field name.
    pub fn get(&self, field: &str) -> Result<FieldValue> {
        Ok(self.field(field.parse()?))
    }

    /// Value of `field`.
    #[must_use]
    pub fn field(&self, field: Field) -> FieldValue {
        match field {
            Field::Name => FieldValue::Text(self.name.clone()),
            Field::Major => FieldValue::Integer(self.major),
            Field::Minor => FieldValue::Integer(self.minor),
            Field::Micro => FieldValue::Integer(self.micro),
            Field::Releaselevel => FieldValue::Level(self.releaselevel),
            Field::Serial => FieldValue::Integer(self.serial),
        }
    }

    /// Copy with one field, addressed by name, replaced.
    ///
    /// The release level also accepts its text form. Replacing the release
    /// level keeps the current serial.
    pub fn replace(&self, field: &str, value: FieldValue) -> Result<Self> {
        let field: Field = field.parse()?;
        match (field, value) {
            (Field::Name, FieldValue::Text(Some(name))) => self.with_name(name),
            (Field::Name, FieldValue::Text(None)) => Ok(self.without_name()),
            (Field::Major, FieldValue::Integer(major)) => Ok(self.with_major(major)),
            (Field::Minor, FieldValue::Integer(minor)) => Ok(self.with_minor(minor)),
            (Field::Micro, FieldValue::Integer(micro)) => Ok(self.with_micro(micro)),
            (Field::Serial, FieldValue::Integer(serial)) => Ok(self.with_serial(serial)),
            (Field::Releaselevel, FieldValue::Level(level)) => {
                Ok(self.with_releaselevel(level, self.serial))
            }
            (Field::Releaselevel, FieldValue::Text(Some(text))) => {
                Ok(self.with_releaselevel(text.parse()?, self.serial))
            }
            (field, other) => Err(VersionError::InvalidType {
                field,
                expected: field.expected(),
                found: other.kind(),
            }),
        }
    }

    /// Mapping projection with the release level as text.
    #[must_use]
    pub fn to_dict(&self) -> VersionInfoDict {
        VersionInfoDict {
            name: self.name.clone(),
            major: self.major,
            minor: self.minor,
            micro: self.micro,
            releaselevel: self.releaselevel.to_string(),
            serial: self.serial,
        }
    }

    /// The six fields in order: name, major, minor, micro, level, serial.
    #[must_use]
    pub fn to_tuple(&self) -> VersionTuple<'_> {
        (
            self.name(),
            self.major,
            self.minor,
            self.micro,
            self.releaselevel,
            self.serial,
        )
    }

    /// `name==A.B.C<suffix>`, or just `A.B.C<suffix>` when unnamed.
    #[must_use]
    pub fn to_version_string(&self) -> String {
        match &self.name {
            Some(name) => format!("{name}=={}", self.numbers()),
            None => self.numbers().to_string(),
        }
    }

    /// `vA.B.C<suffix>`.
    #[must_use]
    pub fn to_vstring(&self) -> String {
        format!("v{}", self.numbers())
    }

    fn numbers(&self) -> Numbers<'_> {
        Numbers(self)
    }
}

/// `A.B.C` followed by the release suffix. The suffix letter is written for
/// every pre-release level; the serial digits only when non-zero.
struct Numbers<'a>(&'a VersionInfo);

impl fmt::Display for Numbers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        write!(f, "{}.{}.{}", v.major, v.minor, v.micro)?;
        if let Some(letter) = v.releaselevel.suffix() {
            f.write_str(letter)?;
            if v.serial != 0 {
                write!(f, "{}", v.serial)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name}==")?;
        }
        write!(f, "{}", self.numbers())
    }
}

impl fmt::Debug for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VersionInfo(")?;
        if let Some(name) = &self.name {
            write!(f, "name='{name}', ")?;
        }
        write!(
            f,
            "major={}, minor={}, micro={}",
            self.major, self.minor, self.micro
        )?;
        if !self.releaselevel.is_final() {
            write!(f, ", releaselevel={}", self.releaselevel)?;
        }
        if self.serial != 0 {
            write!(f, ", serial={}", self.serial)?;
        }
        f.write_str(")")
    }
}

impl TryFrom<VersionInfoDict> for VersionInfo {
    type Error = VersionError;

    fn try_from(dict: VersionInfoDict) -> Result<Self> {
        let releaselevel = dict.releaselevel.parse()?;
        Self::from_parts(
            dict.name,
            dict.major,
            dict.minor,
            dict.micro,
            releaselevel,
            dict.serial,
        )
    }
}

impl From<VersionInfo> for VersionInfoDict {
    fn from(info: VersionInfo) -> Self {
        info.to_dict()
    }
}
