//! ---
//! vi_section: "01-core-functionality"
//! vi_subsection: "module"
//! vi_type: "source"
//! vi_scope: "code"
//! vi_description: "Release level enumeration and suffix letters."
//! vi_version: "v1.0.1"
//! vi_owner: "tbd"
//! ---
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::error::VersionError;

/// Qualifier telling whether a version is a pre-release or a final release.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReleaseLevel {
    /// Alpha pre-release, suffix `a`.
    Alpha,
    /// Beta pre-release, suffix `b`.
    Beta,
    /// Release candidate, suffix `rc`.
    Release,
    /// Final release, no suffix.
    #[default]
    Final,
}

impl ReleaseLevel {
    /// Letter appended after `major.minor.micro`; `None` for final releases.
    #[must_use]
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            ReleaseLevel::Alpha => Some("a"),
            ReleaseLevel::Beta => Some("b"),
            ReleaseLevel::Release => Some("rc"),
            ReleaseLevel::Final => None,
        }
    }

    /// Inverse of [`ReleaseLevel::suffix`].
    #[must_use]
    pub fn from_suffix(letters: &str) -> Option<Self> {
        ReleaseLevel::iter().find(|level| level.suffix() == Some(letters))
    }

    /// `true` for [`ReleaseLevel::Final`].
    #[must_use]
    pub fn is_final(&self) -> bool {
        matches!(self, ReleaseLevel::Final)
    }
}

impl FromStr for ReleaseLevel {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ReleaseLevel::iter()
            .find(|level| level.as_ref().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| VersionError::InvalidReleaseLevel(s.to_owned()))
    }
}
