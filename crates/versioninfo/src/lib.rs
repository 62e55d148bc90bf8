//! ---
//! vi_section: "01-core-functionality"
//! vi_subsection: "module"
//! vi_type: "source"
//! vi_scope: "code"
//! vi_description: "Version value object and rendering helpers."
//! vi_version: "v1.0.1"
//! vi_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Immutable version metadata: `major.minor.micro`, a [`ReleaseLevel`], a
//! serial and an optional artifact name, rendered as `name==1.2.3b4` or
//! `v1.2.3b4`.
//!
//! ```
//! use versioninfo::{ReleaseLevel, VersionInfo};
//!
//! let info = VersionInfo::named("pkg", 1, 0, 0)?.with_releaselevel(ReleaseLevel::Beta, 4);
//! assert_eq!(info.to_version_string(), "pkg==1.0.0b4");
//! assert_eq!(info.to_vstring(), "v1.0.0b4");
//! # Ok::<(), versioninfo::VersionError>(())
//! ```

pub mod error;
pub mod field;
pub mod info;
mod parse;
pub mod release;

pub use error::{ErrorKind, Result, VersionError};
pub use field::{Field, FieldValue};
pub use info::{VersionInfo, VersionInfoDict, VersionTuple};
pub use release::ReleaseLevel;

/// Version of this crate as written in its manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The version of this crate as a [`VersionInfo`].
///
/// Pre-release tags `alpha.N`, `beta.N` and `rc.N` map onto the matching
/// release level and serial. Any other tag is treated as an alpha.
#[must_use]
pub fn current() -> VersionInfo {
    let (releaselevel, serial) = prerelease(env!("CARGO_PKG_VERSION_PRE"));
    VersionInfo::new(component(env!("CARGO_PKG_VERSION_MAJOR")))
        .with_minor(component(env!("CARGO_PKG_VERSION_MINOR")))
        .with_micro(component(env!("CARGO_PKG_VERSION_PATCH")))
        .with_releaselevel(releaselevel, serial)
        .with_name(env!("CARGO_PKG_NAME"))
        .unwrap_or_else(|_| VersionInfo::new(0))
}

fn component(raw: &str) -> u64 {
    raw.parse().unwrap_or_default()
}

fn prerelease(tag: &str) -> (ReleaseLevel, u64) {
    if tag.is_empty() {
        return (ReleaseLevel::Final, 0);
    }
    let split = tag
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(tag.len());
    let (label, rest) = tag.split_at(split);
    let level = match label.to_ascii_lowercase().as_str() {
        "beta" | "b" => ReleaseLevel::Beta,
        "rc" | "release" => ReleaseLevel::Release,
        _ => ReleaseLevel::Alpha,
    };
    let serial = rest
        .trim_start_matches(['.', '-'])
        .parse()
        .unwrap_or_default();
    (level, serial)
}
