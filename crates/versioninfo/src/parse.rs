//! ---
//! vi_section: "01-core-functionality"
//! vi_subsection: "module"
//! vi_type: "source"
//! vi_scope: "code"
//! vi_description: "Parsing of version strings and v-strings."
//! vi_version: "v1.0.1"
//! vi_owner: "tbd"
//! ---
use std::str::FromStr;

use tracing::trace;

use crate::error::{Result, VersionError};
use crate::field::Field;
use crate::info::VersionInfo;
use crate::release::ReleaseLevel;

/// Accepts `name==A.B.C<suffix>`, `vA.B.C<suffix>` and `A.B.C<suffix>`.
/// Missing minor and micro components read as zero.
impl FromStr for VersionInfo {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let (name, rest) = match input.split_once("==") {
            Some((name, rest)) => (Some(name.trim()), rest.trim()),
            None => (None, strip_v(input)),
        };

        let split = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        let (numbers, suffix) = rest.split_at(split);
        let [major, minor, micro] = parse_numbers(input, numbers)?;
        let (releaselevel, serial) = parse_suffix(input, suffix)?;

        let info = VersionInfo::from_parts(
            name.map(str::to_owned),
            major,
            minor,
            micro,
            releaselevel,
            serial,
        )?;
        trace!(input = %input, parsed = ?info, "parsed version");
        Ok(info)
    }
}

fn strip_v(input: &str) -> &str {
    match input.strip_prefix(['v', 'V']) {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest,
        _ => input,
    }
}

fn parse_numbers(input: &str, numbers: &str) -> Result<[u64; 3]> {
    if numbers.is_empty() {
        return Err(VersionError::malformed(input, "missing major version"));
    }
    let mut parsed = [0u64; 3];
    let fields = [Field::Major, Field::Minor, Field::Micro];
    let mut parts = numbers.split('.');
    for (slot, field) in parsed.iter_mut().zip(fields) {
        let Some(part) = parts.next() else { break };
        *slot = parse_integer(input, field, part)?;
    }
    if parts.next().is_some() {
        return Err(VersionError::malformed(
            input,
            "expected at most three numeric components",
        ));
    }
    Ok(parsed)
}

fn parse_suffix(input: &str, suffix: &str) -> Result<(ReleaseLevel, u64)> {
    if suffix.is_empty() {
        return Ok((ReleaseLevel::Final, 0));
    }
    let split = suffix
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(suffix.len());
    let (letters, digits) = suffix.split_at(split);
    let level = ReleaseLevel::from_suffix(letters)
        .ok_or_else(|| VersionError::malformed(input, "unknown release suffix"))?;
    if digits.is_empty() {
        return Ok((level, 0));
    }
    Ok((level, parse_integer(input, Field::Serial, digits)?))
}

fn parse_integer(input: &str, field: Field, part: &str) -> Result<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::malformed(input, "empty or non-numeric component"));
    }
    part.parse().map_err(|_| VersionError::InvalidNumber {
        field,
        value: part.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_version_strings() {
        let info: VersionInfo = "pkg==1.2.3".parse().unwrap();
        assert_eq!(info, VersionInfo::named("pkg", 1, 2, 3).unwrap());

        let beta: VersionInfo = "pkg==1.0.0b4".parse().unwrap();
        assert_eq!(beta.releaselevel(), ReleaseLevel::Beta);
        assert_eq!(beta.serial(), 4);
    }

    #[test]
    fn parses_vstrings_and_bare_numbers() {
        let rc: VersionInfo = "v2.1.0rc".parse().unwrap();
        assert_eq!(rc.name(), None);
        assert_eq!(rc.releaselevel(), ReleaseLevel::Release);
        assert_eq!(rc.serial(), 0);

        let short: VersionInfo = "V7".parse().unwrap();
        assert_eq!(short.to_vstring(), "v7.0.0");

        let bare: VersionInfo = "0.3a12".parse().unwrap();
        assert_eq!(bare.to_version_string(), "0.3.0a12");
    }

    #[test]
    fn renderings_parse_back() {
        let info = VersionInfo::named("tool", 3, 14, 15)
            .unwrap()
            .with_releaselevel(ReleaseLevel::Alpha, 9);
        let from_version_string: VersionInfo = info.to_version_string().parse().unwrap();
        assert_eq!(from_version_string, info);
        let from_vstring: VersionInfo = info.to_vstring().parse().unwrap();
        assert_eq!(from_vstring, info.without_name());

        for name in ["a=b", "=a", "my pkg", "v1", "1.2", "rc"] {
            let named = info.with_name(name).unwrap();
            let parsed: VersionInfo = named.to_version_string().parse().unwrap();
            assert_eq!(parsed, named, "{name:?}");
        }
    }

    #[test]
    fn names_that_cannot_round_trip_are_refused_up_front() {
        let info = VersionInfo::new(1).with_releaselevel(ReleaseLevel::Beta, 2);
        for name in ["a==b", "a=", " pkg", "pkg "] {
            assert!(
                matches!(info.with_name(name), Err(VersionError::InvalidName { .. })),
                "{name:?}"
            );
        }
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "pkg==", "v", "1.2.3.4", "1..2", "1.2.3x", "1.2.3rc1x", "version"] {
            let err = bad.parse::<VersionInfo>().unwrap_err();
            assert!(
                matches!(err, VersionError::Malformed { .. }),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(
            "==1.0.0".parse::<VersionInfo>(),
            Err(VersionError::EmptyName)
        );
    }

    #[test]
    fn overflowing_component_is_reported() {
        let err = "1.99999999999999999999999".parse::<VersionInfo>().unwrap_err();
        assert!(matches!(
            err,
            VersionError::InvalidNumber {
                field: Field::Minor,
                ..
            }
        ));
    }
}
