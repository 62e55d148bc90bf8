//! ---
//! vi_section: "15-testing-qa-runbook"
//! vi_subsection: "integration-tests"
//! vi_type: "source"
//! vi_scope: "code"
//! vi_description: "Integration and validation tests for the versioninfo workspace."
//! vi_version: "v1.0.1"
//! vi_owner: "tbd"
//! ---
use std::fs;

use versioninfo::{FieldValue, ReleaseLevel, VersionInfo};
use versioninfo_common::config::AppConfig;
use versioninfo_common::logging::{init_tracing, LogFormat};

#[test]
fn configured_version_renders_both_encodings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("versioninfo.toml");
    fs::write(
        &path,
        r#"
[logging]
format = "structured-json"
directory = "logs"

[version]
name = "versioninfo"
major = 1
micro = 1
releaselevel = "release"
serial = 2
"#,
    )
    .expect("write config");

    let config = AppConfig::from_path(&path).expect("config loads");
    assert_eq!(config.logging.format, LogFormat::StructuredJson);
    let version = config.require_version().expect("version table");
    assert_eq!(version.to_version_string(), "versioninfo==1.0.1rc2");
    assert_eq!(version.to_vstring(), "v1.0.1rc2");
}

#[test]
fn config_version_survives_toml_round_trip() {
    let config: AppConfig = "[version]\nname = \"pkg\"\nmajor = 4\nminor = 2\n"
        .parse()
        .expect("config parses");
    let version = config.require_version().expect("version").clone();
    let beta = version.with_releaselevel(ReleaseLevel::Beta, 1);

    let encoded = toml::to_string(&beta.to_dict()).expect("toml encode");
    let decoded: VersionInfo = toml::from_str(&encoded).expect("toml decode");
    assert_eq!(decoded, beta);
    assert_eq!(version.to_version_string(), "pkg==4.2.0");
}

#[test]
fn parsed_strings_support_lookup_and_replace() {
    let version: VersionInfo = "tool==2.3.4a".parse().expect("parse");
    assert_eq!(version.get("releaselevel"), Ok(ReleaseLevel::Alpha.into()));
    assert_eq!(version.get("serial"), Ok(FieldValue::Integer(0)));

    let bumped = version
        .replace("serial", FieldValue::Integer(1))
        .expect("replace serial");
    assert_eq!(bumped.to_string(), "tool==2.3.4a1");
    assert_eq!(version.to_string(), "tool==2.3.4a");
}

#[test]
fn dict_json_shape_is_stable() {
    let version = VersionInfo::named("pkg", 1, 0, 0)
        .expect("valid name")
        .with_releaselevel(ReleaseLevel::Beta, 4);
    let json = serde_json::to_string(&version).expect("encode");
    assert_eq!(
        json,
        r#"{"name":"pkg","major":1,"minor":0,"micro":0,"releaselevel":"beta","serial":4}"#
    );
}

#[test]
fn tracing_initialises_with_file_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config: AppConfig = format!(
        "[logging]\ndirectory = {:?}\nfile_prefix = \"integration\"\n",
        dir.path().join("logs").display().to_string()
    )
    .parse()
    .expect("config parses");
    init_tracing("versioninfo-tests", &config.logging).expect("tracing");
    assert!(dir.path().join("logs").is_dir());
}

#[test]
fn package_version_is_exposed() {
    let current = versioninfo::current();
    assert_eq!(current.name(), Some("versioninfo"));
    assert_eq!(current.to_vstring(), format!("v{}", versioninfo::VERSION));
}
