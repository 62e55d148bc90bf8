//! ---
//! vi_section: "15-testing-qa-runbook"
//! vi_subsection: "integration-tests"
//! vi_type: "source"
//! vi_scope: "code"
//! vi_description: "End-to-end tests for the versioninfoctl binary."
//! vi_version: "v1.0.1"
//! vi_owner: "tbd"
//! ---
use std::fs;

use assert_cmd::Command;

fn ctl() -> Command {
    let mut cmd = Command::cargo_bin("versioninfoctl").expect("binary built");
    cmd.env_remove("VERSIONINFO_CONFIG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf8 stdout")
}

#[test]
fn renders_version_string_from_arguments() {
    let out = stdout_of(ctl().args(["render", "--name", "pkg", "1", "2", "3"]));
    assert_eq!(out, "pkg==1.2.3\n");
}

#[test]
fn renders_vstring_with_prerelease() {
    let out = stdout_of(ctl().args([
        "render", "1", "--level", "beta", "--serial", "4", "--format", "vstring",
    ]));
    assert_eq!(out, "v1.0.0b4\n");
}

#[test]
fn renders_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("release.toml");
    fs::write(
        &path,
        "[version]\nname = \"tool\"\nmajor = 0\nminor = 4\nreleaselevel = \"alpha\"\n",
    )
    .unwrap();
    let out = stdout_of(ctl().arg("--config").arg(&path).arg("render"));
    assert_eq!(out, "tool==0.4.0a\n");
}

#[test]
fn parse_and_get() {
    let out = stdout_of(ctl().args(["get", "pkg==1.0.0rc3", "serial"]));
    assert_eq!(out, "3\n");

    let out = stdout_of(ctl().args(["parse", "pkg==1.0.0rc3"]));
    let dict: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(dict["name"], "pkg");
    assert_eq!(dict["releaselevel"], "release");
}

#[test]
fn invalid_level_is_rejected() {
    ctl().args(["render", "1", "--level", "gamma"]).assert().failure();
}

#[test]
fn empty_name_is_rejected() {
    let output = ctl()
        .args(["render", "--name", "", "1"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(output).unwrap();
    assert!(stderr.contains("name must be a non-empty string"));
}

#[test]
fn prints_own_version() {
    let out = stdout_of(ctl().arg("--version"));
    assert_eq!(out, format!("v{}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn broken_config_only_blocks_render() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("versioninfo.toml"), "[version]\nmajor = \"one\"\n").unwrap();

    let out = stdout_of(ctl().current_dir(dir.path()).args(["get", "v1.2.3b1", "minor"]));
    assert_eq!(out, "2\n");

    let out = stdout_of(ctl().current_dir(dir.path()).args(["parse", "pkg==1.0.0"]));
    assert!(out.contains("\"name\": \"pkg\""));

    let stderr = ctl()
        .current_dir(dir.path())
        .arg("render")
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8(stderr).unwrap().contains("failed to parse config file"));
}
