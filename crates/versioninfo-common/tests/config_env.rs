//! ---
//! vi_section: "15-testing-qa-runbook"
//! vi_subsection: "integration-tests"
//! vi_type: "source"
//! vi_scope: "code"
//! vi_description: "Environment override for configuration discovery."
//! vi_version: "v1.0.1"
//! vi_owner: "tbd"
//! ---
use std::env;
use std::fs;

use versioninfo_common::config::AppConfig;

#[test]
fn env_override_wins_over_candidates() {
    let dir = tempfile::tempdir().unwrap();
    let candidate = dir.path().join("versioninfo.toml");
    let override_path = dir.path().join("override.toml");
    fs::write(&candidate, "[version]\nname = \"candidate\"\nmajor = 1\n").unwrap();
    fs::write(
        &override_path,
        "[version]\nname = \"override\"\nmajor = 3\nreleaselevel = \"release\"\nserial = 2\n",
    )
    .unwrap();

    env::set_var(AppConfig::ENV_CONFIG_PATH, &override_path);
    let loaded = AppConfig::load_with_source(&[&candidate]).unwrap();
    env::remove_var(AppConfig::ENV_CONFIG_PATH);

    assert_eq!(loaded.source, override_path);
    assert_eq!(
        loaded.config.require_version().unwrap().to_version_string(),
        "override==3.0.0rc2"
    );
}
