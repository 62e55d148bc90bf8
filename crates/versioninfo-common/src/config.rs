//! ---
//! vi_section: "02-shared-runtime"
//! vi_subsection: "module"
//! vi_type: "source"
//! vi_scope: "code"
//! vi_description: "TOML configuration for versioninfo tools."
//! vi_version: "v1.0.1"
//! vi_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use versioninfo::VersionInfo;

use crate::logging::LogFormat;

/// Default file names checked when no explicit configuration path is given.
pub const DEFAULT_CANDIDATES: [&str; 2] = ["versioninfo.toml", ".versioninfo.toml"];

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

/// Top-level configuration document.
///
/// ```toml
/// [logging]
/// format = "structured-json"
///
/// [version]
/// name = "pkg"
/// major = 1
/// releaselevel = "beta"
/// serial = 4
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Artifact version, validated while the document is parsed.
    #[serde(default)]
    pub version: Option<VersionInfo>,
}

/// Metadata describing where an [`AppConfig`] was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedAppConfig {
    pub config: AppConfig,
    pub source: PathBuf,
}

impl AppConfig {
    pub const ENV_CONFIG_PATH: &str = "VERSIONINFO_CONFIG";

    /// Load configuration from disk, respecting the `VERSIONINFO_CONFIG` override.
    pub fn load<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        Ok(Self::load_with_source(candidates)?.config)
    }

    /// Load configuration from disk together with the effective source path.
    pub fn load_with_source<P: AsRef<Path>>(candidates: &[P]) -> Result<LoadedAppConfig> {
        Self::discover(candidates)?.ok_or_else(|| {
            anyhow!(
                "no configuration files found. inspected: {}",
                candidates
                    .iter()
                    .map(|p| p.as_ref().display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }

    /// Like [`AppConfig::load_with_source`], but `Ok(None)` when neither the
    /// environment override nor any candidate exists.
    pub fn discover<P: AsRef<Path>>(candidates: &[P]) -> Result<Option<LoadedAppConfig>> {
        if let Ok(env_path) = std::env::var(Self::ENV_CONFIG_PATH) {
            if !env_path.trim().is_empty() {
                let path = PathBuf::from(env_path);
                let config = Self::from_path(&path)?;
                return Ok(Some(LoadedAppConfig {
                    config,
                    source: path,
                }));
            }
        }

        for candidate in candidates {
            let path = candidate.as_ref();
            if path.exists() {
                let config = Self::from_path(path)?;
                return Ok(Some(LoadedAppConfig {
                    config,
                    source: path.to_path_buf(),
                }));
            }
        }

        debug!(candidates = candidates.len(), "no configuration file present");
        Ok(None)
    }

    /// Read and validate a single configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(config_path = %path.display(), "loading configuration");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        let config = toml::from_str::<AppConfig>(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// The configured artifact version, or an error naming the missing table.
    pub fn require_version(&self) -> Result<&VersionInfo> {
        self.version
            .as_ref()
            .ok_or_else(|| anyhow!("configuration has no [version] table"))
    }

    /// Validate structural invariants not covered by deserialization.
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()
    }
}

impl std::str::FromStr for AppConfig {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        let config: AppConfig =
            toml::from_str(content).with_context(|| "failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    /// Directory for the rolling JSON log file; no file output when unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default)]
    pub file_prefix: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            directory: None,
            file_prefix: None,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.directory {
            if dir.is_file() {
                return Err(anyhow!(
                    "logging directory {} exists and is not a directory",
                    dir.display()
                ));
            }
        }
        if matches!(self.file_prefix.as_deref(), Some(prefix) if prefix.trim().is_empty()) {
            return Err(anyhow!("logging file_prefix cannot be empty"));
        }
        Ok(())
    }
}
