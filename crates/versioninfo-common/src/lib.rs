//! ---
//! vi_section: "02-shared-runtime"
//! vi_subsection: "module"
//! vi_type: "source"
//! vi_scope: "code"
//! vi_description: "Shared configuration and logging for versioninfo tools."
//! vi_version: "v1.0.1"
//! vi_owner: "tbd"
//! ---
//! Configuration loading and tracing initialisation consumed by the
//! `versioninfoctl` binary and integration tests.

pub mod config;
pub mod logging;

pub use config::{AppConfig, LoadedAppConfig, LoggingConfig};
pub use logging::{init_tracing, LogFormat};
