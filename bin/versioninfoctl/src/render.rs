//! ---
//! vi_section: "05-external-interfaces"
//! vi_subsection: "binary"
//! vi_type: "source"
//! vi_scope: "code"
//! vi_description: "render subcommand: build a version from flags or config and format it."
//! vi_version: "v1.0.1"
//! vi_owner: "tbd"
//! ---
use anyhow::{anyhow, Context, Result};
use clap::{Args, ValueEnum};
use versioninfo::{ReleaseLevel, VersionInfo};
use versioninfo_common::config::AppConfig;

/// Output encodings supported by `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `name==A.B.C<suffix>`
    VersionString,
    /// `vA.B.C<suffix>`
    Vstring,
    /// JSON object with the six fields.
    Dict,
    /// The six fields in order.
    Tuple,
    /// Debug representation.
    Debug,
}

/// Arguments for `render`. Without positional numbers the `[version]` table of
/// the configuration is used; flags override individual fields.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Major, minor and micro numbers.
    #[arg(value_name = "NUMBER", num_args = 0..=3)]
    pub numbers: Vec<u64>,
    /// Artifact name.
    #[arg(long)]
    pub name: Option<String>,
    /// Release level: alpha, beta, release or final.
    #[arg(long)]
    pub level: Option<ReleaseLevel>,
    /// Pre-release serial.
    #[arg(long)]
    pub serial: Option<u64>,
    #[arg(long, value_enum, default_value_t = OutputFormat::VersionString)]
    pub format: OutputFormat,
}

pub fn run(args: RenderArgs, config: &AppConfig) -> Result<String> {
    let version = resolve(&args, config)?;
    render(&version, args.format)
}

fn resolve(args: &RenderArgs, config: &AppConfig) -> Result<VersionInfo> {
    let mut version = match args.numbers.as_slice() {
        [] => config
            .require_version()
            .context("no version numbers given on the command line")?
            .clone(),
        [major, rest @ ..] => {
            let minor = rest.first().copied().unwrap_or_default();
            let micro = rest.get(1).copied().unwrap_or_default();
            VersionInfo::new(*major).with_minor(minor).with_micro(micro)
        }
    };
    if let Some(name) = &args.name {
        version = version.with_name(name.as_str())?;
    }
    if let Some(level) = args.level {
        version = version.with_releaselevel(level, version.serial());
    }
    if let Some(serial) = args.serial {
        version = version.with_serial(serial);
    }
    Ok(version)
}

/// Render `version` in the requested format.
pub fn render(version: &VersionInfo, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::VersionString => version.to_version_string(),
        OutputFormat::Vstring => version.to_vstring(),
        OutputFormat::Dict => serde_json::to_string_pretty(&version.to_dict())
            .map_err(|err| anyhow!("unable to encode version as JSON: {err}"))?,
        OutputFormat::Tuple => {
            let (name, major, minor, micro, level, serial) = version.to_tuple();
            let name = name.map_or_else(|| "None".to_owned(), |n| format!("{n:?}"));
            format!("({name}, {major}, {minor}, {micro}, \"{level}\", {serial})")
        }
        OutputFormat::Debug => format!("{version:?}"),
    })
}
