//! ---
//! vi_section: "05-external-interfaces"
//! vi_subsection: "binary"
//! vi_type: "source"
//! vi_scope: "code"
//! vi_description: "parse and get subcommands: read a rendered version back into fields."
//! vi_version: "v1.0.1"
//! vi_owner: "tbd"
//! ---
use anyhow::{Context, Result};
use clap::Args;
use versioninfo::VersionInfo;

use crate::render::{render, OutputFormat};

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// A version string, v-string or bare `A.B.C` version.
    pub text: String,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// A version string, v-string or bare `A.B.C` version.
    pub text: String,
    /// One of name, major, minor, micro, releaselevel, serial.
    pub field: String,
}

fn parse_version(text: &str) -> Result<VersionInfo> {
    text.parse()
        .with_context(|| format!("unable to parse version '{text}'"))
}

pub fn parse(args: ParseArgs) -> Result<String> {
    render(&parse_version(&args.text)?, OutputFormat::Dict)
}

pub fn get(args: GetArgs) -> Result<String> {
    let version = parse_version(&args.text)?;
    let value = version
        .get(&args.field)
        .with_context(|| format!("unable to read field from '{}'", args.text))?;
    Ok(value.to_string())
}
