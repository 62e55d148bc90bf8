//! ---
//! vi_section: "05-external-interfaces"
//! vi_subsection: "binary"
//! vi_type: "source"
//! vi_scope: "code"
//! vi_description: "Command-line front end for rendering and inspecting versions."
//! vi_version: "v1.0.1"
//! vi_owner: "tbd"
//! ---
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use tracing::{debug, warn};
use versioninfo_common::config::{AppConfig, DEFAULT_CANDIDATES};
use versioninfo_common::logging;

mod inspect;
mod render;

#[derive(Debug, Parser)]
#[command(
    author,
    disable_version_flag = true,
    about = "Render and inspect software version values",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'V',
        long = "version",
        action = ArgAction::SetTrue,
        help = "Print the tool's own version and exit"
    )]
    version: bool,
    #[arg(long, global = true, value_name = "FILE", help = "Configuration file to load")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Render a version in one of the supported formats")]
    Render(render::RenderArgs),
    #[command(about = "Parse a rendered version and print its fields as JSON")]
    Parse(inspect::ParseArgs),
    #[command(about = "Parse a rendered version and print a single field")]
    Get(inspect::GetArgs),
}

impl Commands {
    fn needs_config(&self) -> bool {
        matches!(self, Commands::Render(_))
    }
}

fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    match explicit {
        Some(path) => AppConfig::from_path(path),
        None => Ok(AppConfig::discover(&DEFAULT_CANDIDATES)?
            .map(|loaded| loaded.config)
            .unwrap_or_default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("{}", versioninfo::current().to_vstring());
        return Ok(());
    }
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Only `render` reads the configuration; the other commands run on defaults
    // when it is unusable.
    let (config, ignored) = match load_config(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) if !command.needs_config() => (AppConfig::default(), Some(err)),
        Err(err) => return Err(err),
    };
    logging::init_tracing("versioninfoctl", &config.logging)?;
    if let Some(err) = ignored {
        warn!(error = %format!("{err:#}"), "ignoring unusable configuration");
    }

    debug!(?command, "dispatching command");
    let output = match command {
        Commands::Render(args) => render::run(args, &config)?,
        Commands::Parse(args) => inspect::parse(args)?,
        Commands::Get(args) => inspect::get(args)?,
    };
    println!("{output}");
    Ok(())
}
