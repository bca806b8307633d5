//! CLI command definitions and dispatch.

mod demo;
mod example;
mod feature;
mod fix;
mod normalize;
mod version;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mountfix_core::FixConfig;

pub use fix::{fix_dockerfile, FixReport};

/// mountfix - make `RUN --mount` bind mounts work with Podman and Buildah.
#[derive(Parser)]
#[command(name = "mountfix", version, about, arg_required_else_help = true)]
pub struct Cli {
    /// Config file (default: ~/.mountfix/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Command {
    /// Remove the z flag from --mount options in a Dockerfile
    Fix(fix::FixArgs),
    /// Show mount options and build commands per engine
    Demo(demo::DemoArgs),
    /// Show a complete before/after example of the fix
    Example(example::ExampleArgs),
    /// Generate a feature install directive and build command
    Feature(feature::FeatureArgs),
    /// Normalize a build options file for its engine
    Normalize(normalize::NormalizeArgs),
    /// Show version information
    Version(version::VersionArgs),
}

/// Dispatch a parsed CLI to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Fix(args) => fix::execute(args, &load_config(cli.config)?),
        Command::Demo(args) => demo::execute(args),
        Command::Example(args) => example::execute(args),
        Command::Feature(args) => feature::execute(args, &load_config(cli.config)?),
        Command::Normalize(args) => normalize::execute(args),
        Command::Version(args) => version::execute(args),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<FixConfig, Box<dyn std::error::Error>> {
    Ok(FixConfig::load(path.as_deref())?)
}
