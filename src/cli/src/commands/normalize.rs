//! `mountfix normalize` command - fix a build options file.
//!
//! Reads `BuildOptions` from JSON (`.json`) or YAML (anything else) and prints
//! the normalized record.

use std::path::{Path, PathBuf};

use clap::Args;

use mountfix_core::{apply_fix, BuildOptions, MountFixError, Result};

#[derive(Args)]
pub struct NormalizeArgs {
    /// Build options file (JSON or YAML)
    pub path: PathBuf,

    /// Print JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: NormalizeArgs) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let options = load_build_options(&args.path)?;
    let fixed = apply_fix(&options);

    if fixed == options {
        tracing::info!(engine = %options.build_engine, "Build options already valid");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&fixed)?);
    } else {
        print!("{}", serde_yaml::to_string(&fixed)?);
    }
    Ok(())
}

/// Load build options, choosing the format from the file extension.
pub fn load_build_options(path: &Path) -> Result<BuildOptions> {
    let content = std::fs::read_to_string(path).map_err(|e| MountFixError::io(path, e))?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let options = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(options)
}
