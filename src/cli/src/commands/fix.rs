//! `mountfix fix` command - rewrite a Dockerfile in place.
//!
//! Strips the `z` relabel flag from `RUN --mount=` directives and prints the
//! build command to use afterwards.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use mountfix_core::{
    count_relabel_mounts, fix_dockerfile_content, get_build_command, BuildEngine, FixConfig,
    MountFixError, Result, SECURITY_OPT_LABEL_DISABLE,
};

use crate::output;

#[derive(Args)]
pub struct FixArgs {
    /// Path to the Dockerfile to fix
    pub path: PathBuf,

    /// Build engine (docker, podman, buildah; default: podman)
    pub engine: Option<String>,

    /// Report what would change without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Outcome of fixing one Dockerfile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixReport {
    /// Dockerfile that was inspected
    pub path: PathBuf,
    /// Whether the content changed
    pub fixed: bool,
    /// Number of `z` flags removed from mount directives
    pub mounts_fixed: usize,
    /// Human-readable list of changes
    pub changes: Vec<String>,
    /// Build command to run afterwards
    pub build_command: Vec<String>,
}

pub fn execute(
    args: FixArgs,
    config: &FixConfig,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let engine = config.resolve_engine(args.engine.as_deref(), BuildEngine::Podman);
    let report = fix_dockerfile(&args.path, &engine, config, args.dry_run)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Fixed: {}", report.fixed);
    if report.changes.is_empty() {
        println!("Changes: none");
    } else {
        println!("Changes:");
        for change in &report.changes {
            println!("  - {change}");
        }
    }
    println!("Build command: {}", output::format_command(&report.build_command));
    Ok(())
}

/// Fix the Dockerfile at `path` and describe what changed.
///
/// The file is only written when its content changes and `dry_run` is off.
pub fn fix_dockerfile(
    path: &Path,
    engine: &BuildEngine,
    config: &FixConfig,
    dry_run: bool,
) -> Result<FixReport> {
    let original = std::fs::read_to_string(path).map_err(|e| MountFixError::io(path, e))?;
    let mounts_fixed = count_relabel_mounts(&original);
    let fixed_content = fix_dockerfile_content(&original);

    let fixed = original != fixed_content;
    let mut changes = Vec::new();

    if fixed {
        if dry_run {
            tracing::info!(path = %path.display(), mounts = mounts_fixed, "Dry run, not writing");
        } else {
            std::fs::write(path, &fixed_content).map_err(|e| MountFixError::io(path, e))?;
            tracing::info!(path = %path.display(), mounts = mounts_fixed, "Rewrote Dockerfile");
        }
        changes.push(format!(
            "Removed z flag from --mount options in {}",
            path.display()
        ));
    }

    let build_command = get_build_command(
        engine,
        &path.to_string_lossy(),
        &config.context,
        &config.tag,
    );

    if *engine == BuildEngine::Podman {
        changes.push(format!("Added {SECURITY_OPT_LABEL_DISABLE} to build command"));
    }

    Ok(FixReport {
        path: path.to_path_buf(),
        fixed,
        mounts_fixed,
        changes,
        build_command,
    })
}
