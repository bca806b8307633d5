//! `mountfix feature` command - generate a feature install step.

use clap::Args;

use mountfix_core::{generate_feature_install_command, BuildEngine, FixConfig};

use crate::output;

#[derive(Args)]
pub struct FeatureArgs {
    /// Feature name (directory under the target dir)
    pub name: String,

    /// Build engine (default: BUILD_ENGINE, config, then docker)
    #[arg(short, long)]
    pub engine: Option<String>,

    /// Host directory holding the feature sources
    #[arg(long, default_value = "/tmp/dev-container-features-source")]
    pub source_dir: String,

    /// Mount point inside the build
    #[arg(long, default_value = "/tmp/build-features-src")]
    pub target_dir: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: FeatureArgs, config: &FixConfig) -> Result<(), Box<dyn std::error::Error>> {
    let engine = config.resolve_engine(args.engine.as_deref(), BuildEngine::Docker);
    let install =
        generate_feature_install_command(&engine, &args.name, &args.source_dir, &args.target_dir);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&install)?);
        return Ok(());
    }

    println!("Generated Dockerfile line:");
    println!("{}", install.dockerfile_line);
    println!();
    println!("Build command:");
    println!("{}", output::format_command(&install.build_args));
    Ok(())
}
