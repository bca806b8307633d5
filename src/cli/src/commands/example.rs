//! `mountfix example` command - full before/after walkthrough.

use clap::Args;

use mountfix_core::{
    fix_dockerfile_content, get_build_command, BuildEngine, SECURITY_OPT_LABEL_DISABLE,
};

use crate::output;

const FEATURE_DIRECTIVE: &str = "RUN --mount=type=bind,from=dev_containers_feature_content_source,source=hello_0,target=/tmp/build-features-src/hello_0,z \\\n    cp -ar /tmp/build-features-src/hello_0 /tmp/dev-container-features";

#[derive(Args)]
pub struct ExampleArgs;

pub fn execute(_args: ExampleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let after_cmd = get_build_command(&BuildEngine::Podman, "Dockerfile", ".", "dev-container");
    let before_cmd: Vec<String> = after_cmd
        .iter()
        .filter(|arg| *arg != SECURITY_OPT_LABEL_DISABLE)
        .cloned()
        .collect();

    println!("BEFORE (fails with Podman):");
    println!("Dockerfile:");
    println!("{}", output::indent(FEATURE_DIRECTIVE, 2));
    println!("Build command:");
    println!("  {}", output::format_command(&before_cmd));
    println!("Result: bind mounts cannot have any filesystem-specific options applied");
    println!();

    println!("AFTER (fixed for Podman):");
    println!("Dockerfile:");
    println!(
        "{}",
        output::indent(&fix_dockerfile_content(FEATURE_DIRECTIVE), 2)
    );
    println!("Build command:");
    println!("  {}", output::format_command(&after_cmd));
    println!("Result: works on SELinux and non-SELinux hosts");
    println!();

    println!("Key changes:");
    println!("1. Removed \",z\" from --mount options (invalid for Podman)");
    println!("2. Added \"--security-opt=label=disable\" to the build command");

    Ok(())
}
