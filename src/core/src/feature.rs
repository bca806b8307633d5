//! Dev container feature install directives.

use serde::Serialize;

use crate::command::get_build_command;
use crate::engine::BuildEngine;
use crate::mount::generate_mount_options;

/// Directory features are copied into inside the image.
pub const FEATURES_INSTALL_DIR: &str = "/tmp/dev-container-features";

/// A generated feature install step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureInstall {
    /// Two-line `RUN --mount=... \` directive
    pub dockerfile_line: String,
    /// Build command for the image containing the directive
    pub build_args: Vec<String>,
}

/// Generate the Dockerfile directive and build command for installing a feature.
pub fn generate_feature_install_command(
    engine: &BuildEngine,
    feature_name: &str,
    source_dir: &str,
    target_dir: &str,
) -> FeatureInstall {
    let mount_options = generate_mount_options(engine, source_dir, target_dir);
    let dockerfile_line = format!(
        "RUN --mount={mount_options} \\\n    cp -ar {target_dir}/{feature_name} {FEATURES_INSTALL_DIR}"
    );
    let build_args = get_build_command(engine, "Dockerfile", ".", "dev-container");

    FeatureInstall {
        dockerfile_line,
        build_args,
    }
}
