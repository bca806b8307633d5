//! Programmatic build configuration and its normalization.

use serde::{Deserialize, Serialize};

use crate::command::LABEL_DISABLE;
use crate::engine::{is_system_affected, BuildEngine};
use crate::mount::strip_relabel_flag;

/// Mount and security options for one build.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    /// Engine the build will run with
    pub build_engine: BuildEngine,
    /// `--mount` option strings, in order
    #[serde(default)]
    pub mount_options: Vec<String>,
    /// `--security-opt` values, in order
    #[serde(default)]
    pub security_options: Vec<String>,
}

impl BuildOptions {
    pub fn new(build_engine: BuildEngine) -> Self {
        Self {
            build_engine,
            ..Default::default()
        }
    }

    /// Render the security options as build-command flags.
    pub fn security_args(&self) -> Vec<String> {
        self.security_options
            .iter()
            .map(|opt| format!("--security-opt={opt}"))
            .collect()
    }

    /// See [`apply_fix`].
    pub fn fixed(&self) -> BuildOptions {
        apply_fix(self)
    }
}

/// Make a build configuration valid for its engine.
///
/// Docker and unrecognized engines come back unchanged. Podman and Buildah
/// lose every `z` flag from their mount options; Podman additionally gets a
/// single `label=disable` security option.
pub fn apply_fix(options: &BuildOptions) -> BuildOptions {
    if !is_system_affected(&options.build_engine) {
        return options.clone();
    }

    let mount_options: Vec<String> = options
        .mount_options
        .iter()
        .map(|opt| strip_relabel_flag(opt))
        .collect();

    let mut security_options = options.security_options.clone();
    if options.build_engine == BuildEngine::Podman
        && !security_options.iter().any(|opt| opt == LABEL_DISABLE)
    {
        security_options.push(LABEL_DISABLE.to_string());
    }

    tracing::debug!(
        engine = %options.build_engine,
        mounts = mount_options.len(),
        security_options = security_options.len(),
        "Normalized build options"
    );

    BuildOptions {
        build_engine: options.build_engine.clone(),
        mount_options,
        security_options,
    }
}
