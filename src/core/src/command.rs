//! Build command construction.

use crate::engine::BuildEngine;

/// Security option that replaces per-mount relabeling on Podman.
pub const LABEL_DISABLE: &str = "label=disable";

/// Build-command flag carrying [`LABEL_DISABLE`].
pub const SECURITY_OPT_LABEL_DISABLE: &str = "--security-opt=label=disable";

/// Assemble the argv for `<engine> build`.
///
/// Only Podman gets `--security-opt=label=disable`, placed right before the
/// context so the context stays the last argument. Buildah is deliberately
/// left without it.
pub fn get_build_command(
    engine: &BuildEngine,
    dockerfile_path: &str,
    context: &str,
    tag: &str,
) -> Vec<String> {
    let mut argv = vec![
        engine.as_str().to_string(),
        "build".to_string(),
        "-f".to_string(),
        dockerfile_path.to_string(),
        "-t".to_string(),
        tag.to_string(),
    ];

    if *engine == BuildEngine::Podman {
        argv.push(SECURITY_OPT_LABEL_DISABLE.to_string());
    }

    argv.push(context.to_string());
    argv
}
