//! `--mount=type=bind,...` option strings.

use crate::engine::{is_system_affected, BuildEngine};

/// The SELinux shared-relabel flag as it appears in a mount option list.
pub const RELABEL_FLAG: &str = "z";

/// Build the option list for a bind mount of `source` at `target`.
///
/// Podman and Buildah reject `z` on `--mount`, so the flag is only added for
/// Docker and unrecognized engines. Paths are used as given.
pub fn generate_mount_options(engine: &BuildEngine, source: &str, target: &str) -> String {
    let base = format!("type=bind,source={source},target={target}");

    if is_system_affected(engine) {
        base
    } else {
        format!("{base},{RELABEL_FLAG}")
    }
}

/// Drop every `z` flag token from a comma-separated option list.
///
/// Only tokens after a comma count: a leading `z` is left alone, as are
/// tokens such as `zz` or `z=1`.
pub fn strip_relabel_flag(options: &str) -> String {
    let mut tokens = options.split(',');
    let mut out = String::with_capacity(options.len());
    if let Some(first) = tokens.next() {
        out.push_str(first);
    }
    for token in tokens.filter(|t| *t != RELABEL_FLAG) {
        out.push(',');
        out.push_str(token);
    }
    out
}
