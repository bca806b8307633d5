//! mountfix core - bind mount relabel normalization
//!
//! Docker accepts `RUN --mount=type=bind,...,z`; Podman and Buildah reject
//! the `z` flag on `--mount`. This crate rewrites mount options, Dockerfile
//! text and build commands so the same build works on all three. Podman
//! builds get `--security-opt=label=disable` in place of the relabel flag.
//!
//! Every function here is pure. Reading and writing files is left to callers.

pub mod command;
pub mod config;
pub mod dockerfile;
pub mod engine;
pub mod error;
pub mod feature;
pub mod mount;
pub mod options;

// Re-export commonly used types
pub use command::{get_build_command, LABEL_DISABLE, SECURITY_OPT_LABEL_DISABLE};
pub use config::FixConfig;
pub use dockerfile::{count_relabel_mounts, fix_dockerfile_content};
pub use engine::{is_system_affected, BuildEngine};
pub use error::{MountFixError, Result};
pub use feature::{generate_feature_install_command, FeatureInstall};
pub use mount::generate_mount_options;
pub use options::{apply_fix, BuildOptions};

/// mountfix version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
