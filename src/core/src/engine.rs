//! Build engine identification.
//!
//! Engine names arrive as free-form strings (CLI arguments, environment
//! variables, config files). Only the exact lowercase literals `docker`,
//! `podman` and `buildah` are recognized; anything else is kept verbatim
//! and treated like Docker when mount options are generated.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A container build engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BuildEngine {
    /// Docker / BuildKit. Accepts the `z` relabel flag on `--mount`.
    #[default]
    Docker,
    /// Podman. Rejects `z` on `--mount`, needs `--security-opt=label=disable`.
    Podman,
    /// Buildah. Rejects `z` on `--mount`.
    Buildah,
    /// Any other engine name, kept as given.
    Other(String),
}

impl BuildEngine {
    /// The engine name as it appears on the command line.
    pub fn as_str(&self) -> &str {
        match self {
            BuildEngine::Docker => "docker",
            BuildEngine::Podman => "podman",
            BuildEngine::Buildah => "buildah",
            BuildEngine::Other(name) => name,
        }
    }

    /// Whether this is one of the three engines the tool knows about.
    pub fn is_known(&self) -> bool {
        !matches!(self, BuildEngine::Other(_))
    }
}

/// Whether builds with this engine fail on `--mount=...,z`.
pub fn is_system_affected(engine: &BuildEngine) -> bool {
    matches!(engine, BuildEngine::Podman | BuildEngine::Buildah)
}

impl From<&str> for BuildEngine {
    fn from(name: &str) -> Self {
        match name {
            "docker" => BuildEngine::Docker,
            "podman" => BuildEngine::Podman,
            "buildah" => BuildEngine::Buildah,
            other => BuildEngine::Other(other.to_string()),
        }
    }
}

impl From<String> for BuildEngine {
    fn from(name: String) -> Self {
        match name.as_str() {
            "docker" | "podman" | "buildah" => BuildEngine::from(name.as_str()),
            _ => BuildEngine::Other(name),
        }
    }
}

impl From<BuildEngine> for String {
    fn from(engine: BuildEngine) -> Self {
        match engine {
            BuildEngine::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for BuildEngine {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BuildEngine::from(s))
    }
}

impl fmt::Display for BuildEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
