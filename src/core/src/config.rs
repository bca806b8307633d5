use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::engine::BuildEngine;
use crate::error::{MountFixError, Result};

/// Environment variables consulted for the build engine, in priority order.
pub const ENGINE_ENV_VARS: &[&str] = &["MOUNTFIX_BUILD_ENGINE", "BUILD_ENGINE"];

/// Environment variable overriding the image tag.
pub const TAG_ENV_VAR: &str = "MOUNTFIX_TAG";

/// mountfix configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixConfig {
    /// Engine to target when none is given on the command line
    pub build_engine: Option<BuildEngine>,

    /// Image tag used in generated build commands
    pub tag: String,

    /// Build context used in generated build commands
    pub context: String,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            build_engine: None,
            tag: "dev-container".to_string(),
            context: ".".to_string(),
        }
    }
}

impl FixConfig {
    /// Default config location (~/.mountfix/config.yaml).
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".mountfix"))
            .unwrap_or_else(|| PathBuf::from(".mountfix"))
            .join("config.yaml")
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used if present, otherwise built-in defaults apply. Environment
    /// overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default = Self::default_path();
                if default.exists() {
                    Self::from_file(&default)?
                } else {
                    Self::default()
                }
            }
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Parse a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| MountFixError::io(path, e))?;
        let config: FixConfig = serde_yaml::from_str(&content).map_err(|e| {
            MountFixError::ConfigError(format!("Invalid config {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(engine) = ENGINE_ENV_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.is_empty())
        {
            self.build_engine = Some(BuildEngine::from(engine));
        }
        if let Some(tag) = lookup(TAG_ENV_VAR).filter(|t| !t.is_empty()) {
            self.tag = tag;
        }
        self
    }

    /// Pick the engine: explicit value, then configured, then `fallback`.
    pub fn resolve_engine(&self, explicit: Option<&str>, fallback: BuildEngine) -> BuildEngine {
        let engine = explicit
            .map(BuildEngine::from)
            .or_else(|| self.build_engine.clone())
            .unwrap_or(fallback);
        if !engine.is_known() {
            tracing::warn!(
                engine = engine.as_str(),
                "Unrecognized build engine, treating it like docker"
            );
        }
        engine
    }
}
