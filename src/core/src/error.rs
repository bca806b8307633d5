use std::path::PathBuf;

use thiserror::Error;

/// mountfix error types
///
/// The rewrite functions themselves never fail; these cover the file,
/// configuration and serialization work done around them.
#[derive(Error, Debug)]
pub enum MountFixError {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl MountFixError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MountFixError::IoError {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for MountFixError {
    fn from(err: serde_json::Error) -> Self {
        MountFixError::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for MountFixError {
    fn from(err: serde_yaml::Error) -> Self {
        MountFixError::SerializationError(err.to_string())
    }
}

/// Result type alias for mountfix operations
pub type Result<T> = std::result::Result<T, MountFixError>;
