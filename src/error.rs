//! Error types for Packrat
//!
//! All modules use `PackratResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Packrat operations
pub type PackratResult<T> = Result<T, PackratError>;

/// All errors that can occur in Packrat
#[derive(Error, Debug)]
pub enum PackratError {
    // Project errors
    #[error("No npm project found: no package.json at or above {0}")]
    NoProjectRoot(PathBuf),

    // Registry errors
    #[error("Failed to query latest version of '{package}': {reason}")]
    VersionQuery { package: String, reason: String },

    #[error("Unparsable version output for '{package}': {output:?}")]
    VersionParse { package: String, output: String },

    #[error("Failed to pack {package}@{version}: {reason}")]
    Pack {
        package: String,
        version: String,
        reason: String,
    },

    #[error("Failed to install {spec}: {reason}")]
    Install { spec: String, reason: String },

    // Cache errors
    #[error("Cache entry for {package}@{version} exists but holds no artifact")]
    ArtifactMissing { package: String, version: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl PackratError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NoProjectRoot(_) => Some("Run: npm init, or pass --project <dir>"),
            Self::VersionQuery { .. } => {
                Some("Check the package name and your network connection")
            }
            Self::CommandFailed { .. } => Some("Is npm installed and on your PATH?"),
            Self::ArtifactMissing { .. } => {
                Some("Remove the cache directory for this version to force a fresh install")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PackratError::NoProjectRoot(PathBuf::from("/tmp/nowhere"));
        assert!(err.to_string().contains("package.json"));

        let err = PackratError::VersionQuery {
            package: "lodash".to_string(),
            reason: "E404".to_string(),
        };
        assert!(err.to_string().contains("lodash"));
        assert!(err.to_string().contains("E404"));
    }

    #[test]
    fn error_hint() {
        let err = PackratError::NoProjectRoot(PathBuf::from("."));
        assert_eq!(err.hint(), Some("Run: npm init, or pass --project <dir>"));

        let err = PackratError::User("oops".to_string());
        assert_eq!(err.hint(), None);
    }

    #[test]
    fn install_error_names_spec() {
        let err = PackratError::Install {
            spec: "left-pad@1.3.0".to_string(),
            reason: "ECONNRESET".to_string(),
        };
        assert!(err.to_string().contains("left-pad@1.3.0"));
    }
}
