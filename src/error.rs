use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for pkgsmith operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Resolved package name violates the naming pattern.
    #[error(
        "Invalid package name '{0}': must start with a letter and contain only letters, digits, or periods"
    )]
    InvalidName(String),

    /// Destination directory already present and overwrite not requested.
    #[error("Destination '{}' already exists; pass --overwrite to replace it", .0.display())]
    DestinationExists(PathBuf),

    /// Bundled template assets are missing; the installation itself is broken.
    #[error("Bundled template subtree '{0}' is missing; reinstall pkgsmith")]
    TemplateNotFound(String),

    /// An optional external tool is unavailable on the host.
    #[error("{tool} unavailable: {details}")]
    PrerequisiteMissing { tool: String, details: String },

    /// Template rendering failed.
    #[error("Failed to render {file}: {details}")]
    Render { file: String, details: String },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Malformed maintainer config file.
    #[error("Malformed config.toml: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidName(_)
            | AppError::Render { .. }
            | AppError::Configuration(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::TemplateNotFound(_) | AppError::PrerequisiteMissing { .. } => {
                io::ErrorKind::NotFound
            }
            AppError::DestinationExists(_) => io::ErrorKind::AlreadyExists,
        }
    }
}
