//! Deployment request construction and validation.

use std::path::PathBuf;

use crate::error::AppError;

/// Input to one deployment pass.
///
/// Interactivity is an explicit field set by the caller rather than probed
/// inside the deployer, so the pipeline stays unit-testable.
#[derive(Debug, Clone)]
pub struct DeployRequest {
    /// Destination directory for the new package.
    pub dest: PathBuf,
    /// Explicit package name; inferred from `dest` when absent.
    pub name: Option<String>,
    /// Deploy the hidden `.agents/` configuration subtree.
    pub agents: bool,
    /// Deploy the `dev/` maintainer-script subtree.
    pub dev_scripts: bool,
    /// Replace an existing destination directory.
    pub overwrite: bool,
    /// Initialize a git repository after deployment.
    pub git: bool,
    /// Write a `<name>.Rproj` project file.
    pub rproj: bool,
    /// Open the project in the IDE once created.
    pub open: bool,
    /// Suppress progress output and prompts.
    pub quiet: bool,
    /// Whether the caller runs in an interactive session.
    pub interactive: bool,
}

impl DeployRequest {
    /// Create a request for `dest` with default flags.
    pub fn new(dest: PathBuf) -> Self {
        Self {
            dest,
            name: None,
            agents: true,
            dev_scripts: true,
            overwrite: false,
            git: true,
            rproj: true,
            open: false,
            quiet: false,
            interactive: false,
        }
    }

    /// Resolve the package name: explicit name wins, otherwise the final
    /// segment of the destination path.
    pub fn resolve_name(&self) -> Result<String, AppError> {
        let name = match &self.name {
            Some(name) => name.clone(),
            None => self
                .dest
                .file_name()
                .map(|segment| segment.to_string_lossy().to_string())
                .unwrap_or_default(),
        };

        if !is_valid_package_name(&name) {
            return Err(AppError::InvalidName(name));
        }
        Ok(name)
    }
}

/// Validate a package name: a letter followed by letters, digits, or periods.
pub fn is_valid_package_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '.')
}
