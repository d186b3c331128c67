//! IDE integration for the optional open-after-create step.

use std::path::Path;
use std::process::Command;

use crate::error::AppError;

/// Capability seam for opening a freshly created project in an IDE.
pub trait IdeBridge {
    /// Whether the bridge can open projects on this host.
    fn available(&self) -> bool;

    /// Open the project file.
    fn open(&self, project_file: &Path) -> Result<(), AppError>;
}

/// Opens projects with the RStudio command-line launcher.
#[derive(Debug, Default)]
pub struct RStudioBridge;

impl IdeBridge for RStudioBridge {
    fn available(&self) -> bool {
        Command::new("rstudio").arg("--version").output().is_ok()
    }

    fn open(&self, project_file: &Path) -> Result<(), AppError> {
        Command::new("rstudio").arg(project_file).spawn().map(|_| ()).map_err(|e| {
            AppError::PrerequisiteMissing { tool: "rstudio".to_string(), details: e.to_string() }
        })
    }
}

/// No-op bridge for tests and non-interactive contexts.
#[derive(Debug, Default)]
pub struct NoopIde;

impl IdeBridge for NoopIde {
    fn available(&self) -> bool {
        false
    }

    fn open(&self, _project_file: &Path) -> Result<(), AppError> {
        Ok(())
    }
}
