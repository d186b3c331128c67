//! pkgsmith: deploy ready-to-use R package scaffolding from an embedded template.

pub mod assets;
pub mod commands;
pub mod config;
pub mod deploy;
pub mod descriptor;
pub mod error;
pub mod ide;
pub mod request;
pub mod vcs;

pub use deploy::DeployReport;
pub use error::AppError;
pub use request::DeployRequest;

use ide::{IdeBridge, NoopIde, RStudioBridge};
use vcs::GitCommandClient;

/// Deploy a new package project described by `request`.
///
/// Wires the real git and RStudio integrations and streams progress text
/// unless the request is quiet. Returns a `DeployReport` describing what was
/// created.
pub fn new_package(request: &DeployRequest) -> Result<DeployReport, AppError> {
    let vcs = GitCommandClient;
    let rstudio = RStudioBridge;
    let noop = NoopIde;
    let ide: &dyn IdeBridge = if request.interactive { &rstudio } else { &noop };

    let report = commands::new::execute(request, &vcs, ide)?;

    if !request.quiet {
        println!("✅ Created package '{}' at {}", report.name, report.dest.display());
        for path in &report.created {
            println!("  + {path}");
        }
        if report.git_initialized {
            println!("✅ Initialized git repository");
        }
    }

    Ok(report)
}
