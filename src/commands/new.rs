//! New command: deploy a package project from the bundled template.

use dialoguer::Confirm;

use crate::config::MaintainerConfig;
use crate::deploy::{self, DeployReport};
use crate::error::AppError;
use crate::ide::IdeBridge;
use crate::request::DeployRequest;
use crate::vcs::VcsClient;

/// Execute the new command.
pub fn execute(
    request: &DeployRequest,
    vcs: &dyn VcsClient,
    ide: &dyn IdeBridge,
) -> Result<DeployReport, AppError> {
    let maintainer = MaintainerConfig::load()?;
    let report = deploy::deploy(request, &maintainer, vcs)?;

    if !request.quiet {
        for warning in &report.warnings {
            eprintln!("Warning: {warning}");
        }
    }

    // Opening the IDE only makes sense in an interactive session.
    if request.open && request.interactive {
        open_project(request, &report, ide);
    }

    Ok(report)
}

fn open_project(request: &DeployRequest, report: &DeployReport, ide: &dyn IdeBridge) {
    let warn = |message: String| {
        if !request.quiet {
            eprintln!("Warning: {message}");
        }
    };

    let Some(rproj) = &report.rproj else {
        warn("no project file was created; nothing to open".to_string());
        return;
    };

    if !ide.available() {
        warn("RStudio not found; skipping open".to_string());
        return;
    }

    let confirmed = request.quiet
        || Confirm::new()
            .with_prompt(format!("Open {} now?", report.name))
            .default(true)
            .interact()
            .unwrap_or(false);

    if confirmed {
        if let Err(err) = ide.open(&report.dest.join(rproj)) {
            warn(format!("could not open project: {err}"));
        }
    }
}
