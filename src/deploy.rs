//! The template deployer: a linear validate → scaffold → copy → generate →
//! finalize pipeline.
//!
//! Failure is non-transactional: a mid-copy error aborts immediately and may
//! leave a partial destination directory behind. Validation runs before any
//! filesystem write, so name and destination errors never create artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::assets::{self, Subtree};
use crate::config::MaintainerConfig;
use crate::descriptor;
use crate::error::AppError;
use crate::request::DeployRequest;
use crate::vcs::VcsClient;

/// Directories created in every new package.
const SKELETON_DIRS: [&str; 6] =
    ["R", "man", "tests/testthat", "vignettes/articles", "data", "inst"];

/// Summary of one deployment pass. Produced once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct DeployReport {
    /// Absolute destination path.
    pub dest: PathBuf,
    /// Resolved package name.
    pub name: String,
    /// Relative paths created, sorted.
    pub created: Vec<String>,
    /// Whether a git repository was initialized.
    pub git_initialized: bool,
    /// Relative path of the IDE project file, when created.
    pub rproj: Option<String>,
    /// Non-fatal notices for skipped optional steps.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Execute one deployment pass.
pub fn deploy(
    request: &DeployRequest,
    maintainer: &MaintainerConfig,
    vcs: &dyn VcsClient,
) -> Result<DeployReport, AppError> {
    let name = request.resolve_name()?;

    if request.dest.exists() {
        if !request.overwrite {
            return Err(AppError::DestinationExists(request.dest.clone()));
        }
        fs::remove_dir_all(&request.dest)?;
    }

    let mut created: Vec<String> = Vec::new();

    // Skeleton precedes file copying.
    fs::create_dir_all(&request.dest)?;
    for dir in SKELETON_DIRS {
        fs::create_dir_all(request.dest.join(dir))?;
        created.push(dir.to_string());
    }

    for subtree in enabled_subtrees(request) {
        copy_subtree(&request.dest, &subtree, &name, &mut created)?;
    }

    // Generated descriptor follows copying.
    let description = descriptor::render_description(&name, maintainer)?;
    fs::write(request.dest.join("DESCRIPTION"), description)?;
    created.push("DESCRIPTION".to_string());

    let rproj = if request.rproj {
        let file = format!("{name}.Rproj");
        fs::write(request.dest.join(&file), assets::rproj_content())?;
        created.push(file.clone());
        Some(file)
    } else {
        None
    };

    let mut warnings = Vec::new();

    // Version control runs last so it sees the final file set. A missing
    // git binary downgrades to a warning; the deployment still succeeds.
    let git_initialized = if request.git {
        match vcs.init(&request.dest, request.quiet) {
            Ok(()) => true,
            Err(AppError::PrerequisiteMissing { tool, details }) => {
                warnings.push(format!("skipping {tool} init: {details}"));
                false
            }
            Err(other) => return Err(other),
        }
    } else {
        false
    };

    created.sort();

    Ok(DeployReport {
        dest: fs::canonicalize(&request.dest)?,
        name,
        created,
        git_initialized,
        rproj,
        warnings,
    })
}

/// Resolve the subtree toggle table into the subtrees to copy, in order.
fn enabled_subtrees(request: &DeployRequest) -> Vec<Subtree> {
    let toggles = [
        (true, assets::CORE_SUBTREE),
        (true, assets::WORKFLOWS_SUBTREE),
        (true, assets::TESTS_SUBTREE),
        (request.agents, assets::AGENTS_SUBTREE),
        (request.dev_scripts, assets::DEV_SUBTREE),
    ];
    toggles.into_iter().filter(|(enabled, _)| *enabled).map(|(_, subtree)| subtree).collect()
}

fn copy_subtree(
    dest_root: &Path,
    subtree: &Subtree,
    name: &str,
    created: &mut Vec<String>,
) -> Result<(), AppError> {
    for file in assets::subtree_files(subtree)? {
        let relative = if subtree.dest.is_empty() {
            PathBuf::from(&file.path)
        } else {
            Path::new(subtree.dest).join(&file.path)
        };

        let target = dest_root.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, file.content.replace("{{name}}", name))?;
        created.push(relative.to_string_lossy().replace('\\', "/"));
    }
    Ok(())
}
