//! Version-control integration for freshly deployed projects.

use std::path::Path;
use std::process::Command;

use crate::error::AppError;

/// Capability seam for initializing version control in a new project.
pub trait VcsClient {
    /// Initialize a repository at `root`.
    fn init(&self, root: &Path, quiet: bool) -> Result<(), AppError>;
}

/// Runs the `git` command-line tool.
#[derive(Debug, Default)]
pub struct GitCommandClient;

impl GitCommandClient {
    fn run(&self, args: &[&str], cwd: &Path) -> Result<String, AppError> {
        let output = Command::new("git").args(args).current_dir(cwd).output().map_err(|e| {
            AppError::PrerequisiteMissing { tool: "git".to_string(), details: e.to_string() }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::PrerequisiteMissing {
                tool: "git".to_string(),
                details: if stderr.is_empty() {
                    format!("git {} failed", args.join(" "))
                } else {
                    stderr
                },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl VcsClient for GitCommandClient {
    fn init(&self, root: &Path, quiet: bool) -> Result<(), AppError> {
        let args: &[&str] = if quiet { &["init", "--quiet"] } else { &["init"] };
        let stdout = self.run(args, root)?;
        if !quiet && !stdout.is_empty() {
            println!("{stdout}");
        }
        Ok(())
    }
}

/// No-op client for tests and `--no-git` runs.
#[derive(Debug, Default)]
pub struct NoopVcs;

impl VcsClient for NoopVcs {
    fn init(&self, _root: &Path, _quiet: bool) -> Result<(), AppError> {
        Ok(())
    }
}

/// Client that always reports a missing tool. Test double.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct UnavailableVcs;

#[cfg(test)]
impl VcsClient for UnavailableVcs {
    fn init(&self, _root: &Path, _quiet: bool) -> Result<(), AppError> {
        Err(AppError::PrerequisiteMissing {
            tool: "git".to_string(),
            details: "No such file or directory".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn noop_client_never_fails() {
        let dir = TempDir::new().unwrap();
        NoopVcs.init(dir.path(), true).unwrap();
    }

    #[test]
    fn git_init_creates_repository_when_git_present() {
        // Skip silently on hosts without a git binary.
        if Command::new("git").arg("--version").output().is_err() {
            return;
        }
        let dir = TempDir::new().unwrap();
        GitCommandClient.init(dir.path(), true).unwrap();
        assert!(dir.path().join(".git").exists());
    }
}
