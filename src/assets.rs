//! Embedded template content for package deployment.

use include_dir::{Dir, DirEntry, include_dir};

use crate::error::AppError;

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/template");

/// A file embedded in the template bundle.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    /// Path relative to its subtree root.
    pub path: String,
    /// File content as UTF-8 text.
    pub content: &'static str,
}

/// A named template subtree and where it lands in the new project.
#[derive(Debug, Clone, Copy)]
pub struct Subtree {
    /// Directory name under the embedded template root.
    pub source: &'static str,
    /// Destination relative to the project root; empty means the root itself.
    pub dest: &'static str,
}

/// Core configuration files, copied to the project root.
pub const CORE_SUBTREE: Subtree = Subtree { source: "core", dest: "" };

/// CI workflow files.
pub const WORKFLOWS_SUBTREE: Subtree = Subtree { source: "workflows", dest: ".github/workflows" };

/// Test scaffolding.
pub const TESTS_SUBTREE: Subtree = Subtree { source: "tests", dest: "tests" };

/// Hidden agent configuration, deployed when the agents flag is enabled.
pub const AGENTS_SUBTREE: Subtree = Subtree { source: "agents", dest: ".agents" };

/// Maintainer scripts, deployed when the dev-scripts flag is enabled.
pub const DEV_SUBTREE: Subtree = Subtree { source: "dev", dest: "dev" };

/// Template for the generated package descriptor.
pub fn description_template() -> &'static str {
    include_str!("template/DESCRIPTION.in")
}

/// Fixed boilerplate for the `.Rproj` project file.
pub fn rproj_content() -> &'static str {
    include_str!("template/project.Rproj.in")
}

/// Returns the files of a named subtree, sorted by path.
pub fn subtree_files(subtree: &Subtree) -> Result<Vec<TemplateFile>, AppError> {
    let dir = TEMPLATE_DIR
        .get_dir(subtree.source)
        .ok_or_else(|| AppError::TemplateNotFound(subtree.source.to_string()))?;

    let mut files = Vec::new();
    collect_files(dir, subtree.source, &mut files)?;

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

fn collect_files(
    dir: &'static Dir,
    prefix: &str,
    files: &mut Vec<TemplateFile>,
) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let path = file.path().to_string_lossy().to_string();
                // A non-UTF-8 bundle entry is a broken build of the tool,
                // not something to skip silently.
                let content = file.contents_utf8().ok_or_else(|| AppError::Render {
                    file: path.clone(),
                    details: "template file is not valid UTF-8".to_string(),
                })?;
                let relative =
                    path.strip_prefix(prefix).unwrap_or(&path).trim_start_matches('/').to_string();
                files.push(TemplateFile { path: relative, content });
            }
            DirEntry::Dir(subdir) => collect_files(subdir, prefix, files)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_subtree_includes_ignore_rules() {
        let files = subtree_files(&CORE_SUBTREE).unwrap();
        assert!(files.iter().any(|f| f.path == ".gitignore"));
        assert!(files.iter().any(|f| f.path == ".Rbuildignore"));
    }

    #[test]
    fn core_subtree_includes_lint_and_site_config() {
        let files = subtree_files(&CORE_SUBTREE).unwrap();
        assert!(files.iter().any(|f| f.path == ".lintr"));
        assert!(files.iter().any(|f| f.path == "_pkgdown.yml"));
        assert!(files.iter().any(|f| f.path == ".Rprofile"));
    }

    #[test]
    fn workflows_subtree_has_check_and_site_jobs() {
        let files = subtree_files(&WORKFLOWS_SUBTREE).unwrap();
        assert!(files.iter().any(|f| f.path == "R-CMD-check.yaml"));
        assert!(files.iter().any(|f| f.path == "pkgdown.yaml"));
    }

    #[test]
    fn tests_subtree_has_runner_and_placeholder() {
        let files = subtree_files(&TESTS_SUBTREE).unwrap();
        assert!(files.iter().any(|f| f.path == "testthat.R"));
        assert!(files.iter().any(|f| f.path == "testthat/test-smoke.R"));
    }

    #[test]
    fn subtree_files_are_sorted() {
        let files = subtree_files(&DEV_SUBTREE).unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
    }

    #[test]
    fn every_bundled_subtree_decodes_as_utf8() {
        for subtree in
            [CORE_SUBTREE, WORKFLOWS_SUBTREE, TESTS_SUBTREE, AGENTS_SUBTREE, DEV_SUBTREE]
        {
            let files = subtree_files(&subtree)
                .unwrap_or_else(|e| panic!("subtree '{}' should load: {e}", subtree.source));
            assert!(!files.is_empty(), "subtree '{}' should not be empty", subtree.source);
        }
    }

    #[test]
    fn missing_subtree_is_a_broken_installation() {
        let bogus = Subtree { source: "does-not-exist", dest: "" };
        match subtree_files(&bogus) {
            Err(AppError::TemplateNotFound(name)) => assert_eq!(name, "does-not-exist"),
            other => panic!("expected TemplateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn descriptor_template_carries_name_placeholder() {
        assert!(description_template().contains("{{ name }}"));
    }

    #[test]
    fn rproj_boilerplate_is_fixed_text() {
        let content = rproj_content();
        assert!(content.contains("Version:"));
        assert!(!content.contains("{{"));
    }
}
