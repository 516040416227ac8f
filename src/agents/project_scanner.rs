use crate::error::Result;
use crate::utils::path_validator::PathValidator;
use std::path::{Path, PathBuf};

/// ProjectScannerAgent locates the Go module enclosing a directory
pub struct ProjectScannerAgent {
    project_path: PathBuf,
}

impl ProjectScannerAgent {
    pub fn new<P: AsRef<Path>>(project_path: P) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    /// Canonicalises the project path and looks upwards for `go.mod` and `go.work`,
    /// the same way `go` itself resolves the main module.
    ///
    /// A missing `go.mod` is not an error here; `go list` reports it.
    pub fn validate(&self) -> Result<ProjectInfo> {
        let project_path = PathValidator::validate_project_path(&self.project_path)?;

        let go_mod_path = Self::find_upwards(&project_path, "go.mod");
        let go_work_path = Self::find_upwards(&project_path, "go.work");
        let has_vendor = go_mod_path
            .as_deref()
            .and_then(Path::parent)
            .is_some_and(|root| root.join("vendor").is_dir());

        Ok(ProjectInfo {
            project_path,
            go_mod_path,
            go_work_path,
            has_vendor,
        })
    }

    fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
        start
            .ancestors()
            .find_map(|dir| PathValidator::existing_file(dir, name))
    }
}

#[derive(Debug, Clone)]
pub struct ProjectInfo {
    /// Directory `go list` runs in
    pub project_path: PathBuf,
    /// Nearest `go.mod` at or above `project_path`
    pub go_mod_path: Option<PathBuf>,
    /// `go list -m all` covers every workspace module when this is set
    pub go_work_path: Option<PathBuf>,
    /// `vendor/` sits next to the `go.mod` that was found
    pub has_vendor: bool,
}
