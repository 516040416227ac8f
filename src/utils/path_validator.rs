use crate::error::{GgeError, Result};
use std::path::{Path, PathBuf};

/// Canonicalises user supplied paths before they are handed to a subprocess.
pub struct PathValidator;

impl PathValidator {
    /// Validates and canonicalises an incoming project path.
    pub fn validate_project_path(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        let canonical = path.canonicalize().map_err(|e| {
            GgeError::ProjectValidation(format!("Invalid path '{}': {e}", path.display()))
        })?;

        if !canonical.is_dir() {
            return Err(GgeError::ProjectValidation(format!(
                "Path '{}' is not a directory",
                canonical.display()
            )));
        }

        Ok(canonical)
    }

    /// Returns `dir/name` if it exists as a regular file.
    pub fn existing_file(dir: impl AsRef<Path>, name: &str) -> Option<PathBuf> {
        let candidate = dir.as_ref().join(name);
        candidate.is_file().then_some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn validate_project_path_accepts_directory() {
        let dir = tempdir().unwrap();
        let canonical = PathValidator::validate_project_path(dir.path()).unwrap();
        assert!(canonical.is_absolute());
    }

    #[test]
    fn validate_project_path_rejects_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("file.txt");
        fs::write(&file_path, "test").unwrap();
        let err = PathValidator::validate_project_path(&file_path).unwrap_err();
        assert!(matches!(err, GgeError::ProjectValidation(_)));
    }

    #[test]
    fn validate_project_path_rejects_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(PathValidator::validate_project_path(missing).is_err());
    }

    #[test]
    fn existing_file_ignores_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("go.mod")).unwrap();
        assert!(PathValidator::existing_file(dir.path(), "go.mod").is_none());

        fs::write(dir.path().join("go.work"), "go 1.22\n").unwrap();
        assert!(PathValidator::existing_file(dir.path(), "go.work").is_some());
    }
}
