//! Hosting-platform diff links for outdated modules.

pub mod repo_path;

pub use repo_path::repo_path;

use crate::gomod::Module;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostingPlatform {
    Bitbucket,
    GitHub,
    Unknown,
}

impl HostingPlatform {
    pub fn detect(module_path: &str) -> Self {
        if module_path.starts_with("bitbucket.org") {
            HostingPlatform::Bitbucket
        } else if module_path.starts_with("github.com") {
            HostingPlatform::GitHub
        } else {
            HostingPlatform::Unknown
        }
    }

    /// Comparison URL between `old` and `new`, or `None` for unknown hosts.
    pub fn compare_url(&self, module_path: &str, old: &str, new: &str) -> Option<String> {
        let repo = repo_path(module_path);
        match self {
            HostingPlatform::Bitbucket => Some(format!(
                "https://{repo}/branches/compare/{new}%0D{old}#commits"
            )),
            HostingPlatform::GitHub => Some(format!("https://{repo}/compare/{old}...{new}")),
            HostingPlatform::Unknown => None,
        }
    }
}

/// Shell line for reviewing the pending update of `module`.
///
/// Returns `None` when the module has no update.
pub fn review_command(module: &Module) -> Option<String> {
    let new = module.update_version()?;
    let old = module.version.as_str();
    let line = match HostingPlatform::detect(&module.path).compare_url(&module.path, old, new) {
        Some(url) => format!("open {url}"),
        None => format!(
            "# Not sure how to render a diff URL for this module: {} {} {}",
            module.path, old, new
        ),
    };
    Some(line)
}
