use regex::Regex;
use std::sync::LazyLock;

static MAJOR_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v([0-9]+)$").expect("valid major version regex"));

/// Strips a Go major-version path suffix (`/v2`, `/v3`, ...) to get the repository path.
///
/// `v0`, `v1` and anything that is not `v` followed by an integer leave the path untouched.
pub fn repo_path(module_path: &str) -> &str {
    let Some((parent, last)) = module_path.rsplit_once('/') else {
        return module_path;
    };

    let is_major_suffix = MAJOR_SUFFIX
        .captures(last)
        .and_then(|caps| caps[1].parse::<u64>().ok())
        .is_some_and(|major| major > 1);

    if is_major_suffix { parent } else { module_path }
}
