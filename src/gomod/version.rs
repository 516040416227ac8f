use semver::Version;
use std::fmt;

/// How far an update moves a module, judged on semver components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    Major,
    Minor,
    Patch,
    /// Same core version, e.g. a prerelease or pseudo-version bump
    Other,
}

impl UpdateKind {
    /// Returns `None` when either version is not semver-shaped.
    pub fn classify(current: &str, update: &str) -> Option<Self> {
        let current = parse_go_version(current)?;
        let update = parse_go_version(update)?;

        let kind = if current.major != update.major {
            UpdateKind::Major
        } else if current.minor != update.minor {
            UpdateKind::Minor
        } else if current.patch != update.patch {
            UpdateKind::Patch
        } else {
            UpdateKind::Other
        };
        Some(kind)
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UpdateKind::Major => "major",
            UpdateKind::Minor => "minor",
            UpdateKind::Patch => "patch",
            UpdateKind::Other => "other",
        };
        f.write_str(label)
    }
}

/// Go module versions carry a leading `v`; `+incompatible` parses as build metadata.
fn parse_go_version(version: &str) -> Option<Version> {
    let bare = version.strip_prefix('v')?;
    Version::parse(bare).ok()
}
