use jiff::Timestamp;
use serde::{Deserialize, Deserializer};

/// One entry of `go list -m -json` output.
///
/// Field names follow <https://go.dev/ref/mod#go-list-m>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Module {
    /// Module path, e.g. `github.com/org/repo`
    pub path: String,
    /// Currently resolved version
    pub version: String,
    /// Available module versions (with `-versions`)
    #[allow(dead_code)]
    pub versions: Vec<String>,
    /// Module that replaces this one, if any
    pub replace: Option<Box<Module>>,
    /// Time the version was created
    #[allow(dead_code)]
    pub time: Option<Timestamp>,
    /// Available update (with `-u`)
    pub update: Option<Box<Module>>,
    /// Whether this is the main module
    #[allow(dead_code)]
    pub main: bool,
    /// Module is only indirectly needed by the main module
    pub indirect: bool,
    #[allow(dead_code)]
    pub dir: Option<String>,
    #[allow(dead_code)]
    pub go_mod: Option<String>,
    #[allow(dead_code)]
    pub go_version: Option<String>,
    /// Retraction information (with `-retracted` or `-u`)
    pub retracted: Vec<String>,
    /// Deprecation message (with `-u`)
    #[serde(deserialize_with = "non_empty_string")]
    pub deprecated: Option<String>,
    /// Error loading the module
    pub error: Option<ModuleError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModuleError {
    pub err: String,
}

#[cfg(test)]
impl Module {
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    pub fn with_update(mut self, version: impl Into<String>) -> Self {
        self.update = Some(Box::new(Module::new(self.path.clone(), version)));
        self
    }

    pub fn indirect(mut self) -> Self {
        self.indirect = true;
        self
    }

    pub fn deprecated(mut self, message: impl Into<String>) -> Self {
        self.deprecated = Some(message.into());
        self
    }
}

impl Module {
    /// Version of the pending update, if one exists.
    pub fn update_version(&self) -> Option<&str> {
        self.update.as_deref().map(|update| update.version.as_str())
    }

    pub fn is_retracted(&self) -> bool {
        self.retracted.iter().any(|v| *v == self.version)
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_go_list_fields() {
        let json = r#"{
            "Path": "github.com/pkg/errors",
            "Version": "v0.8.1",
            "Time": "2019-01-03T19:45:44Z",
            "Update": {
                "Path": "github.com/pkg/errors",
                "Version": "v0.9.1",
                "Time": "2020-01-14T19:47:44Z"
            },
            "Indirect": true,
            "Dir": "/go/pkg/mod/github.com/pkg/errors@v0.8.1",
            "GoMod": "/go/pkg/mod/cache/download/github.com/pkg/errors/@v/v0.8.1.mod",
            "Deprecated": "use the standard library"
        }"#;

        let module: Module = serde_json::from_str(json).unwrap();
        assert_eq!(module.path, "github.com/pkg/errors");
        assert_eq!(module.version, "v0.8.1");
        assert_eq!(module.update_version(), Some("v0.9.1"));
        assert!(module.indirect);
        assert!(!module.main);
        assert_eq!(module.deprecated.as_deref(), Some("use the standard library"));
        assert_eq!(
            module.time.map(|t| t.as_second()),
            Some(1_546_544_744)
        );
    }

    #[test]
    fn empty_deprecation_is_absent() {
        let module: Module =
            serde_json::from_str(r#"{"Path":"a.b/c","Version":"v1.0.0","Deprecated":""}"#).unwrap();
        assert_eq!(module.deprecated, None);
    }

    #[test]
    fn ignores_unknown_fields() {
        let module: Module =
            serde_json::from_str(r#"{"Path":"a.b/c","Origin":{"VCS":"git"}}"#).unwrap();
        assert_eq!(module.path, "a.b/c");
        assert!(module.update.is_none());
    }

    #[test]
    fn detects_retracted_current_version() {
        let module: Module = serde_json::from_str(
            r#"{"Path":"a.b/c","Version":"v1.0.1","Retracted":["v1.0.1"]}"#,
        )
        .unwrap();
        assert!(module.is_retracted());
        assert!(!Module::new("a.b/c", "v1.0.2").is_retracted());
    }

    #[test]
    fn decodes_module_error() {
        let module: Module = serde_json::from_str(
            r#"{"Path":"a.b/c","Error":{"Err":"module lookup disabled"}}"#,
        )
        .unwrap();
        assert_eq!(
            module.error,
            Some(ModuleError {
                err: "module lookup disabled".into()
            })
        );
    }
}
