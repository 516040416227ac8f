use crate::cli::Cli;
use std::path::PathBuf;

/// Run settings, fixed once the command line has been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Print the diff-URL block
    pub review: bool,
    /// Print the `go get` block
    pub update: bool,
    pub include_indirect: bool,
    pub verbose: bool,
    pub project_path: PathBuf,
    pub go_binary: PathBuf,
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Self {
            review: true,
            update: true,
            include_indirect: false,
            verbose: false,
            project_path: PathBuf::from("."),
            go_binary: PathBuf::from("go"),
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            review: cli.review,
            update: cli.update,
            include_indirect: cli.include_indirect,
            verbose: cli.verbose,
            project_path: PathBuf::from(&cli.path),
            go_binary: PathBuf::from(&cli.go_binary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn maps_cli_flags() {
        let cli = Cli::try_parse_from([
            "go-get-em",
            "--review=false",
            "--include-indirect",
            "--path",
            "/src/app",
            "--go",
            "/opt/go/bin/go",
        ])
        .unwrap();
        let config = Config::from(&cli);

        assert!(!config.review);
        assert!(config.update);
        assert!(config.include_indirect);
        assert_eq!(config.project_path, PathBuf::from("/src/app"));
        assert_eq!(config.go_binary, PathBuf::from("/opt/go/bin/go"));
    }
}
