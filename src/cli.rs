use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "go-get-em",
    about = "Run in a directory with a go.mod file to list outdated dependencies \
             and print commands to review and update them",
    version
)]
pub struct Cli {
    /// Path to the Go module directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Print 'open' commands with vcs diff URLs for outdated dependencies
    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub review: bool,

    /// Print 'go get' commands to upgrade outdated dependencies
    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub update: bool,

    /// Also report dependencies that are only indirectly required
    #[arg(long)]
    pub include_indirect: bool,

    /// Go executable used to list modules
    #[arg(long = "go", value_name = "BIN", env = "GO_GET_EM_GO", default_value = "go")]
    pub go_binary: String,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_both_blocks() {
        let cli = Cli::try_parse_from(["go-get-em"]).unwrap();
        assert!(cli.review);
        assert!(cli.update);
        assert!(!cli.include_indirect);
        assert!(!cli.verbose);
        assert_eq!(cli.path, ".");
    }

    #[test]
    fn switches_accept_explicit_values() {
        let cli = Cli::try_parse_from(["go-get-em", "--review=false", "--update", "false"]).unwrap();
        assert!(!cli.review);
        assert!(!cli.update);
    }

    #[test]
    fn bare_switch_means_true() {
        let cli = Cli::try_parse_from(["go-get-em", "--review", "--update=false"]).unwrap();
        assert!(cli.review);
        assert!(!cli.update);
    }

    #[test]
    fn rejects_non_boolean_switch_values() {
        assert!(Cli::try_parse_from(["go-get-em", "--review=maybe"]).is_err());
    }
}
