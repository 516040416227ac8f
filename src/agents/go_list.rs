use crate::error::{GgeError, Result};
use crate::gomod::{Module, decode_modules};
use crate::source::ModuleSource;
use crate::utils::log;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const LIST_ARGS: [&str; 5] = ["list", "-m", "-u", "-json", "all"];
/// `-u` cannot be computed from a vendor directory
const BYPASS_VENDOR_ARG: &str = "-mod=mod";

/// GoListAgent lists the module graph through `go list -m -u -json all`
pub struct GoListAgent {
    go_binary: PathBuf,
    project_path: PathBuf,
    bypass_vendor: bool,
}

impl GoListAgent {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(go_binary: P, project_path: Q) -> Self {
        Self {
            go_binary: go_binary.as_ref().to_path_buf(),
            project_path: project_path.as_ref().to_path_buf(),
            bypass_vendor: false,
        }
    }

    /// Resolve modules from the module cache even when a `vendor/` directory exists
    pub fn bypass_vendor(mut self, bypass: bool) -> Self {
        self.bypass_vendor = bypass;
        self
    }

    fn args(&self) -> Vec<&'static str> {
        let mut args = vec![LIST_ARGS[0], LIST_ARGS[1]];
        if self.bypass_vendor {
            args.push(BYPASS_VENDOR_ARG);
        }
        args.extend_from_slice(&LIST_ARGS[2..]);
        args
    }

    /// Human readable form of the command, used in logs and errors
    pub fn command_line(&self) -> String {
        format!("{} {}", self.go_binary.display(), self.args().join(" "))
    }

    /// Run the listing command and return its captured stdout.
    ///
    /// Stderr is inherited so download progress and toolchain errors reach the terminal.
    fn execute_list_command(&self) -> Result<Vec<u8>> {
        let command_line = self.command_line();
        log::info(format!("Sit tight, executing command: {command_line}"));

        let output = Command::new(&self.go_binary)
            .current_dir(&self.project_path)
            .args(self.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| GgeError::CommandSpawn {
                command: command_line.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GgeError::CommandFailed {
                command: command_line,
                status: output.status,
            });
        }

        Ok(output.stdout)
    }
}

impl ModuleSource for GoListAgent {
    fn list_modules(&self) -> Result<Vec<Module>> {
        let stdout = self.execute_list_command()?;
        decode_modules(&stdout)
    }
}
