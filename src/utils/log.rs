//! Diagnostic output. Everything here goes to stderr so stdout only ever
//! carries the shell commands.

use colored::Colorize;
use std::io::IsTerminal;

/// Variables `colored` already honours on its own.
const COLOR_ENV_VARS: [&str; 3] = ["NO_COLOR", "CLICOLOR", "CLICOLOR_FORCE"];

/// Colour decisions follow stderr, since that is where every tag is written.
pub fn init_colors() {
    let stderr_is_terminal = std::io::stderr().is_terminal();
    if let Some(enabled) =
        stderr_color_override(|name| std::env::var_os(name).is_some(), stderr_is_terminal)
    {
        colored::control::set_override(enabled);
    }
}

fn stderr_color_override(is_set: impl Fn(&str) -> bool, stderr_is_terminal: bool) -> Option<bool> {
    if COLOR_ENV_VARS.iter().any(|name| is_set(name)) {
        None
    } else {
        Some(stderr_is_terminal)
    }
}

pub fn info(message: impl AsRef<str>) {
    eprintln!("{} {}", "[INFO]".cyan(), message.as_ref());
}

pub fn warn(message: impl AsRef<str>) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), message.as_ref());
}

pub fn debug(verbose: bool, message: impl AsRef<str>) {
    if verbose {
        eprintln!("{}", format!("[DEBUG] {}", message.as_ref()).dimmed());
    }
}
