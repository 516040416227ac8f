mod agents;
mod cli;
mod config;
mod error;
mod gomod;
mod source;
mod utils;
mod vcs;
mod workflow;

use agents::{GoListAgent, ProjectScannerAgent};
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use config::Config;
use error::Result;
use std::process;
use utils::log;

fn main() {
    let cli = Cli::parse();
    log::init_colors();
    let config = Config::from(&cli);

    if let Err(e) = run(&config) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let project_info = ProjectScannerAgent::new(&config.project_path).validate()?;
    match &project_info.go_mod_path {
        Some(go_mod) => log::debug(
            config.verbose,
            format!("Using module file {}", go_mod.display()),
        ),
        None => log::debug(
            config.verbose,
            format!("No go.mod found above {}", project_info.project_path.display()),
        ),
    }
    if let Some(go_work) = &project_info.go_work_path {
        log::debug(
            config.verbose,
            format!("Workspace file {} is active", go_work.display()),
        );
    }

    let agent = GoListAgent::new(&config.go_binary, &project_info.project_path)
        .bypass_vendor(project_info.has_vendor);

    let stdout = std::io::stdout();
    let outcome = workflow::execute(&agent, config, &mut stdout.lock())?;
    if let workflow::Outcome::Printed { outdated } = outcome {
        log::debug(
            config.verbose,
            format!("Printed commands for {outdated} outdated modules"),
        );
    }
    Ok(())
}
