use crate::config::Config;
use crate::error::Result;
use crate::gomod::{Module, UpdateKind};
use crate::source::ModuleSource;
use crate::utils::log;
use crate::vcs;
use std::io::Write;

/// How a run ended. Every variant is a successful exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoDependencies,
    UpToDate,
    NothingRequested,
    Printed { outdated: usize },
}

/// List, filter and print review/update commands for outdated modules.
///
/// Only the command blocks are written to `out`; diagnostics go to stderr.
pub fn execute<S, W>(source: &S, config: &Config, out: &mut W) -> Result<Outcome>
where
    S: ModuleSource + ?Sized,
    W: Write,
{
    let modules = source.list_modules()?;
    if modules.is_empty() {
        log::info("No dependencies found.");
        return Ok(Outcome::NoDependencies);
    }
    log::debug(config.verbose, format!("Decoded {} modules", modules.len()));

    let outdated = select_outdated(&modules, config);
    if outdated.is_empty() {
        log::info("No outdated dependencies found.");
        return Ok(Outcome::UpToDate);
    }

    if !config.review && !config.update {
        log::info("No output requested");
        return Ok(Outcome::NothingRequested);
    }
    log::info(
        "Execute what you will of the following output to review and/or update the outdated dependencies.",
    );

    if config.review {
        writeln!(out)?;
        for line in outdated.iter().filter_map(|module| vcs::review_command(module)) {
            writeln!(out, "{line}")?;
        }
    }

    if config.update {
        writeln!(out)?;
        for line in outdated.iter().filter_map(|module| update_command(module)) {
            writeln!(out, "{line}")?;
        }
    }

    out.flush()?;
    Ok(Outcome::Printed {
        outdated: outdated.len(),
    })
}

/// Modules with a pending update, logging notable state along the way.
///
/// Indirect modules are skipped unless `config.include_indirect` is set.
pub fn select_outdated<'a>(modules: &'a [Module], config: &Config) -> Vec<&'a Module> {
    let mut outdated = Vec::new();

    for module in modules {
        if let Some(message) = &module.deprecated {
            log::warn(format!("[{}] is deprecated: {}", module.path, message));
        }
        if module.is_retracted() {
            log::warn(format!(
                "[{}] current version {} is retracted",
                module.path, module.version
            ));
        }
        if let Some(error) = &module.error {
            log::warn(format!("[{}] failed to load: {}", module.path, error.err));
        }
        if let Some(replacement) = &module.replace {
            log::debug(
                config.verbose,
                format!(
                    "[{}] is replaced by {} {}",
                    module.path, replacement.path, replacement.version
                ),
            );
        }

        let Some(new_version) = module.update_version() else {
            continue;
        };
        if module.indirect && !config.include_indirect {
            log::debug(
                config.verbose,
                format!("Skipping indirect dependency {}", module.path),
            );
            continue;
        }

        log::info(outdated_line(module, new_version));
        outdated.push(module);
    }

    outdated
}

/// `go get` line upgrading `module` to its pending update.
pub fn update_command(module: &Module) -> Option<String> {
    module
        .update_version()
        .map(|version| format!("go get -u {}@{}", module.path, version))
}

fn outdated_line(module: &Module, new_version: &str) -> String {
    let line = format!("{:>10}..{:<10}  {}", module.version, new_version, module.path);
    match UpdateKind::classify(&module.version, new_version) {
        Some(kind) => format!("{line} ({kind})"),
        None => line,
    }
}
