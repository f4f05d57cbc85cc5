// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> apply_to(Config) --> cmd::run_* handlers
//!   config, inspect, msbuild, mstest, devenv, assembly_info
//!
//! tool handlers:
//!   load_project()          project.file --> ProjectModel (optional)
//!   check_configuration()   project.configuration must exist in the model
//!   resolve_build_file()    build_file > project.file > discovery in cwd
//!   execute()               --dry: log only, else ProcessBuilder::run()
//! ```

pub mod assembly_info;
pub mod config;
pub mod devenv;
pub mod inspect;
pub mod msbuild;
pub mod mstest;


use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use crate::command::CommandLine;
use crate::config::Config;
use crate::core::process::builder::ProcessBuilder;
use crate::error::{ConfigError, Result};
use crate::project::ProjectModel;
use crate::project::parser::ProjectParser;
use crate::utility::fs::find_build_file;

/// Parses `project.file` when one is configured.
///
/// # Errors
///
/// Returns the parser error, with the project path as context.
pub fn load_project(config: &Config) -> Result<Option<ProjectModel>> {
    let Some(path) = config.project.file.as_deref() else {
        return Ok(None);
    };
    let model = ProjectParser::new()
        .language(config.project.language)
        .parse_file(path)
        .with_context(|| format!("failed to load project {}", path.display()))?;
    debug!(
        project = %path.display(),
        language = %model.language(),
        configurations = model.configurations().len(),
        "project loaded"
    );
    Ok(Some(model))
}

/// Fails when `name` is not one of the project's build configurations.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` listing the known configurations.
pub fn check_configuration(model: &ProjectModel, name: &str) -> Result<()> {
    if model.configurations().contains(name) {
        return Ok(());
    }
    let known = model.configurations().names().collect::<Vec<_>>().join(", ");
    Err(ConfigError::InvalidValue {
        section: "project".to_string(),
        key: "configuration".to_string(),
        message: format!(
            "'{name}' is not defined in {} (known: {known})",
            model.path().display()
        ),
    }
    .into())
}

/// Picks the file handed to a tool: `project.build_file`, else
/// `project.file`, else the single solution or project found in `cwd`.
///
/// # Errors
///
/// Returns an error if discovery finds no candidate or more than one.
pub fn resolve_build_file(config: &Config, cwd: &Path) -> Result<PathBuf> {
    if let Some(path) = config
        .project
        .build_file
        .as_ref()
        .or(config.project.file.as_ref())
    {
        return Ok(path.clone());
    }

    let found = find_build_file(cwd)?;
    let relative = found
        .strip_prefix(cwd)
        .map_or_else(|_| found.clone(), Path::to_path_buf);
    info!(build_file = %relative.display(), "using discovered build file");
    Ok(relative)
}

/// Process for `command` in `cwd`, decoding output per `tools.output_encoding`.
///
/// # Errors
///
/// Returns an error if a bare tool name is not in PATH.
pub fn tool_process(command: &CommandLine, cwd: &Path, config: &Config) -> Result<ProcessBuilder> {
    Ok(ProcessBuilder::from_command_line(command)?
        .cwd(cwd)
        .output_encoding(config.tools.output_encoding))
}

/// Runs `command` in `cwd`, or only logs it in dry-run mode.
///
/// # Errors
///
/// Returns an error if the tool cannot be found, fails to start, or exits
/// with a non-zero code.
pub async fn execute(command: &CommandLine, cwd: &Path, config: &Config) -> Result<()> {
    if config.global.dry {
        info!("[dry-run] Would run {command}");
        return Ok(());
    }

    tool_process(command, cwd, config)?
        .run()
        .await
        .with_context(|| format!("{} failed", command.program()))?;
    debug!("{} finished", command.program());
    Ok(())
}
