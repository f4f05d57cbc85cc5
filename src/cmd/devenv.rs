// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `devenv` command.

use std::path::Path;

use tracing::info;

use super::{check_configuration, execute, load_project, resolve_build_file};
use crate::cli::tools::DevEnvArgs;
use crate::command::devenv::DevEnvCommand;
use crate::config::Config;
use crate::error::Result;

/// Builds the `devenv` invocation for `config`.
///
/// # Errors
///
/// Returns an error if the project cannot be parsed, does not define the
/// selected configuration, or no solution can be determined.
pub fn devenv_command(config: &Config, cwd: &Path) -> Result<DevEnvCommand> {
    if let Some(model) = load_project(config)? {
        check_configuration(&model, &config.project.configuration)?;
    }
    let solution = resolve_build_file(config, cwd)?;

    let mut command = DevEnvCommand::new(&config.tools.devenv, &config.project.configuration)
        .solution(solution)
        .action(config.devenv.action)
        .platform(&config.project.platform);
    if let Some(project) = &config.devenv.project {
        command = command.project(project);
    }
    if let Some(out) = &config.devenv.out {
        command = command.out(out);
    }
    Ok(command)
}

/// Main handler for the `devenv` command.
///
/// # Errors
///
/// Returns an error if the command cannot be built or `devenv` fails.
pub async fn run_devenv_command(args: &DevEnvArgs, config: &Config, cwd: &Path) -> Result<()> {
    let mut config = config.clone();
    args.apply_to(&mut config);

    let command = devenv_command(&config, cwd)?.to_command_line();
    execute(&command, cwd, &config).await?;

    if !config.global.dry {
        info!(action = %config.devenv.action, "devenv completed successfully");
    }
    Ok(())
}
