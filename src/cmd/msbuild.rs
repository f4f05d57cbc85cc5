// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `msbuild` command.

use std::path::Path;

use tracing::info;

use super::{check_configuration, execute, load_project, resolve_build_file};
use crate::cli::tools::MsBuildArgs;
use crate::command::msbuild::MsBuildCommand;
use crate::config::Config;
use crate::error::Result;

/// Builds the `MSBuild` invocation for `config`.
///
/// `Platform` and `Configuration` come first, then `msbuild.properties`
/// in key order; a property of the same name replaces them in place.
///
/// # Errors
///
/// Returns an error if the project cannot be parsed, does not define the
/// selected configuration, or no build file can be determined.
pub fn msbuild_command(config: &Config, cwd: &Path) -> Result<MsBuildCommand> {
    if let Some(model) = load_project(config)? {
        check_configuration(&model, &config.project.configuration)?;
    }
    let build_file = resolve_build_file(config, cwd)?;

    let msbuild = &config.msbuild;
    let mut command = MsBuildCommand::new(&config.tools.msbuild)
        .targets(&msbuild.targets)
        .property("Platform", &config.project.platform)
        .property("Configuration", &config.project.configuration)
        .properties(&msbuild.properties)
        .node_reuse(msbuild.node_reuse)
        .max_cpu_count(msbuild.max_cpu_count)
        .build_file(build_file);
    if let Some(verbosity) = msbuild.verbosity {
        command = command.verbosity(verbosity);
    }
    Ok(command)
}

/// Main handler for the `msbuild` command.
///
/// # Errors
///
/// Returns an error if the command cannot be built or `MSBuild` fails.
pub async fn run_msbuild_command(args: &MsBuildArgs, config: &Config, cwd: &Path) -> Result<()> {
    let mut config = config.clone();
    args.apply_to(&mut config);

    let command = msbuild_command(&config, cwd)?.to_command_line();
    execute(&command, cwd, &config).await?;

    if !config.global.dry {
        info!(
            configuration = %config.project.configuration,
            "MSBuild completed successfully"
        );
    }
    Ok(())
}
