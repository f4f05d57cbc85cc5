// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `mstest` command.

use std::path::Path;

use tracing::info;

use super::execute;
use crate::cli::tools::MsTestArgs;
use crate::command::mstest::MsTestCommand;
use crate::config::Config;
use crate::config::types::MsTestConfig;
use crate::error::{ConfigError, Result};

/// Builds the `MSTest` invocation for `config`.
///
/// # Errors
///
/// Returns `ConfigError::MissingKey` when neither test metadata nor test
/// containers are configured.
pub fn mstest_command(config: &Config) -> Result<MsTestCommand> {
    let MsTestConfig {
        test_metadata,
        test_containers,
        test_list,
        run_config,
        results_file,
    } = &config.mstest;

    if test_metadata.is_empty() && test_containers.is_empty() {
        return Err(ConfigError::MissingKey {
            section: "mstest".to_string(),
            key: "test_metadata".to_string(),
        }
        .into());
    }

    let mut command = test_metadata
        .iter()
        .fold(MsTestCommand::new(&config.tools.mstest), |cmd, path| {
            cmd.test_metadata(path)
        });
    command = test_containers
        .iter()
        .fold(command, |cmd, path| cmd.test_container(path));
    if let Some(list) = test_list {
        command = command.test_list(list);
    }
    if let Some(path) = run_config {
        command = command.run_config(path);
    }
    if let Some(path) = results_file {
        command = command.results_file(path);
    }
    Ok(command)
}

/// Main handler for the `mstest` command.
///
/// # Errors
///
/// Returns an error if nothing is configured to test or `MSTest` fails.
pub async fn run_mstest_command(args: &MsTestArgs, config: &Config, cwd: &Path) -> Result<()> {
    let mut config = config.clone();
    args.apply_to(&mut config);

    let command = mstest_command(&config)?.to_command_line();
    execute(&command, cwd, &config).await?;

    if !config.global.dry {
        info!("MSTest completed successfully");
    }
    Ok(())
}
