// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Options | Inspect | MsBuild | MsTest | DevEnv | AssemblyInfo
//! ```

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use dnbuild::cli::global::GlobalOptions;
use dnbuild::cli::{self, Command};
use dnbuild::cmd::assembly_info::run_assembly_info_command;
use dnbuild::cmd::config::run_options_command;
use dnbuild::cmd::devenv::run_devenv_command;
use dnbuild::cmd::inspect::run_inspect_command;
use dnbuild::cmd::msbuild::run_msbuild_command;
use dnbuild::cmd::mstest::run_mstest_command;
use dnbuild::config::loader::ConfigLoader;
use dnbuild::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use dnbuild::error::bail_out;
use dnbuild::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let config_files = loader.format_loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &config_files).await
}

fn build_log_config(config: &Config) -> LogConfig {
    let global = &config.global;
    LogConfig::builder()
        .with_console_level(global.output_log_level)
        .with_file_level(global.file_log_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .with_file_format(global.log_format)
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config, config_files: &[String]) -> ExitCode {
    let result = match std::env::current_dir().context("failed to read the working directory") {
        Ok(cwd) => run_command(cli, config, config_files, &cwd).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run_command(
    cli: &cli::Cli,
    config: &Config,
    config_files: &[String],
    cwd: &Path,
) -> dnbuild::error::Result<()> {
    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config, config_files);
            Ok(())
        }
        Some(Command::Inspect(args)) => run_inspect_command(args, config),
        Some(Command::MsBuild(args)) => run_msbuild_command(args, config, cwd).await,
        Some(Command::MsTest(args)) => run_mstest_command(args, config, cwd).await,
        Some(Command::DevEnv(args)) => run_devenv_command(args, config, cwd).await,
        Some(Command::AssemblyInfo(args)) => run_assembly_info_command(args, config, cwd),
        None => {
            Err(bail_out("no command specified, use --help for usage information").into())
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> dnbuild::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(DEFAULT_CONFIG_FILE);
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader
        .with_env_prefix(ENV_PREFIX)
        .set_pairs(global.to_config_overrides())
}
