// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for dnbuild using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! dnbuild [global options] <command>
//! version
//! options
//! inspect <project> [--json] [--language L]
//! msbuild [--target T]... [--property K=V]... [BUILD_FILE]
//! mstest [--test-metadata F]... [--test-container F]...
//! devenv [--action A] [--project-name P] [SOLUTION]
//! assembly-info [--output FILE] [--version V]
//! ```

pub mod global;
pub mod tools;


use crate::cli::global::GlobalOptions;
use crate::cli::tools::{AssemblyInfoArgs, DevEnvArgs, InspectArgs, MsBuildArgs, MsTestArgs};
use clap::{Parser, Subcommand};

/// .NET build tool orchestration.
///
/// Renders and runs `MSBuild`, `MSTest` and `devenv` command lines and
/// generates `AssemblyInfo` sources from project files and configuration.
#[derive(Debug, Parser)]
#[command(
    name = "dnbuild",
    author,
    version,
    about = ".NET build tool orchestration",
    long_about = "dnbuild Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Renders and runs MSBuild, MSTest and devenv command lines and\n\
                  generates AssemblyInfo sources. See `dnbuild <command> --help`\n\
                  for more information about a command.",
    after_help = "CONFIGURATION FILES:\n\n\
                  dnbuild reads `dnbuild.toml` from the current directory when it\n\
                  exists, then every file given with --config in order. DNBUILD_*\n\
                  environment variables (DNBUILD_PROJECT__CONFIGURATION=Release)\n\
                  and --set overrides are applied last."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Parses a project file and prints its model.
    Inspect(InspectArgs),

    /// Runs MSBuild.
    #[command(name = "msbuild")]
    MsBuild(MsBuildArgs),

    /// Runs MSTest.
    #[command(name = "mstest")]
    MsTest(MsTestArgs),

    /// Runs Visual Studio's devenv.
    #[command(name = "devenv")]
    DevEnv(DevEnvArgs),

    /// Generates an AssemblyInfo source file.
    #[command(name = "assembly-info")]
    AssemblyInfo(AssemblyInfoArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
