// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-tool command arguments.
//!
//! Every flag mirrors a configuration key and, when given, replaces the
//! loaded value through `apply_to`:
//!
//! ```text
//! msbuild        --target        → msbuild.targets (replaces the list)
//!                --property K=V  → msbuild.properties.K
//!                --configuration → project.configuration
//! mstest         --test-metadata → mstest.test_metadata (replaces the list)
//! devenv         --action        → devenv.action
//! assembly-info  --version       → assembly_info.version
//! ```

use clap::{ArgAction, Args};
use std::path::PathBuf;

use crate::command::devenv::DevEnvAction;
use crate::command::msbuild::Verbosity;
use crate::config::Config;
use crate::project::ProjectLanguage;

/// Project selection shared by the build commands.
#[derive(Debug, Clone, Default, Args)]
pub struct ProjectArgs {
    /// Project file (.csproj/.vbproj) the configuration is checked against.
    #[arg(short = 'p', long = "project", value_name = "FILE")]
    pub project: Option<PathBuf>,

    /// Build configuration, e.g. Debug or Release.
    #[arg(short = 'C', long = "configuration", value_name = "NAME")]
    pub configuration: Option<String>,

    /// Platform, e.g. "Any CPU" or x64.
    #[arg(short = 'P', long = "platform", value_name = "NAME")]
    pub platform: Option<String>,
}

impl ProjectArgs {
    fn apply_to(&self, config: &mut Config) {
        if let Some(project) = &self.project {
            config.project.file = Some(project.clone());
        }
        if let Some(configuration) = &self.configuration {
            config.project.configuration.clone_from(configuration);
        }
        if let Some(platform) = &self.platform {
            config.project.platform.clone_from(platform);
        }
    }
}

/// Arguments for the `inspect` command.
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Project file to parse.
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    /// Prints the model as JSON.
    #[arg(long)]
    pub json: bool,

    /// Forces the project language (csharp, visualbasic).
    #[arg(long, value_name = "LANGUAGE")]
    pub language: Option<ProjectLanguage>,
}

/// Arguments for the `msbuild` command.
#[derive(Debug, Clone, Default, Args)]
pub struct MsBuildArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Target to build; can repeat.
    #[arg(short = 't', long = "target", value_name = "TARGET", action = ArgAction::Append)]
    pub targets: Vec<String>,

    /// Extra property as KEY=VALUE; can repeat.
    #[arg(long = "property", value_name = "KEY=VALUE", value_parser = parse_property, action = ArgAction::Append)]
    pub properties: Vec<(String, String)>,

    /// Lets MSBuild keep its nodes alive after the build.
    #[arg(long = "node-reuse")]
    pub node_reuse: bool,

    /// Builds with as many processes as there are CPUs.
    #[arg(short = 'm', long = "max-cpu-count")]
    pub max_cpu_count: bool,

    /// MSBuild console verbosity.
    #[arg(long, value_enum)]
    pub verbosity: Option<Verbosity>,

    /// Solution or project to build; discovered in the working directory when
    /// neither this nor project.build_file is set.
    #[arg(value_name = "BUILD_FILE")]
    pub build_file: Option<PathBuf>,
}

impl MsBuildArgs {
    /// Overlays the given flags onto `config`.
    pub fn apply_to(&self, config: &mut Config) {
        self.project.apply_to(config);
        if !self.targets.is_empty() {
            config.msbuild.targets.clone_from(&self.targets);
        }
        config
            .msbuild
            .properties
            .extend(self.properties.iter().cloned());
        if self.node_reuse {
            config.msbuild.node_reuse = true;
        }
        if self.max_cpu_count {
            config.msbuild.max_cpu_count = true;
        }
        if self.verbosity.is_some() {
            config.msbuild.verbosity = self.verbosity;
        }
        if let Some(build_file) = &self.build_file {
            config.project.build_file = Some(build_file.clone());
        }
    }
}

/// Arguments for the `mstest` command.
#[derive(Debug, Clone, Default, Args)]
pub struct MsTestArgs {
    /// Test metadata file (.vsmdi); can repeat.
    #[arg(long = "test-metadata", value_name = "FILE", action = ArgAction::Append)]
    pub test_metadata: Vec<PathBuf>,

    /// Test container assembly; can repeat.
    #[arg(long = "test-container", value_name = "FILE", action = ArgAction::Append)]
    pub test_containers: Vec<PathBuf>,

    /// Test list to run from the metadata file.
    #[arg(long = "test-list", value_name = "NAME")]
    pub test_list: Option<String>,

    /// Run configuration (.testrunconfig).
    #[arg(long = "run-config", value_name = "FILE")]
    pub run_config: Option<PathBuf>,

    /// Results file (.trx).
    #[arg(long = "results-file", value_name = "FILE")]
    pub results_file: Option<PathBuf>,
}

impl MsTestArgs {
    /// Overlays the given flags onto `config`.
    pub fn apply_to(&self, config: &mut Config) {
        let mstest = &mut config.mstest;
        if !self.test_metadata.is_empty() {
            mstest.test_metadata.clone_from(&self.test_metadata);
        }
        if !self.test_containers.is_empty() {
            mstest.test_containers.clone_from(&self.test_containers);
        }
        if self.test_list.is_some() {
            mstest.test_list.clone_from(&self.test_list);
        }
        if self.run_config.is_some() {
            mstest.run_config.clone_from(&self.run_config);
        }
        if self.results_file.is_some() {
            mstest.results_file.clone_from(&self.results_file);
        }
    }
}

/// Arguments for the `devenv` command.
#[derive(Debug, Clone, Default, Args)]
pub struct DevEnvArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Solution action.
    #[arg(short = 'a', long, value_enum)]
    pub action: Option<DevEnvAction>,

    /// Single project of the solution to act on.
    #[arg(long = "project-name", value_name = "NAME")]
    pub project_name: Option<String>,

    /// Log file for the build output.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Solution to build; discovered in the working directory when neither
    /// this nor project.build_file is set.
    #[arg(value_name = "SOLUTION")]
    pub solution: Option<PathBuf>,
}

impl DevEnvArgs {
    /// Overlays the given flags onto `config`.
    pub fn apply_to(&self, config: &mut Config) {
        self.project.apply_to(config);
        if let Some(action) = self.action {
            config.devenv.action = action;
        }
        if self.project_name.is_some() {
            config.devenv.project.clone_from(&self.project_name);
        }
        if self.out.is_some() {
            config.devenv.out.clone_from(&self.out);
        }
        if let Some(solution) = &self.solution {
            config.project.build_file = Some(solution.clone());
        }
    }
}

/// Arguments for the `assembly-info` command.
#[derive(Debug, Clone, Default, Args)]
pub struct AssemblyInfoArgs {
    /// Project file the language and default location come from.
    #[arg(short = 'p', long = "project", value_name = "FILE")]
    pub project: Option<PathBuf>,

    /// Language of the generated file when no project is given.
    #[arg(long, value_name = "LANGUAGE")]
    pub language: Option<ProjectLanguage>,

    /// Output file.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub guid: Option<String>,

    /// Full version; assembly and file versions use its leading digits.
    #[arg(long)]
    pub version: Option<String>,
}

impl AssemblyInfoArgs {
    /// Overlays the given flags onto `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(project) = &self.project {
            config.project.file = Some(project.clone());
        }
        if self.language.is_some() {
            config.project.language = self.language;
        }
        let info = &mut config.assembly_info;
        for (target, value) in [
            (&mut info.title, &self.title),
            (&mut info.company, &self.company),
            (&mut info.description, &self.description),
            (&mut info.guid, &self.guid),
            (&mut info.version, &self.version),
        ] {
            if value.is_some() {
                target.clone_from(value);
            }
        }
        if self.output.is_some() {
            info.output.clone_from(&self.output);
        }
    }
}

/// Splits `KEY=VALUE` at the first `=`.
fn parse_property(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
