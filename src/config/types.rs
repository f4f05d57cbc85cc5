// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! Config
//!   global         dry, log levels, log file
//!   tools          msbuild, mstest, devenv executables, output encoding
//!   project        project file, language override, build file,
//!                  configuration, platform
//!   msbuild        targets, properties, node_reuse, max_cpu_count, verbosity
//!   mstest         test_metadata, test_containers, test_list, run_config,
//!                  results_file
//!   devenv         action, project, out
//!   assembly_info  title, company, description, guid, version, output
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::command::devenv::DevEnvAction;
use crate::command::msbuild::Verbosity;
use crate::logging::{LogFormat, LogLevel};
use crate::project::ProjectLanguage;
use crate::utility::encoding::Encoding;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Print command lines instead of running them, write nothing.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Line format of the log file.
    pub log_format: LogFormat,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::DEBUG,
            log_file: None,
            log_format: LogFormat::Text,
        }
    }
}

/// Tool executables: bare names are looked up in PATH.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub msbuild: PathBuf,
    pub mstest: PathBuf,
    pub devenv: PathBuf,
    /// Code page the tools write their console output in.
    pub output_encoding: Encoding,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            msbuild: PathBuf::from("msbuild.exe"),
            mstest: PathBuf::from("mstest.exe"),
            devenv: PathBuf::from("devenv.exe"),
            output_encoding: Encoding::Utf8,
        }
    }
}

/// The project being built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// `.csproj`/`.vbproj` file to read settings from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Forces the project language instead of detecting it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<ProjectLanguage>,
    /// Solution or project handed to the tools; discovered when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_file: Option<PathBuf>,
    /// Build configuration name, e.g. `Debug`.
    pub configuration: String,
    /// Platform name, e.g. `Any CPU`.
    pub platform: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            file: None,
            language: None,
            build_file: None,
            configuration: "Debug".to_string(),
            platform: "Any CPU".to_string(),
        }
    }
}

/// `MSBuild` options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MsBuildConfig {
    pub targets: Vec<String>,
    /// Extra properties, emitted after `Platform` and `Configuration`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    pub node_reuse: bool,
    pub max_cpu_count: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<Verbosity>,
}

impl Default for MsBuildConfig {
    fn default() -> Self {
        Self {
            targets: vec!["Build".to_string()],
            properties: BTreeMap::new(),
            node_reuse: false,
            max_cpu_count: false,
            verbosity: None,
        }
    }
}

/// `MSTest` options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MsTestConfig {
    pub test_metadata: Vec<PathBuf>,
    pub test_containers: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_list: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_config: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_file: Option<PathBuf>,
}

/// `devenv` options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DevEnvConfig {
    pub action: DevEnvAction,
    /// Single project of the solution to act on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Log file for the build output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out: Option<PathBuf>,
}

/// Generated `AssemblyInfo` metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssemblyInfoConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Target file; defaults to the language's usual location in the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}
