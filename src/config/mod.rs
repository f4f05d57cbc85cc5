// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for dnbuild.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. dnbuild.toml (cwd, optional)
//! 3. --config files
//! 4. DNBUILD_* env vars
//! 5. --set overrides and CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! Sections and keys are separated by a double underscore, keys keep their
//! single underscores:
//!
//! ```text
//! DNBUILD_GLOBAL__DRY=true                 → global.dry = true
//! DNBUILD_PROJECT__CONFIGURATION=Release   → project.configuration = "Release"
//! DNBUILD_MSBUILD__NODE_REUSE=true         → msbuild.node_reuse = true
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

pub use loader::ConfigLoader;
use types::{
    AssemblyInfoConfig, DevEnvConfig, GlobalConfig, MsBuildConfig, MsTestConfig, ProjectConfig,
    ToolsConfig,
};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "dnbuild.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "DNBUILD";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub tools: ToolsConfig,
    pub project: ProjectConfig,
    pub msbuild: MsBuildConfig,
    pub mstest: MsTestConfig,
    pub devenv: DevEnvConfig,
    pub assembly_info: AssemblyInfoConfig,
}

impl Config {
    /// Creates a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dnbuild::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("dnbuild.toml")
    ///     .with_env_prefix("DNBUILD")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Loads configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Loads configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values that deserialize fine but cannot drive a build.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` for an empty configuration name or
    /// tool path.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let missing = |section: &str, key: &str| ConfigError::MissingKey {
            section: section.to_string(),
            key: key.to_string(),
        };

        if self.project.configuration.trim().is_empty() {
            return Err(missing("project", "configuration"));
        }
        for (key, path) in [
            ("msbuild", &self.tools.msbuild),
            ("mstest", &self.tools.mstest),
            ("devenv", &self.tools.devenv),
        ] {
            if path.as_os_str().is_empty() {
                return Err(missing("tools", key));
            }
        }
        Ok(())
    }

    /// Formats every option as `key = value`, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_tools_options(&mut options);
        self.format_project_options(&mut options);
        self.format_msbuild_options(&mut options);
        self.format_mstest_options(&mut options);
        self.format_devenv_options(&mut options);
        self.format_assembly_info_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.to_string(),
        );
        options.insert("global.log_file".into(), opt_path(self.global.log_file.as_ref()));
        options.insert(
            "global.log_format".into(),
            format!("{:?}", self.global.log_format).to_lowercase(),
        );
    }

    fn format_tools_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("tools.msbuild".into(), self.tools.msbuild.display().to_string());
        options.insert("tools.mstest".into(), self.tools.mstest.display().to_string());
        options.insert("tools.devenv".into(), self.tools.devenv.display().to_string());
        options.insert(
            "tools.output_encoding".into(),
            self.tools.output_encoding.to_string(),
        );
    }

    fn format_project_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("project.file".into(), opt_path(self.project.file.as_ref()));
        options.insert(
            "project.language".into(),
            self.project
                .language
                .map_or_else(String::new, |l| l.to_string()),
        );
        options.insert(
            "project.build_file".into(),
            opt_path(self.project.build_file.as_ref()),
        );
        options.insert(
            "project.configuration".into(),
            self.project.configuration.clone(),
        );
        options.insert("project.platform".into(), self.project.platform.clone());
    }

    fn format_msbuild_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("msbuild.targets".into(), self.msbuild.targets.join(";"));
        options.insert(
            "msbuild.node_reuse".into(),
            self.msbuild.node_reuse.to_string(),
        );
        options.insert(
            "msbuild.max_cpu_count".into(),
            self.msbuild.max_cpu_count.to_string(),
        );
        options.insert(
            "msbuild.verbosity".into(),
            self.msbuild
                .verbosity
                .map_or_else(String::new, |v| v.to_string()),
        );
        for (key, value) in &self.msbuild.properties {
            options.insert(format!("msbuild.properties.{key}"), value.clone());
        }
    }

    fn format_mstest_options(&self, options: &mut BTreeMap<String, String>) {
        let join = |paths: &[PathBuf]| {
            paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(";")
        };
        options.insert(
            "mstest.test_metadata".into(),
            join(&self.mstest.test_metadata),
        );
        options.insert(
            "mstest.test_containers".into(),
            join(&self.mstest.test_containers),
        );
        options.insert(
            "mstest.test_list".into(),
            self.mstest.test_list.clone().unwrap_or_default(),
        );
        options.insert(
            "mstest.run_config".into(),
            opt_path(self.mstest.run_config.as_ref()),
        );
        options.insert(
            "mstest.results_file".into(),
            opt_path(self.mstest.results_file.as_ref()),
        );
    }

    fn format_devenv_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "devenv.action".into(),
            self.devenv.action.to_string().to_lowercase(),
        );
        options.insert(
            "devenv.project".into(),
            self.devenv.project.clone().unwrap_or_default(),
        );
        options.insert("devenv.out".into(), opt_path(self.devenv.out.as_ref()));
    }

    fn format_assembly_info_options(&self, options: &mut BTreeMap<String, String>) {
        let info = &self.assembly_info;
        for (key, value) in [
            ("title", &info.title),
            ("company", &info.company),
            ("description", &info.description),
            ("guid", &info.guid),
            ("version", &info.version),
        ] {
            options.insert(
                format!("assembly_info.{key}"),
                value.clone().unwrap_or_default(),
            );
        }
        options.insert(
            "assembly_info.output".into(),
            opt_path(info.output.as_ref()),
        );
    }
}

fn opt_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(String::new, |p| p.display().to_string())
}
