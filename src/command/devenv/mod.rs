// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Visual Studio `devenv` command line.
//!
//! ```text
//! devenv.exe <solution> /Build|/Rebuild|/Clean "<config>[|<platform>]"
//!            [/Project <name>] [/Out <log file>]
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::CommandLine;

/// Solution-level action.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DevEnvAction {
    #[default]
    Build,
    Rebuild,
    Clean,
}

impl DevEnvAction {
    /// Switch name without the leading slash.
    #[must_use]
    pub const fn switch(self) -> &'static str {
        match self {
            Self::Build => "Build",
            Self::Rebuild => "Rebuild",
            Self::Clean => "Clean",
        }
    }
}

impl std::fmt::Display for DevEnvAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.switch())
    }
}

/// Builder for a `devenv` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevEnvCommand {
    executable: PathBuf,
    solution: Option<PathBuf>,
    action: DevEnvAction,
    configuration: String,
    platform: Option<String>,
    project: Option<String>,
    out: Option<PathBuf>,
}

impl DevEnvCommand {
    #[must_use]
    pub fn new(executable: impl Into<PathBuf>, configuration: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            solution: None,
            action: DevEnvAction::Build,
            configuration: configuration.into(),
            platform: None,
            project: None,
            out: None,
        }
    }

    #[must_use]
    pub fn solution(mut self, path: impl Into<PathBuf>) -> Self {
        self.solution = Some(path.into());
        self
    }

    #[must_use]
    pub const fn action(mut self, action: DevEnvAction) -> Self {
        self.action = action;
        self
    }

    #[must_use]
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Restricts the action to one project of the solution.
    #[must_use]
    pub fn project(mut self, name: impl Into<String>) -> Self {
        self.project = Some(name.into());
        self
    }

    /// Log file receiving the build output.
    #[must_use]
    pub fn out(mut self, path: impl Into<PathBuf>) -> Self {
        self.out = Some(path.into());
        self
    }

    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// `Debug` or `Debug|Any CPU`.
    #[must_use]
    pub fn configuration_spec(&self) -> String {
        match self.platform.as_deref().filter(|p| !p.is_empty()) {
            Some(platform) => format!("{}|{platform}", self.configuration),
            None => self.configuration.clone(),
        }
    }

    #[must_use]
    pub fn to_command_line(&self) -> CommandLine {
        let mut cmd = CommandLine::new(self.executable.display().to_string());

        if let Some(solution) = &self.solution {
            cmd = cmd.positional(solution.display().to_string());
        }
        cmd = cmd
            .flag(self.action.switch())
            .positional(self.configuration_spec());
        if let Some(project) = &self.project {
            cmd = cmd.spaced_switch("Project", project.as_str());
        }
        if let Some(out) = &self.out {
            cmd = cmd.spaced_switch("Out", out.display().to_string());
        }
        cmd
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.to_command_line().render()
    }
}
