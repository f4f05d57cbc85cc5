// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `MSBuild` command line.
//!
//! ```text
//! msbuild.exe /target:T1;T2 /property:K=V;K2="v 2" /nodeReuse:B
//!             /maxcpucount /verbosity:V <build file>
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{CommandLine, join_properties, quote};

/// `/verbosity:` levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    Minimal,
    Normal,
    Detailed,
    Diagnostic,
}

impl std::fmt::Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Quiet => "quiet",
            Self::Minimal => "minimal",
            Self::Normal => "normal",
            Self::Detailed => "detailed",
            Self::Diagnostic => "diagnostic",
        };
        f.write_str(s)
    }
}

/// Builder for an `MSBuild` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsBuildCommand {
    executable: PathBuf,
    targets: Vec<String>,
    properties: Vec<(String, String)>,
    node_reuse: Option<bool>,
    max_cpu_count: bool,
    verbosity: Option<Verbosity>,
    build_file: Option<PathBuf>,
}

impl MsBuildCommand {
    #[must_use]
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            targets: Vec::new(),
            properties: Vec::new(),
            node_reuse: None,
            max_cpu_count: false,
            verbosity: None,
            build_file: None,
        }
    }

    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.targets.push(target.into());
        self
    }

    #[must_use]
    pub fn targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets = targets.into_iter().map(Into::into).collect();
        self
    }

    /// Sets a property; redefining a key replaces its value in place.
    #[must_use]
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.properties.push((key, value)),
        }
        self
    }

    #[must_use]
    pub fn properties<I, K, V>(self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        properties
            .into_iter()
            .fold(self, |cmd, (key, value)| cmd.property(key, value))
    }

    #[must_use]
    pub const fn node_reuse(mut self, enabled: bool) -> Self {
        self.node_reuse = Some(enabled);
        self
    }

    #[must_use]
    pub const fn max_cpu_count(mut self, enabled: bool) -> Self {
        self.max_cpu_count = enabled;
        self
    }

    #[must_use]
    pub const fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = Some(verbosity);
        self
    }

    /// Solution or project file to build, emitted last.
    #[must_use]
    pub fn build_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.build_file = Some(path.into());
        self
    }

    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    #[must_use]
    pub fn to_command_line(&self) -> CommandLine {
        let mut cmd = CommandLine::new(self.executable.display().to_string());

        if !self.targets.is_empty() {
            let targets = self
                .targets
                .iter()
                .map(|t| quote(t).into_owned())
                .collect::<Vec<_>>()
                .join(";");
            cmd = cmd.switch_verbatim("target", targets);
        }
        if !self.properties.is_empty() {
            let properties = join_properties(self.properties.iter().map(|(k, v)| (k, v)));
            cmd = cmd.switch_verbatim("property", properties);
        }
        if let Some(enabled) = self.node_reuse {
            cmd = cmd.switch("nodeReuse", enabled.to_string());
        }
        if self.max_cpu_count {
            cmd = cmd.flag("maxcpucount");
        }
        if let Some(verbosity) = self.verbosity {
            cmd = cmd.switch("verbosity", verbosity.to_string());
        }
        if let Some(build_file) = &self.build_file {
            cmd = cmd.positional(build_file.display().to_string());
        }
        cmd
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.to_command_line().render()
    }
}
