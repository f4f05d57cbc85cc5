// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `MSTest` command line.
//!
//! ```text
//! mstest.exe /testmetadata:M.vsmdi /testcontainer:T.dll /testlist:L
//!            /runconfig:R.testrunconfig /resultsfile:out.trx<space>
//! ```
//!
//! The legacy format follows every argument with a space, so a non-empty
//! command line ends in a trailing space.
// FIXME: the trailing space looks accidental upstream; kept for
// byte-compatible output until a caller confirms it can be dropped.

use std::path::{Path, PathBuf};

use super::CommandLine;

/// Builder for an `MSTest` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsTestCommand {
    executable: PathBuf,
    test_metadata: Vec<PathBuf>,
    test_containers: Vec<PathBuf>,
    test_list: Option<String>,
    run_config: Option<PathBuf>,
    results_file: Option<PathBuf>,
}

impl MsTestCommand {
    #[must_use]
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            test_metadata: Vec::new(),
            test_containers: Vec::new(),
            test_list: None,
            run_config: None,
            results_file: None,
        }
    }

    /// Adds a `.vsmdi` test metadata file.
    #[must_use]
    pub fn test_metadata(mut self, path: impl Into<PathBuf>) -> Self {
        self.test_metadata.push(path.into());
        self
    }

    /// Adds a test assembly.
    #[must_use]
    pub fn test_container(mut self, path: impl Into<PathBuf>) -> Self {
        self.test_containers.push(path.into());
        self
    }

    /// Test list inside the metadata file to run.
    #[must_use]
    pub fn test_list(mut self, name: impl Into<String>) -> Self {
        self.test_list = Some(name.into());
        self
    }

    #[must_use]
    pub fn run_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.run_config = Some(path.into());
        self
    }

    #[must_use]
    pub fn results_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.results_file = Some(path.into());
        self
    }

    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    #[must_use]
    pub fn to_command_line(&self) -> CommandLine {
        let mut cmd = CommandLine::new(self.executable.display().to_string()).trailing_space(true);

        for path in &self.test_metadata {
            cmd = cmd.switch("testmetadata", path.display().to_string());
        }
        for path in &self.test_containers {
            cmd = cmd.switch("testcontainer", path.display().to_string());
        }
        if let Some(list) = &self.test_list {
            cmd = cmd.switch("testlist", list.as_str());
        }
        if let Some(path) = &self.run_config {
            cmd = cmd.switch("runconfig", path.display().to_string());
        }
        if let Some(path) = &self.results_file {
            cmd = cmd.switch("resultsfile", path.display().to_string());
        }
        cmd
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.to_command_line().render()
    }
}
