// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()
//!   build_command()   args (or raw_arg on Windows), cwd, piped stdio
//!   spawn()
//!   readers: stdout --> info!, stderr --> warn!
//!   select { child.wait(), ctrl_c() --> kill }
//!   exit code != 0 --> ProcessError::NonZeroExit
//! ```

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, trace, warn};

use super::builder::ProcessBuilder;
use super::io::{Stream, join_reader, spawn_reader};
use crate::command::quote;
use crate::error::ProcessError;

impl ProcessBuilder {
    fn display_name(&self) -> String {
        self.program().file_stem().map_or_else(
            || "process".to_string(),
            |s| s.to_string_lossy().into_owned(),
        )
    }

    /// Full command line for logging and error messages.
    #[must_use]
    pub fn command_line(&self) -> String {
        let program = self.program().display().to_string();
        let mut line = quote(&program).into_owned();
        let args = match self.raw_args_str() {
            Some(raw) if cfg!(windows) => raw.to_string(),
            _ => self
                .args_slice()
                .iter()
                .map(|a| quote(a).into_owned())
                .collect::<Vec<_>>()
                .join(" "),
        };
        if !args.is_empty() {
            line.push(' ');
            line.push_str(&args);
        }
        line
    }

    /// Spawns the process and waits for it, forwarding output to tracing.
    ///
    /// Ctrl+C kills the child and yields `ProcessError::Interrupted`.
    ///
    /// # Errors
    ///
    /// - `SpawnFailed` if the process cannot be started or awaited.
    /// - `NonZeroExit` if it exits with a non-zero code.
    /// - `Interrupted` if Ctrl+C arrives first.
    pub async fn run(self) -> Result<(), ProcessError> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let spawn_failed = |source| ProcessError::SpawnFailed {
            command: cmd_line.clone(),
            source,
        };

        let mut child = self.build_command().spawn().map_err(spawn_failed)?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let encoding = self.encoding();
        let stdout = spawn_reader(child.stdout.take(), Stream::Stdout, encoding, name.clone());
        let stderr = spawn_reader(child.stderr.take(), Stream::Stderr, encoding, name.clone());

        let status = tokio::select! {
            status = child.wait() => status.map_err(spawn_failed)?,
            Ok(()) = tokio::signal::ctrl_c() => {
                warn!(process = %name, "interrupted, terminating process");
                let _ = child.kill().await;
                return Err(ProcessError::Interrupted { command: cmd_line });
            }
        };

        join_reader(stdout).await;
        join_reader(stderr).await;

        let code = status.code().unwrap_or(-1);
        if code != 0 {
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code,
            });
        }

        trace!(process = %name, "completed");
        Ok(())
    }

    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        #[cfg(windows)]
        {
            match self.raw_args_str() {
                Some(raw) => command.raw_arg(raw),
                None => command.args(self.args_slice()),
            };
        }
        #[cfg(not(windows))]
        {
            command.args(self.args_slice());
        }

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        command
    }
}
