// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder with configuration options.
//!
//! ```text
//! ProcessBuilder
//!  • new/which/find/from_command_line
//!  • arg/args/raw_args/cwd
//!  • output_encoding
//! ```

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::command::CommandLine;
use crate::error::ProcessError;
use crate::utility::encoding::Encoding;

/// Executable paths already resolved via `which`.
static EXECUTABLE_CACHE: OnceLock<RwLock<BTreeMap<String, PathBuf>>> = OnceLock::new();

fn exe_cache() -> &'static RwLock<BTreeMap<String, PathBuf>> {
    EXECUTABLE_CACHE.get_or_init(|| RwLock::new(BTreeMap::new()))
}

/// Builder for configuring and running a process.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    /// Pre-quoted argument string handed to the OS unchanged (Windows only).
    raw_args: Option<String>,
    cwd: Option<PathBuf>,
    encoding: Encoding,
}

impl ProcessBuilder {
    /// Creates a builder for `program`, used exactly as given.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            raw_args: None,
            cwd: None,
            encoding: Encoding::Utf8,
        }
    }

    /// Creates a builder after resolving `program` via PATH.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if the executable is not in PATH.
    pub fn which(program: &str) -> Result<Self, ProcessError> {
        Self::find(program)
            .map(Self::new)
            .ok_or_else(|| ProcessError::ExecutableNotFound {
                name: program.to_string(),
            })
    }

    /// Full path of an executable in PATH, cached across lookups.
    #[must_use]
    pub fn find(program: &str) -> Option<PathBuf> {
        {
            let cache = exe_cache().read().unwrap_or_else(PoisonError::into_inner);
            if let Some(path) = cache.get(program) {
                return Some(path.clone());
            }
        }

        let path = which::which(program).ok()?;
        exe_cache()
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(program.to_string(), path.clone());
        Some(path)
    }

    /// Creates a builder that runs a rendered tool command line.
    ///
    /// A bare program name (no directory part) is resolved via PATH; paths are
    /// used as given. On Windows the rendered argument string is passed to
    /// the OS verbatim, elsewhere the unquoted argument vector is used.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if a bare name is not in PATH.
    pub fn from_command_line(command: &CommandLine) -> Result<Self, ProcessError> {
        let program = command.program();
        let builder = if program.contains(['/', '\\']) {
            Self::new(program)
        } else {
            Self::which(program)?
        };

        let builder = builder.args(command.argv());
        Ok(if cfg!(windows) {
            builder.raw_args(command.render_args())
        } else {
            builder
        })
    }

    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_string_lossy().into_owned()));
        self
    }

    /// Passes `args` to the OS unchanged instead of the argument vector.
    ///
    /// Only honored on Windows, where programs parse their own command line.
    #[must_use]
    pub fn raw_args(mut self, args: impl Into<String>) -> Self {
        self.raw_args = Some(args.into());
        self
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Code page the tool writes stdout and stderr in.
    #[must_use]
    pub const fn output_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    #[must_use]
    pub fn args_slice(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub fn raw_args_str(&self) -> Option<&str> {
        self.raw_args.as_deref()
    }

    pub(super) fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }
}
