// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              DnError (~24 bytes)
//!                     |
//!   +---------+-------+-------+---------+
//!   |         |       |       |         |
//!   v         v       v       v         v
//! Bail     Project  Config  Process    Fs  Io/Other
//!            Box     Box     Box       Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Project  Read, MalformedProjectFile, UnknownEnumValue,
//!            UnsupportedProjectLanguage
//!   Config   ParseError, MissingKey, InvalidValue
//!   Process  ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Fs       NotFound, AmbiguousBuildFile, IoError
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DnError`].
pub type DnResult<T> = std::result::Result<T, DnError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum DnError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Project file could not be loaded.
    #[error("project error: {0}")]
    Project(#[from] Box<ProjectError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`DnError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> DnError {
    DnError::Bailed(message.into().into_boxed_str())
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DnError {
                fn from(err: $error) -> Self {
                    DnError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ProjectError => Project,
    ConfigError => Config,
    ProcessError => Process,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Project Errors ---

/// Project file parsing errors.
///
/// Every variant names the offending file so a failed build step can point
/// at it directly.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The project file could not be read.
    #[error("failed to read project file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Required structure is missing or the document is not well-formed.
    #[error("malformed project file '{path}': {message}")]
    MalformedProjectFile { path: String, message: String },

    /// Enumerated text did not match any known variant.
    #[error("unknown value '{value}' for '{field}' in project file '{path}'")]
    UnknownEnumValue {
        path: String,
        field: String,
        value: String,
    },

    /// Neither the file extension nor a language marker was recognized.
    #[error("unsupported project language in '{path}'")]
    UnsupportedProjectLanguage { path: String },
}

impl ProjectError {
    pub(crate) fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedProjectFile {
            path: path.into(),
            message: message.into(),
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Process was interrupted before it finished.
    #[error("process '{command}' was interrupted")]
    Interrupted { command: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// More than one build file candidate was found.
    #[error("more than one build file in '{dir}': {candidates}")]
    AmbiguousBuildFile { dir: String, candidates: String },

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
