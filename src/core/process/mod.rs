// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning for the external .NET tools.
//!
//! ```text
//! ProcessBuilder::from_command_line(&CommandLine)
//!   .cwd() .output_encoding()
//!   .run()
//!       --> tokio::process::Command
//!           Windows: rendered argument string via raw_arg
//!           other:   unquoted argv
//!           stream stdout/stderr lines to tracing
//!           Ctrl+C: kill child
//! ```

pub mod builder;
mod io;
mod runner;
