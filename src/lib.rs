// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |         inspect / msbuild / mstest
//!                |         devenv / assembly-info
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!             project      command   assembly_info
//!          model/parser   msbuild    C# / VB source
//!                         mstest
//!                         devenv
//!
//!   +-----------------------------------------+
//!   |  core   process (tokio)                 |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```
//!
//! `project`, `command` and `assembly_info` do no process or file work of
//! their own beyond `AssemblyMetadata::write`; the handlers in `cmd` wire
//! them to configuration and `core::process`.

pub mod assembly_info;
pub mod cli;
pub mod cmd;
pub mod command;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod project;
pub mod utility;

#[cfg(test)]
mod test_utils;
