// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding  BOM sniffing, Windows code pages (encoding_rs)
//! fs        build file discovery, atomic writes
//! ```

pub mod encoding;
pub mod fs;
