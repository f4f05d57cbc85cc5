// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for dnbuild.

use tracing::debug;

use crate::config::Config;

/// Display current configuration options.
pub fn run_options_command(config: &Config, config_files: &[String]) {
    if config_files.is_empty() {
        debug!("no configuration files loaded");
    }
    for line in config_files {
        debug!("config file {line}");
    }
    for line in config.format_options() {
        println!("{line}");
    }
}
