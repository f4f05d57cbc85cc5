// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `assembly-info` command.
//!
//! ```text
//! language  project.language > project model > error
//! output    assembly_info.output > <project dir>/<language default>
//!           > <cwd>/<language default>
//! title     assembly_info.title > project AssemblyName
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use super::load_project;
use crate::assembly_info::AssemblyMetadata;
use crate::cli::tools::AssemblyInfoArgs;
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::project::{ProjectLanguage, ProjectModel};

/// A resolved generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyInfoPlan {
    pub language: ProjectLanguage,
    pub output: PathBuf,
    pub metadata: AssemblyMetadata,
}

/// Resolves language, output path and metadata from `config`.
///
/// # Errors
///
/// Returns an error if the project cannot be parsed, or
/// `ConfigError::MissingKey` when no language is known.
pub fn plan_assembly_info(config: &Config, cwd: &Path) -> Result<AssemblyInfoPlan> {
    let model = load_project(config)?;

    let language = config
        .project
        .language
        .or_else(|| model.as_ref().map(ProjectModel::language))
        .ok_or_else(|| ConfigError::MissingKey {
            section: "project".to_string(),
            key: "language".to_string(),
        })?;

    let info = &config.assembly_info;
    let output = info.output.clone().unwrap_or_else(|| {
        let base = model.as_ref().map_or(cwd, ProjectModel::directory);
        base.join(language.assembly_info_path())
    });

    let title = info.title.clone().or_else(|| {
        model
            .as_ref()
            .map(|m| m.assembly_name().to_string())
            .filter(|name| !name.is_empty())
    });

    let metadata = AssemblyMetadata::builder()
        .maybe_with_title(title)
        .maybe_with_company(info.company.clone())
        .maybe_with_description(info.description.clone())
        .maybe_with_guid(info.guid.clone())
        .maybe_with_version(info.version.clone())
        .build();

    Ok(AssemblyInfoPlan {
        language,
        output,
        metadata,
    })
}

/// Main handler for the `assembly-info` command.
///
/// # Errors
///
/// Returns an error if the request cannot be resolved or the file cannot be
/// written.
pub fn run_assembly_info_command(
    args: &AssemblyInfoArgs,
    config: &Config,
    cwd: &Path,
) -> Result<()> {
    let mut config = config.clone();
    args.apply_to(&mut config);

    let plan = plan_assembly_info(&config, cwd)?;
    debug!(
        language = %plan.language,
        lines = plan.metadata.lines(plan.language).len(),
        "rendered assembly info"
    );

    if config.global.dry {
        info!(
            "[dry-run] Would write {} assembly info to {}",
            plan.language,
            plan.output.display()
        );
        return Ok(());
    }

    plan.metadata
        .write(plan.language, &plan.output)
        .with_context(|| format!("failed to write {}", plan.output.display()))?;
    info!(path = %plan.output.display(), "Assembly info written");
    Ok(())
}
