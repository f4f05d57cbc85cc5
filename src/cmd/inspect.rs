// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `inspect` command: prints a parsed project model.

use anyhow::Context;

use crate::cli::tools::InspectArgs;
use crate::config::Config;
use crate::error::Result;
use crate::project::ProjectModel;
use crate::project::parser::ProjectParser;

/// Human-readable summary, one line per fact.
#[must_use]
pub fn format_summary(model: &ProjectModel) -> Vec<String> {
    let mut lines = vec![
        format!("project          {}", model.path().display()),
        format!("language         {}", model.language()),
        format!("target framework {}", model.target_framework()),
        format!("root namespace   {}", model.root_namespace()),
        format!("assembly name    {}", model.assembly_name()),
    ];
    if let Some(guid) = model.project_guid() {
        lines.push(format!("project guid     {guid}"));
    }
    if let Some(output_type) = model.output_type() {
        lines.push(format!("output type      {output_type}"));
    }

    for cfg in model.configurations() {
        let name = cfg
            .platform()
            .map_or_else(|| cfg.name().to_string(), |p| format!("{}|{p}", cfg.name()));
        lines.push(format!("configuration    {name}"));
        lines.push(format!("  output path    {}", cfg.output_path().display()));
        lines.push(format!(
            "  debug          {:?}, symbols={}",
            cfg.debug_type(),
            cfg.debug_symbols()
        ));
        lines.push(format!("  optimize       {}", cfg.optimize()));
        if !cfg.define_constants().is_empty() {
            lines.push(format!("  constants      {}", cfg.define_constants().join(";")));
        }
        if let Some(level) = cfg.warning_level() {
            lines.push(format!("  warning level  {level}"));
        }
        if let Some(doc) = cfg.documentation_file() {
            lines.push(format!("  documentation  {}", doc.display()));
        }
        lines.push(format!("  error report   {:?}", cfg.error_report()));
    }
    lines
}

/// Main handler for the `inspect` command.
///
/// # Errors
///
/// Returns an error if the project cannot be parsed.
pub fn run_inspect_command(args: &InspectArgs, config: &Config) -> Result<()> {
    let model = ProjectParser::new()
        .language(args.language.or(config.project.language))
        .parse_file(&args.project)
        .with_context(|| format!("failed to inspect {}", args.project.display()))?;

    if args.json {
        let json = serde_json::to_string_pretty(&model).context("failed to serialize project")?;
        println!("{json}");
    } else {
        for line in format_summary(&model) {
            println!("{line}");
        }
    }
    Ok(())
}
